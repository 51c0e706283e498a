use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use vecto_core::catalog::CatalogSource;
use vecto_core::config::{ConfigLoader, ConfigOverrides};

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| map.get(name).cloned()
}

const FILE: &str = r#"
[catalog]
source = "https://cdn.example.test/data.json"
max_items = 120
asset_base = "/static"

[carousel]
visible_items = 6
viewport_width = 1024

[recency]
threshold_minutes = 15

[featured]
autoplay_delay_ms = 2500
"#;

#[test]
fn defaults_without_file_or_env() {
    let load = ConfigLoader::new().load_with(env(&[])).unwrap();
    let config = load.config;

    assert!(load.config_path.is_none());
    assert_eq!(config.catalog.source, "data.json");
    assert_eq!(
        config.catalog.source(),
        CatalogSource::File(PathBuf::from("data.json"))
    );
    assert_eq!(config.catalog.max_items, 50);
    assert_eq!(config.catalog.asset_base, "/assets");
    assert_eq!(config.carousel.visible_items, 8);
    assert_eq!(config.carousel.viewport_width, 1280);
    assert_eq!(config.recency.threshold_minutes, 30);
    assert!(config.recency.session_dir.is_none());
    assert_eq!(config.featured.delays().autoplay, Duration::from_millis(2000));
    assert_eq!(config.featured.delays().load, Duration::from_millis(1000));
    assert_eq!(config.menu.initial_active, "home");
}

#[test]
fn file_values_apply_and_item_cap_holds() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vecto.toml");
    fs::write(&path, FILE).unwrap();

    let load = ConfigLoader::new()
        .with_config_path(&path)
        .load_with(env(&[]))
        .unwrap();
    let config = load.config;

    assert_eq!(load.config_path.as_deref(), Some(path.as_path()));
    assert!(matches!(config.catalog.source(), CatalogSource::Url(_)));
    assert_eq!(config.catalog.max_items, 50);
    assert_eq!(config.catalog.asset_base, "/static");
    assert_eq!(config.carousel.visible_items, 6);
    assert_eq!(config.recency.threshold_minutes, 15);
    assert_eq!(config.featured.autoplay_delay_ms, 2500);
    assert_eq!(config.featured.load_delay_ms, 1000);
}

#[test]
fn env_beats_file_and_cli_beats_env() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(&path, FILE).unwrap();
    let path_str = path.to_string_lossy().into_owned();

    let lookup = env(&[
        ("VECTO_CONFIG", path_str.as_str()),
        ("VECTO_VISIBLE_ITEMS", "5"),
        ("VECTO_RECENT_MINUTES", "45"),
        ("VECTO_CATALOG_SOURCE", "local.json"),
    ]);

    let config = ConfigLoader::new()
        .with_overrides(ConfigOverrides {
            visible_items: Some(3),
            ..ConfigOverrides::default()
        })
        .load_with(lookup)
        .unwrap()
        .config;

    assert_eq!(config.carousel.visible_items, 3);
    assert_eq!(config.carousel.viewport_width, 1024);
    assert_eq!(config.recency.threshold_minutes, 45);
    assert_eq!(config.catalog.source, "local.json");
}
