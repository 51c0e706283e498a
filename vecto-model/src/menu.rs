//! Sidebar menu records and the default navigation set

use crate::assets::AssetResolver;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MenuItem {
    pub id: String,
    pub label: String,
    /// Resolved icon path
    pub icon: String,
    /// Route the item navigates to; bottom items are actions without a route
    pub path: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfileInfo {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub email: Option<String>,
}

fn item(
    assets: &AssetResolver,
    id: &str,
    label: &str,
    icon: &str,
    path: Option<&str>,
) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        label: label.to_string(),
        icon: assets.icon_path(icon),
        path: path.map(str::to_string),
        is_active: false,
    }
}

/// Primary navigation entries, top to bottom. `home` starts active.
pub fn default_menu_items(assets: &AssetResolver) -> Vec<MenuItem> {
    let mut items = vec![
        item(assets, "search", "Search", "Search.png", Some("/search")),
        item(assets, "home", "Home", "Group46.png", Some("/")),
        item(assets, "tv-shows", "TV Shows", "Group47.png", Some("/tv-shows")),
        item(assets, "movies", "Movies", "Group53.png", Some("/movies")),
        item(assets, "genres", "Genres", "Group54.png", Some("/genres")),
        item(
            assets,
            "watch-later",
            "Watch Later",
            "Group56.png",
            Some("/watch-later"),
        ),
    ];
    if let Some(home) = items.iter_mut().find(|item| item.id == "home") {
        home.is_active = true;
    }
    items
}

/// Secondary actions pinned to the bottom of the sidebar.
pub fn default_bottom_menu_items(assets: &AssetResolver) -> Vec<MenuItem> {
    vec![
        item(assets, "language", "Language", "Group54.png", None),
        item(assets, "get-help", "Get Help", "Group47.png", None),
        item(assets, "exit", "Exit", "Group46.png", None),
    ]
}

pub fn default_profile(assets: &AssetResolver) -> ProfileInfo {
    ProfileInfo {
        id: String::from("user-1"),
        name: String::from("Daniel"),
        avatar: assets.image_path("squid-game-player456-2.jpg"),
        email: None,
    }
}
