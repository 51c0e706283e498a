//! Sidebar menu state

use tracing::debug;
use vecto_model::MenuItem;

/// Widest viewport, in pixels, on which choosing an item collapses the menu.
pub const COLLAPSE_MAX_WIDTH: f32 = 1024.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuState {
    pub is_expanded: bool,
    pub active_item_id: String,
    pub hovered_item_id: Option<String>,
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new("home")
    }
}

impl MenuState {
    pub fn new(active_item_id: impl Into<String>) -> Self {
        Self {
            is_expanded: false,
            active_item_id: active_item_id.into(),
            hovered_item_id: None,
        }
    }

    pub fn set_expanded(&mut self, expanded: bool) {
        self.is_expanded = expanded;
    }

    pub fn set_active_item(&mut self, id: impl Into<String>) {
        self.active_item_id = id.into();
    }

    pub fn set_hovered_item(&mut self, id: Option<String>) {
        self.hovered_item_id = id;
    }

    pub fn is_active(&self, item: &MenuItem) -> bool {
        self.active_item_id == item.id
    }

    /// Activate `item`; narrow viewports also collapse the menu.
    pub fn handle_item_click(&mut self, item: &MenuItem, viewport_width: f32) {
        self.active_item_id.clone_from(&item.id);
        if viewport_width <= COLLAPSE_MAX_WIDTH {
            self.is_expanded = false;
        }
        debug!(item = %item.id, expanded = self.is_expanded, "menu item activated");
    }

    pub fn handle_item_hover(&mut self, id: Option<&str>) {
        self.hovered_item_id = id.map(str::to_owned);
    }

    /// Pointer entering the menu expands it; leaving collapses it.
    pub fn handle_menu_hover(&mut self, is_hovering: bool) {
        self.is_expanded = is_hovering;
    }
}

#[cfg(test)]
mod tests {
    use vecto_model::{AssetResolver, default_menu_items};

    use super::*;

    fn item(id: &str) -> MenuItem {
        default_menu_items(&AssetResolver::default())
            .into_iter()
            .find(|item| item.id == id)
            .unwrap()
    }

    #[test]
    fn starts_collapsed_on_home() {
        let state = MenuState::default();
        assert!(!state.is_expanded);
        assert!(state.is_active(&item("home")));
    }

    #[test]
    fn narrow_click_collapses() {
        let mut state = MenuState::default();
        state.handle_menu_hover(true);
        state.handle_item_click(&item("movies"), 1024.0);
        assert_eq!(state.active_item_id, "movies");
        assert!(!state.is_expanded);
    }

    #[test]
    fn wide_click_keeps_menu_open() {
        let mut state = MenuState::default();
        state.set_expanded(true);
        state.handle_item_click(&item("genres"), 1440.0);
        assert_eq!(state.active_item_id, "genres");
        assert!(state.is_expanded);
    }

    #[test]
    fn hover_tracks_item() {
        let mut state = MenuState::default();
        state.handle_item_hover(Some("search"));
        assert_eq!(state.hovered_item_id.as_deref(), Some("search"));
        state.handle_item_hover(None);
        assert!(state.hovered_item_id.is_none());
    }
}
