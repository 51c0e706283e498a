//! Keyboard bindings for carousel navigation

use std::str::FromStr;

/// Keys the carousel reacts to. Everything else passes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavKey {
    ArrowLeft,
    ArrowRight,
    Home,
    End,
}

impl NavKey {
    /// Map a DOM-style key name. Unbound keys yield `None`.
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" => Some(NavKey::ArrowLeft),
            "ArrowRight" => Some(NavKey::ArrowRight),
            "Home" => Some(NavKey::Home),
            "End" => Some(NavKey::End),
            _ => None,
        }
    }
}

impl FromStr for NavKey {
    type Err = UnboundKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NavKey::from_key_name(s).ok_or_else(|| UnboundKey(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("key {0:?} is not bound to carousel navigation")]
pub struct UnboundKey(pub String);

/// Whether the host should suppress the key's default action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Handled,
    Ignored,
}

impl KeyOutcome {
    pub fn prevents_default(self) -> bool {
        matches!(self, KeyOutcome::Handled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_four_keys_are_bound() {
        assert_eq!(NavKey::from_key_name("Home"), Some(NavKey::Home));
        assert_eq!("ArrowRight".parse::<NavKey>(), Ok(NavKey::ArrowRight));
        assert!(NavKey::from_key_name("ArrowUp").is_none());
        assert!(NavKey::from_key_name("Enter").is_none());
        assert!(NavKey::from_key_name("home").is_none());
    }
}
