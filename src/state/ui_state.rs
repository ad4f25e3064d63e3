use crate::services::favorites::SortKey;
use crate::ui_components::toast::ToastManager;
use std::collections::HashSet;

/// Top-level navigation target. Screens past `Login` require a session; the
/// router enforces that, not the individual screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Landing,
    Login,
    Dashboard,
    Tracks,
    Favorites,
    Generate,
    Settings,
}

impl Screen {
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Screen::Landing | Screen::Login)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Landing => "Welcome",
            Screen::Login => "Sign in",
            Screen::Dashboard => "Dashboard",
            Screen::Tracks => "Tracks",
            Screen::Favorites => "Favorites",
            Screen::Generate => "Generate",
            Screen::Settings => "Settings",
        }
    }
}

pub struct UIState {
    pub screen: Screen,

    // Toast Notifications
    pub toast_manager: ToastManager,

    // Favorites screen selection and ordering
    pub selected_favorites: HashSet<String>,
    pub favorites_sort: SortKey,
    /// Reverses the active sort order.
    pub favorites_sort_desc: bool,
}

impl Default for UIState {
    fn default() -> Self {
        Self {
            screen: Screen::Landing,
            toast_manager: ToastManager::default(),
            selected_favorites: HashSet::new(),
            favorites_sort: SortKey::DateAdded,
            favorites_sort_desc: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_landing_and_login_are_public() {
        assert!(!Screen::Landing.requires_auth());
        assert!(!Screen::Login.requires_auth());
        for screen in [
            Screen::Dashboard,
            Screen::Tracks,
            Screen::Favorites,
            Screen::Generate,
            Screen::Settings,
        ] {
            assert!(screen.requires_auth());
        }
    }
}
