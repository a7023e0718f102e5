//! # Tabs
//!
//! The closed set of top-level sections. Each tab owns its own navigation
//! stack inside [`Router`](crate::core::router::Router); the router only
//! ever treats a `Tab` as a key. Labels and icons are display metadata for
//! the TUI layer.

use std::fmt;

/// One of the app's top-level sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Home,
    Shop,
    Settings,
}

impl Tab {
    /// All tabs in display order. The router sizes its stack array off this,
    /// so the order here is load-bearing: `index()` must match positions.
    pub const ALL: [Tab; 3] = [Tab::Home, Tab::Shop, Tab::Settings];

    /// Stable position of this tab, usable as an array index.
    pub fn index(self) -> usize {
        match self {
            Tab::Home => 0,
            Tab::Shop => 1,
            Tab::Settings => 2,
        }
    }

    /// Stable raw identifier, used in config files and logs.
    pub fn id(self) -> &'static str {
        match self {
            Tab::Home => "home",
            Tab::Shop => "shop",
            Tab::Settings => "settings",
        }
    }

    /// Parse a raw identifier back into a tab. Case-insensitive.
    pub fn from_id(id: &str) -> Option<Tab> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.id().eq_ignore_ascii_case(id))
    }

    /// Human-readable label shown in the tab bar.
    pub fn label(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Shop => "Shop",
            Tab::Settings => "Settings",
        }
    }

    /// Single-cell glyph shown next to the label in the tab bar.
    pub fn icon(self) -> &'static str {
        match self {
            Tab::Home => "⌂",
            Tab::Shop => "$",
            Tab::Settings => "*",
        }
    }

    /// The tab after this one in display order, wrapping around.
    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }
}

impl Default for Tab {
    fn default() -> Self {
        Tab::Home
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_all_order() {
        for (i, tab) in Tab::ALL.into_iter().enumerate() {
            assert_eq!(tab.index(), i);
        }
    }

    #[test]
    fn test_from_id_round_trips() {
        for tab in Tab::ALL {
            assert_eq!(Tab::from_id(tab.id()), Some(tab));
        }
        assert_eq!(Tab::from_id("SHOP"), Some(Tab::Shop));
        assert_eq!(Tab::from_id("inventory"), None);
    }

    #[test]
    fn test_default_is_home() {
        assert_eq!(Tab::default(), Tab::Home);
    }

    #[test]
    fn test_next_wraps() {
        assert_eq!(Tab::Home.next(), Tab::Shop);
        assert_eq!(Tab::Shop.next(), Tab::Settings);
        assert_eq!(Tab::Settings.next(), Tab::Home);
    }
}
