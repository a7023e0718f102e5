//! # Routes
//!
//! A `Route` is an immutable description of a navigable destination. Routes
//! are plain values: two routes are equal iff their variant and parameters
//! are equal, and pushing the same route twice produces two distinct stack
//! entries. The router stores and returns routes without ever inspecting
//! their parameters; only the screen layer looks inside.

/// A navigable destination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// The home tab root. Only meaningful as a tab root; pushing it renders
    /// a diagnostic placeholder rather than a real screen.
    Home,
    /// Detail page for a single product.
    ProductDetail { id: String },
    /// Settings screen pushed onto a stack (distinct from the settings tab).
    Settings,
    Profile,
    Onboarding,
    /// Demo of the custom navigation bar decorations.
    Showcase,
    /// Demo of the shimmer loading placeholder.
    Loading,
    /// Terms & conditions. Modal-eligible.
    Disclaimer,
    /// First-run tutorial. Modal-eligible.
    WelcomeTour,
    Cart,
}

impl Route {
    /// Derived string key for diffing and log lines: the kebab-case variant
    /// name, with parameters appended when present.
    pub fn key(&self) -> String {
        match self {
            Route::Home => "home".into(),
            Route::ProductDetail { id } => format!("product-detail-{id}"),
            Route::Settings => "settings".into(),
            Route::Profile => "profile".into(),
            Route::Onboarding => "onboarding".into(),
            Route::Showcase => "showcase".into(),
            Route::Loading => "loading".into(),
            Route::Disclaimer => "disclaimer".into(),
            Route::WelcomeTour => "welcome-tour".into(),
            Route::Cart => "cart".into(),
        }
    }

    /// Whether this route belongs to the modal-eligible subset. Routes
    /// outside it may still be pushed onto a stack like any other screen,
    /// but the modal rendering path rejects them with a visible diagnostic.
    pub fn is_modal(&self) -> bool {
        matches!(self, Route::Disclaimer | Route::WelcomeTour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_includes_parameters() {
        assert_eq!(Route::ProductDetail { id: "123".into() }.key(), "product-detail-123");
        assert_eq!(Route::WelcomeTour.key(), "welcome-tour");
        assert_eq!(Route::Cart.key(), "cart");
    }

    #[test]
    fn test_equality_is_tag_plus_parameters() {
        let a = Route::ProductDetail { id: "123".into() };
        let b = Route::ProductDetail { id: "123".into() };
        let c = Route::ProductDetail { id: "456".into() };
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(Route::Settings, Route::Profile);
    }

    #[test]
    fn test_modal_subset_is_exactly_the_covers() {
        let all = [
            Route::Home,
            Route::ProductDetail { id: "x".into() },
            Route::Settings,
            Route::Profile,
            Route::Onboarding,
            Route::Showcase,
            Route::Loading,
            Route::Disclaimer,
            Route::WelcomeTour,
            Route::Cart,
        ];
        let modal: Vec<_> = all.iter().filter(|r| r.is_modal()).collect();
        assert_eq!(modal, [&Route::Disclaimer, &Route::WelcomeTour]);
    }
}
