//! # Screens
//!
//! One module per screen of the demo, plus the dispatch that maps a visible
//! route to its screen. The mapping is total: every `Route` variant renders
//! exactly one screen or an explicit, visible diagnostic placeholder. There
//! are no panic paths for "wrong" routes.
//!
//! Screens never call the router. They emit [`ScreenEvent`] navigation
//! intents from their menus; the run loop translates those into router
//! mutations. Screen-local state (menu selection, cart badge counts, the
//! shimmer flip) lives in [`Screens`], the TUI-side bag of persistent
//! per-screen state.

pub mod cart;
pub mod home;
pub mod loading;
pub mod modal;
pub mod onboarding;
pub mod product_detail;
pub mod settings;
pub mod shop;
pub mod showcase;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::route::Route;
use crate::core::tab::Tab;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::NavBar;
use crate::tui::event::TuiEvent;

pub use loading::LoadingScreenState;

/// A navigation intent emitted by a screen. The run loop maps each intent
/// onto the corresponding router mutator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenEvent {
    /// Push `route` onto `tab` (or the selected tab when `None`). With
    /// `select`, the target tab is selected first: the cross-tab flow of
    /// "switch to the Shop tab, then navigate on it".
    Push {
        route: Route,
        tab: Option<Tab>,
        select: bool,
    },
    Pop,
    /// Clear `tab`'s stack (or the selected tab's). With `select`, the
    /// target tab is selected first.
    PopToRoot { tab: Option<Tab>, select: bool },
    Present(Route),
    Dismiss,
}

/// What the body of the frame is currently showing for the active tab.
#[derive(Clone, Copy)]
pub enum Visible<'a> {
    /// The tab's root screen (its stack is empty).
    Root(Tab),
    /// The top of the tab's stack.
    Pushed(&'a Route),
}

/// Persistent state for every screen, owned by the TUI for the lifetime of
/// the session. Badge counts are deliberately duplicated per screen: they
/// belong to the screens, not the router.
pub struct Screens {
    pub home: home::HomeScreen,
    pub shop: shop::ShopScreen,
    pub settings_tab: settings::SettingsTabScreen,
    pub settings: settings::PushedSettingsScreen,
    pub detail: product_detail::ProductDetailScreen,
    pub cart: cart::CartScreen,
    pub onboarding: onboarding::OnboardingScreen,
    /// Present only while a `Route::Loading` screen is alive on some stack.
    pub loading: Option<LoadingScreenState>,
}

impl Screens {
    pub fn new(cart_badge: u32) -> Self {
        Self {
            home: home::HomeScreen::new(cart_badge),
            shop: shop::ShopScreen::new(cart_badge),
            settings_tab: settings::SettingsTabScreen::new(),
            settings: settings::PushedSettingsScreen::new(),
            detail: product_detail::ProductDetailScreen::new(cart_badge),
            cart: cart::CartScreen::new(),
            onboarding: onboarding::OnboardingScreen::new(),
            loading: None,
        }
    }

    /// The nav bar the visible screen wants, decorations included. Tab
    /// roots have nothing to pop, so they never carry the back decoration.
    pub fn nav_bar(&self, visible: Visible<'_>) -> NavBar {
        match visible {
            Visible::Root(Tab::Home) => self.home.nav_bar(),
            Visible::Root(Tab::Shop) => self.shop.nav_bar(),
            Visible::Root(Tab::Settings) => NavBar::titled("Settings"),
            Visible::Pushed(route) => match route {
                Route::ProductDetail { id } => self.detail.nav_bar(id),
                Route::Settings => NavBar::titled("Settings (pushed)").with_back(),
                Route::Profile => NavBar::titled("Profile").with_back(),
                Route::Onboarding => NavBar::titled("Onboarding").with_back(),
                Route::Showcase => NavBar::titled("Nav Bar Showcase").with_back().with_cart(None),
                Route::Loading => NavBar::titled("Conditional Shimmer").with_back(),
                Route::Cart => NavBar::titled("Cart").with_back(),
                // Misrouted pushes still get a bar so back navigation works.
                Route::Home | Route::Disclaimer | Route::WelcomeTour => {
                    NavBar::titled("Unknown Route").with_back()
                }
            },
        }
    }

    /// Render the visible screen's body. Total over `Route`: misrouted
    /// variants get a diagnostic placeholder instead of a crash.
    pub fn draw(&mut self, frame: &mut Frame, area: Rect, visible: Visible<'_>) {
        match visible {
            Visible::Root(Tab::Home) => self.home.render(frame, area),
            Visible::Root(Tab::Shop) => self.shop.render(frame, area),
            Visible::Root(Tab::Settings) => self.settings_tab.render(frame, area),
            Visible::Pushed(route) => match route {
                Route::ProductDetail { id } => self.detail.draw(frame, area, id),
                Route::Settings => self.settings.render(frame, area),
                Route::Profile => settings::draw_profile(frame, area),
                Route::Onboarding => self.onboarding.render(frame, area),
                Route::Showcase => showcase::draw(frame, area),
                Route::Loading => loading::draw(frame, area, self.loading.as_ref()),
                Route::Cart => self.cart.render(frame, area),
                Route::Home => draw_misroute(
                    frame,
                    area,
                    "The home route is a tab root and shouldn't be pushed onto a stack.",
                ),
                Route::Disclaimer | Route::WelcomeTour => draw_misroute(
                    frame,
                    area,
                    &format!(
                        "Route '{}' is a modal cover, not a navigation destination.",
                        route.key()
                    ),
                ),
            },
        }
    }

    /// Route an input event to the visible screen, returning its navigation
    /// intent if it produced one.
    pub fn handle_event(
        &mut self,
        visible: Visible<'_>,
        event: &TuiEvent,
    ) -> Option<ScreenEvent> {
        match visible {
            Visible::Root(Tab::Home) => self.home.handle_event(event),
            Visible::Root(Tab::Shop) => self.shop.handle_event(event),
            Visible::Root(Tab::Settings) => self.settings_tab.handle_event(event),
            Visible::Pushed(route) => match route {
                Route::ProductDetail { .. } => self.detail.handle_event(event),
                Route::Settings => self.settings.handle_event(event),
                Route::Onboarding => self.onboarding.handle_event(event),
                Route::Cart => self.cart.handle_event(event),
                // Static screens: the nav bar handles back; nothing else.
                _ => None,
            },
        }
    }
}

/// Visible diagnostic placeholder for a route pushed where it doesn't
/// belong. A wrong route renders an error label, never a crash.
pub fn draw_misroute(frame: &mut Frame, area: Rect, message: &str) {
    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(Color::Red))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::bordered().title(" ! "));
    frame.render_widget(paragraph, area);
}
