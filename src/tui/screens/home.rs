//! # Home Screen
//!
//! Root of the Home tab and the demo's launchpad. Every navigation pattern
//! in the app can be triggered from here: a cross-tab push, plain pushes on
//! the current tab, both modal covers, and a badge bump that mutates only
//! this screen's own cart count.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::core::route::Route;
use crate::core::tab::Tab;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::{Menu, MenuState, NavBar};
use crate::tui::event::TuiEvent;
use crate::tui::screens::ScreenEvent;

const ITEMS: [&str; 7] = [
    "View product 123 (on the Shop tab)",
    "Nav bar showcase",
    "Shimmer loading demo",
    "Profile (on this tab)",
    "Show disclaimer (modal)",
    "Show welcome tour (modal)",
    "Add an item to the cart badge",
];

pub struct HomeScreen {
    badge: u32,
    menu: MenuState,
}

impl HomeScreen {
    pub fn new(badge: u32) -> Self {
        Self {
            badge,
            menu: MenuState::new(ITEMS.len()),
        }
    }

    pub fn nav_bar(&self) -> NavBar {
        NavBar::titled("Home").with_cart(Some(self.badge))
    }

    /// The badge count is this screen's own state; nothing else sees it.
    pub fn bump_badge(&mut self) {
        self.badge += 1;
    }
}

impl EventHandler for HomeScreen {
    type Event = ScreenEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ScreenEvent> {
        match self.menu.handle_event(event)? {
            0 => Some(ScreenEvent::Push {
                route: Route::ProductDetail { id: "123".into() },
                tab: Some(Tab::Shop),
                select: true,
            }),
            1 => Some(ScreenEvent::Push {
                route: Route::Showcase,
                tab: None,
                select: false,
            }),
            2 => Some(ScreenEvent::Push {
                route: Route::Loading,
                tab: None,
                select: false,
            }),
            3 => Some(ScreenEvent::Push {
                route: Route::Profile,
                tab: Some(Tab::Home),
                select: false,
            }),
            4 => Some(ScreenEvent::Present(Route::Disclaimer)),
            5 => Some(ScreenEvent::Present(Route::WelcomeTour)),
            6 => {
                self.bump_badge();
                None
            }
            _ => None,
        }
    }
}

impl Component for HomeScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [header, menu_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

        let welcome = Paragraph::new(vec![
            Line::styled(
                "Welcome to the Home tab!",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                "Pick an action to see the navigation patterns.",
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(welcome, header);

        Menu::new(&ITEMS, &mut self.menu).render(frame, menu_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activate(screen: &mut HomeScreen, index: usize) -> Option<ScreenEvent> {
        for _ in 0..index {
            screen.handle_event(&TuiEvent::CursorDown);
        }
        screen.handle_event(&TuiEvent::Submit)
    }

    #[test]
    fn test_cross_tab_push_selects_the_shop_tab() {
        let mut screen = HomeScreen::new(5);
        assert_eq!(
            activate(&mut screen, 0),
            Some(ScreenEvent::Push {
                route: Route::ProductDetail { id: "123".into() },
                tab: Some(Tab::Shop),
                select: true,
            })
        );
    }

    #[test]
    fn test_modal_items_present_covers() {
        let mut screen = HomeScreen::new(5);
        assert_eq!(
            activate(&mut screen, 4),
            Some(ScreenEvent::Present(Route::Disclaimer))
        );
        let mut screen = HomeScreen::new(5);
        assert_eq!(
            activate(&mut screen, 5),
            Some(ScreenEvent::Present(Route::WelcomeTour))
        );
    }

    #[test]
    fn test_badge_bump_is_local_and_emits_nothing() {
        let mut screen = HomeScreen::new(5);
        assert_eq!(activate(&mut screen, 6), None);
        assert_eq!(screen.nav_bar().badge, Some(6));
    }
}
