//! # Shop Screen
//!
//! Root of the Shop tab: a short product list. Activating a product pushes
//! its detail route onto this tab's stack.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::core::route::Route;
use crate::core::tab::Tab;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::{Menu, MenuState, NavBar};
use crate::tui::event::TuiEvent;
use crate::tui::screens::ScreenEvent;

const ITEMS: [&str; 2] = ["View product A", "View product B"];

pub struct ShopScreen {
    badge: u32,
    menu: MenuState,
}

impl ShopScreen {
    pub fn new(badge: u32) -> Self {
        Self {
            badge,
            menu: MenuState::new(ITEMS.len()),
        }
    }

    pub fn nav_bar(&self) -> NavBar {
        NavBar::titled("Shop").with_cart(Some(self.badge))
    }
}

impl EventHandler for ShopScreen {
    type Event = ScreenEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ScreenEvent> {
        let id = match self.menu.handle_event(event)? {
            0 => "ProductA",
            1 => "ProductB",
            _ => return None,
        };
        Some(ScreenEvent::Push {
            route: Route::ProductDetail { id: id.into() },
            tab: Some(Tab::Shop),
            select: false,
        })
    }
}

impl Component for ShopScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [header, menu_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);

        frame.render_widget(
            Paragraph::new(Line::styled(
                "Welcome to the Shop tab!",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            header,
        );
        Menu::new(&ITEMS, &mut self.menu).render(frame, menu_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_products_push_detail_routes_on_shop() {
        let mut screen = ShopScreen::new(5);
        assert_eq!(
            screen.handle_event(&TuiEvent::Submit),
            Some(ScreenEvent::Push {
                route: Route::ProductDetail { id: "ProductA".into() },
                tab: Some(Tab::Shop),
                select: false,
            })
        );

        screen.handle_event(&TuiEvent::CursorDown);
        assert_eq!(
            screen.handle_event(&TuiEvent::Submit),
            Some(ScreenEvent::Push {
                route: Route::ProductDetail { id: "ProductB".into() },
                tab: Some(Tab::Shop),
                select: false,
            })
        );
    }
}
