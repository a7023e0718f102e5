//! # Product Detail Screen
//!
//! Detail page for a single product. The product id is a route parameter:
//! the screen receives it as a prop each frame, while menu selection and the
//! cart badge persist across visits. Demonstrates both "jump to another
//! tab's root" and "push a sibling onto the current stack".

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

const ITEMS: [&str; 2] = [
    "Back to the Home tab root",
    "View another product (456) on this tab",
];

pub struct ProductDetailScreen {
    badge: u32,
    menu: MenuState,
}

impl ProductDetailScreen {
    pub fn new(badge: u32) -> Self {
        Self {
            badge,
            menu: MenuState::new(ITEMS.len()),
        }
    }

    pub fn nav_bar(&self, id: &str) -> NavBar {
        NavBar::titled(format!("Product {id}"))
            .with_back()
            .with_cart(Some(self.badge))
    }

    pub fn draw(&mut self, frame: &mut Frame, area: Rect, id: &str) {
        let [header, menu_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

        let detail = Paragraph::new(vec![
            Line::styled(
                format!("Product detail for id: {id}"),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                "A riveting product description goes here.",
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(detail, header);

        Menu::new(&ITEMS, &mut self.menu).render(frame, menu_area);
    }
}

impl EventHandler for ProductDetailScreen {
    type Event = ScreenEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ScreenEvent> {
        match self.menu.handle_event(event)? {
            0 => Some(ScreenEvent::PopToRoot {
                tab: Some(Tab::Home),
                select: true,
            }),
            1 => Some(ScreenEvent::Push {
                route: Route::ProductDetail { id: "456".into() },
                tab: None,
                select: false,
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_item_jumps_to_home_root() {
        let mut screen = ProductDetailScreen::new(5);
        assert_eq!(
            screen.handle_event(&TuiEvent::Submit),
            Some(ScreenEvent::PopToRoot {
                tab: Some(Tab::Home),
                select: true,
            })
        );
    }

    #[test]
    fn test_second_item_pushes_sibling_on_current_tab() {
        let mut screen = ProductDetailScreen::new(5);
        screen.handle_event(&TuiEvent::CursorDown);
        assert_eq!(
            screen.handle_event(&TuiEvent::Submit),
            Some(ScreenEvent::Push {
                route: Route::ProductDetail { id: "456".into() },
                tab: None,
                select: false,
            })
        );
    }

    #[test]
    fn test_nav_bar_carries_id_and_decorations() {
        let screen = ProductDetailScreen::new(7);
        let bar = screen.nav_bar("123");
        assert_eq!(bar.title, "Product 123");
        assert!(bar.show_back);
        assert_eq!(bar.badge, Some(7));
    }
}
