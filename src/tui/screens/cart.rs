//! # Cart Screen
//!
//! Destination of the cart decoration. "Continue shopping" pops back to
//! wherever the user came from; checkout is a stub.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::tui::component::{Component, EventHandler};
use crate::tui::components::{Menu, MenuState};
use crate::tui::event::TuiEvent;
use crate::tui::screens::ScreenEvent;

const ITEMS: [&str; 2] = ["Continue shopping", "Proceed to checkout"];

pub struct CartScreen {
    menu: MenuState,
}

impl CartScreen {
    pub fn new() -> Self {
        Self {
            menu: MenuState::new(ITEMS.len()),
        }
    }
}

impl EventHandler for CartScreen {
    type Event = ScreenEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ScreenEvent> {
        match self.menu.handle_event(event)? {
            0 => Some(ScreenEvent::Pop),
            // TODO: push a checkout route once the demo grows one.
            1 => None,
            _ => None,
        }
    }
}

impl Component for CartScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [header, menu_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

        let summary = Paragraph::new(vec![
            Line::styled(
                "Your shopping cart",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                "Items in cart: 3 (example)",
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(summary, header);

        Menu::new(&ITEMS, &mut self.menu).render(frame, menu_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_continue_shopping_pops() {
        let mut screen = CartScreen::new();
        assert_eq!(screen.handle_event(&TuiEvent::Submit), Some(ScreenEvent::Pop));
    }

    #[test]
    fn test_checkout_is_a_stub() {
        let mut screen = CartScreen::new();
        screen.handle_event(&TuiEvent::CursorDown);
        assert_eq!(screen.handle_event(&TuiEvent::Submit), None);
    }
}
