//! # Menu Component
//!
//! A selectable list of actions, the terminal stand-in for a column of
//! buttons. Every screen with actions embeds one.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `MenuState` lives in the screen's state across frames
//! - `Menu` is created each frame with borrowed state and the item labels

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{List, ListItem, ListState};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Persistent selection state for a menu.
pub struct MenuState {
    pub selected: usize,
    len: usize,
    list_state: ListState,
}

impl MenuState {
    /// A menu over `len` items with the first one selected.
    pub fn new(len: usize) -> Self {
        let mut list_state = ListState::default();
        if len > 0 {
            list_state.select(Some(0));
        }
        Self {
            selected: 0,
            len,
            list_state,
        }
    }
}

impl EventHandler for MenuState {
    /// Index of the activated item.
    type Event = usize;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        match event {
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::CursorDown => {
                self.selected = (self.selected + 1).min(self.len - 1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::Submit => Some(self.selected),
            _ => None,
        }
    }
}

/// Transient render wrapper pairing labels with a `MenuState`.
pub struct Menu<'a> {
    items: &'a [&'a str],
    state: &'a mut MenuState,
}

impl<'a> Menu<'a> {
    pub fn new(items: &'a [&'a str], state: &'a mut MenuState) -> Self {
        debug_assert_eq!(items.len(), state.len);
        Self { items, state }
    }
}

impl Component for Menu<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .items
            .iter()
            .map(|label| ListItem::new(format!("  {label}")))
            .collect();

        let list = List::new(items).highlight_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        );

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_cursor_movement_saturates() {
        let mut state = MenuState::new(3);
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.selected, 0);

        state.handle_event(&TuiEvent::CursorDown);
        state.handle_event(&TuiEvent::CursorDown);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected, 2);
    }

    #[test]
    fn test_submit_emits_selected_index() {
        let mut state = MenuState::new(2);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.handle_event(&TuiEvent::Submit), Some(1));
    }

    #[test]
    fn test_empty_menu_ignores_everything() {
        let mut state = MenuState::new(0);
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);
        assert_eq!(state.handle_event(&TuiEvent::CursorDown), None);
    }

    #[test]
    fn test_render_shows_items() {
        let backend = TestBackend::new(40, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = MenuState::new(2);

        terminal
            .draw(|f| {
                Menu::new(&["First action", "Second action"], &mut state).render(f, f.area());
            })
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("First action"));
        assert!(text.contains("Second action"));
    }
}
