//! # Input Events
//!
//! Translates crossterm's raw events into the small vocabulary the rest of
//! the TUI speaks. Key bindings live here and nowhere else.

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::core::tab::Tab;

/// TUI-specific input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    /// Ctrl+C: quits regardless of what is on screen.
    ForceQuit,
    /// 'q': quit, except while a modal cover is capturing input.
    Quit,
    /// Esc / Left / Backspace: the back decoration.
    Back,
    /// Enter: activate the selected menu item.
    Submit,
    CursorUp,
    CursorDown,
    /// Digit keys select a tab directly.
    SelectTab(Tab),
    /// Tab key cycles to the next tab.
    NextTab,
    /// 'c': the cart decoration.
    OpenCart,
    Resize,
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if !event::poll(timeout).ok()? {
        return None;
    }
    match event::read().ok()? {
        Event::Key(key) => {
            // Kitty-protocol terminals report releases too; only act on press.
            if key.kind == KeyEventKind::Release {
                return None;
            }
            log::debug!("Key event: {:?} with modifiers {:?}", key.code, key.modifiers);
            match (key.modifiers, key.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
                (_, KeyCode::Esc | KeyCode::Left | KeyCode::Backspace) => Some(TuiEvent::Back),
                (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                (_, KeyCode::Up | KeyCode::Char('k')) => Some(TuiEvent::CursorUp),
                (_, KeyCode::Down | KeyCode::Char('j')) => Some(TuiEvent::CursorDown),
                (_, KeyCode::Char('1')) => Some(TuiEvent::SelectTab(Tab::Home)),
                (_, KeyCode::Char('2')) => Some(TuiEvent::SelectTab(Tab::Shop)),
                (_, KeyCode::Char('3')) => Some(TuiEvent::SelectTab(Tab::Settings)),
                (_, KeyCode::Tab) => Some(TuiEvent::NextTab),
                (_, KeyCode::Char('c')) => Some(TuiEvent::OpenCart),
                _ => None,
            }
        }
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

/// Poll for an event without blocking (returns immediately).
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}
