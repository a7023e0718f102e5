//! # Settings Screens
//!
//! Three small screens share this file: the Settings tab root, the pushed
//! settings screen (a distinct route that can appear on any tab's stack),
//! and the profile screen, which is a dead end with no actions of its own.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::core::route::Route;
use crate::core::tab::Tab;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::{Menu, MenuState};
use crate::tui::event::TuiEvent;
use crate::tui::screens::ScreenEvent;

// ---------------------------------------------------------------------------
// Settings tab root
// ---------------------------------------------------------------------------

const ROOT_ITEMS: [&str; 1] = ["Profile (on this tab)"];

pub struct SettingsTabScreen {
    menu: MenuState,
}

impl SettingsTabScreen {
    pub fn new() -> Self {
        Self {
            menu: MenuState::new(ROOT_ITEMS.len()),
        }
    }
}

impl EventHandler for SettingsTabScreen {
    type Event = ScreenEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ScreenEvent> {
        match self.menu.handle_event(event)? {
            0 => Some(ScreenEvent::Push {
                route: Route::Profile,
                tab: Some(Tab::Settings),
                select: false,
            }),
            _ => None,
        }
    }
}

impl Component for SettingsTabScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [header, menu_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);
        frame.render_widget(
            Paragraph::new(Line::styled(
                "Welcome to the Settings tab!",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            header,
        );
        Menu::new(&ROOT_ITEMS, &mut self.menu).render(frame, menu_area);
    }
}

// ---------------------------------------------------------------------------
// Pushed settings screen
// ---------------------------------------------------------------------------

const PUSHED_ITEMS: [&str; 1] = ["Go to profile (on the current tab)"];

/// The settings *route*, pushed onto whichever tab is current, unlike the
/// settings tab root above.
pub struct PushedSettingsScreen {
    menu: MenuState,
}

impl PushedSettingsScreen {
    pub fn new() -> Self {
        Self {
            menu: MenuState::new(PUSHED_ITEMS.len()),
        }
    }
}

impl EventHandler for PushedSettingsScreen {
    type Event = ScreenEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ScreenEvent> {
        match self.menu.handle_event(event)? {
            0 => Some(ScreenEvent::Push {
                route: Route::Profile,
                tab: None,
                select: false,
            }),
            _ => None,
        }
    }
}

impl Component for PushedSettingsScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [header, menu_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);
        frame.render_widget(
            Paragraph::new("Settings screen (pushed)"),
            header,
        );
        Menu::new(&PUSHED_ITEMS, &mut self.menu).render(frame, menu_area);
    }
}

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

/// Profile has no state and no actions; back is handled by the nav bar.
pub fn draw_profile(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(vec![
        Line::styled(
            "Profile screen (pushed)",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        Line::styled(
            "Nothing to do here. Press Esc to go back.",
            Style::default().fg(Color::DarkGray),
        ),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_root_pushes_profile_on_settings() {
        let mut screen = SettingsTabScreen::new();
        assert_eq!(
            screen.handle_event(&TuiEvent::Submit),
            Some(ScreenEvent::Push {
                route: Route::Profile,
                tab: Some(Tab::Settings),
                select: false,
            })
        );
    }

    #[test]
    fn test_pushed_settings_targets_the_current_tab() {
        let mut screen = PushedSettingsScreen::new();
        assert_eq!(
            screen.handle_event(&TuiEvent::Submit),
            Some(ScreenEvent::Push {
                route: Route::Profile,
                tab: None,
                select: false,
            })
        );
    }
}
