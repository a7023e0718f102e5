//! # Onboarding Screen
//!
//! A simulated onboarding flow (pushed, not modal). Completing it pops the
//! currently selected tab all the way back to its root.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::tui::component::{Component, EventHandler};
use crate::tui::components::{Menu, MenuState};
use crate::tui::event::TuiEvent;
use crate::tui::screens::ScreenEvent;

const ITEMS: [&str; 1] = ["Complete onboarding (pop to tab root)"];

pub struct OnboardingScreen {
    menu: MenuState,
}

impl OnboardingScreen {
    pub fn new() -> Self {
        Self {
            menu: MenuState::new(ITEMS.len()),
        }
    }
}

impl EventHandler for OnboardingScreen {
    type Event = ScreenEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ScreenEvent> {
        match self.menu.handle_event(event)? {
            0 => Some(ScreenEvent::PopToRoot {
                tab: None,
                select: false,
            }),
            _ => None,
        }
    }
}

impl Component for OnboardingScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [header, menu_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

        let intro = Paragraph::new(vec![
            Line::styled(
                "Welcome to onboarding!",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                "This is a simulated onboarding flow (pushed).",
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(intro, header);

        Menu::new(&ITEMS, &mut self.menu).render(frame, menu_area);
    }
}
