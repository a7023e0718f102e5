//! # TabBar Component
//!
//! Bottom bar listing every tab with its icon, label, number key, and (when
//! the tab has pushed screens) its stack depth. The selected tab is
//! highlighted. Emits [`TabBarEvent::Select`] for digit keys and Tab-key
//! cycling; the run loop forwards that to `router.select_tab`, which
//! notifies observers even when the tab is already selected.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::tab::Tab;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Events emitted by the tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabBarEvent {
    Select(Tab),
}

/// Props-based tab bar, created fresh each frame from router state.
pub struct TabBar {
    pub selected: Tab,
    /// Stack depth per tab, indexed by `Tab::index()`.
    pub depths: [usize; Tab::ALL.len()],
}

impl TabBar {
    pub fn new(selected: Tab, depths: [usize; Tab::ALL.len()]) -> Self {
        Self { selected, depths }
    }
}

impl Component for TabBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        for (i, tab) in Tab::ALL.into_iter().enumerate() {
            let depth = self.depths[tab.index()];
            let mut text = format!(" {} {} {}", i + 1, tab.icon(), tab.label());
            if depth > 0 {
                text.push_str(&format!(" ·{depth}"));
            }
            text.push(' ');

            let style = if tab == self.selected {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(text, style));
            spans.push(Span::raw("  "));
        }
        frame.render_widget(Line::from(spans), area);
    }
}

impl EventHandler for TabBar {
    type Event = TabBarEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<TabBarEvent> {
        match event {
            TuiEvent::SelectTab(tab) => Some(TabBarEvent::Select(*tab)),
            TuiEvent::NextTab => Some(TabBarEvent::Select(self.selected.next())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_renders_all_tabs_with_depth_hints() {
        let backend = TestBackend::new(70, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut bar = TabBar::new(Tab::Shop, [0, 2, 0]);

        terminal.draw(|f| bar.render(f, f.area())).unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Home"));
        assert!(text.contains("Shop ·2"));
        assert!(text.contains("Settings"));
    }

    #[test]
    fn test_digit_selects_tab() {
        let mut bar = TabBar::new(Tab::Home, [0, 0, 0]);
        assert_eq!(
            bar.handle_event(&TuiEvent::SelectTab(Tab::Settings)),
            Some(TabBarEvent::Select(Tab::Settings))
        );
    }

    #[test]
    fn test_tab_key_cycles_from_selected() {
        let mut bar = TabBar::new(Tab::Settings, [0, 0, 0]);
        assert_eq!(
            bar.handle_event(&TuiEvent::NextTab),
            Some(TabBarEvent::Select(Tab::Home))
        );
    }
}
