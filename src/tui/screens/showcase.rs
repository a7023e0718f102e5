//! # Nav Bar Showcase
//!
//! A static gallery of the custom navigation bar in its configurations:
//! title only, with a back button, and with the cart button and badge. The
//! screen's own (live) bar sits in the frame chrome above; these are inert
//! copies rendered as content.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::components::NavBar;

pub fn draw(frame: &mut Frame, area: Rect) {
    let [intro, a, la, b, lb, c, lc, _rest] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Min(0),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new("Every configuration of the reusable navigation bar:"),
        intro,
    );

    NavBar::titled("Title only").render(frame, a);
    caption(frame, la, "titled(..)");

    NavBar::titled("With back button").with_back().render(frame, b);
    caption(frame, lb, "titled(..).with_back()");

    NavBar::titled("With cart and badge")
        .with_cart(Some(12))
        .render(frame, c);
    caption(frame, lc, "titled(..).with_cart(Some(12))");
}

fn caption(frame: &mut Frame, area: Rect, text: &str) {
    frame.render_widget(
        Paragraph::new(Line::styled(text, Style::default().fg(Color::DarkGray))),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_gallery_renders_all_variants() {
        let backend = TestBackend::new(60, 14);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, f.area())).unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Title only"));
        assert!(text.contains("With back button"));
        assert!(text.contains("Cart (12)"));
    }
}
