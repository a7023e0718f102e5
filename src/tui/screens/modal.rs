//! # Modal Covers
//!
//! Full-screen overlays presented outside the tab stacks. Only the
//! modal-eligible subset of routes renders a real cover; anything else
//! reaching this path gets a visible diagnostic and is reported back so the
//! run loop can self-heal by dismissing it.
//!
//! While a cover is up it captures all input except force-quit: any
//! confirm/back key dismisses, everything else is swallowed.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::core::route::Route;
use crate::tui::event::TuiEvent;
use crate::tui::screens::ScreenEvent;

/// Draw the modal cover for `route` over the whole frame. Returns `false`
/// when the route is not modal-eligible; the caller should dismiss it
/// after this diagnostic frame has been shown.
pub fn draw_modal(frame: &mut Frame, area: Rect, route: &Route) -> bool {
    let overlay = centered_rect(70, 60, area);
    frame.render_widget(Clear, overlay);

    match route {
        Route::Disclaimer => {
            draw_cover(
                frame,
                overlay,
                " Disclaimer ",
                "By continuing, you agree to our terms and conditions.",
                "Enter: I agree",
                Color::Blue,
            );
            true
        }
        Route::WelcomeTour => {
            draw_cover(
                frame,
                overlay,
                " Welcome Tour ",
                "Learn how to use the app in this exciting tutorial!",
                "Enter: start using the app",
                Color::Green,
            );
            true
        }
        other => {
            draw_cover(
                frame,
                overlay,
                " ! ",
                &format!("Unknown full screen cover route: {}", other.key()),
                "dismissing…",
                Color::Red,
            );
            false
        }
    }
}

/// Input handling while a cover is up: confirm or back dismisses, the rest
/// is captured and dropped.
pub fn handle_modal_event(event: &TuiEvent) -> Option<ScreenEvent> {
    match event {
        TuiEvent::Submit | TuiEvent::Back => Some(ScreenEvent::Dismiss),
        _ => None,
    }
}

fn draw_cover(
    frame: &mut Frame,
    overlay: Rect,
    title: &str,
    body: &str,
    hint: &str,
    accent: Color,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .title(title)
        .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .title_bottom(Line::from(format!(" {hint} ")).centered())
        .padding(Padding::uniform(1));

    let paragraph = Paragraph::new(body)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(paragraph, overlay);
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
