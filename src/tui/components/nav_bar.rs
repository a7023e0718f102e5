//! # NavBar Component
//!
//! The custom navigation bar: a single highlighted row with an optional
//! back button on the left, a centered title, and an optional cart button
//! with a numeric badge on the right.
//!
//! The back and cart buttons are the two reusable screen decorations. They
//! are defined purely in terms of the router: the run loop maps
//! [`NavBarEvent::Back`] to `router.pop(None)` and [`NavBarEvent::OpenCart`]
//! to `router.push(Route::Cart, None)`. The badge count is a prop owned by
//! the calling screen; the router knows nothing about it.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const BACK_LABEL: &str = "← Back";
const CART_LABEL: &str = "Cart";

/// Events emitted by the nav bar decorations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavBarEvent {
    /// The back decoration: pop the current tab's stack.
    Back,
    /// The cart decoration: push the cart route onto the current tab.
    OpenCart,
}

/// Props-based navigation bar. Created fresh each frame by the screen
/// being decorated.
pub struct NavBar {
    pub title: String,
    /// Show the back decoration (stack is non-empty).
    pub show_back: bool,
    /// Show the cart decoration.
    pub show_cart: bool,
    /// Badge on the cart button; `None` or `Some(0)` renders no badge.
    pub badge: Option<u32>,
}

impl NavBar {
    /// A bar with just a title, no decorations.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            show_back: false,
            show_cart: false,
            badge: None,
        }
    }

    pub fn with_back(mut self) -> Self {
        self.show_back = true;
        self
    }

    pub fn with_cart(mut self, badge: Option<u32>) -> Self {
        self.show_cart = true;
        self.badge = badge;
        self
    }

    fn cart_text(&self) -> String {
        match self.badge {
            Some(count) if count > 0 => format!("{CART_LABEL} ({count})"),
            _ => CART_LABEL.to_string(),
        }
    }
}

impl Component for NavBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let bar_style = Style::default().fg(Color::White).bg(Color::Blue);
        let width = area.width as usize;

        let left = if self.show_back { BACK_LABEL } else { "" };
        let right = if self.show_cart { self.cart_text() } else { String::new() };

        // Center the title over the full width, then make sure it clears the
        // left and right segments; trim it when the terminal is too narrow.
        let left_w = left.width();
        let right_w = right.width();
        let title = truncate_to_width(&self.title, width.saturating_sub(left_w + right_w + 4));
        let title_w = title.width();

        let pad_left = (width.saturating_sub(title_w) / 2).max(left_w + 2);
        let pad_right = width.saturating_sub(pad_left + title_w + right_w);

        let line = Line::from(vec![
            Span::styled(left, bar_style.add_modifier(Modifier::BOLD)),
            Span::styled(" ".repeat(pad_left.saturating_sub(left_w)), bar_style),
            Span::styled(title, bar_style.add_modifier(Modifier::BOLD)),
            Span::styled(" ".repeat(pad_right), bar_style),
            Span::styled(right, bar_style.add_modifier(Modifier::BOLD)),
        ]);

        frame.render_widget(line.style(bar_style), area);
    }
}

impl EventHandler for NavBar {
    type Event = NavBarEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<NavBarEvent> {
        match event {
            TuiEvent::Back if self.show_back => Some(NavBarEvent::Back),
            TuiEvent::OpenCart if self.show_cart => Some(NavBarEvent::OpenCart),
            _ => None,
        }
    }
}

/// Truncate to at most `max_width` columns, appending "…" when cut.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
