//! # Shimmer Component
//!
//! A loading placeholder bar with a bright band sweeping across it. The
//! band position comes from a phase value the run loop derives from elapsed
//! time, so the widget itself holds no clock and no state. Each block can
//! be staggered with a start delay, and the sweep only runs while `loading`
//! is true; once loading flips off, the block renders flat.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

/// Duration of one complete sweep across a block, in seconds.
pub const SWEEP_SECS: f32 = 0.9;
/// Width of the bright band, in cells.
const BAND_WIDTH: i32 = 6;

/// A placeholder bar with an optional animated highlight band.
pub struct ShimmerBlock {
    /// Whether the sweep animation is running.
    pub loading: bool,
    /// Seconds since the shimmer became visible.
    pub elapsed: f32,
    /// Seconds to wait before this block's sweep starts (staggering).
    pub start_delay: f32,
}

impl ShimmerBlock {
    pub fn new(loading: bool, elapsed: f32) -> Self {
        Self {
            loading,
            elapsed,
            start_delay: 0.0,
        }
    }

    pub fn with_start_delay(mut self, start_delay: f32) -> Self {
        self.start_delay = start_delay;
        self
    }

    /// Column of the band's center, or `None` when the sweep hasn't started.
    fn band_center(&self, width: u16) -> Option<i32> {
        if !self.loading {
            return None;
        }
        let running = self.elapsed - self.start_delay;
        if running < 0.0 {
            return None;
        }
        // Sweep from just left of the block to just right of it, looping.
        let cycle = (running / SWEEP_SECS).fract();
        let span = width as i32 + BAND_WIDTH * 2;
        Some((cycle * span as f32) as i32 - BAND_WIDTH)
    }
}

impl Component for ShimmerBlock {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let center = self.band_center(area.width);
        for row in 0..area.height {
            let spans: Vec<Span> = (0..area.width)
                .map(|col| {
                    let bright = center
                        .map(|c| (col as i32 - c).abs() < BAND_WIDTH / 2)
                        .unwrap_or(false);
                    if bright {
                        Span::styled("▓", Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
                    } else {
                        Span::styled("░", Style::default().fg(Color::DarkGray))
                    }
                })
                .collect();
            let line_area = Rect::new(area.x, area.y + row, area.width, 1);
            frame.render_widget(Line::from(spans), line_area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(mut block: ShimmerBlock) -> String {
        let backend = TestBackend::new(30, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| block.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_band_visible_mid_sweep() {
        // Halfway through a sweep the band sits inside the block.
        let text = render_to_text(ShimmerBlock::new(true, SWEEP_SECS / 2.0));
        assert!(text.contains('▓'));
        assert!(text.contains('░'));
    }

    #[test]
    fn test_flat_when_not_loading() {
        let text = render_to_text(ShimmerBlock::new(false, SWEEP_SECS / 2.0));
        assert!(!text.contains('▓'));
        assert!(text.contains('░'));
    }

    #[test]
    fn test_staggered_block_waits_for_its_delay() {
        let block = ShimmerBlock::new(true, 0.1).with_start_delay(0.4);
        assert_eq!(block.band_center(30), None);

        let started = ShimmerBlock::new(true, SWEEP_SECS / 2.0 + 0.4).with_start_delay(0.4);
        assert!(started.band_center(30).is_some());
    }
}
