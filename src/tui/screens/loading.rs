//! # Shimmer Loading Demo
//!
//! A screen of placeholder blocks that shimmer while "content" loads, then
//! flip to a loaded state after a fixed delay, the demo's only deferred
//! mutation.
//!
//! The flip is a one-shot tokio task that sleeps and then sends
//! [`BackgroundEvent::LoadingFinished`] into the run loop's channel; it
//! never mutates state directly. The task's [`AbortHandle`] lives in
//! [`LoadingScreenState`] and is aborted when the state is cancelled or
//! dropped, so a screen popped before the deadline can't flip anything
//! afterwards.

use std::sync::mpsc;
use std::time::{Duration, Instant};

use log::{debug, warn};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use tokio::task::AbortHandle;

use crate::tui::BackgroundEvent;
use crate::tui::component::Component;
use crate::tui::components::ShimmerBlock;

/// Stagger between consecutive placeholder blocks, so the bands sweep in a
/// cascade instead of in lockstep.
const BLOCK_STAGGER_SECS: f32 = 0.2;

/// Lifetime-scoped state for the loading screen: the loading flag, the
/// animation clock, and the pending flip task.
pub struct LoadingScreenState {
    started: Instant,
    is_loading: bool,
    flip_task: Option<AbortHandle>,
}

impl LoadingScreenState {
    /// Start loading: spawns the one-shot flip task.
    pub fn spawn(delay: Duration, tx: mpsc::Sender<BackgroundEvent>) -> Self {
        debug!("loading screen visible, flip scheduled in {delay:?}");
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(BackgroundEvent::LoadingFinished).is_err() {
                warn!("Failed to send LoadingFinished: receiver dropped");
            }
        });
        Self {
            started: Instant::now(),
            is_loading: true,
            flip_task: Some(task.abort_handle()),
        }
    }

    /// The flip event arrived: reveal the loaded content.
    pub fn finish(&mut self) {
        self.is_loading = false;
        self.flip_task = None;
    }

    /// Abort the pending flip, if any. Called when the owning screen is
    /// removed before the deadline.
    pub fn cancel(&mut self) {
        if let Some(task) = self.flip_task.take() {
            debug!("loading screen removed before the flip, cancelling");
            task.abort();
        }
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Seconds since the screen became visible; drives the shimmer phase.
    pub fn elapsed(&self) -> f32 {
        self.started.elapsed().as_secs_f32()
    }
}

impl Drop for LoadingScreenState {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Render the demo. `state` is `None` only for the first frame before the
/// run loop has attached one; that frame renders as freshly loading.
pub fn draw(frame: &mut Frame, area: Rect, state: Option<&LoadingScreenState>) {
    let (loading, elapsed) = state
        .map(|s| (s.is_loading(), s.elapsed()))
        .unwrap_or((true, 0.0));

    let [intro, b0, _, b1, _, b2, _, b3, _, result] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(2), // image placeholder
        Constraint::Length(1),
        Constraint::Length(1), // title placeholder
        Constraint::Length(1),
        Constraint::Length(1), // description lines
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    let caption = if loading {
        "Loading content…"
    } else {
        "Content loaded."
    };
    frame.render_widget(
        Paragraph::new(Line::styled(caption, Style::default().fg(Color::DarkGray))),
        intro,
    );

    for (i, block_area) in [b0, b1, b2, b3].into_iter().enumerate() {
        ShimmerBlock::new(loading, elapsed)
            .with_start_delay(i as f32 * BLOCK_STAGGER_SECS)
            .render(frame, block_area);
    }

    if !loading {
        let done = Paragraph::new(vec![
            Line::styled(
                "✓ Data loaded successfully!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                "(In a real app the placeholders above would now be content.)",
                Style::default().fg(Color::DarkGray),
            ),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(done, result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[tokio::test(start_paused = true)]
    async fn test_flip_event_arrives_after_the_delay() {
        let (tx, rx) = mpsc::channel();
        let _state = LoadingScreenState::spawn(Duration::from_millis(100), tx);

        tokio::time::sleep(Duration::from_millis(150)).await;

        assert_eq!(rx.try_recv(), Ok(BackgroundEvent::LoadingFinished));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_before_deadline_suppresses_the_flip() {
        let (tx, rx) = mpsc::channel();
        let mut state = LoadingScreenState::spawn(Duration::from_millis(100), tx);
        state.cancel();

        tokio::time::sleep(Duration::from_millis(150)).await;

        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_the_pending_flip() {
        let (tx, rx) = mpsc::channel();
        let state = LoadingScreenState::spawn(Duration::from_millis(100), tx);
        drop(state);

        tokio::time::sleep(Duration::from_millis(150)).await;

        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_finish_reveals_loaded_content() {
        let (tx, _rx) = mpsc::channel();
        let mut state = LoadingScreenState::spawn(Duration::from_secs(60), tx);
        state.finish();
        assert!(!state.is_loading());

        let backend = TestBackend::new(60, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| draw(f, f.area(), Some(&state)))
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Data loaded successfully!"));
    }

    #[test]
    fn test_draw_without_state_shows_loading() {
        let backend = TestBackend::new(60, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, f.area(), None)).unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Loading content"));
    }
}
