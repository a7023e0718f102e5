//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the router's
//! state, and translates keyboard events into router calls. This is the
//! only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Router changed**: every router mutator bumps its revision counter;
//!   a frame is painted whenever the revision moved since the last paint.
//!   This is the observation contract: state changes become visible within
//!   one loop iteration.
//! - **Animating** (shimmer screen loading): draws every ~80ms so the band
//!   sweeps smoothly.
//! - **Idle**: sleeps up to 250ms in the event poll; input events and
//!   resizes force a redraw.
//!
//! ## Event dispatch priority
//!
//! Ctrl+C always quits. While a modal cover is up it captures everything
//! else. After that: quit key, nav-bar decorations (back / cart), tab bar,
//! and finally the visible screen's own menu.

pub mod component;
pub mod components;
pub mod event;
pub mod screens;
pub mod ui;

use std::sync::mpsc;

use log::{debug, info, warn};

use crate::core::config::ResolvedConfig;
use crate::core::route::Route;
use crate::core::router::Router;
use crate::core::tab::Tab;
use crate::tui::component::EventHandler;
use crate::tui::components::{NavBarEvent, TabBar, TabBarEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::screens::{LoadingScreenState, ScreenEvent, Screens, Visible, modal};

/// Events sent into the run loop by background tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundEvent {
    /// The shimmer demo's delayed flip fired.
    LoadingFinished,
}

/// Apply a screen's navigation intent to the router. The only place where
/// intents become mutations.
fn apply_screen_event(router: &mut Router, event: ScreenEvent) {
    match event {
        ScreenEvent::Push { route, tab, select } => {
            if select && let Some(tab) = tab {
                router.select_tab(tab);
            }
            router.push(route, tab);
        }
        ScreenEvent::Pop => router.pop(None),
        ScreenEvent::PopToRoot { tab, select } => {
            if select && let Some(tab) = tab {
                router.select_tab(tab);
            }
            router.pop_to_root(tab);
        }
        ScreenEvent::Present(route) => router.present_modal(route),
        ScreenEvent::Dismiss => router.dismiss_modal(),
    }
}

/// Keep the loading screen's flip task in step with the router: spawn it
/// when `Route::Loading` becomes visible, drop it (aborting the pending
/// flip) once the route has left every stack.
fn sync_loading_state(
    router: &Router,
    screens: &mut Screens,
    config: &ResolvedConfig,
    tx: &mpsc::Sender<BackgroundEvent>,
) {
    let on_some_stack = Tab::ALL
        .into_iter()
        .any(|tab| router.stack(tab).contains(&Route::Loading));

    if screens.loading.is_none() && router.active_top() == Some(&Route::Loading) {
        screens.loading = Some(LoadingScreenState::spawn(config.loading_delay, tx.clone()));
    } else if screens.loading.is_some() && !on_some_stack {
        // Dropping the state aborts a flip that hasn't fired yet.
        screens.loading = None;
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut router = Router::with_selected(config.start_tab);
    let mut screens = Screens::new(config.cart_badge);

    let mut terminal = ratatui::init();

    // Channel for events from background tasks (the shimmer flip).
    let (tx, rx) = mpsc::channel();

    let mut needs_redraw = true; // Force first frame
    let mut last_revision = router.revision();

    info!("Wayfare starting on tab {}", config.start_tab);

    loop {
        sync_loading_state(&router, &mut screens, &config, &tx);

        // Animate only while the shimmer screen is visible and loading.
        let animating = router.active_top() == Some(&Route::Loading)
            && screens.loading.as_ref().is_none_or(|s| s.is_loading());

        if router.revision() != last_revision || animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let mut modal_rejected = false;
            terminal.draw(|f| {
                modal_rejected = ui::draw_ui(f, &router, &mut screens);
            })?;
            last_revision = router.revision();
            needs_redraw = false;

            // Self-heal: a non-modal route on the cover path gets one
            // diagnostic frame, then is dismissed.
            if modal_rejected {
                warn!(
                    "Non-modal route presented as cover: {:?}; dismissing",
                    router.modal().map(Route::key)
                );
                router.dismiss_modal();
            }
        }

        // Dynamic poll timeout: short when animating, long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(250)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // Ctrl+C always quits regardless of what's on screen
            if matches!(event, TuiEvent::ForceQuit) {
                should_quit = true;
                continue;
            }

            // A modal cover captures all remaining input
            if router.modal().is_some() {
                if let Some(intent) = modal::handle_modal_event(&event) {
                    apply_screen_event(&mut router, intent);
                }
                continue;
            }

            if matches!(event, TuiEvent::Quit) {
                should_quit = true;
                continue;
            }

            // The visible screen: the selected tab's stack top, or its root.
            let top = router.active_top().cloned();
            let visible = match &top {
                Some(route) => Visible::Pushed(route),
                None => Visible::Root(router.selected_tab()),
            };

            // Nav-bar decorations: back pops, cart pushes the cart route
            if let Some(nav_event) = screens.nav_bar(visible).handle_event(&event) {
                match nav_event {
                    NavBarEvent::Back => router.pop(None),
                    NavBarEvent::OpenCart => router.push(Route::Cart, None),
                }
                continue;
            }

            // Tab bar: digit keys and Tab cycling
            let mut tab_bar = TabBar::new(router.selected_tab(), ui::depths(&router));
            if let Some(TabBarEvent::Select(tab)) = tab_bar.handle_event(&event) {
                router.select_tab(tab);
                continue;
            }

            // Finally, the screen's own menu
            if let Some(intent) = screens.handle_event(visible, &event) {
                apply_screen_event(&mut router, intent);
            }
        }

        if should_quit {
            break;
        }

        // Handle background task events (the shimmer flip)
        while let Ok(bg_event) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", bg_event);
            match bg_event {
                BackgroundEvent::LoadingFinished => {
                    if let Some(loading) = screens.loading.as_mut() {
                        loading.finish();
                    }
                }
            }
        }
    }

    ratatui::restore();
    Ok(())
}
