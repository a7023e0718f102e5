//! # TUI Components
//!
//! Reusable pieces of the terminal interface. Components follow two
//! patterns, both borrowed from the rest of the codebase:
//!
//! - **Stateless (props-based)**: created fresh each frame from the data
//!   they render: [`NavBar`], [`TabBar`], [`ShimmerBlock`].
//! - **Persistent state + transient wrapper**: a `*State` struct lives
//!   across frames and a borrowing wrapper renders it:
//!   [`Menu`]/[`MenuState`].
//!
//! Event handling goes through the [`EventHandler`](super::component::EventHandler)
//! trait: a component inspects a `TuiEvent` and optionally emits its own
//! high-level event, which the run loop translates into router calls. The
//! components themselves never touch the router.

pub mod menu;
pub mod nav_bar;
pub mod shimmer;
pub mod tab_bar;

pub use menu::{Menu, MenuState};
pub use nav_bar::{NavBar, NavBarEvent};
pub use shimmer::ShimmerBlock;
pub use tab_bar::{TabBar, TabBarEvent};
