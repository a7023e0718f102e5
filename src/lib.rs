//! Wayfare library exports.
//!
//! A terminal storefront demo of stack-based tab navigation: per-tab route
//! stacks, a modal cover, reusable nav-bar decorations, and a shimmer
//! loading placeholder. The [`core`] module owns all navigation state and
//! knows nothing about terminals; [`tui`] is the ratatui adapter.

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;
