//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::router::Router;

/// A fresh router in the demo's start state: all stacks empty, home tab
/// selected, no modal.
pub fn test_router() -> Router {
    Router::new()
}
