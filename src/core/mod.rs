//! # Core Navigation Logic
//!
//! This module owns Wayfare's navigation state. It knows nothing about any
//! specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Route (destinations) │
//!                    │  • Tab (sections)       │
//!                    │  • Router (the state)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │    GUI     │      │   tests    │
//!     │  Adapter   │      │  Adapter   │      │            │
//!     │ (ratatui)  │      │  (future)  │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`route`]: the `Route` sum type, every navigable destination
//! - [`tab`]: the `Tab` enum, the closed set of top-level sections
//! - [`router`]: the `Router`, sole owner and mutator of navigation state
//! - [`config`]: settings with the defaults → file → env → CLI hierarchy

pub mod config;
pub mod route;
pub mod router;
pub mod tab;
