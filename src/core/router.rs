//! # Router
//!
//! The single owner of all navigation state. Everything the TUI renders is
//! derived from this struct, and every navigation intent funnels back into
//! its mutators.
//!
//! ```text
//! Router
//! ├── stacks: [Vec<Route>; 3]   // one push-down history per tab
//! ├── selected: Tab             // exactly one active tab
//! ├── modal: Option<Route>      // at most one modally presented route
//! └── revision: u64             // change counter for observers
//! ```
//!
//! There is no observer registry: the render loop re-reads the router every
//! iteration and redraws when `revision()` has moved since the last painted
//! frame. Every mutator bumps the revision, including calls that leave the
//! state value-identical (re-selecting the selected tab, dismissing an
//! absent modal), so observers always get a notification.
//!
//! All operations are total and synchronous. `Tab` is a closed enum, so
//! there is no "unknown tab" to reject; pop on an empty stack is a no-op by
//! contract, not an error. The router must only be mutated from the thread
//! that owns the render loop; background work communicates by sending
//! events into that loop, never by touching the router directly.

use log::debug;

use crate::core::route::Route;
use crate::core::tab::Tab;

/// Owner of per-tab navigation stacks, tab selection, and the modal route.
///
/// Constructed once per session and passed `&mut` into the render loop:
/// an explicitly owned value, never a global.
pub struct Router {
    stacks: [Vec<Route>; Tab::ALL.len()],
    selected: Tab,
    modal: Option<Route>,
    revision: u64,
}

impl Router {
    /// A fresh router: all stacks empty, home tab selected, no modal.
    pub fn new() -> Self {
        Self::with_selected(Tab::default())
    }

    /// A fresh router with a specific tab selected (the `--tab` flag).
    pub fn with_selected(tab: Tab) -> Self {
        Self {
            stacks: [const { Vec::new() }; Tab::ALL.len()],
            selected: tab,
            modal: None,
            revision: 0,
        }
    }

    fn target(&self, tab: Option<Tab>) -> Tab {
        tab.unwrap_or(self.selected)
    }

    fn bump(&mut self) {
        self.revision += 1;
    }

    // ------------------------------------------------------------------
    // Stack management
    // ------------------------------------------------------------------

    /// Append `route` to the stack of `tab`, or of the selected tab when
    /// `tab` is `None`. Duplicates are allowed: a stack is navigation
    /// history, not a set.
    pub fn push(&mut self, route: Route, tab: Option<Tab>) {
        let target = self.target(tab);
        debug!("push {} onto {target}", route.key());
        self.stacks[target.index()].push(route);
        self.bump();
    }

    /// Remove the top entry of the target tab's stack. No-op when the stack
    /// is already empty.
    pub fn pop(&mut self, tab: Option<Tab>) {
        let target = self.target(tab);
        if let Some(route) = self.stacks[target.index()].pop() {
            debug!("pop {} off {target}", route.key());
        }
        self.bump();
    }

    /// Clear the target tab's stack unconditionally. Idempotent.
    pub fn pop_to_root(&mut self, tab: Option<Tab>) {
        let target = self.target(tab);
        debug!("pop {target} to root");
        self.stacks[target.index()].clear();
        self.bump();
    }

    // ------------------------------------------------------------------
    // Tab management
    // ------------------------------------------------------------------

    /// Make `tab` the active tab. Never touches any stack or the modal.
    pub fn select_tab(&mut self, tab: Tab) {
        debug!("select tab {tab}");
        self.selected = tab;
        self.bump();
    }

    // ------------------------------------------------------------------
    // Modal management
    // ------------------------------------------------------------------

    /// Present `route` modally, replacing any modal already showing. Last
    /// write wins; modals do not stack. Eligibility is the renderer's
    /// contract ([`Route::is_modal`]), not enforced here.
    pub fn present_modal(&mut self, route: Route) {
        debug!("present modal {}", route.key());
        self.modal = Some(route);
        self.bump();
    }

    /// Hide the modal. Idempotent.
    pub fn dismiss_modal(&mut self) {
        if let Some(route) = self.modal.take() {
            debug!("dismiss modal {}", route.key());
        }
        self.bump();
    }

    // ------------------------------------------------------------------
    // Read access
    // ------------------------------------------------------------------

    pub fn selected_tab(&self) -> Tab {
        self.selected
    }

    /// The full push-down history of a tab, oldest first.
    pub fn stack(&self, tab: Tab) -> &[Route] {
        &self.stacks[tab.index()]
    }

    /// Number of pushed screens on a tab (0 = at the tab root).
    pub fn depth(&self, tab: Tab) -> usize {
        self.stacks[tab.index()].len()
    }

    /// The visible top of a tab's stack, or `None` at the tab root.
    pub fn top(&self, tab: Tab) -> Option<&Route> {
        self.stacks[tab.index()].last()
    }

    /// The visible top of the selected tab's stack.
    pub fn active_top(&self) -> Option<&Route> {
        self.top(self.selected)
    }

    pub fn modal(&self) -> Option<&Route> {
        self.modal.as_ref()
    }

    /// Monotonic change counter. Redraw when this differs from the value at
    /// the last painted frame.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
