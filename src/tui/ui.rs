//! # Frame Layout
//!
//! Composes one frame from router state: nav bar on top, the visible
//! screen's body in the middle, the tab bar at the bottom, and the modal
//! cover over everything when one is presented. Pure painting: no event
//! handling and no router mutation happens here.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::router::Router;
use crate::core::tab::Tab;
use crate::tui::component::Component;
use crate::tui::components::TabBar;
use crate::tui::screens::{modal, Screens, Visible};

/// Stack depth of every tab, indexed by `Tab::index()`.
pub fn depths(router: &Router) -> [usize; Tab::ALL.len()] {
    let mut depths = [0; Tab::ALL.len()];
    for tab in Tab::ALL {
        depths[tab.index()] = router.depth(tab);
    }
    depths
}

/// Draw a complete frame. Returns `true` when a non-modal-eligible route
/// was painted on the modal path; the run loop self-heals by dismissing it
/// after this diagnostic frame.
pub fn draw_ui(frame: &mut Frame, router: &Router, screens: &mut Screens) -> bool {
    use Constraint::{Length, Min};
    let [nav_area, body_area, tab_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());

    let visible = match router.active_top() {
        Some(route) => Visible::Pushed(route),
        None => Visible::Root(router.selected_tab()),
    };

    screens.nav_bar(visible).render(frame, nav_area);
    screens.draw(frame, body_area, visible);
    TabBar::new(router.selected_tab(), depths(router)).render(frame, tab_area);

    match router.modal() {
        Some(route) => !modal::draw_modal(frame, frame.area(), route),
        None => false,
    }
}
