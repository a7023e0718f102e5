//! End-to-end navigation scenario: the full flow a user walks through the
//! demo, asserted against the router after every step and rendered through
//! the real frame composition to make sure each state draws cleanly.

use ratatui::Terminal;
use ratatui::backend::TestBackend;

use wayfare::core::route::Route;
use wayfare::core::router::Router;
use wayfare::core::tab::Tab;
use wayfare::tui::screens::Screens;
use wayfare::tui::ui::draw_ui;

fn detail(id: &str) -> Route {
    Route::ProductDetail { id: id.into() }
}

/// Paint a frame of the current state and return its text content.
fn render(router: &Router, screens: &mut Screens) -> String {
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| {
        draw_ui(f, router, screens);
    })
    .unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect()
}

#[test]
fn full_navigation_scenario() {
    let mut router = Router::new();
    let mut screens = Screens::new(5);

    // Start state: all stacks empty, home selected, no modal.
    for tab in Tab::ALL {
        assert!(router.stack(tab).is_empty());
    }
    assert_eq!(router.selected_tab(), Tab::Home);
    assert_eq!(router.modal(), None);
    assert!(render(&router, &mut screens).contains("Welcome to the Home tab!"));

    // Push a product onto the Shop tab from elsewhere, then switch to it.
    router.push(detail("123"), Some(Tab::Shop));
    router.select_tab(Tab::Shop);
    assert_eq!(router.stack(Tab::Shop), [detail("123")]);
    assert_eq!(router.selected_tab(), Tab::Shop);
    assert!(render(&router, &mut screens).contains("Product detail for id: 123"));

    // Push with no explicit tab: targets the selected (Shop) tab.
    router.push(detail("456"), None);
    assert_eq!(router.stack(Tab::Shop), [detail("123"), detail("456")]);
    assert!(render(&router, &mut screens).contains("Product detail for id: 456"));

    // Pop the selected tab all the way back to its root.
    router.pop_to_root(None);
    assert!(router.stack(Tab::Shop).is_empty());
    assert!(render(&router, &mut screens).contains("Welcome to the Shop tab!"));

    // Present and dismiss the disclaimer cover.
    router.present_modal(Route::Disclaimer);
    assert_eq!(router.modal(), Some(&Route::Disclaimer));
    assert!(render(&router, &mut screens).contains("terms and conditions"));

    router.dismiss_modal();
    assert_eq!(router.modal(), None);
    assert!(!render(&router, &mut screens).contains("terms and conditions"));
}

#[test]
fn tab_switching_preserves_every_stack() {
    let mut router = Router::new();
    router.push(Route::Profile, Some(Tab::Home));
    router.push(detail("A"), Some(Tab::Shop));

    // Bounce across all tabs a few times.
    for _ in 0..3 {
        for tab in Tab::ALL {
            router.select_tab(tab);
        }
    }

    assert_eq!(router.stack(Tab::Home), [Route::Profile]);
    assert_eq!(router.stack(Tab::Shop), [detail("A")]);
    assert!(router.stack(Tab::Settings).is_empty());
}

#[test]
fn modal_survives_stack_churn_underneath() {
    let mut router = Router::new();
    let mut screens = Screens::new(5);

    router.present_modal(Route::WelcomeTour);
    router.push(detail("123"), None);
    router.pop(None);
    router.pop_to_root(Some(Tab::Settings));
    router.select_tab(Tab::Settings);

    assert_eq!(router.modal(), Some(&Route::WelcomeTour));
    assert!(render(&router, &mut screens).contains("exciting tutorial"));
}

#[test]
fn ineligible_modal_renders_diagnostic_frame() {
    let mut router = Router::new();
    let mut screens = Screens::new(5);

    // The router stores whatever it's told to present...
    router.present_modal(detail("123"));
    assert_eq!(router.modal(), Some(&detail("123")));

    // ...and the renderer flags it instead of showing the wrong screen.
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).unwrap();
    let mut rejected = false;
    terminal
        .draw(|f| {
            rejected = draw_ui(f, &router, &mut screens);
        })
        .unwrap();
    assert!(rejected);
}
