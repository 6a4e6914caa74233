//! Full-frame rendering through `ui::render` on a TestBackend.

mod common;

use common::{open_dashboard_entry, press, press_ctrl, render_to_string, sign_in, test_app};
use crossterm::event::KeyCode;
use mello::domain::View;

const SIZES: [(u16, u16); 4] = [(200, 50), (120, 40), (80, 24), (40, 12)];

#[test]
fn test_home_shows_cards_and_mello() {
    let (app, _) = test_app();
    let text = render_to_string(&app, 120, 40);
    assert!(text.contains("GET STARTED"));
    assert!(text.contains("SIGN IN"));
    assert!(text.contains("Dark"));
}

#[test]
fn test_every_dashboard_module_renders_at_every_size() {
    for index in 0..7 {
        let (mut app, _) = test_app();
        sign_in(&mut app);
        open_dashboard_entry(&mut app, index);
        let view = app.current_view();
        for (width, height) in SIZES {
            let text = render_to_string(&app, width, height);
            assert!(
                text.contains("Mello"),
                "{view:?} at {width}x{height} lost its header"
            );
        }
    }
}

#[test]
fn test_header_marks_signed_in_views() {
    let (mut app, _) = test_app();
    assert!(!render_to_string(&app, 120, 40).contains("signed in"));
    sign_in(&mut app);
    let text = render_to_string(&app, 120, 40);
    assert!(text.contains("Dashboard"));
    assert!(text.contains("signed in"));
}

#[test]
fn test_light_theme_switch_label() {
    let (mut app, _) = test_app();
    press_ctrl(&mut app, 't');
    assert!(render_to_string(&app, 120, 40).contains("Light"));
}

#[test]
fn test_alert_overlay_over_login() {
    let (mut app, _) = test_app();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    let before = render_to_string(&app, 120, 40);
    assert!(before.contains("Tab"));

    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.current_view(), View::Login);
    let text = render_to_string(&app, 120, 40);
    assert!(text.contains("Please enter your email and password"));
}

#[test]
fn test_password_is_masked() {
    let (mut app, _) = test_app();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Tab);
    for c in "hunter2".chars() {
        press(&mut app, KeyCode::Char(c));
    }
    let text = render_to_string(&app, 120, 40);
    assert!(!text.contains("hunter2"));
    assert!(text.contains("•••••••"));
}
