mod common;

use common::{activate, key, lit, render, setup, tap};
use v4max::config::ProfileKind;
use v4max::hooks::ProcessResult;
use v4max::keycode::HidKeyCode;
use v4max::layer::Layer;
use v4max::layout::{LED_COUNT, led};
use v4max::light::{BLACK, CYAN, DARK_INDIGO, GREEN, ORANGE, PURPLE, RED, WHITE};

#[test]
fn test_vim_lighting() {
    let (hooks, mut host) = setup(ProfileKind::V4Max);
    activate(&mut host, Layer::Vim.id());
    let leds = render(&hooks, &mut host);

    assert_eq!(
        lit(&leds),
        vec![
            (8, WHITE),
            (9, WHITE),
            (10, WHITE),
            (13, RED),
            (21, ORANGE),
            (22, ORANGE),
            (30, DARK_INDIGO),
            (31, DARK_INDIGO),
            (34, PURPLE),
            (35, PURPLE),
            (36, PURPLE),
            (37, PURPLE),
            (48, GREEN),
            (49, GREEN),
        ]
    );
}

#[test]
fn test_numpad_lighting() {
    let (hooks, mut host) = setup(ProfileKind::V4Max);
    activate(&mut host, Layer::Numpad.id());
    let leds = render(&hooks, &mut host);

    assert_eq!(
        lit(&leds),
        vec![
            (21, PURPLE),
            (22, PURPLE),
            (23, PURPLE),
            (27, RED),
            (30, DARK_INDIGO),
            (31, DARK_INDIGO),
            (35, PURPLE),
            (36, PURPLE),
            (37, PURPLE),
            (38, RED),
            (47, GREEN),
            (48, PURPLE),
            (49, PURPLE),
            (50, PURPLE),
            (51, RED),
        ]
    );
}

#[test]
fn test_legacy_numpad_is_solid_green() {
    let (hooks, mut host) = setup(ProfileKind::Legacy);
    activate(&mut host, Layer::Numpad.id());
    let leds = render(&hooks, &mut host);
    assert!(leds.iter().all(|c| *c == GREEN));
}

#[test]
fn test_bluetooth_lighting() {
    let (hooks, mut host) = setup(ProfileKind::V4Max);
    activate(&mut host, Layer::Bluetooth.id());
    let leds = render(&hooks, &mut host);

    assert_eq!(
        lit(&leds),
        vec![(led::Q, CYAN), (led::W, CYAN), (led::E, CYAN), (led::FN1, CYAN)]
    );
}

#[test]
fn test_base_lighting() {
    let (mut hooks, mut host) = setup(ProfileKind::V4Max);
    let leds = render(&hooks, &mut host);
    assert!(leds.iter().all(|c| *c == WHITE));

    // Toggle it off with Ctrl + \
    key(&mut hooks, &mut host, HidKeyCode::LCtrl, true);
    tap(&mut hooks, &mut host, HidKeyCode::Backslash);
    key(&mut hooks, &mut host, HidKeyCode::LCtrl, false);
    let leds = render(&hooks, &mut host);
    assert!(leds.iter().all(|c| *c == BLACK));
}

#[test]
fn test_ctrl_overlay_over_dark_base() {
    let (mut hooks, mut host) = setup(ProfileKind::V4Max);
    key(&mut hooks, &mut host, HidKeyCode::RCtrl, true);
    tap(&mut hooks, &mut host, HidKeyCode::Backslash);
    assert!(!hooks.state().base_lighting);

    let leds = render(&hooks, &mut host);
    assert_eq!(
        lit(&leds),
        vec![(0, RED), (15, RED), (16, RED), (17, RED), (18, RED)]
    );

    key(&mut hooks, &mut host, HidKeyCode::RCtrl, false);
    let leds = render(&hooks, &mut host);
    assert!(lit(&leds).is_empty());
}

#[test]
fn test_ctrl_overlay_on_vim_layer() {
    let (mut hooks, mut host) = setup(ProfileKind::V4Max);
    activate(&mut host, Layer::Vim.id());
    key(&mut hooks, &mut host, HidKeyCode::LCtrl, true);
    let leds = render(&hooks, &mut host);

    for index in [led::ESC, led::Q, led::W, led::E, led::R] {
        assert_eq!(leds[index as usize], RED);
    }
    // Layer colors are kept elsewhere
    assert_eq!(leds[led::H as usize], PURPLE);
    assert_eq!(leds[led::S as usize], DARK_INDIGO);
}

#[test]
fn test_legacy_has_no_ctrl_overlay() {
    let (mut hooks, mut host) = setup(ProfileKind::Legacy);
    key(&mut hooks, &mut host, HidKeyCode::LCtrl, true);
    let leds = render(&hooks, &mut host);
    assert!(leds.iter().all(|c| *c == WHITE));
}

#[test]
fn test_legacy_dark_base_ignores_ctrl() {
    let (mut hooks, mut host) = setup(ProfileKind::Legacy);
    hooks.state_mut().base_lighting = false;
    let leds = render(&hooks, &mut host);
    assert!(lit(&leds).is_empty());

    key(&mut hooks, &mut host, HidKeyCode::RCtrl, true);
    let leds = render(&hooks, &mut host);
    assert!(lit(&leds).is_empty());
}

#[test]
fn test_every_led_written_once() {
    for kind in [ProfileKind::V4Max, ProfileKind::Legacy] {
        for layer in Layer::ALL {
            let (mut hooks, mut host) = setup(kind);
            key(&mut hooks, &mut host, HidKeyCode::LCtrl, true);
            activate(&mut host, layer.id());
            render(&hooks, &mut host);
            for index in 0..LED_COUNT as u8 {
                assert_eq!(host.write_count(index), 1, "LED {} on {} layer of {}", index, layer, kind);
            }
        }
    }
}

#[test]
fn test_partial_range() {
    let (mut hooks, mut host) = setup(ProfileKind::V4Max);
    activate(&mut host, Layer::Vim.id());
    key(&mut hooks, &mut host, HidKeyCode::LCtrl, true);

    host.start_frame();
    assert_eq!(hooks.render_indicators(&mut host, 20, 40), ProcessResult::Stop);
    for index in 0..LED_COUNT as u8 {
        let expected = if (20..40).contains(&index) { 1 } else { 0 };
        assert_eq!(host.write_count(index), expected, "LED {}", index);
    }
    assert_eq!(host.leds()[led::U as usize], ORANGE);
    // Backspace and the overlay keys are outside of the range
    assert_eq!(host.leds()[led::BACKSPACE as usize], BLACK);
    assert_eq!(host.leds()[led::Q as usize], BLACK);
}

#[test]
fn test_unknown_layer_renders_base() {
    let (hooks, mut host) = setup(ProfileKind::Legacy);
    // Layer 3 exists on the host but not in the legacy profile
    activate(&mut host, Layer::Bluetooth.id());
    let leds = render(&hooks, &mut host);
    assert!(leds.iter().all(|c| *c == WHITE));
}

#[test]
#[should_panic]
fn test_range_past_last_led() {
    let (hooks, mut host) = setup(ProfileKind::V4Max);
    hooks.render_indicators(&mut host, 0, LED_COUNT as u8 + 1);
}
