mod common;

use common::{activate, key, setup, tap};
use v4max::config::ProfileKind;
use v4max::hooks::ProcessResult;
use v4max::host::Host;
use v4max::keycode::HidKeyCode;
use v4max::layer::Layer;
use v4max::modifier::HidModifiers;
use v4max::virtual_host::Tap;
use v4max::{a, k, mo, mt};

#[test]
fn test_ctrl_grave_switches_to_bluetooth() {
    let (mut hooks, mut host) = setup(ProfileKind::V4Max);
    activate(&mut host, Layer::Vim.id());

    assert_eq!(key(&mut hooks, &mut host, HidKeyCode::LCtrl, true), ProcessResult::Continue);
    assert_eq!(key(&mut hooks, &mut host, HidKeyCode::Grave, true), ProcessResult::Stop);
    assert_eq!(host.highest_layer(), Layer::Bluetooth.id());
    assert!(!host.layer_state().is_active(Layer::Vim.id()));

    // Release goes to the host
    assert_eq!(key(&mut hooks, &mut host, HidKeyCode::Grave, false), ProcessResult::Continue);
    assert!(host.taps().is_empty());
}

#[test]
fn test_grave_without_ctrl() {
    let (mut hooks, mut host) = setup(ProfileKind::V4Max);
    assert_eq!(tap(&mut hooks, &mut host, HidKeyCode::Grave), ProcessResult::Continue);
    assert_eq!(host.highest_layer(), Layer::Base.id());
}

#[test]
fn test_numpad_shift_dot_sends_slash() {
    let (mut hooks, mut host) = setup(ProfileKind::V4Max);
    activate(&mut host, Layer::Numpad.id());
    key(&mut hooks, &mut host, HidKeyCode::LShift, true);
    let shifted = HidModifiers::new().with_left_shift(true);
    assert_eq!(host.modifiers(), shifted);

    assert_eq!(key(&mut hooks, &mut host, HidKeyCode::Dot, true), ProcessResult::Stop);
    assert_eq!(
        host.taps(),
        &[Tap {
            keycode: HidKeyCode::Slash,
            modifiers: HidModifiers::new(),
        }]
    );
    // Shift is restored after the tap
    assert_eq!(host.modifiers(), shifted);
}

#[test]
fn test_numpad_shift_dot_keeps_other_modifiers() {
    let (mut hooks, mut host) = setup(ProfileKind::V4Max);
    activate(&mut host, Layer::Numpad.id());
    key(&mut hooks, &mut host, HidKeyCode::RShift, true);
    key(&mut hooks, &mut host, HidKeyCode::LAlt, true);

    assert_eq!(key(&mut hooks, &mut host, HidKeyCode::Dot, true), ProcessResult::Stop);
    assert_eq!(host.taps()[0].modifiers, HidModifiers::new().with_left_alt(true));
    assert_eq!(
        host.modifiers(),
        HidModifiers::new().with_left_alt(true).with_right_shift(true)
    );
}

#[test]
fn test_dot_without_shift_or_numpad() {
    let (mut hooks, mut host) = setup(ProfileKind::V4Max);
    activate(&mut host, Layer::Numpad.id());
    assert_eq!(tap(&mut hooks, &mut host, HidKeyCode::Dot), ProcessResult::Continue);

    activate(&mut host, Layer::Base.id());
    key(&mut hooks, &mut host, HidKeyCode::LShift, true);
    assert_eq!(tap(&mut hooks, &mut host, HidKeyCode::Dot), ProcessResult::Continue);
    assert!(host.taps().is_empty());
}

#[test]
fn test_ctrl_backslash_toggles_base_lighting() {
    let (mut hooks, mut host) = setup(ProfileKind::V4Max);
    assert!(hooks.state().base_lighting);

    key(&mut hooks, &mut host, HidKeyCode::RCtrl, true);
    assert_eq!(tap(&mut hooks, &mut host, HidKeyCode::Backslash), ProcessResult::Stop);
    assert!(!hooks.state().base_lighting);
    assert_eq!(tap(&mut hooks, &mut host, HidKeyCode::Backslash), ProcessResult::Stop);
    assert!(hooks.state().base_lighting);
    assert!(host.taps().is_empty());
}

#[test]
fn test_numpad_backslash_sends_slash() {
    let (mut hooks, mut host) = setup(ProfileKind::V4Max);
    activate(&mut host, Layer::Numpad.id());

    assert_eq!(tap(&mut hooks, &mut host, HidKeyCode::Backslash), ProcessResult::Stop);
    assert_eq!(host.taps().len(), 1);
    assert_eq!(host.taps()[0].keycode, HidKeyCode::Slash);

    // The ctrl toggle is checked first
    key(&mut hooks, &mut host, HidKeyCode::LCtrl, true);
    assert_eq!(tap(&mut hooks, &mut host, HidKeyCode::Backslash), ProcessResult::Stop);
    assert!(!hooks.state().base_lighting);
    assert_eq!(host.taps().len(), 1);
}

#[test]
fn test_ctrl_slash_sends_up() {
    let (mut hooks, mut host) = setup(ProfileKind::V4Max);
    key(&mut hooks, &mut host, HidKeyCode::LCtrl, true);

    assert_eq!(tap(&mut hooks, &mut host, HidKeyCode::Slash), ProcessResult::Stop);
    assert_eq!(host.taps().len(), 1);
    assert_eq!(host.taps()[0].keycode, HidKeyCode::Up);

    // Not on the numpad layer
    activate(&mut host, Layer::Numpad.id());
    assert_eq!(tap(&mut hooks, &mut host, HidKeyCode::Slash), ProcessResult::Continue);
    assert_eq!(host.taps().len(), 1);
}

#[test]
fn test_ctrl_layer_shortcuts() {
    let (mut hooks, mut host) = setup(ProfileKind::V4Max);
    key(&mut hooks, &mut host, HidKeyCode::LCtrl, true);

    assert_eq!(tap(&mut hooks, &mut host, HidKeyCode::E), ProcessResult::Stop);
    assert_eq!(host.highest_layer(), Layer::Vim.id());

    assert_eq!(tap(&mut hooks, &mut host, HidKeyCode::R), ProcessResult::Stop);
    assert_eq!(host.highest_layer(), Layer::Numpad.id());
    assert!(!host.layer_state().is_active(Layer::Vim.id()));

    assert_eq!(tap(&mut hooks, &mut host, HidKeyCode::Q), ProcessResult::Stop);
    assert_eq!(host.highest_layer(), Layer::Base.id());

    tap(&mut hooks, &mut host, HidKeyCode::R);
    assert_eq!(tap(&mut hooks, &mut host, HidKeyCode::W), ProcessResult::Stop);
    assert_eq!(host.highest_layer(), Layer::Base.id());

    key(&mut hooks, &mut host, HidKeyCode::LCtrl, false);
    assert_eq!(tap(&mut hooks, &mut host, HidKeyCode::E), ProcessResult::Continue);
    assert_eq!(host.highest_layer(), Layer::Base.id());
}

#[test]
fn test_ctrl_flags() {
    let (mut hooks, mut host) = setup(ProfileKind::V4Max);
    assert_eq!(key(&mut hooks, &mut host, HidKeyCode::RCtrl, true), ProcessResult::Continue);
    assert!(hooks.state().right_ctrl);
    assert!(!hooks.state().left_ctrl);

    assert_eq!(key(&mut hooks, &mut host, HidKeyCode::RCtrl, false), ProcessResult::Continue);
    assert!(!hooks.state().right_ctrl);
    assert!(!hooks.state().ctrl_held());
}

#[test]
fn test_other_keys_continue() {
    let (mut hooks, mut host) = setup(ProfileKind::V4Max);
    key(&mut hooks, &mut host, HidKeyCode::LCtrl, true);
    for keycode in [HidKeyCode::A, HidKeyCode::T, HidKeyCode::Escape, HidKeyCode::Kc1] {
        assert_eq!(tap(&mut hooks, &mut host, keycode), ProcessResult::Continue);
    }
    assert!(host.taps().is_empty());
    assert_eq!(host.highest_layer(), Layer::Base.id());
}

#[test]
fn test_legacy_right_ctrl_slash() {
    let (mut hooks, mut host) = setup(ProfileKind::Legacy);
    key(&mut hooks, &mut host, HidKeyCode::RCtrl, true);
    assert_eq!(tap(&mut hooks, &mut host, HidKeyCode::Slash), ProcessResult::Stop);
    assert_eq!(host.taps()[0].keycode, HidKeyCode::Up);
}

#[test]
fn test_legacy_has_no_other_overrides() {
    let (mut hooks, mut host) = setup(ProfileKind::Legacy);
    assert_eq!(key(&mut hooks, &mut host, HidKeyCode::LCtrl, true), ProcessResult::Continue);
    assert!(hooks.state().left_ctrl);

    assert_eq!(tap(&mut hooks, &mut host, HidKeyCode::Slash), ProcessResult::Continue);
    assert_eq!(tap(&mut hooks, &mut host, HidKeyCode::E), ProcessResult::Continue);
    assert_eq!(tap(&mut hooks, &mut host, HidKeyCode::Grave), ProcessResult::Continue);
    assert_eq!(tap(&mut hooks, &mut host, HidKeyCode::Backslash), ProcessResult::Continue);
    assert!(hooks.state().base_lighting);
    assert!(host.taps().is_empty());
    assert_eq!(host.highest_layer(), Layer::Base.id());
}

#[test]
fn test_process_action() {
    let (mut hooks, mut host) = setup(ProfileKind::V4Max);
    key(&mut hooks, &mut host, HidKeyCode::LCtrl, true);

    assert_eq!(hooks.process_action(mo!(1), true, &mut host), ProcessResult::Continue);
    assert_eq!(
        hooks.process_action(mt!(Enter, v4max::modifier::ModifierCombination::RCTRL), true, &mut host),
        ProcessResult::Continue
    );
    assert_eq!(hooks.process_action(a!(Transparent), true, &mut host), ProcessResult::Continue);
    assert_eq!(hooks.process_action(k!(Slash), true, &mut host), ProcessResult::Stop);
    assert_eq!(host.taps()[0].keycode, HidKeyCode::Up);

    // Plain ctrl keys are tracked through resolved actions too
    assert_eq!(hooks.process_action(k!(LCtrl), false, &mut host), ProcessResult::Continue);
    assert!(!hooks.state().ctrl_held());
}
