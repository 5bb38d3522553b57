//! The current profile: four layers, ctrl layer switching and per-layer lighting with a ctrl overlay.

use super::common::{BASE_LAYER, BASE_LIGHTING, NUMPAD_LAYER, VIM_LAYER, VIM_LIGHTING};
use super::Profile;
use crate::config::ProfileKind;
use crate::indicator::{Fill, IndicatorScheme, KeyColors, LayerLighting};
use crate::key_override::{Condition, OverrideAction, OverrideRule};
use crate::keycode::HidKeyCode;
use crate::keymap::{KeyMap, LayerMatrix};
use crate::layer::Layer;
use crate::layout::led;
use crate::light::{BLACK, CYAN, DARK_INDIGO, GREEN, PURPLE, RED};
use crate::{a, k, layout_ansi_61};

/// Plain layout for Bluetooth hosts, reached with Ctrl + `` ` ``.
#[rustfmt::skip]
const BLUETOOTH_LAYER: LayerMatrix = layout_ansi_61!(
    [k!(Escape), k!(Kc1), k!(Kc2), k!(Kc3), k!(Kc4), k!(Kc5), k!(Kc6), k!(Kc7), k!(Kc8), k!(Kc9), k!(Kc0), k!(Minus), k!(Equal), k!(Backspace)],
    [k!(Tab), k!(Q), k!(W), k!(E), k!(R), k!(T), k!(Y), k!(U), k!(I), k!(O), k!(P), k!(LeftBracket), k!(RightBracket), k!(Backslash)],
    [k!(CapsLock), k!(A), k!(S), k!(D), k!(F), k!(G), k!(H), k!(J), k!(K), k!(L), k!(Semicolon), k!(Quote), k!(Enter)],
    [k!(LShift), k!(Z), k!(X), k!(C), k!(V), k!(B), k!(N), k!(M), k!(Comma), k!(Dot), k!(Slash), k!(RShift)],
    [k!(LCtrl), k!(LAlt), k!(LGui), k!(Space), k!(RGui), a!(Transparent), a!(Transparent), k!(RCtrl)]
);

static LAYERS: [LayerMatrix; 4] = [BASE_LAYER, VIM_LAYER, NUMPAD_LAYER, BLUETOOTH_LAYER];

const NUMPAD: u8 = Layer::Numpad.id();

const CTRL_PRESS: Condition = Condition::All(&[Condition::Pressed, Condition::CtrlHeld]);

static OVERRIDES: [OverrideRule; 9] = [
    OverrideRule::new(
        HidKeyCode::Grave,
        CTRL_PRESS,
        OverrideAction::ActivateLayerExclusive(Layer::Bluetooth.id()),
    ),
    // Shift + `.` on the numpad sends an unshifted `/`
    OverrideRule::new(
        HidKeyCode::Dot,
        Condition::All(&[Condition::Pressed, Condition::Layer(NUMPAD), Condition::ShiftApplied]),
        OverrideAction::TapUnshifted(HidKeyCode::Slash),
    ),
    OverrideRule::new(HidKeyCode::Backslash, CTRL_PRESS, OverrideAction::ToggleBaseLighting),
    OverrideRule::new(
        HidKeyCode::Backslash,
        Condition::All(&[Condition::Pressed, Condition::Layer(NUMPAD)]),
        OverrideAction::Tap(HidKeyCode::Slash),
    ),
    OverrideRule::new(
        HidKeyCode::Slash,
        Condition::All(&[Condition::Pressed, Condition::CtrlHeld, Condition::Not(&Condition::Layer(NUMPAD))]),
        OverrideAction::Tap(HidKeyCode::Up),
    ),
    OverrideRule::new(HidKeyCode::Q, CTRL_PRESS, OverrideAction::ClearLayers),
    OverrideRule::new(HidKeyCode::W, CTRL_PRESS, OverrideAction::ClearLayers),
    OverrideRule::new(
        HidKeyCode::E,
        CTRL_PRESS,
        OverrideAction::ActivateLayerExclusive(Layer::Vim.id()),
    ),
    OverrideRule::new(
        HidKeyCode::R,
        CTRL_PRESS,
        OverrideAction::ActivateLayerExclusive(NUMPAD),
    ),
];

const NUMPAD_LIGHTING: LayerLighting = LayerLighting {
    fill: Fill::Solid(BLACK),
    keys: &[
        KeyColors::new(&[led::S, led::D], DARK_INDIGO),
        // Digits 1 to 9
        KeyColors::new(
            &[led::U, led::I, led::O, led::J, led::K, led::L, led::M, led::COMMA, led::DOT],
            PURPLE,
        ),
        // Digit 0
        KeyColors::new(&[led::N], GREEN),
        // Comma, dot and division
        KeyColors::new(&[led::SEMICOLON, led::SLASH, led::BACKSLASH], RED),
    ],
};

const BLUETOOTH_LIGHTING: LayerLighting = LayerLighting {
    fill: Fill::Solid(BLACK),
    // Fn1 + Q/W/E selects the paired device
    keys: &[KeyColors::new(&[led::Q, led::W, led::E, led::FN1], CYAN)],
};

pub static V4_MAX: Profile = Profile {
    kind: ProfileKind::V4Max,
    keymap: KeyMap::new(&LAYERS),
    overrides: &OVERRIDES,
    indicator: IndicatorScheme {
        layers: &[BASE_LIGHTING, VIM_LIGHTING, NUMPAD_LIGHTING, BLUETOOTH_LIGHTING],
        // Keys of the ctrl layer shortcuts
        ctrl_overlay: Some(KeyColors::new(&[led::ESC, led::Q, led::W, led::E, led::R], RED)),
    },
};
