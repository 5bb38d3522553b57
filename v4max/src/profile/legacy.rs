//! The earlier profile: no Bluetooth layer, a single override and a solid green numpad.

use super::common::{BASE_LAYER, BASE_LIGHTING, NUMPAD_LAYER, VIM_LAYER, VIM_LIGHTING};
use super::Profile;
use crate::config::ProfileKind;
use crate::indicator::{IndicatorScheme, LayerLighting};
use crate::key_override::{Condition, OverrideAction, OverrideRule};
use crate::keycode::HidKeyCode;
use crate::keymap::{KeyMap, LayerMatrix};
use crate::light::GREEN;

static LAYERS: [LayerMatrix; 3] = [BASE_LAYER, VIM_LAYER, NUMPAD_LAYER];

static OVERRIDES: [OverrideRule; 1] = [OverrideRule::new(
    HidKeyCode::Slash,
    Condition::All(&[Condition::Pressed, Condition::RightCtrlHeld]),
    OverrideAction::Tap(HidKeyCode::Up),
)];

pub static LEGACY: Profile = Profile {
    kind: ProfileKind::Legacy,
    keymap: KeyMap::new(&LAYERS),
    overrides: &OVERRIDES,
    indicator: IndicatorScheme {
        layers: &[BASE_LIGHTING, VIM_LIGHTING, LayerLighting::solid(GREEN)],
        ctrl_overlay: None,
    },
};
