//! Keyboard actions.
//!
//! [`KeyAction`] is what a keymap cell holds, [`Action`] is the single
//! operation that a key action triggers.

use serde::{Deserialize, Serialize};

use crate::keycode::HidKeyCode;
use crate::modifier::ModifierCombination;

/// A KeyAction is the action at a keyboard position, stored in keymap.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// No action. Serialized as 0x0000.
    No,
    /// Transparent action, next layer will be checked. Serialized as 0x0001.
    Transparent,
    /// A single action, such as triggering a key, or activating a layer.
    Single(Action),
    /// Tap-hold action: the first action is sent on tap, the second while held.
    /// Timing is resolved by the host's tap-hold engine.
    TapHold(Action, Action),
}

impl KeyAction {
    pub fn is_transparent(&self) -> bool {
        matches!(self, KeyAction::Transparent)
    }

    /// The keycode of a plain key action, if it is one.
    pub fn keycode(&self) -> Option<HidKeyCode> {
        match self {
            KeyAction::Single(Action::Key(k)) => Some(*k),
            _ => None,
        }
    }
}

/// A single basic action that a keyboard can execute.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// A normal key stroke.
    Key(HidKeyCode),
    /// Modifier combination, used as the hold half of a mod-tap.
    Modifier(ModifierCombination),
    /// Activate a layer while the key is held.
    LayerOn(u8),
    /// Activate a layer and deactivate all other layers (except the default layer).
    LayerToggleOnly(u8),
}
