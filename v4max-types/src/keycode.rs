//! HID keycodes used by the V4 Max keymap.
//!
//! The values follow the HID usage tables (keyboard/keypad page), except the
//! audio keys which use the QMK internal codes, as RMK does.

use serde::{Deserialize, Serialize};
use strum::{EnumString, FromRepr};

use crate::modifier::{HidModifiers, ModifierCombination};

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, PartialOrd, Ord, FromRepr, EnumString)]
#[strum(ascii_case_insensitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HidKeyCode {
    /// Reserved, no-key.
    No = 0x00,
    /// Keyboard roll over error, too many keys are pressed simultaneously, not a physical key.
    ErrorRollover = 0x01,
    /// Keyboard post fail error, not a physical key.
    PostFail = 0x02,
    /// An undefined error, not a physical key.
    ErrorUndefined = 0x03,
    A = 0x04,
    B = 0x05,
    C = 0x06,
    D = 0x07,
    E = 0x08,
    F = 0x09,
    G = 0x0A,
    H = 0x0B,
    I = 0x0C,
    J = 0x0D,
    K = 0x0E,
    L = 0x0F,
    M = 0x10,
    N = 0x11,
    O = 0x12,
    P = 0x13,
    Q = 0x14,
    R = 0x15,
    S = 0x16,
    T = 0x17,
    U = 0x18,
    V = 0x19,
    W = 0x1A,
    X = 0x1B,
    Y = 0x1C,
    Z = 0x1D,
    #[strum(serialize = "Kc1", serialize = "1")]
    Kc1 = 0x1E,
    #[strum(serialize = "Kc2", serialize = "2")]
    Kc2 = 0x1F,
    #[strum(serialize = "Kc3", serialize = "3")]
    Kc3 = 0x20,
    #[strum(serialize = "Kc4", serialize = "4")]
    Kc4 = 0x21,
    #[strum(serialize = "Kc5", serialize = "5")]
    Kc5 = 0x22,
    #[strum(serialize = "Kc6", serialize = "6")]
    Kc6 = 0x23,
    #[strum(serialize = "Kc7", serialize = "7")]
    Kc7 = 0x24,
    #[strum(serialize = "Kc8", serialize = "8")]
    Kc8 = 0x25,
    #[strum(serialize = "Kc9", serialize = "9")]
    Kc9 = 0x26,
    #[strum(serialize = "Kc0", serialize = "0")]
    Kc0 = 0x27,
    #[strum(serialize = "Enter", serialize = "ent")]
    Enter = 0x28,
    #[strum(serialize = "Escape", serialize = "esc")]
    Escape = 0x29,
    #[strum(serialize = "Backspace", serialize = "bspc")]
    Backspace = 0x2A,
    Tab = 0x2B,
    #[strum(serialize = "Space", serialize = "spc")]
    Space = 0x2C,
    #[strum(serialize = "Minus", serialize = "mins")]
    Minus = 0x2D,
    #[strum(serialize = "Equal", serialize = "eql")]
    Equal = 0x2E,
    #[strum(serialize = "LeftBracket", serialize = "lbrc")]
    LeftBracket = 0x2F,
    #[strum(serialize = "RightBracket", serialize = "rbrc")]
    RightBracket = 0x30,
    /// `\` and `|`
    #[strum(serialize = "Backslash", serialize = "bsls")]
    Backslash = 0x31,
    NonusHash = 0x32,
    #[strum(serialize = "Semicolon", serialize = "scln")]
    Semicolon = 0x33,
    #[strum(serialize = "Quote", serialize = "quot")]
    Quote = 0x34,
    /// `` ` `` and `~`
    #[strum(serialize = "Grave", serialize = "grv")]
    Grave = 0x35,
    #[strum(serialize = "Comma", serialize = "comm")]
    Comma = 0x36,
    Dot = 0x37,
    /// `/` and `?`
    #[strum(serialize = "Slash", serialize = "slsh")]
    Slash = 0x38,
    #[strum(serialize = "CapsLock", serialize = "caps")]
    CapsLock = 0x39,
    F1 = 0x3A,
    F2 = 0x3B,
    F3 = 0x3C,
    F4 = 0x3D,
    F5 = 0x3E,
    F6 = 0x3F,
    F7 = 0x40,
    F8 = 0x41,
    F9 = 0x42,
    F10 = 0x43,
    F11 = 0x44,
    F12 = 0x45,
    PrintScreen = 0x46,
    ScrollLock = 0x47,
    Pause = 0x48,
    Insert = 0x49,
    Home = 0x4A,
    #[strum(serialize = "PageUp", serialize = "pgup")]
    PageUp = 0x4B,
    #[strum(serialize = "Delete", serialize = "del")]
    Delete = 0x4C,
    End = 0x4D,
    #[strum(serialize = "PageDown", serialize = "pgdn")]
    PageDown = 0x4E,
    Right = 0x4F,
    Left = 0x50,
    Down = 0x51,
    Up = 0x52,
    NumLock = 0x53,
    KpSlash = 0x54,
    KpAsterisk = 0x55,
    KpMinus = 0x56,
    KpPlus = 0x57,
    KpEnter = 0x58,
    Kp1 = 0x59,
    Kp2 = 0x5A,
    Kp3 = 0x5B,
    Kp4 = 0x5C,
    Kp5 = 0x5D,
    Kp6 = 0x5E,
    Kp7 = 0x5F,
    Kp8 = 0x60,
    Kp9 = 0x61,
    Kp0 = 0x62,
    KpDot = 0x63,
    NonusBackslash = 0x64,
    Application = 0x65,
    #[strum(serialize = "AudioMute", serialize = "mute")]
    AudioMute = 0xA8,
    #[strum(serialize = "AudioVolUp", serialize = "volu")]
    AudioVolUp = 0xA9,
    #[strum(serialize = "AudioVolDown", serialize = "vold")]
    AudioVolDown = 0xAA,
    #[strum(serialize = "LCtrl", serialize = "lctl")]
    LCtrl = 0xE0,
    #[strum(serialize = "LShift", serialize = "lsft")]
    LShift = 0xE1,
    LAlt = 0xE2,
    LGui = 0xE3,
    #[strum(serialize = "RCtrl", serialize = "rctl")]
    RCtrl = 0xE4,
    #[strum(serialize = "RShift", serialize = "rsft")]
    RShift = 0xE5,
    RAlt = 0xE6,
    RGui = 0xE7,
}

impl HidKeyCode {
    pub fn is_modifier(self) -> bool {
        HidKeyCode::LCtrl <= self && self <= HidKeyCode::RGui
    }

    /// Modifier combination represented by a modifier keycode, empty for other keys.
    pub fn to_modifier_combination(self) -> ModifierCombination {
        match self {
            HidKeyCode::LCtrl => ModifierCombination::LCTRL,
            HidKeyCode::LShift => ModifierCombination::LSHIFT,
            HidKeyCode::LAlt => ModifierCombination::LALT,
            HidKeyCode::LGui => ModifierCombination::LGUI,
            HidKeyCode::RCtrl => ModifierCombination::RCTRL,
            HidKeyCode::RShift => ModifierCombination::RSHIFT,
            HidKeyCode::RAlt => ModifierCombination::RALT,
            HidKeyCode::RGui => ModifierCombination::RGUI,
            _ => ModifierCombination::new(),
        }
    }

    /// Report bits of a modifier keycode, empty for other keys.
    pub fn to_hid_modifiers(self) -> HidModifiers {
        self.to_modifier_combination().to_hid_modifiers()
    }
}

impl From<u8> for HidKeyCode {
    fn from(value: u8) -> Self {
        Self::from_repr(value).unwrap_or(Self::No)
    }
}
