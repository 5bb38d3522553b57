use core::str::FromStr;

use crate::error::ParseError;
use crate::keycode::HidKeyCode;

/// A key transition, as written in replay scripts: `<keycode>+` for a press, `<keycode>-` for a
/// release. Keycode names are case-insensitive, e.g. `lctrl+`, `Grave-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyEvent {
    pub keycode: HidKeyCode,
    pub pressed: bool,
}

impl FromStr for KeyEvent {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, pressed) = if let Some(name) = s.strip_suffix('+') {
            (name, true)
        } else if let Some(name) = s.strip_suffix('-') {
            (name, false)
        } else {
            return Err(ParseError::InvalidEvent);
        };
        let keycode = HidKeyCode::from_str(name).map_err(|_| ParseError::UnknownKeycode)?;
        Ok(KeyEvent { keycode, pressed })
    }
}
