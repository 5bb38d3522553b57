use thiserror::Error;

/// Error of parsing a name given by the user, like a profile, layer or keycode name.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    #[error("unknown profile, expected `v4-max` or `legacy`")]
    UnknownProfile,
    #[error("unknown layer, expected `base`, `vim`, `numpad` or `bluetooth`")]
    UnknownLayer,
    #[error("unknown keycode")]
    UnknownKeycode,
    #[error("invalid key event, expected `<keycode>+` or `<keycode>-`")]
    InvalidEvent,
}
