use core::fmt;
use core::str::FromStr;

use embassy_time::Duration;

use crate::error::ParseError;
use crate::profile::{LEGACY, Profile, V4_MAX};

/// Build-time configuration handed to the host firmware.
///
/// The keymap itself doesn't act on these values, the host's tap-hold engine and RGB driver do.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeyboardConfig {
    pub tap_hold: TapHoldConfig,
    pub light: LightConfig,
    pub profile: ProfileKind,
}

/// Configurations for tap hold behavior
#[derive(Clone, Copy, Debug)]
pub struct TapHoldConfig {
    /// Time to decide between tap and hold
    pub tapping_term: Duration,
    /// Hold if another key is pressed and released while the tap-hold key is held
    pub permissive_hold: bool,
    /// Don't choose hold only because another key was pressed within the tapping term
    pub ignore_mod_tap_interrupt: bool,
    /// A tap followed by a hold holds the modifier instead of repeating the tap key
    pub tapping_force_hold: bool,
    /// Send the tap key when a held key is released without another key pressed
    pub retro_tapping: bool,
}

impl Default for TapHoldConfig {
    fn default() -> Self {
        Self {
            tapping_term: Duration::from_millis(200),
            permissive_hold: true,
            ignore_mod_tap_interrupt: true,
            tapping_force_hold: true,
            retro_tapping: true,
        }
    }
}

/// Startup effect of the RGB matrix
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LightMode {
    SolidColor,
}

/// Config for the RGB matrix driver
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LightConfig {
    pub startup_mode: LightMode,
    pub startup_hue: u8,
    pub startup_saturation: u8,
    pub startup_value: u8,
    /// Turn off the lights when the host sleeps
    pub sleep_when_host_sleeps: bool,
    /// Let the host render per-layer lighting
    pub lighting_layers: bool,
}

impl Default for LightConfig {
    fn default() -> Self {
        // Zero saturation at full brightness, solid white
        Self {
            startup_mode: LightMode::SolidColor,
            startup_hue: 0,
            startup_saturation: 0,
            startup_value: u8::MAX,
            sleep_when_host_sleeps: true,
            lighting_layers: true,
        }
    }
}

/// Selects the keymap profile at build or initialization time
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProfileKind {
    /// Bluetooth layer, ctrl layer switching and the numpad lighting scheme
    #[default]
    V4Max,
    /// Right ctrl + `/` only, solid green numpad
    Legacy,
}

impl ProfileKind {
    pub fn name(self) -> &'static str {
        match self {
            ProfileKind::V4Max => "v4-max",
            ProfileKind::Legacy => "legacy",
        }
    }

    pub fn profile(self) -> &'static Profile {
        match self {
            ProfileKind::V4Max => &V4_MAX,
            ProfileKind::Legacy => &LEGACY,
        }
    }
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProfileKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [ProfileKind::V4Max, ProfileKind::Legacy]
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or(ParseError::UnknownProfile)
    }
}
