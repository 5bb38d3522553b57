//! Keymap profiles.
//!
//! A profile bundles the layer tables, the key overrides and the lighting scheme. Profiles are
//! selected as a whole, they are never mixed.

mod common;
mod legacy;
mod v4_max;

pub use legacy::LEGACY;
pub use v4_max::V4_MAX;

use crate::config::ProfileKind;
use crate::indicator::IndicatorScheme;
use crate::key_override::OverrideRule;
use crate::keymap::KeyMap;

/// Layer tables, key overrides and lighting scheme selected together by a [`ProfileKind`]
pub struct Profile {
    pub kind: ProfileKind,
    pub keymap: KeyMap,
    /// Checked in order, the first matching rule is applied
    pub overrides: &'static [OverrideRule],
    pub indicator: IndicatorScheme,
}
