use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Layers of the V4 Max keymap. The legacy profile has no Bluetooth layer.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Layer {
    Base = 0,
    Vim = 1,
    Numpad = 2,
    Bluetooth = 3,
}

impl Layer {
    pub const ALL: [Layer; 4] = [Layer::Base, Layer::Vim, Layer::Numpad, Layer::Bluetooth];

    pub const fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: u8) -> Option<Layer> {
        Self::ALL.get(id as usize).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Layer::Base => "base",
            Layer::Vim => "vim",
            Layer::Numpad => "numpad",
            Layer::Bluetooth => "bluetooth",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Layer {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|l| l.name().eq_ignore_ascii_case(s))
            .ok_or(ParseError::UnknownLayer)
    }
}

/// Layer activation state, as kept by the host firmware.
///
/// Layer 0 is the default layer: it is never stored as active, but it is always the fallback of
/// [`LayerState::highest`] and of the keymap lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerState<const NUM_LAYER: usize> {
    active: [bool; NUM_LAYER],
}

impl<const NUM_LAYER: usize> Default for LayerState<NUM_LAYER> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const NUM_LAYER: usize> LayerState<NUM_LAYER> {
    pub const fn new() -> Self {
        Self {
            active: [false; NUM_LAYER],
        }
    }

    /// Activate given layer
    pub fn activate(&mut self, layer_num: u8) {
        if layer_num as usize >= NUM_LAYER {
            warn!(
                "Not a valid layer {}, keyboard supports only {} layers",
                layer_num, NUM_LAYER
            );
            return;
        }
        if layer_num != 0 {
            self.active[layer_num as usize] = true;
        }
    }

    /// Deactivate given layer
    pub fn deactivate(&mut self, layer_num: u8) {
        if layer_num as usize >= NUM_LAYER {
            warn!(
                "Not a valid layer {}, keyboard supports only {} layers",
                layer_num, NUM_LAYER
            );
            return;
        }
        self.active[layer_num as usize] = false;
    }

    /// Deactivate all layers, leaving the default layer
    pub fn clear(&mut self) {
        self.active = [false; NUM_LAYER];
    }

    /// Deactivate all layers, then activate given layer
    pub fn activate_exclusive(&mut self, layer_num: u8) {
        self.clear();
        self.activate(layer_num);
    }

    pub fn is_active(&self, layer_num: u8) -> bool {
        layer_num == 0 || self.active.get(layer_num as usize).copied().unwrap_or(false)
    }

    /// Highest active layer, or the default layer if no layer is active
    pub fn highest(&self) -> u8 {
        self.active.iter().rposition(|&on| on).unwrap_or(0) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_names() {
        assert_eq!("NumPad".parse::<Layer>(), Ok(Layer::Numpad));
        assert_eq!("bluetooth".parse::<Layer>(), Ok(Layer::Bluetooth));
        assert_eq!("fn".parse::<Layer>(), Err(ParseError::UnknownLayer));
        assert_eq!(Layer::from_id(1), Some(Layer::Vim));
        assert_eq!(Layer::from_id(4), None);
    }

    #[test]
    fn test_highest_layer() {
        let mut state = LayerState::<4>::new();
        assert_eq!(state.highest(), 0);

        state.activate(1);
        state.activate(2);
        assert_eq!(state.highest(), 2);

        state.deactivate(2);
        assert_eq!(state.highest(), 1);

        state.activate_exclusive(3);
        assert_eq!(state.highest(), 3);
        assert!(!state.is_active(1));
        assert!(state.is_active(0));

        state.clear();
        assert_eq!(state.highest(), 0);
    }

    #[test]
    fn test_invalid_layer_is_ignored() {
        let mut state = LayerState::<3>::new();
        state.activate(3);
        assert_eq!(state.highest(), 0);
        assert!(!state.is_active(3));
    }
}
