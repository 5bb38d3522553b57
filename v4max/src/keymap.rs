use crate::action::KeyAction;
use crate::layer::LayerState;
use crate::layout::{COL, PHYSICAL_KEYS, ROW};

/// One layer of the keymap, indexed by `[row][col]`
pub type LayerMatrix = [[KeyAction; COL]; ROW];

/// KeyMap represents the stack of layers.
///
/// The conception of KeyMap is borrowed from qmk: <https://docs.qmk.fm/#/keymap>.
/// Layers are built at compile time and never change.
#[derive(Clone, Copy)]
pub struct KeyMap {
    layers: &'static [LayerMatrix],
}

impl KeyMap {
    pub const fn new(layers: &'static [LayerMatrix]) -> Self {
        Self { layers }
    }

    pub const fn num_layers(&self) -> usize {
        self.layers.len()
    }

    pub fn layer(&self, layer_num: u8) -> Option<&'static LayerMatrix> {
        self.layers.get(layer_num as usize)
    }

    /// Action stored at a position of a single layer, `KeyAction::No` outside the keymap.
    pub fn get_action(&self, layer_num: u8, row: usize, col: usize) -> KeyAction {
        self.layer(layer_num)
            .and_then(|layer| layer.get(row))
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(KeyAction::No)
    }

    /// Resolve the action of a position with the given layer state.
    ///
    /// Active layers are checked from the highest one down to the default layer, transparent
    /// actions fall through to the next active layer.
    pub fn action_at<const NUM_LAYER: usize>(&self, state: &LayerState<NUM_LAYER>, row: usize, col: usize) -> KeyAction {
        for layer_num in (0..self.layers.len()).rev() {
            if !state.is_active(layer_num as u8) {
                continue;
            }
            let action = self.get_action(layer_num as u8, row, col);
            if !action.is_transparent() {
                return action;
            }
        }

        KeyAction::No
    }

    /// Returns true if every physical key has an action on every layer and every unused matrix
    /// cell is empty.
    ///
    /// Transparent is an action here, `KeyAction::No` on a physical key of the default layer is not.
    pub fn covers_layout(&self) -> bool {
        self.layers.iter().enumerate().all(|(layer_num, layer)| {
            layer.iter().enumerate().all(|(row, keys)| {
                keys.iter().enumerate().all(|(col, action)| {
                    let physical = PHYSICAL_KEYS.contains(&(row as u8, col as u8));
                    match action {
                        KeyAction::No => !physical || layer_num != 0,
                        _ => physical,
                    }
                })
            })
        })
    }
}
