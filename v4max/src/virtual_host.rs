//! In-memory [`Host`], used to preview and test the keymap without a keyboard.

use heapless::Vec;
use rgb::RGB8;

use crate::host::Host;
use crate::keycode::HidKeyCode;
use crate::layer::LayerState;
use crate::layout::LED_COUNT;
use crate::light::BLACK;
use crate::modifier::HidModifiers;

/// Max number of taps kept in the tap log
pub const TAP_LOG_SIZE: usize = 32;

/// Max number of layers of the virtual host
pub const NUM_LAYER: usize = 4;

/// A key tapped by the keymap through [`Host::tap_code`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tap {
    pub keycode: HidKeyCode,
    /// Modifiers applied while the key was tapped
    pub modifiers: HidModifiers,
}

pub struct VirtualHost {
    leds: [RGB8; LED_COUNT],
    /// Number of writes of each LED since the last [`VirtualHost::start_frame`]
    writes: [u8; LED_COUNT],
    modifiers: HidModifiers,
    layers: LayerState<NUM_LAYER>,
    taps: Vec<Tap, TAP_LOG_SIZE>,
}

impl Default for VirtualHost {
    fn default() -> Self {
        Self::new()
    }
}

impl VirtualHost {
    pub fn new() -> Self {
        Self {
            leds: [BLACK; LED_COUNT],
            writes: [0; LED_COUNT],
            modifiers: HidModifiers::new(),
            layers: LayerState::new(),
            taps: Vec::new(),
        }
    }

    pub fn leds(&self) -> &[RGB8; LED_COUNT] {
        &self.leds
    }

    pub fn led(&self, index: u8) -> Option<RGB8> {
        self.leds.get(index as usize).copied()
    }

    pub fn write_count(&self, index: u8) -> u8 {
        self.writes.get(index as usize).copied().unwrap_or(0)
    }

    /// Reset the LED write counters before rendering a frame
    pub fn start_frame(&mut self) {
        self.writes = [0; LED_COUNT];
    }

    pub fn taps(&self) -> &[Tap] {
        &self.taps
    }

    pub fn clear_taps(&mut self) {
        self.taps.clear();
    }

    pub fn layer_state(&self) -> &LayerState<NUM_LAYER> {
        &self.layers
    }

    pub fn layer_state_mut(&mut self) -> &mut LayerState<NUM_LAYER> {
        &mut self.layers
    }

    /// Default processing of a key the keymap let through.
    ///
    /// Only modifier keys change the host state: they are added to or removed from the applied
    /// modifiers.
    pub fn process_key(&mut self, keycode: HidKeyCode, pressed: bool) {
        if !keycode.is_modifier() {
            return;
        }
        let bits = keycode.to_hid_modifiers();
        if pressed {
            self.modifiers |= bits;
        } else {
            self.modifiers &= !bits;
        }
    }
}

impl Host for VirtualHost {
    fn set_led_color(&mut self, index: u8, color: RGB8) {
        let i = index as usize;
        if i >= LED_COUNT {
            error!("LED index {} out of range", index);
            return;
        }
        self.leds[i] = color;
        self.writes[i] = self.writes[i].saturating_add(1);
    }

    fn tap_code(&mut self, keycode: HidKeyCode) {
        trace!("Tap {:?} with modifiers {:?}", keycode, self.modifiers);
        let tap = Tap {
            keycode,
            modifiers: self.modifiers,
        };
        if self.taps.push(tap).is_err() {
            warn!("Tap log is full, dropping tap {:?}", keycode);
        }
    }

    fn modifiers(&self) -> HidModifiers {
        self.modifiers
    }

    fn set_modifiers(&mut self, modifiers: HidModifiers) {
        self.modifiers = modifiers;
    }

    fn del_modifiers(&mut self, modifiers: HidModifiers) {
        self.modifiers &= !modifiers;
    }

    fn layer_clear(&mut self) {
        self.layers.clear();
    }

    fn layer_on(&mut self, layer: u8) {
        self.layers.activate(layer);
    }

    fn highest_layer(&self) -> u8 {
        self.layers.highest()
    }
}
