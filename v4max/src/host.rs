//! The boundary to the host keyboard firmware.

use rgb::RGB8;

use crate::keycode::HidKeyCode;
use crate::modifier::HidModifiers;

/// Services of the host firmware that the user hooks call back into.
///
/// The host owns matrix scanning, HID transport, tap-hold timing, the RGB driver and the layer
/// state. All calls happen on the host's callback thread.
pub trait Host {
    /// Write the color of one LED for the frame being rendered
    fn set_led_color(&mut self, index: u8, color: RGB8);

    /// Send a press and a release of `keycode` with the current modifiers.
    ///
    /// The injected key must not be routed back through the user hooks.
    fn tap_code(&mut self, keycode: HidKeyCode);

    /// Modifiers currently applied to reports, physical and injected
    fn modifiers(&self) -> HidModifiers;

    /// Replace the applied modifiers
    fn set_modifiers(&mut self, modifiers: HidModifiers);

    /// Remove the given modifiers from the applied modifiers
    fn del_modifiers(&mut self, modifiers: HidModifiers);

    /// Deactivate every layer except the default layer
    fn layer_clear(&mut self);

    /// Activate a layer
    fn layer_on(&mut self, layer: u8);

    /// Highest active layer, the default layer when none is active
    fn highest_layer(&self) -> u8;
}
