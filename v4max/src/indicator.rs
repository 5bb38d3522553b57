//! Per-layer RGB indication.
//!
//! Every frame, the host asks for the colors of a range of LEDs. The color of each LED is decided
//! by the lighting of the highest active layer, then by the ctrl overlay, and written once.

use rgb::RGB8;

use crate::host::Host;
use crate::layout::LED_COUNT;
use crate::light::BLACK;
use crate::state::KeyboardState;

/// Same color for a set of LEDs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyColors {
    pub leds: &'static [u8],
    pub color: RGB8,
}

impl KeyColors {
    pub const fn new(leds: &'static [u8], color: RGB8) -> Self {
        Self { leds, color }
    }

    fn contains(&self, index: u8) -> bool {
        self.leds.contains(&index)
    }
}

/// Color of the LEDs not listed by a layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    Solid(RGB8),
    /// The color while base layer lighting is on, black otherwise
    BaseLighting(RGB8),
}

/// Lighting of one layer: a fill color and per-key colors over it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerLighting {
    pub fill: Fill,
    /// Checked in order, the first set containing a LED wins
    pub keys: &'static [KeyColors],
}

impl LayerLighting {
    pub const fn solid(color: RGB8) -> Self {
        Self {
            fill: Fill::Solid(color),
            keys: &[],
        }
    }

    fn color_of(&self, index: u8, state: &KeyboardState) -> RGB8 {
        if let Some(keys) = self.keys.iter().find(|keys| keys.contains(index)) {
            return keys.color;
        }
        match self.fill {
            Fill::Solid(color) => color,
            Fill::BaseLighting(color) if state.base_lighting => color,
            Fill::BaseLighting(_) => BLACK,
        }
    }
}

/// Lighting scheme of a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorScheme {
    /// Lighting of each layer, indexed by layer number. The first entry is used for unknown layers.
    pub layers: &'static [LayerLighting],
    /// Colors drawn over the layer lighting while a ctrl key is held
    pub ctrl_overlay: Option<KeyColors>,
}

impl IndicatorScheme {
    /// Lighting of a layer, the default layer's lighting if the layer has none
    pub fn layer_lighting(&self, layer: u8) -> Option<&LayerLighting> {
        match self.layers.get(layer as usize) {
            Some(lighting) => Some(lighting),
            None => {
                warn!("No lighting for layer {}, using the default layer", layer);
                self.layers.first()
            }
        }
    }

    /// Color of a LED with the given layer lighting and keyboard state
    pub fn color_of(&self, lighting: &LayerLighting, index: u8, state: &KeyboardState) -> RGB8 {
        match self.ctrl_overlay {
            Some(overlay) if state.ctrl_held() && overlay.contains(index) => overlay.color,
            _ => lighting.color_of(index, state),
        }
    }

    /// Write the color of every LED in `led_min..led_max`.
    ///
    /// # Panics
    ///
    /// Panics if `led_max` is past the last LED.
    pub fn render<H: Host>(&self, state: &KeyboardState, host: &mut H, led_min: u8, led_max: u8) {
        assert!(
            led_max as usize <= LED_COUNT,
            "LED range ends past the last LED"
        );

        let layer = host.highest_layer();
        let Some(lighting) = self.layer_lighting(layer) else {
            return;
        };
        for index in led_min..led_max {
            let color = self.color_of(lighting, index, state);
            host.set_led_color(index, color);
        }
    }
}
