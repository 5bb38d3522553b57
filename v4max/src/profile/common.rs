//! Layers and lighting shared by both profiles.

use crate::indicator::{Fill, KeyColors, LayerLighting};
use crate::keymap::LayerMatrix;
use crate::layer::Layer;
use crate::layout::led;
use crate::light::{BLACK, DARK_INDIGO, GREEN, ORANGE, PURPLE, RED, WHITE};
use crate::modifier::ModifierCombination;
use crate::{a, k, layout_ansi_61, mo, mt, to};

const BASE: u8 = Layer::Base.id();
const VIM: u8 = Layer::Vim.id();
const NUMPAD: u8 = Layer::Numpad.id();

/// `Esc` taps escape and holds left ctrl, `Enter` taps enter and holds right ctrl.
/// The bottom-left key holds the Vim layer.
#[rustfmt::skip]
pub(crate) const BASE_LAYER: LayerMatrix = layout_ansi_61!(
    [k!(Grave), k!(Kc1), k!(Kc2), k!(Kc3), k!(Kc4), k!(Kc5), k!(Kc6), k!(Kc7), k!(Kc8), k!(Kc9), k!(Kc0), k!(Minus), k!(Equal), k!(Backspace)],
    [k!(Tab), k!(Q), k!(W), k!(E), k!(R), k!(T), k!(Y), k!(U), k!(I), k!(O), k!(P), k!(LeftBracket), k!(RightBracket), k!(Backslash)],
    [mt!(Escape, ModifierCombination::LCTRL), k!(A), k!(S), k!(D), k!(F), k!(G), k!(H), k!(J), k!(K), k!(L), k!(Semicolon), k!(Quote), mt!(Enter, ModifierCombination::RCTRL)],
    [k!(LShift), k!(Z), k!(X), k!(C), k!(V), k!(B), k!(N), k!(M), k!(Comma), k!(Dot), k!(Slash), k!(RShift)],
    [mo!(VIM), k!(LAlt), k!(LGui), k!(Space), k!(Left), k!(Down), k!(Right), k!(RCtrl)]
);

/// Arrows on HJKL, page up/down on U/I, home/end on M/comma, volume on 8/9/0.
#[rustfmt::skip]
pub(crate) const VIM_LAYER: LayerMatrix = layout_ansi_61!(
    [a!(Transparent), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), k!(AudioMute), k!(AudioVolDown), k!(AudioVolUp), a!(Transparent), a!(Transparent), k!(Delete)],
    [a!(Transparent), to!(BASE), to!(BASE), a!(Transparent), to!(NUMPAD), a!(No), a!(No), k!(PageUp), k!(PageDown), a!(No), a!(No), a!(Transparent), a!(Transparent), a!(Transparent)],
    [a!(Transparent), a!(No), to!(NUMPAD), to!(BASE), a!(No), a!(No), k!(Left), k!(Down), k!(Up), k!(Right), a!(Transparent), a!(Transparent), a!(Transparent)],
    [k!(LShift), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), k!(Home), k!(End), a!(No), a!(No), a!(Transparent)],
    [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)]
);

/// Digits 7-8-9 / 4-5-6 / 1-2-3 on UIO / JKL / M,. with 0 on N.
#[rustfmt::skip]
pub(crate) const NUMPAD_LAYER: LayerMatrix = layout_ansi_61!(
    [a!(Transparent), k!(Kc1), k!(Kc2), k!(Kc3), k!(Kc4), k!(Kc5), k!(Kc6), k!(Kc7), k!(Kc8), k!(Kc9), k!(Kc0), a!(Transparent), a!(Transparent), a!(Transparent)],
    [a!(Transparent), to!(BASE), to!(BASE), to!(VIM), a!(Transparent), a!(No), a!(No), k!(Kc7), k!(Kc8), k!(Kc9), a!(No), a!(Transparent), a!(Transparent), a!(Transparent)],
    [a!(Transparent), a!(No), to!(VIM), to!(BASE), a!(No), a!(No), a!(No), k!(Kc4), k!(Kc5), k!(Kc6), k!(Comma), a!(Transparent), a!(Transparent)],
    [a!(Transparent), a!(No), a!(No), a!(No), a!(No), a!(No), k!(Kc0), k!(Kc1), k!(Kc2), k!(Kc3), k!(Dot), a!(Transparent)],
    [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)]
);

pub(crate) const BASE_LIGHTING: LayerLighting = LayerLighting {
    fill: Fill::BaseLighting(WHITE),
    keys: &[],
};

pub(crate) const VIM_LIGHTING: LayerLighting = LayerLighting {
    fill: Fill::Solid(BLACK),
    keys: &[
        // Layer switches
        KeyColors::new(&[led::S, led::D], DARK_INDIGO),
        // Volume
        KeyColors::new(&[led::KC_8, led::KC_9, led::KC_0], WHITE),
        // Page up / down
        KeyColors::new(&[led::U, led::I], ORANGE),
        // Home / end
        KeyColors::new(&[led::M, led::COMMA], GREEN),
        // Forward delete
        KeyColors::new(&[led::BACKSPACE], RED),
        // Arrows
        KeyColors::new(&[led::H, led::J, led::K, led::L], PURPLE),
    ],
};
