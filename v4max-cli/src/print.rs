use std::fmt::Write;

use v4max::RGB8;
use v4max::action::{Action, KeyAction};
use v4max::keycode::HidKeyCode;
use v4max::keymap::LayerMatrix;
use v4max::layout::{LED_COUNT, PHYSICAL_KEYS, ROW};
use v4max::light::color_name;
use v4max::modifier::ModifierCombination;

const CELL_WIDTH: usize = 7;

/// Short name of a keycode: `Kc1` is printed as `1`
pub fn key_name(keycode: HidKeyCode) -> String {
    let name = format!("{keycode:?}");
    match name.strip_prefix("Kc") {
        Some(digit) if digit.chars().all(|c| c.is_ascii_digit()) => digit.to_owned(),
        _ => name,
    }
}

fn modifier_name(m: ModifierCombination) -> String {
    let side = if m.right() { "R" } else { "L" };
    let mut name = String::new();
    for (on, label) in [(m.ctrl(), "Ctl"), (m.shift(), "Sft"), (m.alt(), "Alt"), (m.gui(), "Gui")] {
        if on {
            name.push_str(side);
            name.push_str(label);
        }
    }
    name
}

fn action_name(action: Action) -> String {
    match action {
        Action::Key(k) => key_name(k),
        Action::Modifier(m) => modifier_name(m),
        Action::LayerOn(l) => format!("MO({l})"),
        Action::LayerToggleOnly(l) => format!("TO({l})"),
    }
}

/// Legend of a keymap cell
pub fn legend(action: KeyAction) -> String {
    match action {
        KeyAction::No => "xxx".to_owned(),
        KeyAction::Transparent => "___".to_owned(),
        KeyAction::Single(a) => action_name(a),
        KeyAction::TapHold(tap, hold) => format!("{}/{}", action_name(tap), action_name(hold)),
    }
}

/// Print cells of the physical keys row by row, in keyboard shape
fn keyboard_rows(mut cell: impl FnMut(u8, u8) -> String) -> String {
    let mut out = String::new();
    for row in 0..ROW as u8 {
        let line = PHYSICAL_KEYS
            .iter()
            .filter(|(r, _)| *r == row)
            .map(|&(r, c)| format!("{:<width$}", cell(r, c), width = CELL_WIDTH))
            .collect::<Vec<_>>()
            .join(" ");
        // Writing to a String never fails
        let _ = writeln!(out, "{}", line.trim_end());
    }
    out
}

pub fn layer_table(layer: &LayerMatrix) -> String {
    keyboard_rows(|row, col| legend(layer[row as usize][col as usize]))
}

pub fn color_label(color: RGB8) -> String {
    match color_name(color) {
        Some(name) => name.to_owned(),
        None => format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b),
    }
}

pub fn light_table(leds: &[RGB8; LED_COUNT]) -> String {
    let mut index = 0;
    keyboard_rows(|_, _| {
        let label = color_label(leds[index]);
        index += 1;
        label
    })
}
