//! Colors of the lighting schemes.

use rgb::RGB8;

const fn rgb(r: u8, g: u8, b: u8) -> RGB8 {
    RGB8 { r, g, b }
}

pub const BLACK: RGB8 = rgb(0, 0, 0);
pub const WHITE: RGB8 = rgb(255, 255, 255);
pub const RED: RGB8 = rgb(255, 0, 0);
pub const GREEN: RGB8 = rgb(0, 255, 0);
pub const ORANGE: RGB8 = rgb(255, 165, 0);
pub const PURPLE: RGB8 = rgb(128, 0, 128);
pub const CYAN: RGB8 = rgb(0, 255, 255);
/// Dimmed blue of the layer switch keys
pub const DARK_INDIGO: RGB8 = rgb(2, 0, 32);

/// Lowercase name of a scheme color, or `None` for other colors
pub fn color_name(color: RGB8) -> Option<&'static str> {
    const NAMES: [(RGB8, &str); 8] = [
        (BLACK, "black"),
        (WHITE, "white"),
        (RED, "red"),
        (GREEN, "green"),
        (ORANGE, "orange"),
        (PURPLE, "purple"),
        (CYAN, "cyan"),
        (DARK_INDIGO, "indigo"),
    ];
    NAMES.iter().find(|(c, _)| *c == color).map(|(_, name)| *name)
}
