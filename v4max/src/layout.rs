//! Physical layout of the V4 Max ANSI board.
//!
//! The board has a 5x14 switch matrix carrying 61 keys and one RGB LED under each key. LEDs are
//! chained in reading order, so the LED index of a key is its position in [`PHYSICAL_KEYS`].

/// Number of rows of the switch matrix
pub const ROW: usize = 5;
/// Number of columns of the switch matrix
pub const COL: usize = 14;
/// Number of physical keys, which is also the number of RGB LEDs
pub const LED_COUNT: usize = 61;

/// Matrix position `(row, col)` of every physical key, in LED order.
#[rustfmt::skip]
pub const PHYSICAL_KEYS: [(u8, u8); LED_COUNT] = [
    // Row 0: ` 1 2 3 4 5 6 7 8 9 0 - = Backspace
    (0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6),
    (0, 7), (0, 8), (0, 9), (0, 10), (0, 11), (0, 12), (0, 13),
    // Row 1: Tab Q W E R T Y U I O P [ ] \
    (1, 0), (1, 1), (1, 2), (1, 3), (1, 4), (1, 5), (1, 6),
    (1, 7), (1, 8), (1, 9), (1, 10), (1, 11), (1, 12), (1, 13),
    // Row 2: Caps A S D F G H J K L ; ' Enter
    (2, 0), (2, 1), (2, 2), (2, 3), (2, 4), (2, 5), (2, 6),
    (2, 7), (2, 8), (2, 9), (2, 10), (2, 11), (2, 13),
    // Row 3: LShift Z X C V B N M , . / RShift
    (3, 0), (3, 2), (3, 3), (3, 4), (3, 5), (3, 6), (3, 7),
    (3, 8), (3, 9), (3, 10), (3, 11), (3, 13),
    // Row 4: LCtrl LGui LAlt Space RAlt Fn1 Fn2 RCtrl
    (4, 0), (4, 1), (4, 2), (4, 6), (4, 10), (4, 11), (4, 12), (4, 13),
];

/// LED index of the key at a matrix position, `None` for unused matrix cells.
pub const fn led_index(row: u8, col: u8) -> Option<u8> {
    let mut i = 0;
    while i < LED_COUNT {
        if PHYSICAL_KEYS[i].0 == row && PHYSICAL_KEYS[i].1 == col {
            return Some(i as u8);
        }
        i += 1;
    }
    None
}

/// LED index of the key at a matrix position.
///
/// Used to build the LED constants, so a position without a key fails at compile time.
pub const fn led_at(row: u8, col: u8) -> u8 {
    match led_index(row, col) {
        Some(i) => i,
        None => panic!("no key at this matrix position"),
    }
}

/// Matrix position of the key under an LED.
pub fn key_at(led: u8) -> Option<(u8, u8)> {
    PHYSICAL_KEYS.get(led as usize).copied()
}

/// LED indices of the keys used by the lighting schemes, named by their base layer legend.
pub mod led {
    use super::led_at;

    /// The top-left key, Escape on the keycap. Sends Grave on the base layer.
    pub const ESC: u8 = led_at(0, 0);
    pub const KC_8: u8 = led_at(0, 8);
    pub const KC_9: u8 = led_at(0, 9);
    pub const KC_0: u8 = led_at(0, 10);
    pub const BACKSPACE: u8 = led_at(0, 13);

    pub const Q: u8 = led_at(1, 1);
    pub const W: u8 = led_at(1, 2);
    pub const E: u8 = led_at(1, 3);
    pub const R: u8 = led_at(1, 4);
    pub const U: u8 = led_at(1, 7);
    pub const I: u8 = led_at(1, 8);
    pub const O: u8 = led_at(1, 9);
    pub const BACKSLASH: u8 = led_at(1, 13);

    pub const S: u8 = led_at(2, 2);
    pub const D: u8 = led_at(2, 3);
    pub const H: u8 = led_at(2, 6);
    pub const J: u8 = led_at(2, 7);
    pub const K: u8 = led_at(2, 8);
    pub const L: u8 = led_at(2, 9);
    pub const SEMICOLON: u8 = led_at(2, 10);

    pub const N: u8 = led_at(3, 7);
    pub const M: u8 = led_at(3, 8);
    pub const COMMA: u8 = led_at(3, 9);
    pub const DOT: u8 = led_at(3, 10);
    pub const SLASH: u8 = led_at(3, 11);

    /// The Bluetooth / media / RGB function key
    pub const FN1: u8 = led_at(4, 11);
}
