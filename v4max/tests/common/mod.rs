#![allow(dead_code)]

use v4max::RGB8;
use v4max::config::ProfileKind;
use v4max::hooks::{ProcessResult, UserHooks};
use v4max::host::Host;
use v4max::keycode::HidKeyCode;
use v4max::layout::LED_COUNT;
use v4max::virtual_host::VirtualHost;

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

pub fn setup(kind: ProfileKind) -> (UserHooks, VirtualHost) {
    (UserHooks::new(kind), VirtualHost::new())
}

/// Send a key transition to the hooks, then let the host process it if the hooks continue
pub fn key(hooks: &mut UserHooks, host: &mut VirtualHost, keycode: HidKeyCode, pressed: bool) -> ProcessResult {
    let result = hooks.process_record(keycode, pressed, host);
    if result == ProcessResult::Continue {
        host.process_key(keycode, pressed);
    }
    result
}

/// Press and release a key, returning the result of the press
pub fn tap(hooks: &mut UserHooks, host: &mut VirtualHost, keycode: HidKeyCode) -> ProcessResult {
    let result = key(hooks, host, keycode, true);
    key(hooks, host, keycode, false);
    result
}

/// Render a full frame and return the LED colors
pub fn render(hooks: &UserHooks, host: &mut VirtualHost) -> [RGB8; LED_COUNT] {
    host.start_frame();
    let result = hooks.render_indicators(host, 0, LED_COUNT as u8);
    assert_eq!(result, ProcessResult::Stop);
    *host.leds()
}

/// Indices of LEDs which are not black, with their colors
pub fn lit(leds: &[RGB8]) -> Vec<(u8, RGB8)> {
    leds.iter()
        .enumerate()
        .filter(|(_, c)| **c != RGB8::new(0, 0, 0))
        .map(|(i, c)| (i as u8, *c))
        .collect()
}

pub fn activate(host: &mut VirtualHost, layer: u8) {
    host.layer_clear();
    host.layer_on(layer);
}
