//! User keymap of the Keychron V4 Max (ANSI, 61 keys).
//!
//! The crate provides what a keymap adds on top of the keyboard firmware:
//!
//! - [`profile`] - layer tables, key overrides and lighting schemes, selected by [`config::ProfileKind`]
//! - [`hooks::UserHooks`] - the callbacks the firmware calls on key transitions and lighting frames
//! - [`host::Host`] - the firmware services used by the callbacks
//! - [`virtual_host::VirtualHost`] - an in-memory host for previews and tests

#![no_std]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod config;
pub mod error;
pub mod event;
pub mod hooks;
pub mod host;
pub mod indicator;
pub mod key_override;
pub mod keymap;
pub mod layer;
pub mod layout;
pub mod layout_macro;
pub mod light;
pub mod profile;
pub mod state;
pub mod virtual_host;

pub use v4max_types::{action, keycode, modifier};
pub use rgb::RGB8;
