//! # V4 Max Types
//!
//! Fundamental type definitions shared by the keymap core and the host tools.
//!
//! - [`action`] - Key actions stored in the layer tables
//! - [`keycode`] - HID keycodes
//! - [`modifier`] - Modifier report bits and modifier combinations

#![no_std]

pub mod action;
pub mod keycode;
pub mod modifier;
