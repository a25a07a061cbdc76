//! # c8vm-shell
//!
//! A macroquad window for the c8vm-core crate

pub mod constants;
/// Which keyboard keys stand for which keypad keys
pub mod keymap;
mod screen;

pub use screen::MacroquadShell;
