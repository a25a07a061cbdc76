//! A chip8 interpreter core with no opinion on how its screen or keys are presented.
//!
//! Load a [`RomBuffer`], hand it to a [`Cpu`] and either step it yourself with a
//! [`Framebuffer`] and [`Keypad`], or wrap it in a [`Machine`] and let it drive a [`Shell`].

///This holds all of the constants (written in capital letters in the code)
pub mod constants;
///Handles the fetch, decode execute cycle
mod cpu;
///Everything that can stop the machine
mod error;
///The 64x32 pixel display
mod framebuffer;
///An overview of all instructions in the chip 8 instruction set architecture
mod instruction;
///The sixteen hexadecimal keys
mod keypad;
///The run loop and the seam to whatever presents the machine
mod machine;
///A data structure modeling ram
mod ram;
///The registers for the chip8 cpu
mod registers;
///Holds the data loaded from disk
mod rombuffer;
///The stack that is used in the cpu
mod stack;

// Re-export structs and modules that might be used by graphics libraries
pub use constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
pub use cpu::{Cpu, Cycle};
pub use error::{Chip8Error, Result};
pub use framebuffer::Framebuffer;
pub use instruction::Instruction;
pub use keypad::{KeyEvent, Keypad};
pub use machine::{Machine, Shell};
pub use rombuffer::RomBuffer;
