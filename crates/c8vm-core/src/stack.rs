use crate::constants::STACK_SIZE;
use crate::error::{Chip8Error, Result};

/// 16 16-bit addresses, used to call subroutines or functions and return from them.
/// Can go into 16 nested subroutines before the stack overflows, which is an error rather than
/// a write past the end.
#[derive(Clone, Copy, Debug, Default)]
pub struct Stack {
    values: [u16; STACK_SIZE],
    /// Only contains indexes to locations in the stack, so 0 through 16
    pointer: u8,
}

impl Stack {
    /// Stores `address` then moves the pointer up
    pub fn push(&mut self, address: u16) -> Result<()> {
        let slot = self
            .values
            .get_mut(self.pointer as usize)
            .ok_or(Chip8Error::StackOverflow { address })?;
        *slot = address;
        self.pointer += 1;
        Ok(())
    }

    /// Moves the pointer down then reads, `None` when there is nothing to return to
    pub fn pop(&mut self) -> Option<u16> {
        self.pointer = self.pointer.checked_sub(1)?;
        Some(self.values[self.pointer as usize])
    }

    pub fn len(&self) -> usize {
        self.pointer as usize
    }
}
