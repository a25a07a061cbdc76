use crate::constants::{FONT_END_ADDRESS, FONT_START_ADDRESS, FONTSET, RAM_SIZE, ROM_START_ADDRESS};
use crate::error::{Chip8Error, Result};
use crate::rombuffer::RomBuffer;

///The ram of the chip8 cpu, uses big endian, and is laid out in the following way:
///0x000 start of chip-8 ram
///0x000 to 0x050 reserved for fontset
///0x200 start of chip-8 programs
///0xfff end of chip8 ram
///
///Every access is bounds checked, touching anything past 0xfff is an error instead of a panic.
#[derive(Debug, Clone)]
pub struct Ram {
    bytes: [u8; RAM_SIZE as usize],
}

impl Ram {
    /// Returns zeroed ram with the fontset already loaded
    pub fn with_fonts() -> Self {
        let mut ram = Self {
            bytes: [0; RAM_SIZE as usize],
        };
        // Each glyph is five rows of four pixels, written in the high nibble. 0xF0 0x90 0x90 0x90
        // 0xF0 written out in binary one below the other is a zero:
        //
        // 1111
        // 1  1
        // 1  1
        // 1  1
        // 1111
        let start = FONT_START_ADDRESS as usize;
        ram.bytes[start..start + FONTSET.len()].copy_from_slice(&FONTSET);
        ram
    }

    /// Copies the program image to the start of the program region
    pub fn load_rom(&mut self, rom: &RomBuffer) -> Result<()> {
        self.slice_mut(ROM_START_ADDRESS, rom.len())?
            .copy_from_slice(rom.contents());
        Ok(())
    }

    ///returns the big endian word at `address`
    pub fn get_opcode(&self, address: u16) -> Result<u16> {
        let word = self.slice(address, 2)?;
        Ok(u16::from_be_bytes([word[0], word[1]]))
    }

    pub fn get_byte(&self, address: u16) -> Result<u8> {
        self.bytes
            .get(address as usize)
            .copied()
            .ok_or(Chip8Error::MemoryOutOfBounds {
                address: address as usize,
            })
    }

    /// `len` bytes starting at `address`
    pub fn slice(&self, address: u16, len: usize) -> Result<&[u8]> {
        let start = address as usize;
        self.bytes
            .get(start..start + len)
            .ok_or_else(|| first_out_of_bounds(start))
    }

    /// Writable `len` bytes starting at `address`. The glyphs never change after loading, so a
    /// range touching them is refused as a whole.
    pub fn slice_mut(&mut self, address: u16, len: usize) -> Result<&mut [u8]> {
        let start = address as usize;
        let font = FONT_START_ADDRESS as usize..FONT_END_ADDRESS as usize;
        if len > 0 && start < font.end && start + len > font.start {
            return Err(Chip8Error::FontOverwrite {
                address: address.max(FONT_START_ADDRESS),
            });
        }
        self.bytes
            .get_mut(start..start + len)
            .ok_or_else(|| first_out_of_bounds(start))
    }
}

/// The first address of a failed range access that lies outside of ram
fn first_out_of_bounds(start: usize) -> Chip8Error {
    Chip8Error::MemoryOutOfBounds {
        address: start.max(RAM_SIZE as usize),
    }
}
