use std::path::Path;

use crate::constants::MAX_ROM_SIZE;
use crate::error::{Chip8Error, Result};

/// Holds the data from a chip8 file as a vec of bytes. A buffer only exists when its contents
/// fit in the program region of ram.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RomBuffer {
    buffer: Vec<u8>,
}

impl RomBuffer {
    /// Reads a raw image from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let buffer = std::fs::read(path).map_err(|source| Chip8Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(buffer)
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        if bytes.len() > MAX_ROM_SIZE {
            return Err(Chip8Error::RomTooLarge {
                size: bytes.len(),
                max_size: MAX_ROM_SIZE,
            });
        }
        Ok(RomBuffer { buffer: bytes })
    }

    pub fn contents(&self) -> &[u8] {
        &self.buffer
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl TryFrom<Vec<u8>> for RomBuffer {
    type Error = Chip8Error;

    fn try_from(value: Vec<u8>) -> Result<Self> {
        Self::from_bytes(value)
    }
}
