use std::path::PathBuf;

/// Everything that stops the interpreter. None of these are recoverable, the run loop hands them
/// straight up to the process boundary.
#[derive(Debug, thiserror::Error)]
pub enum Chip8Error {
    #[error("could not read rom {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("rom is too large ({size} bytes), max size is {max_size} bytes")]
    RomTooLarge { size: usize, max_size: usize },

    #[error("unknown opcode {opcode:#06X} at address {address:#05X}")]
    UnknownOpcode { opcode: u16, address: u16 },

    #[error("stack overflow: call at {address:#05X} exceeds 16 nested subroutines")]
    StackOverflow { address: u16 },

    #[error("stack underflow: return at {address:#05X} with an empty call stack")]
    StackUnderflow { address: u16 },

    #[error("memory access out of bounds at address {address:#06X}")]
    MemoryOutOfBounds { address: usize },

    #[error("write to the font region at address {address:#05X}")]
    FontOverwrite { address: u16 },
}

pub type Result<T> = std::result::Result<T, Chip8Error>;
