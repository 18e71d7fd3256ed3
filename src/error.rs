//! Errors returned by host-facing helpers.
//!
//! The CPU core itself never fails: illegal opcodes execute as no-ops and
//! every 16-bit address is valid. Only loading a program into memory can
//! be rejected.

use thiserror::Error;

/// Errors that can occur while loading a program into memory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The program would extend past the end of the 64KB address space.
    #[error("program of {len} bytes at ${start:04X} runs past $FFFF")]
    OutOfRange {
        /// First address of the program
        start: u16,
        /// Program length in bytes
        len: usize,
    },

    /// A token in a hex program listing is not a valid byte.
    #[error("invalid hex byte {token:?} at token {index}")]
    InvalidHexByte {
        /// Zero-based token position
        index: usize,
        /// The offending token
        token: String,
    },
}
