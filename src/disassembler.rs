//! 6502 Disassembler Module
//!
//! Converts machine code in a memory range into human-readable assembly.
//!
//! The disassembler only ever holds `&B` for a [`MemoryBus`] `B`, so every
//! byte is read through [`MemoryBus::peek`]: disassembly cannot write to
//! memory, trigger device side effects, or disturb a CPU.
//!
//! # Output format
//!
//! | Mode        | Text              |
//! |-------------|-------------------|
//! | Implied     | `NOP`, `ASL A`    |
//! | Immediate   | `LDA #$05`        |
//! | Zero page   | `LDA $80`, `LDA $80,X`, `LDX $80,Y` |
//! | Absolute    | `JMP $1234`, `LDA $1234,X`, `LDA $1234,Y` |
//! | Indirect    | `JMP ($1234)`, `LDA ($40,X)`, `LDA ($40),Y` |
//! | Relative    | `BNE $8010` (branch target, not the raw offset) |
//! | Illegal     | `.byte $FF`       |

pub mod decoder;
pub mod formatter;

use std::collections::BTreeMap;
use std::fmt;

use crate::addressing::AddressingMode;
use crate::opcodes::Operation;
use crate::MemoryBus;

pub use decoder::{decode_instruction, decode_range};
pub use formatter::{format_instruction, format_listing};

/// A single disassembled instruction with full metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// Memory address where this instruction starts
    pub address: u16,

    /// The opcode byte value (0x00-0xFF)
    pub opcode: u8,

    /// Instruction mnemonic (e.g., "LDA", "STA", "???")
    pub mnemonic: &'static str,

    /// Operation the opcode dispatches to
    pub operation: Operation,

    /// Addressing mode used by this instruction
    pub addressing_mode: AddressingMode,

    /// Operand bytes (0-2 bytes depending on addressing mode)
    pub operand_bytes: Vec<u8>,

    /// Base cycle cost (excluding page-crossing penalties)
    pub base_cycles: u8,
}

impl Instruction {
    /// Total size in bytes (1-3 bytes: opcode + operands)
    pub fn size_bytes(&self) -> u8 {
        1 + self.operand_bytes.len() as u8
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_instruction(self))
    }
}

/// Disassembles the instructions starting in `[start, stop]`.
///
/// Returns one entry per instruction keyed by its first address, in
/// ascending order. An instruction starting at or before `stop` is decoded
/// in full even if its operands lie beyond `stop`.
///
/// # Examples
///
/// ```
/// use r6502::{disassemble, FlatMemory};
///
/// let mut memory = FlatMemory::new();
/// memory.load(0x8000, &[0xA9, 0x05, 0xEA]).unwrap();
///
/// let listing = disassemble(&memory, 0x8000, 0x8002);
/// assert_eq!(listing[&0x8000], "LDA #$05");
/// assert_eq!(listing[&0x8002], "NOP");
/// assert_eq!(listing.len(), 2);
/// ```
pub fn disassemble<B: MemoryBus + ?Sized>(memory: &B, start: u16, stop: u16) -> BTreeMap<u16, String> {
    decode_range(memory, start, stop)
        .into_iter()
        .map(|instr| (instr.address, format_instruction(&instr)))
        .collect()
}
