//! # 6502 CPU Emulator Core
//!
//! A clock-driven NMOS 6502 CPU core with a read-only disassembler.
//!
//! The host owns the timebase: it calls [`Cpu::clock`] once per tick and
//! [`Cpu::complete`] tells it when an instruction boundary is reached. All
//! memory traffic goes through the [`MemoryBus`] trait, so the core can sit
//! on flat RAM, a mapped system bus, or anything in between.
//!
//! ## Quick Start
//!
//! ```rust
//! use r6502::{Cpu, FlatMemory, Vector};
//!
//! let mut memory = FlatMemory::new();
//! memory.set_vector(Vector::Reset, 0x8000);
//! memory.load_hex(0x8000, "A9 05 69 03 EA").unwrap(); // LDA #5; ADC #3; NOP
//!
//! let mut cpu = Cpu::new(memory);
//! cpu.reset();
//!
//! // Reset takes 8 cycles, LDA 2, ADC 2
//! for _ in 0..12 {
//!     cpu.clock();
//! }
//! assert!(cpu.complete());
//! assert_eq!(cpu.a(), 0x08);
//!
//! let listing = cpu.disassemble(0x8000, 0x8004);
//! assert_eq!(listing[&0x8002], "ADC #$03");
//! ```
//!
//! ## Architecture
//!
//! - **Table-Driven Design**: every opcode's mnemonic, operation, addressing
//!   mode and base cycle count live in [`OPCODE_TABLE`]
//! - **Atomic execution**: an instruction does all of its work on the tick
//!   that fetches it, then the remaining ticks only count cycles down
//! - **Side-effect-free inspection**: the disassembler reads through
//!   [`MemoryBus::peek`] and never holds the bus mutably
//!
//! ## Modules
//!
//! - `cpu` - CPU state and the clock engine
//! - `flags` - Status register
//! - `addressing` - Addressing modes and their resolvers
//! - `opcodes` - Opcode metadata table
//! - `memory` - MemoryBus trait and `FlatMemory`
//! - `disassembler` - Range disassembly
//! - `trace` - Optional per-instruction trace hook
//! - `config` - Variant switches
//! - `error` - Program loading errors

pub mod addressing;
pub mod config;
pub mod cpu;
pub mod disassembler;
pub mod error;
pub mod flags;
pub mod memory;
pub mod opcodes;
pub mod trace;

// Internal instruction implementations (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::AddressingMode;
pub use config::CpuConfig;
pub use cpu::{
    Cpu, IRQ_CYCLES, IRQ_VECTOR, NMI_CYCLES, NMI_VECTOR, RESET_CYCLES, RESET_SP, RESET_VECTOR,
    STACK_BASE,
};
pub use disassembler::{decode_instruction, decode_range, disassemble, Instruction};
pub use error::LoadError;
pub use flags::{Flag, StatusFlags};
pub use memory::{parse_hex, FlatMemory, MemoryBus, Vector};
pub use opcodes::{OpcodeMetadata, Operation, OPCODE_TABLE};
pub use trace::{LogTracer, TraceEvent, Tracer};
