//! # Instruction Tracing
//!
//! An optional hook the CPU calls once per fetched instruction. No tracer is
//! installed by default and execution never depends on one.
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use r6502::{Cpu, FlatMemory, TraceEvent};
//!
//! let mut memory = FlatMemory::new();
//! memory.load(0x8000, &[0xEA]).unwrap();
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&seen);
//!
//! let mut cpu = Cpu::new(memory);
//! cpu.set_pc(0x8000);
//! cpu.set_tracer(Box::new(move |e: &TraceEvent| sink.borrow_mut().push(e.pc)));
//! cpu.step();
//!
//! assert_eq!(*seen.borrow(), vec![0x8000]);
//! ```

use std::fmt;

use crate::{AddressingMode, StatusFlags};

/// CPU state captured when an instruction is fetched, before it executes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceEvent {
    /// Total clock ticks before this instruction
    pub clock_count: u64,
    /// Address of the opcode byte
    pub pc: u16,
    pub opcode: u8,
    pub mnemonic: &'static str,
    pub addressing_mode: AddressingMode,
    /// Base cycle cost of the instruction
    pub cycles: u8,
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub status: StatusFlags,
}

/// One line per instruction:
/// `        12:02 PC:8000 LDA A:00 X:00 Y:00 ..U..... STKP:FD`
impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>10}:{:02} PC:{:04X} {} A:{:02X} X:{:02X} Y:{:02X} {} STKP:{:02X}",
            self.clock_count,
            self.cycles,
            self.pc,
            self.mnemonic,
            self.a,
            self.x,
            self.y,
            self.status,
            self.sp
        )
    }
}

/// Receives one [`TraceEvent`] per executed instruction.
pub trait Tracer {
    fn trace(&mut self, event: &TraceEvent);
}

impl<F: FnMut(&TraceEvent)> Tracer for F {
    fn trace(&mut self, event: &TraceEvent) {
        self(event)
    }
}

/// Forwards every event to the `log` facade at trace level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTracer;

impl Tracer for LogTracer {
    fn trace(&mut self, event: &TraceEvent) {
        log::trace!(target: "r6502::trace", "{}", event);
    }
}
