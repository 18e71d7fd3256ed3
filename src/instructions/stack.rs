//! # Stack Operations
//!
//! PHA, PHP, PLA, PLP.
//!
//! The 6502 stack is located at memory addresses 0x0100-0x01FF and grows downward.
//! The stack pointer (SP) is an 8-bit register that serves as an offset into this
//! page. The full stack address is calculated as 0x0100 | SP.

use crate::flags::Flag;
use crate::{Cpu, MemoryBus};

pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut Cpu<M>) -> bool {
    cpu.push(cpu.a);
    false
}

/// PHP pushes status with B and the unused bit set.
pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut Cpu<M>) -> bool {
    let pushed = cpu.status.bits() | Flag::Break.mask() | Flag::Unused.mask();
    cpu.push(pushed);
    false
}

pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut Cpu<M>) -> bool {
    cpu.a = cpu.pop();
    cpu.status.set_zn(cpu.a);
    false
}

/// PLP ignores the pulled B bit and keeps the unused bit set.
pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut Cpu<M>) -> bool {
    cpu.status = cpu.pop().into();
    cpu.status.set(Flag::Break, false);
    cpu.status.set(Flag::Unused, true);
    false
}
