//! # Increment and Decrement Instructions
//!
//! INC/DEC read-modify-write memory; INX, INY, DEX, DEY work on the index
//! registers. All wrap at 8 bits and set Z and N.

use crate::{Cpu, MemoryBus};

pub(crate) fn execute_inc<M: MemoryBus>(cpu: &mut Cpu<M>) -> bool {
    let result = cpu.fetch().wrapping_add(1);
    cpu.memory.write(cpu.addr_abs, result);
    cpu.status.set_zn(result);
    false
}

pub(crate) fn execute_dec<M: MemoryBus>(cpu: &mut Cpu<M>) -> bool {
    let result = cpu.fetch().wrapping_sub(1);
    cpu.memory.write(cpu.addr_abs, result);
    cpu.status.set_zn(result);
    false
}

pub(crate) fn execute_inx<M: MemoryBus>(cpu: &mut Cpu<M>) -> bool {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.status.set_zn(cpu.x);
    false
}

pub(crate) fn execute_iny<M: MemoryBus>(cpu: &mut Cpu<M>) -> bool {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.status.set_zn(cpu.y);
    false
}

pub(crate) fn execute_dex<M: MemoryBus>(cpu: &mut Cpu<M>) -> bool {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.status.set_zn(cpu.x);
    false
}

pub(crate) fn execute_dey<M: MemoryBus>(cpu: &mut Cpu<M>) -> bool {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.status.set_zn(cpu.y);
    false
}
