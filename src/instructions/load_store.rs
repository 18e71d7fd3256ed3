//! # Load and Store Instructions
//!
//! Loads set Z and N and pay the page-crossing cycle; stores never touch
//! flags and their table cycle counts already include the indexed penalty.

use crate::{Cpu, MemoryBus};

pub(crate) fn execute_lda<M: MemoryBus>(cpu: &mut Cpu<M>) -> bool {
    cpu.a = cpu.fetch();
    cpu.status.set_zn(cpu.a);
    true
}

pub(crate) fn execute_ldx<M: MemoryBus>(cpu: &mut Cpu<M>) -> bool {
    cpu.x = cpu.fetch();
    cpu.status.set_zn(cpu.x);
    true
}

pub(crate) fn execute_ldy<M: MemoryBus>(cpu: &mut Cpu<M>) -> bool {
    cpu.y = cpu.fetch();
    cpu.status.set_zn(cpu.y);
    true
}

pub(crate) fn execute_sta<M: MemoryBus>(cpu: &mut Cpu<M>) -> bool {
    cpu.memory.write(cpu.addr_abs, cpu.a);
    false
}

pub(crate) fn execute_stx<M: MemoryBus>(cpu: &mut Cpu<M>) -> bool {
    cpu.memory.write(cpu.addr_abs, cpu.x);
    false
}

pub(crate) fn execute_sty<M: MemoryBus>(cpu: &mut Cpu<M>) -> bool {
    cpu.memory.write(cpu.addr_abs, cpu.y);
    false
}
