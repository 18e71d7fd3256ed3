//! # Register Transfer Instructions
//!
//! TAX, TAY, TXA, TYA and TSX set Z and N from the copied value; TXS does
//! not touch flags.

use crate::{Cpu, MemoryBus};

pub(crate) fn execute_tax<M: MemoryBus>(cpu: &mut Cpu<M>) -> bool {
    cpu.x = cpu.a;
    cpu.status.set_zn(cpu.x);
    false
}

pub(crate) fn execute_tay<M: MemoryBus>(cpu: &mut Cpu<M>) -> bool {
    cpu.y = cpu.a;
    cpu.status.set_zn(cpu.y);
    false
}

pub(crate) fn execute_txa<M: MemoryBus>(cpu: &mut Cpu<M>) -> bool {
    cpu.a = cpu.x;
    cpu.status.set_zn(cpu.a);
    false
}

pub(crate) fn execute_tya<M: MemoryBus>(cpu: &mut Cpu<M>) -> bool {
    cpu.a = cpu.y;
    cpu.status.set_zn(cpu.a);
    false
}

pub(crate) fn execute_tsx<M: MemoryBus>(cpu: &mut Cpu<M>) -> bool {
    cpu.x = cpu.sp;
    cpu.status.set_zn(cpu.x);
    false
}

pub(crate) fn execute_txs<M: MemoryBus>(cpu: &mut Cpu<M>) -> bool {
    cpu.sp = cpu.x;
    false
}
