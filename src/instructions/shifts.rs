//! # Shift and Rotate Instructions
//!
//! ASL, LSR, ROL, ROR. In implied mode they act on the accumulator,
//! otherwise they read, modify and write back the memory operand. The bit
//! shifted out becomes the new carry.

use crate::flags::Flag;
use crate::{Cpu, MemoryBus};

fn finish<M: MemoryBus>(cpu: &mut Cpu<M>, result: u8, carry: bool) -> bool {
    cpu.status.set(Flag::Carry, carry);
    cpu.status.set_zn(result);
    cpu.write_back(result);
    false
}

pub(crate) fn execute_asl<M: MemoryBus>(cpu: &mut Cpu<M>) -> bool {
    let value = cpu.fetch();
    cpu.temp = (value as u16) << 1;
    let result = cpu.temp as u8;
    finish(cpu, result, value & 0x80 != 0)
}

pub(crate) fn execute_lsr<M: MemoryBus>(cpu: &mut Cpu<M>) -> bool {
    let value = cpu.fetch();
    cpu.temp = (value >> 1) as u16;
    let result = cpu.temp as u8;
    finish(cpu, result, value & 0x01 != 0)
}

pub(crate) fn execute_rol<M: MemoryBus>(cpu: &mut Cpu<M>) -> bool {
    let value = cpu.fetch();
    let carry_in = cpu.status.get(Flag::Carry) as u16;
    cpu.temp = ((value as u16) << 1) | carry_in;
    let result = cpu.temp as u8;
    finish(cpu, result, value & 0x80 != 0)
}

pub(crate) fn execute_ror<M: MemoryBus>(cpu: &mut Cpu<M>) -> bool {
    let value = cpu.fetch();
    let carry_in = (cpu.status.get(Flag::Carry) as u16) << 7;
    cpu.temp = carry_in | (value >> 1) as u16;
    let result = cpu.temp as u8;
    finish(cpu, result, value & 0x01 != 0)
}
