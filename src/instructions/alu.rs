//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! ADC, SBC, AND, ORA, EOR, BIT and the compare family.
//!
//! Decimal mode is not implemented: ADC and SBC always do binary
//! arithmetic regardless of the D flag.

use crate::flags::Flag;
use crate::{Cpu, MemoryBus};

/// Adds `value` plus carry to A and sets C, Z, V, N.
fn add_with_carry<M: MemoryBus>(cpu: &mut Cpu<M>, value: u8) {
    let a = cpu.a;
    let carry_in = cpu.status.get(Flag::Carry) as u16;

    cpu.temp = a as u16 + value as u16 + carry_in;
    let result = cpu.temp as u8;

    cpu.status.set(Flag::Carry, cpu.temp > 0xFF);
    cpu.status.set_zn(result);

    // Operands share a sign and the result's sign differs
    let overflow = !(a ^ value) & (a ^ result) & 0x80 != 0;
    cpu.status.set(Flag::Overflow, overflow);

    cpu.a = result;
}

/// ADC: A = A + M + C
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut Cpu<M>) -> bool {
    let value = cpu.fetch();
    add_with_carry(cpu, value);
    true
}

/// SBC: A = A - M - (1 - C)
///
/// Implemented as ADC of the operand's one's complement, which yields the
/// 6502's borrow semantics for C (set = no borrow) and the same V rule.
pub(crate) fn execute_sbc<M: MemoryBus>(cpu: &mut Cpu<M>) -> bool {
    let value = cpu.fetch();
    add_with_carry(cpu, value ^ 0xFF);
    true
}

pub(crate) fn execute_and<M: MemoryBus>(cpu: &mut Cpu<M>) -> bool {
    let value = cpu.fetch();
    cpu.a &= value;
    cpu.status.set_zn(cpu.a);
    true
}

pub(crate) fn execute_ora<M: MemoryBus>(cpu: &mut Cpu<M>) -> bool {
    let value = cpu.fetch();
    cpu.a |= value;
    cpu.status.set_zn(cpu.a);
    true
}

pub(crate) fn execute_eor<M: MemoryBus>(cpu: &mut Cpu<M>) -> bool {
    let value = cpu.fetch();
    cpu.a ^= value;
    cpu.status.set_zn(cpu.a);
    true
}

/// BIT: Z from A & M, N and V copied from operand bits 7 and 6.
/// A is not modified.
pub(crate) fn execute_bit<M: MemoryBus>(cpu: &mut Cpu<M>) -> bool {
    let value = cpu.fetch();
    cpu.status.set(Flag::Zero, cpu.a & value == 0);
    cpu.status.set(Flag::Negative, value & 0x80 != 0);
    cpu.status.set(Flag::Overflow, value & 0x40 != 0);
    false
}

/// Subtracts without storing; sets C (register >= operand), Z, N.
fn compare<M: MemoryBus>(cpu: &mut Cpu<M>, register: u8) {
    let value = cpu.fetch();
    cpu.temp = (register as u16).wrapping_sub(value as u16);
    cpu.status.set(Flag::Carry, register >= value);
    cpu.status.set_zn(cpu.temp as u8);
}

pub(crate) fn execute_cmp<M: MemoryBus>(cpu: &mut Cpu<M>) -> bool {
    let register = cpu.a;
    compare(cpu, register);
    true
}

pub(crate) fn execute_cpx<M: MemoryBus>(cpu: &mut Cpu<M>) -> bool {
    let register = cpu.x;
    compare(cpu, register);
    false
}

pub(crate) fn execute_cpy<M: MemoryBus>(cpu: &mut Cpu<M>) -> bool {
    let register = cpu.y;
    compare(cpu, register);
    false
}
