//! Tests for the arithmetic and logic instructions.
//!
//! Tests cover:
//! - ADC/SBC carry, overflow and binary-only arithmetic
//! - AND, ORA, EOR, BIT flag effects
//! - CMP, CPX, CPY carry semantics
//! - Page-crossing penalties on read instructions

use r6502::{Cpu, Flag, FlatMemory, MemoryBus};

/// Helper: CPU with `program` at 0x8000 and PC pointing at it
fn setup_cpu(program: &[u8]) -> Cpu<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.load(0x8000, program).unwrap();
    let mut cpu = Cpu::new(memory);
    cpu.set_pc(0x8000);
    cpu
}

// ========== ADC ==========

#[test]
fn test_adc_immediate_basic() {
    // ADC #$05
    let mut cpu = setup_cpu(&[0x69, 0x05]);
    cpu.set_a(0x10);

    assert_eq!(cpu.step(), 2);

    assert_eq!(cpu.a(), 0x15);
    assert!(!cpu.flag(Flag::Carry));
    assert!(!cpu.flag(Flag::Zero));
    assert!(!cpu.flag(Flag::Overflow));
    assert!(!cpu.flag(Flag::Negative));
}

#[test]
fn test_adc_carry_in_and_out() {
    // ADC #$FF with carry set: 0x01 + 0xFF + 1 = 0x101
    let mut cpu = setup_cpu(&[0x69, 0xFF]);
    cpu.set_a(0x01);
    cpu.set_flag(Flag::Carry, true);

    cpu.step();

    assert_eq!(cpu.a(), 0x01);
    assert!(cpu.flag(Flag::Carry));
    assert!(!cpu.flag(Flag::Zero));
}

#[test]
fn test_adc_signed_overflow() {
    // 0x50 + 0x50 = 0xA0: positive + positive = negative
    let mut cpu = setup_cpu(&[0x69, 0x50]);
    cpu.set_a(0x50);

    cpu.step();

    assert_eq!(cpu.a(), 0xA0);
    assert!(cpu.flag(Flag::Overflow));
    assert!(cpu.flag(Flag::Negative));
    assert!(!cpu.flag(Flag::Carry));
}

#[test]
fn test_adc_ignores_decimal_flag() {
    // 0x09 + 0x01 stays binary even with D set
    let mut cpu = setup_cpu(&[0x69, 0x01]);
    cpu.set_a(0x09);
    cpu.set_flag(Flag::Decimal, true);

    cpu.step();

    assert_eq!(cpu.a(), 0x0A);
}

#[test]
fn test_adc_absolute_x_page_cross() {
    // ADC $12FF,X with X=1 reads $1300
    let mut cpu = setup_cpu(&[0x7D, 0xFF, 0x12]);
    cpu.memory_mut().write(0x1300, 0x02);
    cpu.set_x(0x01);

    assert_eq!(cpu.step(), 5);
    assert_eq!(cpu.a(), 0x02);
}

// ========== SBC ==========

#[test]
fn test_sbc_no_borrow() {
    // SEC-style: 0x50 - 0x10 with C set = 0x40, C stays set
    let mut cpu = setup_cpu(&[0xE9, 0x10]);
    cpu.set_a(0x50);
    cpu.set_flag(Flag::Carry, true);

    cpu.step();

    assert_eq!(cpu.a(), 0x40);
    assert!(cpu.flag(Flag::Carry));
    assert!(!cpu.flag(Flag::Overflow));
}

#[test]
fn test_sbc_borrow() {
    // 0x10 - 0x20 with C set = 0xF0, borrow clears C
    let mut cpu = setup_cpu(&[0xE9, 0x20]);
    cpu.set_a(0x10);
    cpu.set_flag(Flag::Carry, true);

    cpu.step();

    assert_eq!(cpu.a(), 0xF0);
    assert!(!cpu.flag(Flag::Carry));
    assert!(cpu.flag(Flag::Negative));
}

#[test]
fn test_sbc_carry_clear_subtracts_one_more() {
    let mut cpu = setup_cpu(&[0xE9, 0x01]);
    cpu.set_a(0x05);

    cpu.step();

    assert_eq!(cpu.a(), 0x03);
    assert!(cpu.flag(Flag::Carry));
}

#[test]
fn test_sbc_signed_overflow() {
    // 0x80 - 0x01 = 0x7F: negative - positive = positive
    let mut cpu = setup_cpu(&[0xE9, 0x01]);
    cpu.set_a(0x80);
    cpu.set_flag(Flag::Carry, true);

    cpu.step();

    assert_eq!(cpu.a(), 0x7F);
    assert!(cpu.flag(Flag::Overflow));
}

// ========== Logic ==========

#[test]
fn test_and_sets_zero() {
    let mut cpu = setup_cpu(&[0x29, 0xF0]);
    cpu.set_a(0x0F);

    cpu.step();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag(Flag::Zero));
}

#[test]
fn test_ora_sets_negative() {
    let mut cpu = setup_cpu(&[0x09, 0x80]);
    cpu.set_a(0x01);

    cpu.step();

    assert_eq!(cpu.a(), 0x81);
    assert!(cpu.flag(Flag::Negative));
}

#[test]
fn test_eor_zero_page() {
    let mut cpu = setup_cpu(&[0x45, 0x10]);
    cpu.memory_mut().write(0x0010, 0xFF);
    cpu.set_a(0xFF);

    assert_eq!(cpu.step(), 3);
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag(Flag::Zero));
}

#[test]
fn test_bit_copies_operand_bits() {
    // BIT $10 where $10 = 0xC0 and A = 0x0F
    let mut cpu = setup_cpu(&[0x24, 0x10]);
    cpu.memory_mut().write(0x0010, 0xC0);
    cpu.set_a(0x0F);

    cpu.step();

    assert!(cpu.flag(Flag::Zero));
    assert!(cpu.flag(Flag::Negative));
    assert!(cpu.flag(Flag::Overflow));
    assert_eq!(cpu.a(), 0x0F);
}

// ========== Compare ==========

#[test]
fn test_cmp_equal() {
    let mut cpu = setup_cpu(&[0xC9, 0x42]);
    cpu.set_a(0x42);

    cpu.step();

    assert!(cpu.flag(Flag::Carry));
    assert!(cpu.flag(Flag::Zero));
    assert!(!cpu.flag(Flag::Negative));
}

#[test]
fn test_cmp_less_than() {
    let mut cpu = setup_cpu(&[0xC9, 0x42]);
    cpu.set_a(0x10);

    cpu.step();

    assert!(!cpu.flag(Flag::Carry));
    assert!(!cpu.flag(Flag::Zero));
    assert!(cpu.flag(Flag::Negative));
}

#[test]
fn test_cpx_and_cpy() {
    // CPX #$05; CPY #$05
    let mut cpu = setup_cpu(&[0xE0, 0x05, 0xC0, 0x05]);
    cpu.set_x(0x06);
    cpu.set_y(0x04);

    cpu.step();
    assert!(cpu.flag(Flag::Carry));
    assert!(!cpu.flag(Flag::Zero));

    cpu.step();
    assert!(!cpu.flag(Flag::Carry));
    assert!(cpu.flag(Flag::Negative));
}

#[test]
fn test_cmp_indirect_y_page_cross() {
    // CMP ($40),Y with pointer $20FF and Y=1
    let mut cpu = setup_cpu(&[0xD1, 0x40]);
    cpu.memory_mut().write(0x0040, 0xFF);
    cpu.memory_mut().write(0x0041, 0x20);
    cpu.set_y(0x01);

    assert_eq!(cpu.step(), 6);
}
