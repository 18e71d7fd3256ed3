//! Tests for the conditional branch instructions.
//!
//! Cycle timing:
//! - 2 cycles if not taken
//! - 3 cycles if taken to the same page
//! - 4 cycles if taken to a different page

use r6502::{Cpu, Flag, FlatMemory};

/// Helper: CPU with a 2-byte branch at `addr`
fn setup_branch(addr: u16, opcode: u8, offset: u8) -> Cpu<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.load(addr, &[opcode, offset]).unwrap();
    let mut cpu = Cpu::new(memory);
    cpu.set_pc(addr);
    cpu
}

#[test]
fn test_branch_not_taken() {
    // BEQ +$10 with Z clear
    let mut cpu = setup_branch(0x8000, 0xF0, 0x10);

    assert_eq!(cpu.step(), 2);
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_branch_taken_same_page() {
    let mut cpu = setup_branch(0x8000, 0xF0, 0x10);
    cpu.set_flag(Flag::Zero, true);

    assert_eq!(cpu.step(), 3);
    assert_eq!(cpu.pc(), 0x8012);
}

#[test]
fn test_branch_taken_backwards() {
    // BNE -4 from $8010 lands on $800E
    let mut cpu = setup_branch(0x8010, 0xD0, 0xFC);

    assert_eq!(cpu.step(), 3);
    assert_eq!(cpu.pc(), 0x800E);
}

#[test]
fn test_branch_taken_page_cross_forward() {
    // Next instruction at $80F2, target $8101
    let mut cpu = setup_branch(0x80F0, 0x90, 0x0F);

    assert_eq!(cpu.step(), 4);
    assert_eq!(cpu.pc(), 0x8101);
}

#[test]
fn test_branch_taken_page_cross_backward() {
    // Next instruction at $8102, target $80F2
    let mut cpu = setup_branch(0x8100, 0x10, 0xF0);

    assert_eq!(cpu.step(), 4);
    assert_eq!(cpu.pc(), 0x80F2);
}

#[test]
fn test_branch_crossing_from_operand_byte() {
    // Opcode at $80FE, next instruction at $8100, target $8102: same page
    let mut cpu = setup_branch(0x80FE, 0xB0, 0x02);
    cpu.set_flag(Flag::Carry, true);

    assert_eq!(cpu.step(), 3);
    assert_eq!(cpu.pc(), 0x8102);
}

#[test]
fn test_all_branch_conditions() {
    let cases = [
        (0x10, Flag::Negative, false), // BPL
        (0x30, Flag::Negative, true),  // BMI
        (0x50, Flag::Overflow, false), // BVC
        (0x70, Flag::Overflow, true),  // BVS
        (0x90, Flag::Carry, false),    // BCC
        (0xB0, Flag::Carry, true),     // BCS
        (0xD0, Flag::Zero, false),     // BNE
        (0xF0, Flag::Zero, true),      // BEQ
    ];

    for (opcode, flag, taken_when) in cases {
        let mut cpu = setup_branch(0x8000, opcode, 0x04);
        cpu.set_flag(flag, taken_when);
        assert_eq!(cpu.step(), 3, "opcode ${:02X} should branch", opcode);
        assert_eq!(cpu.pc(), 0x8006);

        let mut cpu = setup_branch(0x8000, opcode, 0x04);
        cpu.set_flag(flag, !taken_when);
        assert_eq!(cpu.step(), 2, "opcode ${:02X} should fall through", opcode);
        assert_eq!(cpu.pc(), 0x8002);
    }
}

#[test]
fn test_branch_records_displacement() {
    let mut cpu = setup_branch(0x8000, 0xD0, 0xFE);

    cpu.step();

    assert_eq!(cpu.addr_rel(), 0xFFFE);
    assert_eq!(cpu.pc(), 0x8000);
}
