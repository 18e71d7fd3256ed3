//! Integration tests for the disassembler.
//!
//! Tests cover:
//! - Output text for every addressing mode
//! - Listing keys and ordering
//! - Idempotence and freedom from side effects on memory and CPU

use proptest::prelude::*;
use r6502::disassembler::format_listing;
use r6502::{decode_range, disassemble, Cpu, FlatMemory, MemoryBus};
use std::cell::Cell;

fn memory_with(address: u16, bytes: &[u8]) -> FlatMemory {
    let mut memory = FlatMemory::new();
    memory.load(address, bytes).unwrap();
    memory
}

#[test]
fn test_single_nop() {
    let memory = memory_with(0x1000, &[0xEA]);

    let listing = disassemble(&memory, 0x1000, 0x1000);

    assert_eq!(listing.len(), 1);
    assert_eq!(listing.get(&0x1000).map(String::as_str), Some("NOP"));
}

#[test]
fn test_every_mode_format() {
    #[rustfmt::skip]
    let program = [
        0xA9, 0x05,       // $8000 LDA #$05
        0xA5, 0x80,       // $8002 LDA $80
        0xB5, 0x80,       // $8004 LDA $80,X
        0xB6, 0x80,       // $8006 LDX $80,Y
        0xAD, 0x34, 0x12, // $8008 LDA $1234
        0xBD, 0x34, 0x12, // $800B LDA $1234,X
        0xB9, 0x34, 0x12, // $800E LDA $1234,Y
        0x6C, 0xFC, 0xFF, // $8011 JMP ($FFFC)
        0xA1, 0x40,       // $8014 LDA ($40,X)
        0xB1, 0x40,       // $8016 LDA ($40),Y
        0x0A,             // $8018 ASL A
        0x18,             // $8019 CLC
        0xD0, 0xFE,       // $801A BNE $801A
        0x02,             // $801C illegal
    ];
    let memory = memory_with(0x8000, &program);

    let listing = disassemble(&memory, 0x8000, 0x801C);
    let lines: Vec<(u16, &str)> = listing.iter().map(|(a, t)| (*a, t.as_str())).collect();

    assert_eq!(
        lines,
        vec![
            (0x8000, "LDA #$05"),
            (0x8002, "LDA $80"),
            (0x8004, "LDA $80,X"),
            (0x8006, "LDX $80,Y"),
            (0x8008, "LDA $1234"),
            (0x800B, "LDA $1234,X"),
            (0x800E, "LDA $1234,Y"),
            (0x8011, "JMP ($FFFC)"),
            (0x8014, "LDA ($40,X)"),
            (0x8016, "LDA ($40),Y"),
            (0x8018, "ASL A"),
            (0x8019, "CLC"),
            (0x801A, "BNE $801A"),
            (0x801C, ".byte $02"),
        ]
    );
}

#[test]
fn test_listing_lines() {
    let memory = memory_with(0x8000, &[0xA2, 0x0A, 0x8E, 0x00, 0x00]);

    let lines: Vec<String> = decode_range(&memory, 0x8000, 0x8004)
        .iter()
        .map(format_listing)
        .collect();

    assert_eq!(lines, vec!["$8000: LDX #$0A", "$8002: STX $0000"]);
}

#[test]
fn test_cpu_disassemble_leaves_state_alone() {
    let memory = memory_with(0x8000, &[0xA9, 0x05, 0x69, 0x03, 0xEA]);
    let mut cpu = Cpu::new(memory);
    cpu.set_pc(0x8000);
    cpu.clock();
    let before = format!("{:?}", cpu);
    let remaining = cpu.cycles_remaining();

    let first = cpu.disassemble(0x8000, 0x8004);
    let second = cpu.disassemble(0x8000, 0x8004);

    assert_eq!(first, second);
    assert_eq!(format!("{:?}", cpu), before);
    assert_eq!(cpu.cycles_remaining(), remaining);
}

/// Bus that counts every access so tests can see which path was taken.
struct CountingBus {
    inner: FlatMemory,
    peeks: Cell<usize>,
    reads: usize,
    writes: usize,
}

impl MemoryBus for CountingBus {
    fn peek(&self, addr: u16) -> u8 {
        self.peeks.set(self.peeks.get() + 1);
        self.inner.peek(addr)
    }

    fn read(&mut self, addr: u16) -> u8 {
        self.reads += 1;
        self.inner.peek(addr)
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.writes += 1;
        self.inner.write(addr, value);
    }
}

#[test]
fn test_disassembler_only_peeks() {
    let bus = CountingBus {
        inner: memory_with(0x8000, &[0xAD, 0x34, 0x12, 0xEA]),
        peeks: Cell::new(0),
        reads: 0,
        writes: 0,
    };

    let listing = disassemble(&bus, 0x8000, 0x8003);

    assert_eq!(listing.len(), 2);
    assert_eq!(bus.peeks.get(), 4);
    assert_eq!(bus.reads, 0);
    assert_eq!(bus.writes, 0);
}

proptest! {
    /// Property: disassembly of arbitrary bytes is idempotent and keys ascend
    #[test]
    fn prop_disassembly_idempotent(bytes in prop::collection::vec(any::<u8>(), 1..64), start in any::<u16>()) {
        let mut memory = FlatMemory::new();
        for (i, b) in bytes.iter().enumerate() {
            memory.write(start.wrapping_add(i as u16), *b);
        }
        let snapshot = memory.clone();
        let stop = start.saturating_add(bytes.len() as u16 - 1);

        let first = disassemble(&memory, start, stop);
        let second = disassemble(&memory, start, stop);

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(memory.as_slice(), snapshot.as_slice());
        prop_assert!(first.keys().all(|&a| a >= start && a <= stop));
        prop_assert_eq!(first.keys().next().copied(), Some(start));
    }
}
