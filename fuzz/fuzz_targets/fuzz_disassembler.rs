//! Fuzz target for the disassembler.
//!
//! This target feeds arbitrary byte sequences at arbitrary addresses to the
//! disassembler to find edge cases and panics in instruction decoding.

#![no_main]

use arbitrary::Arbitrary;
use r6502::{decode_range, disassemble, FlatMemory, MemoryBus};
use libfuzzer_sys::fuzz_target;

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    bytes: Vec<u8>,
    start: u16,
    stop: u16,
}

fuzz_target!(|input: FuzzInput| {
    // Limit input size to prevent OOM
    if input.bytes.len() > 65536 {
        return;
    }

    let mut memory = FlatMemory::new();
    for (i, &byte) in input.bytes.iter().enumerate() {
        memory.write(input.start.wrapping_add(i as u16), byte);
    }
    let snapshot = memory.clone();

    let instructions = decode_range(&memory, input.start, input.stop);
    let listing = disassemble(&memory, input.start, input.stop);

    // Verify invariants
    assert_eq!(instructions.len(), listing.len());
    let mut expected_address = input.start as u32;
    for instr in &instructions {
        // Each instruction starts where the previous one ended
        assert_eq!(instr.address as u32, expected_address);
        assert!(instr.address <= input.stop);

        // Size should be 1-3 bytes
        assert!(instr.size_bytes() >= 1 && instr.size_bytes() <= 3);

        expected_address += instr.size_bytes() as u32;
    }

    assert_eq!(memory.as_slice(), snapshot.as_slice());
});
