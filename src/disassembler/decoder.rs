//! Instruction decoder for the 6502 disassembler

use crate::disassembler::Instruction;
use crate::opcodes::OPCODE_TABLE;
use crate::MemoryBus;

/// Decode the instruction at `address`.
///
/// The operand width comes from the opcode's addressing mode. Operand bytes
/// past $FFFF wrap to $0000, as the CPU would read them. Illegal opcodes
/// decode as one-byte instructions.
pub fn decode_instruction<B: MemoryBus + ?Sized>(memory: &B, address: u16) -> Instruction {
    let opcode = memory.peek(address);
    let metadata = &OPCODE_TABLE[opcode as usize];

    let operand_bytes = (1..=metadata.addressing_mode.operand_bytes() as u16)
        .map(|offset| memory.peek(address.wrapping_add(offset)))
        .collect();

    Instruction {
        address,
        opcode,
        mnemonic: metadata.mnemonic,
        operation: metadata.operation,
        addressing_mode: metadata.addressing_mode,
        operand_bytes,
        base_cycles: metadata.base_cycles,
    }
}

/// Decode every instruction that starts in `[start, stop]`, in address order.
pub fn decode_range<B: MemoryBus + ?Sized>(memory: &B, start: u16, stop: u16) -> Vec<Instruction> {
    let mut instructions = Vec::new();
    // Wider than u16 so a scan ending at $FFFF terminates
    let mut address = start as u32;

    while address <= stop as u32 {
        let instr = decode_instruction(memory, address as u16);
        address += instr.size_bytes() as u32;
        instructions.push(instr);
    }

    instructions
}
