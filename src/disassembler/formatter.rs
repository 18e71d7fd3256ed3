//! Formatting functions for disassembled instructions

use crate::addressing::AddressingMode;
use crate::disassembler::Instruction;
use crate::opcodes::Operation;

/// Format a single instruction as assembly text, e.g. `LDA #$42`.
pub fn format_instruction(instr: &Instruction) -> String {
    if let Some(directive) = format_illegal(instr) {
        return directive;
    }

    let operand = format_operand(instr);

    if operand.is_empty() {
        instr.mnemonic.to_string()
    } else {
        format!("{} {}", instr.mnemonic, operand)
    }
}

/// Format an instruction as a listing line, e.g. `$8000: LDA #$42`.
pub fn format_listing(instr: &Instruction) -> String {
    format!("${:04X}: {}", instr.address, format_instruction(instr))
}

/// Format the operand based on addressing mode
fn format_operand(instr: &Instruction) -> String {
    use AddressingMode::*;

    let byte = |i: usize| instr.operand_bytes.get(i).copied().unwrap_or(0);
    let word = || u16::from_le_bytes([byte(0), byte(1)]);

    match instr.addressing_mode {
        Implied if instr.operation.is_shift() => "A".to_string(),
        Implied => String::new(),
        Immediate => format!("#${:02X}", byte(0)),
        ZeroPage => format!("${:02X}", byte(0)),
        ZeroPageX => format!("${:02X},X", byte(0)),
        ZeroPageY => format!("${:02X},Y", byte(0)),
        Relative => {
            // Target is relative to the address after the 2-byte branch
            let offset = byte(0) as i8 as u16;
            let target = instr.address.wrapping_add(2).wrapping_add(offset);
            format!("${:04X}", target)
        }
        Absolute => format!("${:04X}", word()),
        AbsoluteX => format!("${:04X},X", word()),
        AbsoluteY => format!("${:04X},Y", word()),
        Indirect => format!("(${:04X})", word()),
        IndirectX => format!("(${:02X},X)", byte(0)),
        IndirectY => format!("(${:02X}),Y", byte(0)),
    }
}

/// Illegal opcodes print as a data directive rather than "???"
fn format_illegal(instr: &Instruction) -> Option<String> {
    (instr.operation == Operation::Xxx).then(|| format!(".byte ${:02X}", instr.opcode))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instr(
        address: u16,
        opcode: u8,
        mnemonic: &'static str,
        operation: Operation,
        addressing_mode: AddressingMode,
        operand_bytes: Vec<u8>,
    ) -> Instruction {
        Instruction {
            address,
            opcode,
            mnemonic,
            operation,
            addressing_mode,
            operand_bytes,
            base_cycles: 2,
        }
    }

    #[test]
    fn test_format_immediate() {
        let i = instr(0x8000, 0xA9, "LDA", Operation::Lda, AddressingMode::Immediate, vec![0x42]);
        assert_eq!(format_instruction(&i), "LDA #$42");
    }

    #[test]
    fn test_format_absolute() {
        let i = instr(0x0000, 0x8D, "STA", Operation::Sta, AddressingMode::Absolute, vec![0x00, 0x80]);
        assert_eq!(format_instruction(&i), "STA $8000");
    }

    #[test]
    fn test_format_implied_and_accumulator() {
        let nop = instr(0x1000, 0xEA, "NOP", Operation::Nop, AddressingMode::Implied, vec![]);
        assert_eq!(format_instruction(&nop), "NOP");

        let asl = instr(0x1000, 0x0A, "ASL", Operation::Asl, AddressingMode::Implied, vec![]);
        assert_eq!(format_instruction(&asl), "ASL A");
    }

    #[test]
    fn test_format_relative_backwards() {
        // BNE -6 from $8014 lands on $8010
        let i = instr(0x8014, 0xD0, "BNE", Operation::Bne, AddressingMode::Relative, vec![0xFA]);
        assert_eq!(format_instruction(&i), "BNE $8010");
    }

    #[test]
    fn test_format_indirect_modes() {
        let jmp = instr(0, 0x6C, "JMP", Operation::Jmp, AddressingMode::Indirect, vec![0xFC, 0xFF]);
        assert_eq!(format_instruction(&jmp), "JMP ($FFFC)");

        let izx = instr(0, 0xA1, "LDA", Operation::Lda, AddressingMode::IndirectX, vec![0x40]);
        assert_eq!(format_instruction(&izx), "LDA ($40,X)");

        let izy = instr(0, 0xB1, "LDA", Operation::Lda, AddressingMode::IndirectY, vec![0x40]);
        assert_eq!(format_instruction(&izy), "LDA ($40),Y");
    }

    #[test]
    fn test_format_illegal_opcode() {
        let i = instr(0x2000, 0xFF, "???", Operation::Xxx, AddressingMode::Implied, vec![]);
        assert_eq!(format_instruction(&i), ".byte $FF");
        assert_eq!(format_listing(&i), "$2000: .byte $FF");
    }
}
