//! # Opcode Table
//!
//! The complete 256-entry dispatch table. Each entry is plain data: the
//! mnemonic, the [`Operation`] it dispatches to, the [`AddressingMode`]
//! used to locate the operand, and the base cycle cost.
//!
//! The table is total: the 105 illegal/undocumented opcode bytes map to
//! [`Operation::Xxx`] with the "???" mnemonic, which executes as a no-op
//! that still consumes its base cycles.

use crate::addressing::AddressingMode;

/// One of the 56 documented 6502 operations, plus [`Operation::Xxx`] for
/// every illegal opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
    /// Illegal opcode, executed as a no-op.
    Xxx,
}

impl Operation {
    /// True for shifts and rotates, which act on the accumulator when
    /// the addressing mode is implied.
    pub const fn is_shift(self) -> bool {
        matches!(
            self,
            Operation::Asl | Operation::Lsr | Operation::Rol | Operation::Ror
        )
    }

    /// True for the eight conditional branches.
    pub const fn is_branch(self) -> bool {
        matches!(
            self,
            Operation::Bcc
                | Operation::Bcs
                | Operation::Beq
                | Operation::Bmi
                | Operation::Bne
                | Operation::Bpl
                | Operation::Bvc
                | Operation::Bvs
        )
    }
}

/// Metadata for a single 6502 opcode.
///
/// # Examples
///
/// ```
/// use r6502::{AddressingMode, Operation, OPCODE_TABLE};
///
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, "LDA");
/// assert_eq!(lda_imm.operation, Operation::Lda);
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic (e.g., "LDA", "STA", "???" for illegal opcodes).
    pub mnemonic: &'static str,

    /// Operation executed for this opcode.
    pub operation: Operation,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Base cycle cost, before page-crossing and branch penalties.
    /// Always at least 1.
    pub base_cycles: u8,
}

impl OpcodeMetadata {
    /// Total instruction size in bytes (opcode + operands).
    pub const fn size_bytes(&self) -> u8 {
        1 + self.addressing_mode.operand_bytes()
    }

    /// True for documented opcodes.
    pub const fn is_documented(&self) -> bool {
        !matches!(self.operation, Operation::Xxx)
    }
}

const fn entry(
    mnemonic: &'static str,
    operation: Operation,
    addressing_mode: AddressingMode,
    base_cycles: u8,
) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic,
        operation,
        addressing_mode,
        base_cycles,
    }
}

use AddressingMode::*;
use Operation::*;

/// Complete 256-entry opcode table indexed by opcode byte value.
///
/// Cycle counts for illegal opcodes follow the NMOS part so that programs
/// which stray into them keep roughly the right timing.
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = [
    entry("BRK", Brk, Implied, 7), // 0x00
    entry("ORA", Ora, IndirectX, 6), // 0x01
    entry("???", Xxx, Implied, 2), // 0x02
    entry("???", Xxx, Implied, 8), // 0x03
    entry("???", Xxx, Implied, 3), // 0x04
    entry("ORA", Ora, ZeroPage, 3), // 0x05
    entry("ASL", Asl, ZeroPage, 5), // 0x06
    entry("???", Xxx, Implied, 5), // 0x07
    entry("PHP", Php, Implied, 3), // 0x08
    entry("ORA", Ora, Immediate, 2), // 0x09
    entry("ASL", Asl, Implied, 2), // 0x0A
    entry("???", Xxx, Implied, 2), // 0x0B
    entry("???", Xxx, Implied, 4), // 0x0C
    entry("ORA", Ora, Absolute, 4), // 0x0D
    entry("ASL", Asl, Absolute, 6), // 0x0E
    entry("???", Xxx, Implied, 6), // 0x0F
    entry("BPL", Bpl, Relative, 2), // 0x10
    entry("ORA", Ora, IndirectY, 5), // 0x11
    entry("???", Xxx, Implied, 2), // 0x12
    entry("???", Xxx, Implied, 8), // 0x13
    entry("???", Xxx, Implied, 4), // 0x14
    entry("ORA", Ora, ZeroPageX, 4), // 0x15
    entry("ASL", Asl, ZeroPageX, 6), // 0x16
    entry("???", Xxx, Implied, 6), // 0x17
    entry("CLC", Clc, Implied, 2), // 0x18
    entry("ORA", Ora, AbsoluteY, 4), // 0x19
    entry("???", Xxx, Implied, 2), // 0x1A
    entry("???", Xxx, Implied, 7), // 0x1B
    entry("???", Xxx, Implied, 4), // 0x1C
    entry("ORA", Ora, AbsoluteX, 4), // 0x1D
    entry("ASL", Asl, AbsoluteX, 7), // 0x1E
    entry("???", Xxx, Implied, 7), // 0x1F
    entry("JSR", Jsr, Absolute, 6), // 0x20
    entry("AND", And, IndirectX, 6), // 0x21
    entry("???", Xxx, Implied, 2), // 0x22
    entry("???", Xxx, Implied, 8), // 0x23
    entry("BIT", Bit, ZeroPage, 3), // 0x24
    entry("AND", And, ZeroPage, 3), // 0x25
    entry("ROL", Rol, ZeroPage, 5), // 0x26
    entry("???", Xxx, Implied, 5), // 0x27
    entry("PLP", Plp, Implied, 4), // 0x28
    entry("AND", And, Immediate, 2), // 0x29
    entry("ROL", Rol, Implied, 2), // 0x2A
    entry("???", Xxx, Implied, 2), // 0x2B
    entry("BIT", Bit, Absolute, 4), // 0x2C
    entry("AND", And, Absolute, 4), // 0x2D
    entry("ROL", Rol, Absolute, 6), // 0x2E
    entry("???", Xxx, Implied, 6), // 0x2F
    entry("BMI", Bmi, Relative, 2), // 0x30
    entry("AND", And, IndirectY, 5), // 0x31
    entry("???", Xxx, Implied, 2), // 0x32
    entry("???", Xxx, Implied, 8), // 0x33
    entry("???", Xxx, Implied, 4), // 0x34
    entry("AND", And, ZeroPageX, 4), // 0x35
    entry("ROL", Rol, ZeroPageX, 6), // 0x36
    entry("???", Xxx, Implied, 6), // 0x37
    entry("SEC", Sec, Implied, 2), // 0x38
    entry("AND", And, AbsoluteY, 4), // 0x39
    entry("???", Xxx, Implied, 2), // 0x3A
    entry("???", Xxx, Implied, 7), // 0x3B
    entry("???", Xxx, Implied, 4), // 0x3C
    entry("AND", And, AbsoluteX, 4), // 0x3D
    entry("ROL", Rol, AbsoluteX, 7), // 0x3E
    entry("???", Xxx, Implied, 7), // 0x3F
    entry("RTI", Rti, Implied, 6), // 0x40
    entry("EOR", Eor, IndirectX, 6), // 0x41
    entry("???", Xxx, Implied, 2), // 0x42
    entry("???", Xxx, Implied, 8), // 0x43
    entry("???", Xxx, Implied, 3), // 0x44
    entry("EOR", Eor, ZeroPage, 3), // 0x45
    entry("LSR", Lsr, ZeroPage, 5), // 0x46
    entry("???", Xxx, Implied, 5), // 0x47
    entry("PHA", Pha, Implied, 3), // 0x48
    entry("EOR", Eor, Immediate, 2), // 0x49
    entry("LSR", Lsr, Implied, 2), // 0x4A
    entry("???", Xxx, Implied, 2), // 0x4B
    entry("JMP", Jmp, Absolute, 3), // 0x4C
    entry("EOR", Eor, Absolute, 4), // 0x4D
    entry("LSR", Lsr, Absolute, 6), // 0x4E
    entry("???", Xxx, Implied, 6), // 0x4F
    entry("BVC", Bvc, Relative, 2), // 0x50
    entry("EOR", Eor, IndirectY, 5), // 0x51
    entry("???", Xxx, Implied, 2), // 0x52
    entry("???", Xxx, Implied, 8), // 0x53
    entry("???", Xxx, Implied, 4), // 0x54
    entry("EOR", Eor, ZeroPageX, 4), // 0x55
    entry("LSR", Lsr, ZeroPageX, 6), // 0x56
    entry("???", Xxx, Implied, 6), // 0x57
    entry("CLI", Cli, Implied, 2), // 0x58
    entry("EOR", Eor, AbsoluteY, 4), // 0x59
    entry("???", Xxx, Implied, 2), // 0x5A
    entry("???", Xxx, Implied, 7), // 0x5B
    entry("???", Xxx, Implied, 4), // 0x5C
    entry("EOR", Eor, AbsoluteX, 4), // 0x5D
    entry("LSR", Lsr, AbsoluteX, 7), // 0x5E
    entry("???", Xxx, Implied, 7), // 0x5F
    entry("RTS", Rts, Implied, 6), // 0x60
    entry("ADC", Adc, IndirectX, 6), // 0x61
    entry("???", Xxx, Implied, 2), // 0x62
    entry("???", Xxx, Implied, 8), // 0x63
    entry("???", Xxx, Implied, 3), // 0x64
    entry("ADC", Adc, ZeroPage, 3), // 0x65
    entry("ROR", Ror, ZeroPage, 5), // 0x66
    entry("???", Xxx, Implied, 5), // 0x67
    entry("PLA", Pla, Implied, 4), // 0x68
    entry("ADC", Adc, Immediate, 2), // 0x69
    entry("ROR", Ror, Implied, 2), // 0x6A
    entry("???", Xxx, Implied, 2), // 0x6B
    entry("JMP", Jmp, Indirect, 5), // 0x6C
    entry("ADC", Adc, Absolute, 4), // 0x6D
    entry("ROR", Ror, Absolute, 6), // 0x6E
    entry("???", Xxx, Implied, 6), // 0x6F
    entry("BVS", Bvs, Relative, 2), // 0x70
    entry("ADC", Adc, IndirectY, 5), // 0x71
    entry("???", Xxx, Implied, 2), // 0x72
    entry("???", Xxx, Implied, 8), // 0x73
    entry("???", Xxx, Implied, 4), // 0x74
    entry("ADC", Adc, ZeroPageX, 4), // 0x75
    entry("ROR", Ror, ZeroPageX, 6), // 0x76
    entry("???", Xxx, Implied, 6), // 0x77
    entry("SEI", Sei, Implied, 2), // 0x78
    entry("ADC", Adc, AbsoluteY, 4), // 0x79
    entry("???", Xxx, Implied, 2), // 0x7A
    entry("???", Xxx, Implied, 7), // 0x7B
    entry("???", Xxx, Implied, 4), // 0x7C
    entry("ADC", Adc, AbsoluteX, 4), // 0x7D
    entry("ROR", Ror, AbsoluteX, 7), // 0x7E
    entry("???", Xxx, Implied, 7), // 0x7F
    entry("???", Xxx, Implied, 2), // 0x80
    entry("STA", Sta, IndirectX, 6), // 0x81
    entry("???", Xxx, Implied, 2), // 0x82
    entry("???", Xxx, Implied, 6), // 0x83
    entry("STY", Sty, ZeroPage, 3), // 0x84
    entry("STA", Sta, ZeroPage, 3), // 0x85
    entry("STX", Stx, ZeroPage, 3), // 0x86
    entry("???", Xxx, Implied, 3), // 0x87
    entry("DEY", Dey, Implied, 2), // 0x88
    entry("???", Xxx, Implied, 2), // 0x89
    entry("TXA", Txa, Implied, 2), // 0x8A
    entry("???", Xxx, Implied, 2), // 0x8B
    entry("STY", Sty, Absolute, 4), // 0x8C
    entry("STA", Sta, Absolute, 4), // 0x8D
    entry("STX", Stx, Absolute, 4), // 0x8E
    entry("???", Xxx, Implied, 4), // 0x8F
    entry("BCC", Bcc, Relative, 2), // 0x90
    entry("STA", Sta, IndirectY, 6), // 0x91
    entry("???", Xxx, Implied, 2), // 0x92
    entry("???", Xxx, Implied, 6), // 0x93
    entry("STY", Sty, ZeroPageX, 4), // 0x94
    entry("STA", Sta, ZeroPageX, 4), // 0x95
    entry("STX", Stx, ZeroPageY, 4), // 0x96
    entry("???", Xxx, Implied, 4), // 0x97
    entry("TYA", Tya, Implied, 2), // 0x98
    entry("STA", Sta, AbsoluteY, 5), // 0x99
    entry("TXS", Txs, Implied, 2), // 0x9A
    entry("???", Xxx, Implied, 5), // 0x9B
    entry("???", Xxx, Implied, 5), // 0x9C
    entry("STA", Sta, AbsoluteX, 5), // 0x9D
    entry("???", Xxx, Implied, 5), // 0x9E
    entry("???", Xxx, Implied, 5), // 0x9F
    entry("LDY", Ldy, Immediate, 2), // 0xA0
    entry("LDA", Lda, IndirectX, 6), // 0xA1
    entry("LDX", Ldx, Immediate, 2), // 0xA2
    entry("???", Xxx, Implied, 6), // 0xA3
    entry("LDY", Ldy, ZeroPage, 3), // 0xA4
    entry("LDA", Lda, ZeroPage, 3), // 0xA5
    entry("LDX", Ldx, ZeroPage, 3), // 0xA6
    entry("???", Xxx, Implied, 3), // 0xA7
    entry("TAY", Tay, Implied, 2), // 0xA8
    entry("LDA", Lda, Immediate, 2), // 0xA9
    entry("TAX", Tax, Implied, 2), // 0xAA
    entry("???", Xxx, Implied, 2), // 0xAB
    entry("LDY", Ldy, Absolute, 4), // 0xAC
    entry("LDA", Lda, Absolute, 4), // 0xAD
    entry("LDX", Ldx, Absolute, 4), // 0xAE
    entry("???", Xxx, Implied, 4), // 0xAF
    entry("BCS", Bcs, Relative, 2), // 0xB0
    entry("LDA", Lda, IndirectY, 5), // 0xB1
    entry("???", Xxx, Implied, 2), // 0xB2
    entry("???", Xxx, Implied, 5), // 0xB3
    entry("LDY", Ldy, ZeroPageX, 4), // 0xB4
    entry("LDA", Lda, ZeroPageX, 4), // 0xB5
    entry("LDX", Ldx, ZeroPageY, 4), // 0xB6
    entry("???", Xxx, Implied, 4), // 0xB7
    entry("CLV", Clv, Implied, 2), // 0xB8
    entry("LDA", Lda, AbsoluteY, 4), // 0xB9
    entry("TSX", Tsx, Implied, 2), // 0xBA
    entry("???", Xxx, Implied, 4), // 0xBB
    entry("LDY", Ldy, AbsoluteX, 4), // 0xBC
    entry("LDA", Lda, AbsoluteX, 4), // 0xBD
    entry("LDX", Ldx, AbsoluteY, 4), // 0xBE
    entry("???", Xxx, Implied, 4), // 0xBF
    entry("CPY", Cpy, Immediate, 2), // 0xC0
    entry("CMP", Cmp, IndirectX, 6), // 0xC1
    entry("???", Xxx, Implied, 2), // 0xC2
    entry("???", Xxx, Implied, 8), // 0xC3
    entry("CPY", Cpy, ZeroPage, 3), // 0xC4
    entry("CMP", Cmp, ZeroPage, 3), // 0xC5
    entry("DEC", Dec, ZeroPage, 5), // 0xC6
    entry("???", Xxx, Implied, 5), // 0xC7
    entry("INY", Iny, Implied, 2), // 0xC8
    entry("CMP", Cmp, Immediate, 2), // 0xC9
    entry("DEX", Dex, Implied, 2), // 0xCA
    entry("???", Xxx, Implied, 2), // 0xCB
    entry("CPY", Cpy, Absolute, 4), // 0xCC
    entry("CMP", Cmp, Absolute, 4), // 0xCD
    entry("DEC", Dec, Absolute, 6), // 0xCE
    entry("???", Xxx, Implied, 6), // 0xCF
    entry("BNE", Bne, Relative, 2), // 0xD0
    entry("CMP", Cmp, IndirectY, 5), // 0xD1
    entry("???", Xxx, Implied, 2), // 0xD2
    entry("???", Xxx, Implied, 8), // 0xD3
    entry("???", Xxx, Implied, 4), // 0xD4
    entry("CMP", Cmp, ZeroPageX, 4), // 0xD5
    entry("DEC", Dec, ZeroPageX, 6), // 0xD6
    entry("???", Xxx, Implied, 6), // 0xD7
    entry("CLD", Cld, Implied, 2), // 0xD8
    entry("CMP", Cmp, AbsoluteY, 4), // 0xD9
    entry("???", Xxx, Implied, 2), // 0xDA
    entry("???", Xxx, Implied, 7), // 0xDB
    entry("???", Xxx, Implied, 4), // 0xDC
    entry("CMP", Cmp, AbsoluteX, 4), // 0xDD
    entry("DEC", Dec, AbsoluteX, 7), // 0xDE
    entry("???", Xxx, Implied, 7), // 0xDF
    entry("CPX", Cpx, Immediate, 2), // 0xE0
    entry("SBC", Sbc, IndirectX, 6), // 0xE1
    entry("???", Xxx, Implied, 2), // 0xE2
    entry("???", Xxx, Implied, 8), // 0xE3
    entry("CPX", Cpx, ZeroPage, 3), // 0xE4
    entry("SBC", Sbc, ZeroPage, 3), // 0xE5
    entry("INC", Inc, ZeroPage, 5), // 0xE6
    entry("???", Xxx, Implied, 5), // 0xE7
    entry("INX", Inx, Implied, 2), // 0xE8
    entry("SBC", Sbc, Immediate, 2), // 0xE9
    entry("NOP", Nop, Implied, 2), // 0xEA
    entry("???", Xxx, Implied, 2), // 0xEB
    entry("CPX", Cpx, Absolute, 4), // 0xEC
    entry("SBC", Sbc, Absolute, 4), // 0xED
    entry("INC", Inc, Absolute, 6), // 0xEE
    entry("???", Xxx, Implied, 6), // 0xEF
    entry("BEQ", Beq, Relative, 2), // 0xF0
    entry("SBC", Sbc, IndirectY, 5), // 0xF1
    entry("???", Xxx, Implied, 2), // 0xF2
    entry("???", Xxx, Implied, 8), // 0xF3
    entry("???", Xxx, Implied, 4), // 0xF4
    entry("SBC", Sbc, ZeroPageX, 4), // 0xF5
    entry("INC", Inc, ZeroPageX, 6), // 0xF6
    entry("???", Xxx, Implied, 6), // 0xF7
    entry("SED", Sed, Implied, 2), // 0xF8
    entry("SBC", Sbc, AbsoluteY, 4), // 0xF9
    entry("???", Xxx, Implied, 2), // 0xFA
    entry("???", Xxx, Implied, 7), // 0xFB
    entry("???", Xxx, Implied, 4), // 0xFC
    entry("SBC", Sbc, AbsoluteX, 4), // 0xFD
    entry("INC", Inc, AbsoluteX, 7), // 0xFE
    entry("???", Xxx, Implied, 7), // 0xFF
];
