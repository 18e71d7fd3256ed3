//! # Addressing Modes
//!
//! This module defines the 12 addressing modes used by the opcode table and
//! the resolvers that turn each mode into an effective address.
//!
//! Resolvers run at fetch time with PC pointing just past the opcode byte.
//! They consume the operand bytes, leave the effective address in
//! `addr_abs` (or the branch displacement in `addr_rel`), and report whether
//! the access crossed a page and may cost one extra cycle. Accumulator
//! operations are folded into [`AddressingMode::Implied`].

use crate::{Cpu, MemoryBus};

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implied
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand. Shifts and rotates in this mode act on the accumulator.
    ///
    /// Examples: CLC, RTS, ASL A
    Implied,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X, wrapping within page 0.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y, wrapping within page 0.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Signed 8-bit displacement for branch instructions.
    ///
    /// Example: BEQ label
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X.
    ///
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteX,

    /// 16-bit address indexed by Y.
    ///
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteY,

    /// Jump through a 16-bit pointer. Only used by JMP.
    ///
    /// Example: JMP ($FFFC)
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    /// May incur +1 cycle penalty if page boundary is crossed.
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        use AddressingMode::*;
        match self {
            Implied => 0,
            Immediate | ZeroPage | ZeroPageX | ZeroPageY | Relative | IndirectX | IndirectY => 1,
            Absolute | AbsoluteX | AbsoluteY | Indirect => 2,
        }
    }
}

/// True when `a` and `b` lie on different 256-byte pages.
#[inline]
pub(crate) fn page_crossed(a: u16, b: u16) -> bool {
    (a & 0xFF00) != (b & 0xFF00)
}

impl<M: MemoryBus> Cpu<M> {
    /// Resolves `mode` for the instruction being fetched.
    ///
    /// Returns true if the mode crossed a page and the operation may take
    /// one extra cycle.
    pub(crate) fn resolve(&mut self, mode: AddressingMode) -> bool {
        match mode {
            AddressingMode::Implied => {
                self.fetched = self.a;
                false
            }
            AddressingMode::Immediate => {
                self.addr_abs = self.pc;
                self.pc = self.pc.wrapping_add(1);
                false
            }
            AddressingMode::ZeroPage => {
                self.addr_abs = self.read_pc() as u16;
                false
            }
            AddressingMode::ZeroPageX => {
                self.addr_abs = self.read_pc().wrapping_add(self.x) as u16;
                false
            }
            AddressingMode::ZeroPageY => {
                self.addr_abs = self.read_pc().wrapping_add(self.y) as u16;
                false
            }
            AddressingMode::Relative => {
                // Sign-extend so the branch can use a plain wrapping add
                self.addr_rel = self.read_pc() as i8 as u16;
                false
            }
            AddressingMode::Absolute => {
                self.addr_abs = self.read_pc_word();
                false
            }
            AddressingMode::AbsoluteX => {
                let base = self.read_pc_word();
                self.addr_abs = base.wrapping_add(self.x as u16);
                page_crossed(base, self.addr_abs)
            }
            AddressingMode::AbsoluteY => {
                let base = self.read_pc_word();
                self.addr_abs = base.wrapping_add(self.y as u16);
                page_crossed(base, self.addr_abs)
            }
            AddressingMode::Indirect => {
                let ptr = self.read_pc_word();
                let lo = self.memory.read(ptr) as u16;
                let hi_addr = if self.config.indirect_jmp_page_wrap && ptr & 0x00FF == 0x00FF {
                    // NMOS quirk: the high byte comes from the start of the same page
                    ptr & 0xFF00
                } else {
                    ptr.wrapping_add(1)
                };
                let hi = self.memory.read(hi_addr) as u16;
                self.addr_abs = (hi << 8) | lo;
                false
            }
            AddressingMode::IndirectX => {
                let zp = self.read_pc().wrapping_add(self.x);
                self.addr_abs = self.read_zero_page_word(zp);
                false
            }
            AddressingMode::IndirectY => {
                let zp = self.read_pc();
                let base = self.read_zero_page_word(zp);
                self.addr_abs = base.wrapping_add(self.y as u16);
                page_crossed(base, self.addr_abs)
            }
        }
    }

    /// Reads the byte at PC and advances PC.
    fn read_pc(&mut self) -> u8 {
        let value = self.memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    /// Reads a little-endian word at PC and advances PC by two.
    fn read_pc_word(&mut self) -> u16 {
        let lo = self.read_pc() as u16;
        let hi = self.read_pc() as u16;
        (hi << 8) | lo
    }

    /// Reads a pointer from zero page, wrapping the high byte within page 0.
    fn read_zero_page_word(&mut self, zp: u8) -> u16 {
        let lo = self.memory.read(zp as u16) as u16;
        let hi = self.memory.read(zp.wrapping_add(1) as u16) as u16;
        (hi << 8) | lo
    }
}
