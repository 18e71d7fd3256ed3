//! # 6502 Instruction Implementations
//!
//! This module contains the implementations of all 6502 instructions, organized by category.
//! Each instruction is a standalone function that runs after the addressing
//! mode has been resolved. It returns true if the instruction pays the extra
//! cycle when its addressing mode crossed a page.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK, NOP, illegal)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

mod alu;
mod branches;
mod control;
mod flags;
mod inc_dec;
mod load_store;
mod shifts;
mod stack;
mod transfer;

use crate::flags::Flag;
use crate::opcodes::Operation;
use crate::{Cpu, MemoryBus};

/// Dispatches `operation` for the instruction currently being executed.
pub(crate) fn execute<M: MemoryBus>(cpu: &mut Cpu<M>, operation: Operation) -> bool {
    use Operation::*;
    match operation {
        Adc => alu::execute_adc(cpu),
        Sbc => alu::execute_sbc(cpu),
        And => alu::execute_and(cpu),
        Ora => alu::execute_ora(cpu),
        Eor => alu::execute_eor(cpu),
        Bit => alu::execute_bit(cpu),
        Cmp => alu::execute_cmp(cpu),
        Cpx => alu::execute_cpx(cpu),
        Cpy => alu::execute_cpy(cpu),

        Bcc => branches::branch_if(cpu, Flag::Carry, false),
        Bcs => branches::branch_if(cpu, Flag::Carry, true),
        Bne => branches::branch_if(cpu, Flag::Zero, false),
        Beq => branches::branch_if(cpu, Flag::Zero, true),
        Bpl => branches::branch_if(cpu, Flag::Negative, false),
        Bmi => branches::branch_if(cpu, Flag::Negative, true),
        Bvc => branches::branch_if(cpu, Flag::Overflow, false),
        Bvs => branches::branch_if(cpu, Flag::Overflow, true),

        Asl => shifts::execute_asl(cpu),
        Lsr => shifts::execute_lsr(cpu),
        Rol => shifts::execute_rol(cpu),
        Ror => shifts::execute_ror(cpu),

        Lda => load_store::execute_lda(cpu),
        Ldx => load_store::execute_ldx(cpu),
        Ldy => load_store::execute_ldy(cpu),
        Sta => load_store::execute_sta(cpu),
        Stx => load_store::execute_stx(cpu),
        Sty => load_store::execute_sty(cpu),

        Inc => inc_dec::execute_inc(cpu),
        Dec => inc_dec::execute_dec(cpu),
        Inx => inc_dec::execute_inx(cpu),
        Iny => inc_dec::execute_iny(cpu),
        Dex => inc_dec::execute_dex(cpu),
        Dey => inc_dec::execute_dey(cpu),

        Brk => control::execute_brk(cpu),
        Jmp => control::execute_jmp(cpu),
        Jsr => control::execute_jsr(cpu),
        Rts => control::execute_rts(cpu),
        Rti => control::execute_rti(cpu),
        Nop => control::execute_nop(cpu),
        Xxx => control::execute_illegal(cpu),

        Pha => stack::execute_pha(cpu),
        Php => stack::execute_php(cpu),
        Pla => stack::execute_pla(cpu),
        Plp => stack::execute_plp(cpu),

        Clc => flags::set_flag(cpu, Flag::Carry, false),
        Sec => flags::set_flag(cpu, Flag::Carry, true),
        Cli => flags::set_flag(cpu, Flag::InterruptDisable, false),
        Sei => flags::set_flag(cpu, Flag::InterruptDisable, true),
        Cld => flags::set_flag(cpu, Flag::Decimal, false),
        Sed => flags::set_flag(cpu, Flag::Decimal, true),
        Clv => flags::set_flag(cpu, Flag::Overflow, false),

        Tax => transfer::execute_tax(cpu),
        Tay => transfer::execute_tay(cpu),
        Txa => transfer::execute_txa(cpu),
        Tya => transfer::execute_tya(cpu),
        Tsx => transfer::execute_tsx(cpu),
        Txs => transfer::execute_txs(cpu),
    }
}
