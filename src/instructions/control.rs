//! # Control Flow Instructions
//!
//! BRK, JMP, JSR, RTS, RTI, NOP and the illegal-opcode fallback.
//!
//! BRK is a software interrupt that:
//! 1. Pushes the address of BRK + 2 (high byte first, then low byte)
//! 2. Pushes processor status with B and the unused bit set
//! 3. Sets the I (interrupt disable) flag
//! 4. Loads PC from IRQ vector at $FFFE/F

use crate::cpu::IRQ_VECTOR;
use crate::flags::Flag;
use crate::{Cpu, MemoryBus};

pub(crate) fn execute_brk<M: MemoryBus>(cpu: &mut Cpu<M>) -> bool {
    // Skip the padding byte after BRK
    cpu.pc = cpu.pc.wrapping_add(1);
    cpu.push_word(cpu.pc);

    let pushed = cpu.status.bits() | Flag::Break.mask() | Flag::Unused.mask();
    cpu.push(pushed);
    cpu.status.set(Flag::InterruptDisable, true);

    cpu.pc = cpu.read_vector(IRQ_VECTOR);
    false
}

/// JMP absolute or indirect. The indirect page-wrap quirk is handled by the
/// addressing mode.
pub(crate) fn execute_jmp<M: MemoryBus>(cpu: &mut Cpu<M>) -> bool {
    cpu.pc = cpu.addr_abs;
    false
}

/// JSR pushes the address of its own last byte; RTS adds the 1 back.
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut Cpu<M>) -> bool {
    let return_address = cpu.pc.wrapping_sub(1);
    cpu.push_word(return_address);
    cpu.pc = cpu.addr_abs;
    false
}

pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut Cpu<M>) -> bool {
    cpu.pc = cpu.pop_word().wrapping_add(1);
    false
}

/// RTI restores status (B dropped, unused bit forced) then PC.
pub(crate) fn execute_rti<M: MemoryBus>(cpu: &mut Cpu<M>) -> bool {
    let status = cpu.pop();
    cpu.status = status.into();
    cpu.status.set(Flag::Break, false);
    cpu.status.set(Flag::Unused, true);

    cpu.pc = cpu.pop_word();
    false
}

pub(crate) fn execute_nop<M: MemoryBus>(_cpu: &mut Cpu<M>) -> bool {
    false
}

/// Illegal opcodes: consume the table's cycles and change nothing else.
pub(crate) fn execute_illegal<M: MemoryBus>(cpu: &mut Cpu<M>) -> bool {
    log::trace!(
        "illegal opcode ${:02X} at ${:04X}",
        cpu.opcode,
        cpu.pc.wrapping_sub(1)
    );
    false
}
