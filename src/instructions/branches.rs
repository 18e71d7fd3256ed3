//! # Branch Instructions
//!
//! All eight conditional branches share one body; the dispatcher passes
//! the flag tested and the value that takes the branch.
//!
//! Cycle timing:
//! - 2 cycles if branch not taken
//! - 3 cycles if branch taken to same page
//! - 4 cycles if branch taken to different page

use crate::addressing::page_crossed;
use crate::flags::Flag;
use crate::{Cpu, MemoryBus};

/// Branches by the resolved displacement when `flag` equals `expected`.
///
/// The page check compares the target with the address of the instruction
/// following the branch. Penalties are added directly to the remaining
/// cycles, so this never asks for the addressing-mode extra cycle.
pub(crate) fn branch_if<M: MemoryBus>(cpu: &mut Cpu<M>, flag: Flag, expected: bool) -> bool {
    if cpu.status.get(flag) == expected {
        cpu.cycles += 1;
        cpu.addr_abs = cpu.pc.wrapping_add(cpu.addr_rel);

        if page_crossed(cpu.addr_abs, cpu.pc) {
            cpu.cycles += 1;
        }

        cpu.pc = cpu.addr_abs;
    }
    false
}
