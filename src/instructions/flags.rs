//! # Flag Instructions
//!
//! CLC, SEC, CLI, SEI, CLD, SED, CLV. Each sets or clears one status bit.

use crate::flags::Flag;
use crate::{Cpu, MemoryBus};

pub(crate) fn set_flag<M: MemoryBus>(cpu: &mut Cpu<M>, flag: Flag, value: bool) -> bool {
    cpu.status.set(flag, value);
    false
}
