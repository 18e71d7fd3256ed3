//! # CPU Configuration
//!
//! Options that select between behaviours of different members of the
//! 6502 family. Everything defaults to the NMOS part.

/// Options controlling CPU behaviour.
///
/// # Examples
///
/// ```
/// use r6502::{Cpu, CpuConfig, FlatMemory};
///
/// // 65C02-style indirect JMP
/// let config = CpuConfig {
///     indirect_jmp_page_wrap: false,
/// };
/// let cpu = Cpu::with_config(FlatMemory::new(), config);
/// assert!(!cpu.config().indirect_jmp_page_wrap);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuConfig {
    /// Reproduce the NMOS indirect addressing quirk.
    ///
    /// When set, a pointer whose low byte is 0xFF fetches the target's
    /// high byte from the start of the same page, so `JMP ($10FF)` reads
    /// $10FF and $1000. When clear, the high byte comes from $1100 as on
    /// the 65C02.
    pub indirect_jmp_page_wrap: bool,
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self {
            indirect_jmp_page_wrap: true,
        }
    }
}
