//! # Processor Status Flags
//!
//! The 6502 status register packs eight independent bits (NV-BDIZC).
//! [`StatusFlags`] stores them as a single byte and exposes per-flag access
//! through the [`Flag`] enumeration.

use std::fmt;

/// A single bit of the processor status register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Flag {
    /// Carry (unsigned overflow out of bit 7, or "no borrow" for subtraction)
    Carry = 1 << 0,

    /// Zero (result was 0)
    Zero = 1 << 1,

    /// Interrupt disable (IRQ is masked while set)
    InterruptDisable = 1 << 2,

    /// Decimal mode. Stored and restored, never consulted by arithmetic.
    Decimal = 1 << 3,

    /// Break. Only meaningful in a status byte pushed to the stack:
    /// set by BRK/PHP, clear for IRQ/NMI.
    Break = 1 << 4,

    /// Unused bit 5, always 1 when pushed.
    Unused = 1 << 5,

    /// Overflow (signed overflow)
    Overflow = 1 << 6,

    /// Negative (bit 7 of the result)
    Negative = 1 << 7,
}

impl Flag {
    /// All flags from bit 7 down to bit 0.
    pub const ALL: [Flag; 8] = [
        Flag::Negative,
        Flag::Overflow,
        Flag::Unused,
        Flag::Break,
        Flag::Decimal,
        Flag::InterruptDisable,
        Flag::Zero,
        Flag::Carry,
    ];

    /// Bit mask of this flag within the status byte.
    pub const fn mask(self) -> u8 {
        self as u8
    }

    /// Single-letter name used in traces.
    pub const fn letter(self) -> char {
        match self {
            Flag::Carry => 'C',
            Flag::Zero => 'Z',
            Flag::InterruptDisable => 'I',
            Flag::Decimal => 'D',
            Flag::Break => 'B',
            Flag::Unused => 'U',
            Flag::Overflow => 'V',
            Flag::Negative => 'N',
        }
    }
}

/// The packed status register.
///
/// # Examples
///
/// ```
/// use r6502::{Flag, StatusFlags};
///
/// let mut p = StatusFlags::default();
/// p.set(Flag::Carry, true);
/// assert!(p.get(Flag::Carry));
/// assert_eq!(p.bits(), 0x01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusFlags(u8);

impl StatusFlags {
    /// Wraps a raw status byte.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Returns the raw status byte.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns true if `flag` is set.
    pub const fn get(self, flag: Flag) -> bool {
        self.0 & flag.mask() != 0
    }

    /// Sets or clears exactly one bit.
    pub fn set(&mut self, flag: Flag, value: bool) {
        if value {
            self.0 |= flag.mask();
        } else {
            self.0 &= !flag.mask();
        }
    }

    /// Updates Zero and Negative from an 8-bit result.
    pub(crate) fn set_zn(&mut self, value: u8) {
        self.set(Flag::Zero, value == 0);
        self.set(Flag::Negative, value & 0x80 != 0);
    }
}

impl From<u8> for StatusFlags {
    fn from(bits: u8) -> Self {
        Self(bits)
    }
}

impl From<StatusFlags> for u8 {
    fn from(flags: StatusFlags) -> Self {
        flags.0
    }
}

/// Renders as `NVUBDIZC`, with `.` for clear bits.
impl fmt::Display for StatusFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for flag in Flag::ALL {
            let c = if self.get(flag) { flag.letter() } else { '.' };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
