//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from specific
//! memory implementations, and `FlatMemory`, a plain 64KB RAM.
//!
//! ## Design Principles
//!
//! The MemoryBus trait follows 6502 hardware behavior:
//! - No bus errors - reads/writes always succeed
//! - Unmapped reads return 0 and unmapped writes are ignored
//! - Inspection goes through `peek`, which takes `&self` and can never
//!   disturb device state

use crate::cpu::{IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR};
use crate::LoadError;

/// Memory bus trait for CPU to read/write bytes.
///
/// # Design
///
/// - `peek(&self)`: Non-mutating read, used by the disassembler and by
///   anything that only inspects memory
/// - `read(&mut self)`: Read as performed by the CPU; a device may react
///   to it (clear a status bit, pop a FIFO). Defaults to `peek`.
/// - `write(&mut self)`: Mutable reference makes side effects explicit
///
/// # Examples
///
/// ```
/// use r6502::MemoryBus;
///
/// struct RomRamMemory {
///     ram: [u8; 0x8000],  // 32KB RAM (0x0000-0x7FFF)
///     rom: [u8; 0x8000],  // 32KB ROM (0x8000-0xFFFF)
/// }
///
/// impl MemoryBus for RomRamMemory {
///     fn peek(&self, addr: u16) -> u8 {
///         if addr < 0x8000 {
///             self.ram[addr as usize]
///         } else {
///             self.rom[(addr - 0x8000) as usize]
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr < 0x8000 {
///             self.ram[addr as usize] = value;
///         }
///         // Writes to ROM (0x8000+) are silently ignored
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a byte without side effects.
    ///
    /// This method must never panic. Unmapped addresses read as 0.
    fn peek(&self, addr: u16) -> u8;

    /// Reads a byte on behalf of the CPU.
    ///
    /// Override this only for devices whose state changes when read.
    fn read(&mut self, addr: u16) -> u8 {
        self.peek(addr)
    }

    /// Writes a byte to the specified 16-bit address.
    ///
    /// This method must never panic. If the address is read-only or unmapped,
    /// implementations ignore the write.
    fn write(&mut self, addr: u16, value: u8);
}

/// Lets a CPU borrow a bus owned elsewhere: `Cpu::new(&mut memory)`.
impl<B: MemoryBus + ?Sized> MemoryBus for &mut B {
    fn peek(&self, addr: u16) -> u8 {
        (**self).peek(addr)
    }

    fn read(&mut self, addr: u16) -> u8 {
        (**self).read(addr)
    }

    fn write(&mut self, addr: u16, value: u8) {
        (**self).write(addr, value)
    }
}

/// One of the three interrupt vectors at the top of memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vector {
    /// Non-maskable interrupt, $FFFA/$FFFB
    Nmi,
    /// Reset, $FFFC/$FFFD
    Reset,
    /// Interrupt request and BRK, $FFFE/$FFFF
    Irq,
}

impl Vector {
    /// Address of the vector's low byte.
    pub const fn address(self) -> u16 {
        match self {
            Vector::Nmi => NMI_VECTOR,
            Vector::Reset => RESET_VECTOR,
            Vector::Irq => IRQ_VECTOR,
        }
    }
}

/// Simple 64KB flat memory implementation.
///
/// All addresses (0x0000-0xFFFF) are writable RAM initialized to 0x00.
///
/// # Examples
///
/// ```
/// use r6502::{Cpu, FlatMemory, MemoryBus, Vector};
///
/// let mut memory = FlatMemory::new();
/// memory.set_vector(Vector::Reset, 0x8000);
/// memory.load(0x8000, &[0xA9, 0x05]).unwrap(); // LDA #$05
///
/// let mut cpu = Cpu::new(memory);
/// cpu.reset();
/// assert_eq!(cpu.pc(), 0x8000);
/// ```
#[derive(Clone)]
pub struct FlatMemory {
    /// 64KB contiguous memory array
    data: Box<[u8; 0x10000]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 0x10000]),
        }
    }

    /// Copies `program` into memory starting at `start`.
    ///
    /// Fails without writing anything if the program would run past $FFFF.
    pub fn load(&mut self, start: u16, program: &[u8]) -> Result<(), LoadError> {
        let begin = start as usize;
        let end = begin + program.len();
        if end > self.data.len() {
            return Err(LoadError::OutOfRange {
                start,
                len: program.len(),
            });
        }
        self.data[begin..end].copy_from_slice(program);
        Ok(())
    }

    /// Loads a whitespace-separated hex listing such as `"A9 05 EA"`.
    ///
    /// Returns the number of bytes written.
    pub fn load_hex(&mut self, start: u16, listing: &str) -> Result<usize, LoadError> {
        let program = parse_hex(listing)?;
        self.load(start, &program)?;
        Ok(program.len())
    }

    /// Stores `target` little-endian at the given vector.
    pub fn set_vector(&mut self, vector: Vector, target: u16) {
        let [lo, hi] = target.to_le_bytes();
        let addr = vector.address();
        self.data[addr as usize] = lo;
        self.data[addr.wrapping_add(1) as usize] = hi;
    }

    /// Returns the whole address space as a slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn peek(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}

/// Parses whitespace-separated hex bytes.
pub fn parse_hex(listing: &str) -> Result<Vec<u8>, LoadError> {
    listing
        .split_whitespace()
        .enumerate()
        .map(|(index, token)| {
            let digits = token
                .strip_prefix("0x")
                .or_else(|| token.strip_prefix('$'))
                .unwrap_or(token);
            let invalid = || LoadError::InvalidHexByte {
                index,
                token: token.to_string(),
            };
            // from_str_radix alone would accept a leading '+'
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            u8::from_str_radix(digits, 16).map_err(|_| invalid())
        })
        .collect()
}
