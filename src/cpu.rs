//! # CPU State and Execution
//!
//! This module contains the `Cpu` struct representing the 6502 processor state and
//! the clock-driven execution engine.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status flags**: packed NV-BDIZC byte
//! - **Transient state**: fetched operand, opcode, effective address, branch
//!   displacement, remaining cycles and a total clock count
//!
//! ## Execution Model
//!
//! The host calls [`Cpu::clock`] once per clock tick. When no instruction is
//! in flight the tick fetches, decodes and executes the next instruction in
//! one go and loads the remaining-cycle counter with its cost; subsequent
//! ticks only count that cost down. [`Cpu::complete`] reports when the
//! counter reaches zero, i.e. the engine is at an instruction boundary.
//!
//! Interrupts requested mid-instruction are latched and taken at the next
//! boundary.

use std::collections::BTreeMap;
use std::fmt;

use crate::flags::{Flag, StatusFlags};
use crate::instructions;
use crate::trace::{TraceEvent, Tracer};
use crate::{disassembler, AddressingMode, CpuConfig, MemoryBus, OPCODE_TABLE};

/// Base address of the hardware stack page.
pub const STACK_BASE: u16 = 0x0100;

/// Non-maskable interrupt vector.
pub const NMI_VECTOR: u16 = 0xFFFA;

/// Reset vector.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Interrupt request (and BRK) vector.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Stack pointer after reset.
pub const RESET_SP: u8 = 0xFD;

pub const RESET_CYCLES: u8 = 8;
pub const IRQ_CYCLES: u8 = 7;
pub const NMI_CYCLES: u8 = 8;

/// 6502 CPU state and execution context.
///
/// The CPU holds its memory bus `M` for its whole life. Pass an owned bus,
/// or `&mut bus` to keep ownership with the caller.
///
/// # Examples
///
/// ```
/// use r6502::{Cpu, FlatMemory, Vector};
///
/// let mut memory = FlatMemory::new();
/// memory.set_vector(Vector::Reset, 0x8000);
/// memory.load(0x8000, &[0xA9, 0x05]).unwrap(); // LDA #$05
///
/// let mut cpu = Cpu::new(memory);
/// cpu.reset();
/// cpu.step(); // drains the reset sequence, then runs LDA
///
/// assert_eq!(cpu.a(), 0x05);
/// assert_eq!(cpu.pc(), 0x8002);
/// assert!(cpu.complete());
/// ```
pub struct Cpu<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub(crate) sp: u8,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    pub(crate) status: StatusFlags,

    /// Operand value read by the current instruction
    pub(crate) fetched: u8,

    /// Opcode byte of the current instruction
    pub(crate) opcode: u8,

    /// Cycles left before the current instruction completes
    pub(crate) cycles: u8,

    /// Scratch result of the last arithmetic operation
    pub(crate) temp: u16,

    /// Effective address resolved for the current instruction
    pub(crate) addr_abs: u16,

    /// Sign-extended branch displacement
    pub(crate) addr_rel: u16,

    /// Total clock ticks since construction
    pub(crate) clock_count: u64,

    irq_pending: bool,
    nmi_pending: bool,

    pub(crate) config: CpuConfig,

    tracer: Option<Box<dyn Tracer>>,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> Cpu<M> {
    /// Creates a CPU with every register and counter zeroed.
    ///
    /// Nothing is read from memory; call [`Cpu::reset`] to load the reset
    /// vector and establish the power-on register values.
    pub fn new(memory: M) -> Self {
        Self::with_config(memory, CpuConfig::default())
    }

    /// Creates a CPU with explicit configuration.
    pub fn with_config(memory: M, config: CpuConfig) -> Self {
        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            sp: 0x00,
            pc: 0x0000,
            status: StatusFlags::default(),
            fetched: 0x00,
            opcode: 0x00,
            cycles: 0,
            temp: 0x0000,
            addr_abs: 0x0000,
            addr_rel: 0x0000,
            clock_count: 0,
            irq_pending: false,
            nmi_pending: false,
            config,
            tracer: None,
            memory,
        }
    }

    // ========== Clock and Interrupt Lines ==========

    /// Advances the CPU by one clock tick.
    ///
    /// At an instruction boundary this services a latched NMI or IRQ, or
    /// otherwise fetches and executes the next instruction. Every tick then
    /// counts one cycle off the in-flight instruction.
    pub fn clock(&mut self) {
        if self.cycles == 0 {
            if self.nmi_pending {
                self.nmi_pending = false;
                self.irq_pending = false;
                self.enter_interrupt(NMI_VECTOR, NMI_CYCLES);
            } else if self.irq_pending && !self.status.get(Flag::InterruptDisable) {
                self.irq_pending = false;
                self.enter_interrupt(IRQ_VECTOR, IRQ_CYCLES);
            } else {
                // A latched IRQ that is masked by now is dropped
                self.irq_pending = false;
                self.execute_next();
            }
        }

        self.clock_count += 1;
        self.cycles -= 1;
    }

    /// True when no instruction is in flight.
    pub fn complete(&self) -> bool {
        self.cycles == 0
    }

    /// Forces the CPU into its reset state.
    ///
    /// Takes effect immediately, abandoning any in-flight instruction and
    /// any latched interrupt. A, X and Y are cleared, SP becomes 0xFD, only
    /// the Unused flag is set and PC is loaded from $FFFC/$FFFD. The
    /// sequence costs 8 cycles.
    pub fn reset(&mut self) {
        self.pc = self.read_vector(RESET_VECTOR);

        self.a = 0x00;
        self.x = 0x00;
        self.y = 0x00;
        self.sp = RESET_SP;
        self.status = StatusFlags::from_bits(Flag::Unused.mask());

        self.fetched = 0x00;
        self.opcode = 0x00;
        self.temp = 0x0000;
        self.addr_abs = 0x0000;
        self.addr_rel = 0x0000;
        self.irq_pending = false;
        self.nmi_pending = false;

        self.cycles = RESET_CYCLES;
        log::debug!("reset: pc=${:04X}", self.pc);
    }

    /// Requests a maskable interrupt.
    ///
    /// Ignored while the Interrupt Disable flag is set. Otherwise pushes PC
    /// and status (Break clear, Unused set), sets Interrupt Disable and jumps
    /// through $FFFE/$FFFF, costing 7 cycles. A request made mid-instruction,
    /// or while another request is still latched, is held for the next
    /// boundary tick so a pending NMI keeps its priority.
    pub fn irq(&mut self) {
        if !self.complete() || self.interrupt_pending() {
            self.irq_pending = true;
            return;
        }

        if self.status.get(Flag::InterruptDisable) {
            log::trace!("irq masked at pc=${:04X}", self.pc);
            return;
        }

        self.enter_interrupt(IRQ_VECTOR, IRQ_CYCLES);
    }

    /// Requests a non-maskable interrupt.
    ///
    /// Same sequence as [`Cpu::irq`] through $FFFA/$FFFB, costing 8 cycles,
    /// and never masked.
    pub fn nmi(&mut self) {
        if !self.complete() || self.interrupt_pending() {
            self.nmi_pending = true;
            return;
        }

        self.enter_interrupt(NMI_VECTOR, NMI_CYCLES);
    }

    /// True if an IRQ or NMI is latched for the next boundary tick.
    pub fn interrupt_pending(&self) -> bool {
        self.irq_pending || self.nmi_pending
    }

    // ========== Stepping Helpers ==========

    /// Runs one whole instruction (or one latched interrupt entry).
    ///
    /// Any sequence already in flight, such as the 8 reset cycles, is
    /// finished first and not counted. Returns the cycles taken.
    pub fn step(&mut self) -> u64 {
        while !self.complete() {
            self.clock();
        }

        let start = self.clock_count;
        loop {
            self.clock();
            if self.complete() {
                break;
            }
        }
        self.clock_count - start
    }

    /// Runs whole instructions until at least `cycle_budget` cycles elapsed.
    ///
    /// Returns the cycles actually consumed, which may overshoot the budget
    /// by the tail of the last instruction.
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> u64 {
        let start = self.clock_count;
        let target = start + cycle_budget;

        while self.clock_count < target {
            self.clock();
        }
        while !self.complete() {
            self.clock();
        }

        self.clock_count - start
    }

    // ========== Disassembly ==========

    /// Disassembles `[start, stop]` without touching CPU or bus state.
    ///
    /// See [`disassembler::disassemble`].
    pub fn disassemble(&self, start: u16, stop: u16) -> BTreeMap<u16, String> {
        disassembler::disassemble(&self.memory, start, stop)
    }

    // ========== Tracing ==========

    /// Installs a hook called once per fetched instruction.
    pub fn set_tracer(&mut self, tracer: Box<dyn Tracer>) {
        self.tracer = Some(tracer);
    }

    /// Removes the trace hook.
    pub fn clear_tracer(&mut self) {
        self.tracer = None;
    }

    // ========== Internals ==========

    fn execute_next(&mut self) {
        let start_pc = self.pc;
        self.opcode = self.memory.read(self.pc);
        self.status.set(Flag::Unused, true);
        self.pc = self.pc.wrapping_add(1);

        let metadata = OPCODE_TABLE[self.opcode as usize];
        self.cycles = metadata.base_cycles;

        if let Some(tracer) = self.tracer.as_mut() {
            let event = TraceEvent {
                clock_count: self.clock_count,
                pc: start_pc,
                opcode: self.opcode,
                mnemonic: metadata.mnemonic,
                addressing_mode: metadata.addressing_mode,
                cycles: metadata.base_cycles,
                a: self.a,
                x: self.x,
                y: self.y,
                sp: self.sp,
                status: self.status,
            };
            tracer.trace(&event);
        }

        let page_crossed = self.resolve(metadata.addressing_mode);
        let page_sensitive = instructions::execute(self, metadata.operation);
        if page_crossed && page_sensitive {
            self.cycles += 1;
        }

        self.cycles = self.cycles.max(1);
        self.status.set(Flag::Unused, true);
    }

    fn enter_interrupt(&mut self, vector: u16, cycles: u8) {
        self.push_word(self.pc);

        self.status.set(Flag::Break, false);
        self.status.set(Flag::Unused, true);
        self.push(self.status.bits());
        self.status.set(Flag::InterruptDisable, true);

        self.pc = self.read_vector(vector);
        self.cycles = cycles;
        log::debug!("interrupt via ${:04X}: pc=${:04X}", vector, self.pc);
    }

    pub(crate) fn read_vector(&mut self, vector: u16) -> u16 {
        let lo = self.memory.read(vector) as u16;
        let hi = self.memory.read(vector.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Reads the operand of the current instruction into `fetched`.
    ///
    /// For implied instructions `fetched` already holds A.
    pub(crate) fn fetch(&mut self) -> u8 {
        if self.current_mode() != AddressingMode::Implied {
            self.fetched = self.memory.read(self.addr_abs);
        }
        self.fetched
    }

    /// Stores a read-modify-write result to A or memory, by addressing mode.
    pub(crate) fn write_back(&mut self, value: u8) {
        if self.current_mode() == AddressingMode::Implied {
            self.a = value;
        } else {
            self.memory.write(self.addr_abs, value);
        }
    }

    fn current_mode(&self) -> AddressingMode {
        OPCODE_TABLE[self.opcode as usize].addressing_mode
    }

    pub(crate) fn push(&mut self, value: u8) {
        self.memory.write(STACK_BASE | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    pub(crate) fn pop(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(STACK_BASE | self.sp as u16)
    }

    /// Pushes high byte then low byte.
    pub(crate) fn push_word(&mut self, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.push(hi);
        self.push(lo);
    }

    pub(crate) fn pop_word(&mut self) -> u16 {
        let lo = self.pop();
        let hi = self.pop();
        u16::from_le_bytes([lo, hi])
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the status register as a packed byte (NV-BDIZC).
    pub fn status(&self) -> u8 {
        self.status.bits()
    }

    /// Returns the status register.
    pub fn flags(&self) -> StatusFlags {
        self.status
    }

    /// Returns true if `flag` is set.
    pub fn flag(&self, flag: Flag) -> bool {
        self.status.get(flag)
    }

    /// Cycles left on the in-flight instruction; 0 at a boundary.
    pub fn cycles_remaining(&self) -> u8 {
        self.cycles
    }

    /// Total clock ticks since construction.
    pub fn clock_count(&self) -> u64 {
        self.clock_count
    }

    /// Opcode byte of the most recently fetched instruction.
    pub fn opcode(&self) -> u8 {
        self.opcode
    }

    /// Operand value the last instruction worked on.
    pub fn fetched(&self) -> u8 {
        self.fetched
    }

    /// Effective address resolved for the last instruction.
    pub fn addr_abs(&self) -> u16 {
        self.addr_abs
    }

    /// Sign-extended displacement of the last branch.
    pub fn addr_rel(&self) -> u16 {
        self.addr_rel
    }

    pub fn config(&self) -> &CpuConfig {
        &self.config
    }

    /// Returns a shared reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Consumes the CPU and hands back its memory bus.
    pub fn into_memory(self) -> M {
        self.memory
    }

    // ========== Register Setters ==========

    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    pub fn set_status(&mut self, value: u8) {
        self.status = StatusFlags::from_bits(value);
    }

    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        self.status.set(flag, value);
    }
}

impl<M: MemoryBus> fmt::Debug for Cpu<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cpu")
            .field("a", &self.a)
            .field("x", &self.x)
            .field("y", &self.y)
            .field("sp", &self.sp)
            .field("pc", &self.pc)
            .field("status", &self.status)
            .field("cycles", &self.cycles)
            .field("clock_count", &self.clock_count)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FlatMemory, Vector};

    fn setup_cpu(program: &[u8]) -> Cpu<FlatMemory> {
        let mut memory = FlatMemory::new();
        memory.set_vector(Vector::Reset, 0x8000);
        memory.load(0x8000, program).unwrap();
        Cpu::new(memory)
    }

    #[test]
    fn test_new_is_zeroed() {
        let cpu = setup_cpu(&[]);

        assert_eq!(cpu.pc(), 0x0000);
        assert_eq!(cpu.sp(), 0x00);
        assert_eq!(cpu.a(), 0x00);
        assert_eq!(cpu.status(), 0x00);
        assert_eq!(cpu.clock_count(), 0);
        assert!(cpu.complete());
    }

    #[test]
    fn test_reset_state() {
        let mut cpu = setup_cpu(&[]);
        cpu.set_a(0x11);
        cpu.set_x(0x22);
        cpu.set_y(0x33);
        cpu.set_status(0xFF);

        cpu.reset();

        assert_eq!(cpu.pc(), 0x8000);
        assert_eq!(cpu.sp(), 0xFD);
        assert_eq!((cpu.a(), cpu.x(), cpu.y()), (0, 0, 0));
        assert_eq!(cpu.status(), Flag::Unused.mask());
        assert_eq!(cpu.cycles_remaining(), 8);

        for _ in 0..8 {
            assert!(!cpu.complete());
            cpu.clock();
        }
        assert!(cpu.complete());
        assert_eq!(cpu.clock_count(), 8);
    }

    #[test]
    fn test_clock_counts_down() {
        // LDA $1234 (4 cycles)
        let mut cpu = setup_cpu(&[0xAD, 0x34, 0x12]);
        cpu.set_pc(0x8000);

        cpu.clock();
        assert_eq!(cpu.pc(), 0x8003);
        assert_eq!(cpu.cycles_remaining(), 3);
        cpu.clock();
        cpu.clock();
        assert!(!cpu.complete());
        cpu.clock();
        assert!(cpu.complete());
    }

    #[test]
    fn test_stack_wraps_within_page() {
        let mut cpu = setup_cpu(&[]);
        cpu.set_sp(0x00);
        cpu.push(0xAB);
        assert_eq!(cpu.sp(), 0xFF);
        assert_eq!(cpu.memory().peek(0x0100), 0xAB);
        assert_eq!(cpu.pop(), 0xAB);
        assert_eq!(cpu.sp(), 0x00);
    }

    #[test]
    fn test_push_word_order() {
        let mut cpu = setup_cpu(&[]);
        cpu.set_sp(0xFF);
        cpu.push_word(0x1234);
        assert_eq!(cpu.memory().peek(0x01FF), 0x12);
        assert_eq!(cpu.memory().peek(0x01FE), 0x34);
        assert_eq!(cpu.pop_word(), 0x1234);
    }

    #[test]
    fn test_run_for_cycles_stops_on_boundary() {
        let mut cpu = setup_cpu(&[0xEA; 16]);
        cpu.set_pc(0x8000);

        // 5 NOPs = 10 cycles; a budget of 9 finishes the fifth
        assert_eq!(cpu.run_for_cycles(9), 10);
        assert!(cpu.complete());
        assert_eq!(cpu.pc(), 0x8005);
    }
}
