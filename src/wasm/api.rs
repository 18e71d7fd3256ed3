//! WASM API for the 6502 core.
//!
//! Provides JavaScript-callable interfaces for CPU control, state inspection,
//! memory access and disassembly.

use crate::disassembler::{decode_range, format_listing};
use crate::{Cpu, Flag, FlatMemory, MemoryBus, Vector};
use wasm_bindgen::prelude::*;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl From<crate::LoadError> for JsError {
    fn from(err: crate::LoadError) -> Self {
        JsError::new(&err.to_string())
    }
}

/// Main emulator interface for JavaScript
#[wasm_bindgen]
pub struct Emulator6502 {
    cpu: Cpu<FlatMemory>,
}

impl Default for Emulator6502 {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl Emulator6502 {
    /// Create an emulator over 64KB of zeroed RAM
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Emulator6502 {
            cpu: Cpu::new(FlatMemory::new()),
        }
    }

    // Execution

    /// Advance one clock tick
    pub fn clock(&mut self) {
        self.cpu.clock();
    }

    /// True at an instruction boundary
    pub fn complete(&self) -> bool {
        self.cpu.complete()
    }

    /// Execute a single instruction and return its cycle count
    pub fn step(&mut self) -> u32 {
        self.cpu.step() as u32
    }

    /// Execute whole instructions for at least `cycles` cycles
    pub fn run_for_cycles(&mut self, cycles: u32) -> u32 {
        self.cpu.run_for_cycles(cycles as u64) as u32
    }

    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    pub fn irq(&mut self) {
        self.cpu.irq();
    }

    pub fn nmi(&mut self) {
        self.cpu.nmi();
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status()
    }

    #[wasm_bindgen(getter)]
    pub fn clock_count(&self) -> f64 {
        self.cpu.clock_count() as f64 // JavaScript numbers have no u64
    }

    // Flag getters
    #[wasm_bindgen(getter)]
    pub fn flag_n(&self) -> bool {
        self.cpu.flag(Flag::Negative)
    }

    #[wasm_bindgen(getter)]
    pub fn flag_v(&self) -> bool {
        self.cpu.flag(Flag::Overflow)
    }

    #[wasm_bindgen(getter)]
    pub fn flag_d(&self) -> bool {
        self.cpu.flag(Flag::Decimal)
    }

    #[wasm_bindgen(getter)]
    pub fn flag_i(&self) -> bool {
        self.cpu.flag(Flag::InterruptDisable)
    }

    #[wasm_bindgen(getter)]
    pub fn flag_z(&self) -> bool {
        self.cpu.flag(Flag::Zero)
    }

    #[wasm_bindgen(getter)]
    pub fn flag_c(&self) -> bool {
        self.cpu.flag(Flag::Carry)
    }

    /// Set the program counter
    pub fn set_pc(&mut self, addr: u16) {
        self.cpu.set_pc(addr);
    }

    // Memory access methods

    /// Read a single byte without side effects
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.cpu.memory().peek(addr)
    }

    /// Write a single byte to memory
    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.cpu.memory_mut().write(addr, value);
    }

    /// Read a 256-byte page from memory (for efficient display)
    pub fn get_memory_page(&self, page: u8) -> Vec<u8> {
        let start = (page as usize) << 8;
        self.cpu.memory().as_slice()[start..start + 0x100].to_vec()
    }

    /// Copy program bytes into memory
    pub fn load_program(&mut self, program: &[u8], start_addr: u16) -> Result<(), JsError> {
        self.cpu.memory_mut().load(start_addr, program)?;
        Ok(())
    }

    /// Load a whitespace-separated hex listing, returning the byte count
    pub fn load_hex(&mut self, listing: &str, start_addr: u16) -> Result<u32, JsError> {
        let len = self.cpu.memory_mut().load_hex(start_addr, listing)?;
        Ok(len as u32)
    }

    /// Point the reset vector at `target`
    pub fn set_reset_vector(&mut self, target: u16) {
        self.cpu.memory_mut().set_vector(Vector::Reset, target);
    }

    pub fn set_irq_vector(&mut self, target: u16) {
        self.cpu.memory_mut().set_vector(Vector::Irq, target);
    }

    pub fn set_nmi_vector(&mut self, target: u16) {
        self.cpu.memory_mut().set_vector(Vector::Nmi, target);
    }

    /// Disassemble `[start, stop]` as `"$XXXX: TEXT"` lines
    pub fn disassemble(&self, start: u16, stop: u16) -> js_sys::Array {
        decode_range(self.cpu.memory(), start, stop)
            .iter()
            .map(|instr| JsValue::from_str(&format_listing(instr)))
            .collect()
    }
}
