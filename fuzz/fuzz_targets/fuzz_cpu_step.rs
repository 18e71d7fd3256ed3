//! Fuzz target for clocking the CPU.
//!
//! This target creates arbitrary CPU states and memory contents, raises
//! interrupts at arbitrary ticks, and clocks a bounded number of times to
//! find edge cases and panics.

#![no_main]

use arbitrary::Arbitrary;
use r6502::{Cpu, CpuConfig, FlatMemory, Vector};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    status: u8,
    indirect_jmp_page_wrap: bool,
}

/// Memory region for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Program bytes at 0x8000
    program: [u8; 64],
    /// Zero page contents
    zero_page: [u8; 256],
    /// Stack page contents
    stack_page: [u8; 256],
}

/// Host action taken before a tick
#[derive(Debug, Arbitrary)]
enum Action {
    Clock,
    Irq,
    Nmi,
    Reset,
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
    actions: Vec<Action>,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();
    memory.set_vector(Vector::Reset, 0x8000);
    memory.set_vector(Vector::Irq, 0x8010);
    memory.set_vector(Vector::Nmi, 0x8020);

    let _ = memory.load(0x8000, &input.memory.program);
    let _ = memory.load(0x0000, &input.memory.zero_page);
    let _ = memory.load(0x0100, &input.memory.stack_page);

    let config = CpuConfig {
        indirect_jmp_page_wrap: input.cpu_state.indirect_jmp_page_wrap,
    };
    let mut cpu = Cpu::with_config(memory, config);
    cpu.set_pc(0x8000);
    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_status(input.cpu_state.status);

    for action in input.actions.iter().take(4096) {
        match action {
            Action::Clock => {}
            Action::Irq => cpu.irq(),
            Action::Nmi => cpu.nmi(),
            Action::Reset => cpu.reset(),
        }

        let before = cpu.clock_count();
        cpu.clock();

        // Every tick counts exactly once and the countdown stays bounded
        assert_eq!(cpu.clock_count(), before + 1);
        assert!(cpu.cycles_remaining() <= 8);
    }

    // Disassembly after execution must not disturb the bus
    let snapshot = cpu.memory().clone();
    let _ = cpu.disassemble(0x0000, 0xFFFF);
    assert_eq!(cpu.memory().as_slice(), snapshot.as_slice());
});
