//! Runs a multiply-by-repeated-addition program and traces every instruction.
//!
//! ```text
//! RUST_LOG=trace cargo run --example multiply
//! ```

use r6502::{Cpu, FlatMemory, LoadError, LogTracer, MemoryBus, Vector};

/// 10 * 3, result stored at $0002
const PROGRAM: &str = "A2 0A 8E 00 00 A2 03 8E 01 00 AC 00 00 A9 00 18 6D 01 00 88 D0 FA 8D 02 00 EA EA EA";
const ORIGIN: u16 = 0x8000;

fn main() -> Result<(), LoadError> {
    env_logger::init();

    let mut memory = FlatMemory::new();
    let len = memory.load_hex(ORIGIN, PROGRAM)?;
    memory.set_vector(Vector::Reset, ORIGIN);

    let mut cpu = Cpu::new(memory);

    for (addr, text) in cpu.disassemble(ORIGIN, ORIGIN + len as u16 - 1) {
        println!("${:04X}: {}", addr, text);
    }

    cpu.set_tracer(Box::new(LogTracer));
    cpu.reset();

    // The program idles on the trailing NOPs
    let idle = ORIGIN + len as u16 - 3;
    while cpu.pc() < idle || !cpu.complete() {
        cpu.clock();
    }

    println!();
    println!(
        "{} * {} = {} in {} cycles",
        cpu.memory().peek(0x0000),
        cpu.memory().peek(0x0001),
        cpu.memory().peek(0x0002),
        cpu.clock_count()
    );
    println!("{:?}", cpu);

    Ok(())
}
