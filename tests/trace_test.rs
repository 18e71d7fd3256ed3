//! Tests for the per-instruction trace hook.

use r6502::{AddressingMode, Cpu, FlatMemory, LogTracer, TraceEvent};
use std::cell::RefCell;
use std::rc::Rc;

fn setup_cpu(program: &[u8]) -> Cpu<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.load(0x8000, program).unwrap();
    let mut cpu = Cpu::new(memory);
    cpu.set_pc(0x8000);
    cpu
}

fn recording_cpu(program: &[u8]) -> (Cpu<FlatMemory>, Rc<RefCell<Vec<TraceEvent>>>) {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    let mut cpu = setup_cpu(program);
    cpu.set_tracer(Box::new(move |e: &TraceEvent| sink.borrow_mut().push(e.clone())));
    (cpu, events)
}

#[test]
fn test_one_event_per_instruction() {
    // LDA #$01; LDX $10; NOP
    let (mut cpu, events) = recording_cpu(&[0xA9, 0x01, 0xA6, 0x10, 0xEA]);

    cpu.run_for_cycles(7);

    let events = events.borrow();
    let pcs: Vec<u16> = events.iter().map(|e| e.pc).collect();
    assert_eq!(pcs, vec![0x8000, 0x8002, 0x8004]);
    assert_eq!(events[1].mnemonic, "LDX");
    assert_eq!(events[1].addressing_mode, AddressingMode::ZeroPage);
    assert_eq!(events[1].cycles, 3);
}

#[test]
fn test_event_captures_state_before_execution() {
    let (mut cpu, events) = recording_cpu(&[0xA9, 0x55]);
    cpu.set_a(0x11);

    cpu.step();

    let event = &events.borrow()[0];
    assert_eq!(event.a, 0x11);
    assert_eq!(event.clock_count, 0);
    assert_eq!(event.opcode, 0xA9);
    assert_eq!(cpu.a(), 0x55);
}

#[test]
fn test_clear_tracer_stops_events() {
    let (mut cpu, events) = recording_cpu(&[0xEA, 0xEA]);

    cpu.step();
    cpu.clear_tracer();
    cpu.step();

    assert_eq!(events.borrow().len(), 1);
}

#[test]
fn test_tracer_does_not_change_results() {
    let program = [0xA9, 0x05, 0x69, 0x03, 0x85, 0x10];

    let mut plain = setup_cpu(&program);
    let mut traced = setup_cpu(&program);
    traced.set_tracer(Box::new(LogTracer));

    assert_eq!(plain.run_for_cycles(8), traced.run_for_cycles(8));
    assert_eq!(format!("{:?}", plain), format!("{:?}", traced));
    assert_eq!(plain.memory().as_slice(), traced.memory().as_slice());
}
