//! WebAssembly bindings for the r6502 core.
//!
//! Exposes a JavaScript-callable wrapper so the CPU can be driven clock by
//! clock from a browser.

pub mod api;

pub use api::Emulator6502;
