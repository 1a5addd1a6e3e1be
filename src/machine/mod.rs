//! LS-8 virtual machine: an 8-bit register machine with a shared
//! program/stack address space.
//!
//! Programs arrive through the [`loader`] text format and print through an
//! [`output::OutputSink`] supplied by the caller.
//!
//! # Architecture
//!
//! - **Memory**: 256 bytes, zero-initialized, shared by program and stack
//! - **Registers**: 8 general-purpose 8-bit registers; register 2 doubles as
//!   the return-address register for CALL/RET
//! - **Instruction format**: 1 opcode byte plus two operand slots, of which
//!   an instruction uses zero, one, or two
//! - **Execution model**: fetch at PC, decode, dispatch; each handler
//!   reports where the cycle continues or that the machine halted
//! - **Stack**: full-descending from one past the top of memory
//!
//! # Modules
//!
//! - [`cpu`]: Machine state and the instruction cycle
//! - [`errors`]: Load and execution error types
//! - [`isa`]: Instruction set definition and opcode mappings
//! - [`loader`]: Program text parsing
//! - [`output`]: Output sink for printed register values

pub mod cpu;
pub mod errors;
pub mod isa;
pub mod loader;
pub mod output;
