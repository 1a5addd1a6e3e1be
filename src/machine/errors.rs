use crate::machine::isa::Opcode;
use ls8_derive::Error;

/// Errors that can occur while loading or executing a program.
#[derive(Debug, Error)]
pub enum MachineError {
    /// Memory access outside the 256-byte address space.
    #[error("memory address {0} out of bounds")]
    AddressOutOfBounds(usize),
    /// Register index outside the register file.
    #[error("register index {0} out of bounds")]
    RegisterOutOfBounds(u8),
    /// Opcode routed to the arithmetic unit without an arithmetic meaning.
    #[error("unsupported ALU operation {0}")]
    UnsupportedAluOp(Opcode),
    /// Fetched byte that names no instruction.
    #[error("instruction {opcode:#010b} not found at address {address}")]
    UnknownOpcode { opcode: u8, address: usize },
    /// Push with the stack already at the bottom of memory.
    #[error("stack overflow: push with SP at {sp}")]
    StackOverflow { sp: usize },
    /// Pop with the stack already empty.
    #[error("stack underflow: pop with SP at {sp}")]
    StackUnderflow { sp: usize },
    /// Program source file could not be read.
    #[error("cannot read program {path}: {reason}")]
    ProgramUnreadable { path: String, reason: String },
    /// Program with more bytes than memory can hold.
    #[error("program is {size} bytes but memory holds {capacity}")]
    ProgramTooLarge { size: usize, capacity: usize },
}
