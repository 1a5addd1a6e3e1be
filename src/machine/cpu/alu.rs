use super::registers::RegisterFile;
use crate::machine::errors::MachineError;
use crate::machine::isa::Opcode;

/// Executes a register-to-register arithmetic operation.
///
/// The result lands in `ra` and all arithmetic wraps modulo 256. The unit is
/// keyed by opcode and rejects any opcode without an arithmetic meaning.
pub(super) fn execute(
    op: Opcode,
    registers: &mut RegisterFile,
    ra: u8,
    rb: u8,
) -> Result<(), MachineError> {
    let lhs = registers.get(ra)?;
    let rhs = registers.get(rb)?;
    let value = match op {
        Opcode::Add => lhs.wrapping_add(rhs),
        Opcode::Multiply => lhs.wrapping_mul(rhs),
        other => return Err(MachineError::UnsupportedAluOp(other)),
    };
    registers.set(ra, value)
}
