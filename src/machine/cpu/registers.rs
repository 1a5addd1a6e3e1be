use crate::machine::errors::MachineError;

/// Number of general-purpose registers.
pub const REGISTER_COUNT: usize = 8;

/// Register the CALL/RET mechanism uses for the return address. A
/// convention of the instruction set, not a hardware restriction: programs
/// may use it freely between calls.
pub const RETURN_ADDRESS_REGISTER: u8 = 2;

/// Register file holding the eight general-purpose registers.
///
/// Registers are unsigned bytes, zero-initialized. The file only stores and
/// bounds-checks; wrapping arithmetic on the values is the ALU's business.
pub(super) struct RegisterFile {
    regs: [u8; REGISTER_COUNT],
}

impl RegisterFile {
    /// Creates a zeroed register file.
    pub(super) fn new() -> Self {
        Self {
            regs: [0; REGISTER_COUNT],
        }
    }

    /// Returns the value in register `index`.
    ///
    /// Returns [`MachineError::RegisterOutOfBounds`] if `index` is outside
    /// the register file.
    pub(super) fn get(&self, index: u8) -> Result<u8, MachineError> {
        self.regs
            .get(index as usize)
            .copied()
            .ok_or(MachineError::RegisterOutOfBounds(index))
    }

    /// Stores `value` into register `index`.
    ///
    /// Returns [`MachineError::RegisterOutOfBounds`] if `index` is outside
    /// the register file.
    pub(super) fn set(&mut self, index: u8, value: u8) -> Result<(), MachineError> {
        let slot = self
            .regs
            .get_mut(index as usize)
            .ok_or(MachineError::RegisterOutOfBounds(index))?;
        *slot = value;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_start_zeroed() {
        let regs = RegisterFile::new();
        for index in 0..REGISTER_COUNT as u8 {
            assert_eq!(regs.get(index).unwrap(), 0);
        }
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut regs = RegisterFile::new();
        regs.set(0, 42).unwrap();
        regs.set(7, 255).unwrap();
        assert_eq!(regs.get(0).unwrap(), 42);
        assert_eq!(regs.get(7).unwrap(), 255);
    }

    #[test]
    fn out_of_bounds_index_is_rejected() {
        let mut regs = RegisterFile::new();
        assert!(matches!(
            regs.get(REGISTER_COUNT as u8),
            Err(MachineError::RegisterOutOfBounds(8))
        ));
        assert!(matches!(
            regs.set(255, 1),
            Err(MachineError::RegisterOutOfBounds(255))
        ));
    }
}
