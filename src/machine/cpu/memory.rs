use crate::machine::errors::MachineError;

/// Number of addressable bytes.
pub const MEMORY_SIZE: usize = 256;

/// The 256-byte address space, shared by program text and the stack.
///
/// Cells are zero-initialized. There is no growth and no protection; the
/// only failure mode is an address outside `[0, 255]`.
pub(super) struct Memory {
    cells: [u8; MEMORY_SIZE],
}

impl Memory {
    /// Creates zeroed memory.
    pub(super) fn new() -> Self {
        Self {
            cells: [0; MEMORY_SIZE],
        }
    }

    /// Returns the byte at `address`.
    ///
    /// Returns [`MachineError::AddressOutOfBounds`] if `address` is outside
    /// the address space.
    pub(super) fn read(&self, address: usize) -> Result<u8, MachineError> {
        self.cells
            .get(address)
            .copied()
            .ok_or(MachineError::AddressOutOfBounds(address))
    }

    /// Stores `value` at `address`.
    ///
    /// Returns [`MachineError::AddressOutOfBounds`] if `address` is outside
    /// the address space.
    pub(super) fn write(&mut self, address: usize, value: u8) -> Result<(), MachineError> {
        let cell = self
            .cells
            .get_mut(address)
            .ok_or(MachineError::AddressOutOfBounds(address))?;
        *cell = value;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_starts_zeroed() {
        let memory = Memory::new();
        assert_eq!(memory.read(0).unwrap(), 0);
        assert_eq!(memory.read(MEMORY_SIZE - 1).unwrap(), 0);
    }

    #[test]
    fn write_then_read_round_trips() {
        let mut memory = Memory::new();
        memory.write(10, 0xAB).unwrap();
        assert_eq!(memory.read(10).unwrap(), 0xAB);
    }

    #[test]
    fn out_of_bounds_access_is_rejected() {
        let mut memory = Memory::new();
        assert!(matches!(
            memory.read(MEMORY_SIZE),
            Err(MachineError::AddressOutOfBounds(_))
        ));
        assert!(matches!(
            memory.write(usize::MAX, 0),
            Err(MachineError::AddressOutOfBounds(_))
        ));
    }
}
