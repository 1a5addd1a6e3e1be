//! Instruction set definition and opcode mappings.

use std::fmt;

/// An LS-8 instruction.
///
/// Each variant's discriminant is the opcode byte as it appears in program
/// memory, written in the same notation the program files use. The two bytes
/// after an opcode are its operand slots.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum Opcode {
    /// Stop the machine.
    Halt = 0b00000001,
    /// `reg[a] = b`.
    LoadImmediate = 0b10000010,
    /// Emit `reg[a]` to the output sink.
    PrintRegister = 0b01000111,
    /// `reg[a] = reg[a] * reg[b]`, wrapping.
    Multiply = 0b10100010,
    /// `reg[a] = reg[a] + reg[b]`, wrapping.
    Add = 0b10100000,
    /// Push `reg[a]` onto the stack.
    Push = 0b01000101,
    /// Pop the top of the stack into `reg[a]`.
    Pop = 0b01000110,
    /// Call the subroutine whose address is held in `reg[a]`.
    Call = 0b01010000,
    /// Return to the address saved by the matching CALL.
    Return = 0b00010001,
}

impl Opcode {
    /// Returns the assembly mnemonic, used in diagnostics.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Halt => "HLT",
            Opcode::LoadImmediate => "LDI",
            Opcode::PrintRegister => "PRN",
            Opcode::Multiply => "MUL",
            Opcode::Add => "ADD",
            Opcode::Push => "PUSH",
            Opcode::Pop => "POP",
            Opcode::Call => "CALL",
            Opcode::Return => "RET",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

impl TryFrom<u8> for Opcode {
    type Error = u8;

    /// Decodes an opcode byte, handing back the byte itself on failure so
    /// the caller can report it.
    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        match byte {
            0b00000001 => Ok(Opcode::Halt),
            0b10000010 => Ok(Opcode::LoadImmediate),
            0b01000111 => Ok(Opcode::PrintRegister),
            0b10100010 => Ok(Opcode::Multiply),
            0b10100000 => Ok(Opcode::Add),
            0b01000101 => Ok(Opcode::Push),
            0b01000110 => Ok(Opcode::Pop),
            0b01010000 => Ok(Opcode::Call),
            0b00010001 => Ok(Opcode::Return),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Opcode; 9] = [
        Opcode::Halt,
        Opcode::LoadImmediate,
        Opcode::PrintRegister,
        Opcode::Multiply,
        Opcode::Add,
        Opcode::Push,
        Opcode::Pop,
        Opcode::Call,
        Opcode::Return,
    ];

    #[test]
    fn every_opcode_byte_round_trips() {
        for op in ALL {
            assert_eq!(Opcode::try_from(op as u8), Ok(op));
        }
    }

    #[test]
    fn discriminants_are_distinct() {
        for (i, a) in ALL.iter().enumerate() {
            for b in &ALL[i + 1..] {
                assert_ne!(*a as u8, *b as u8);
            }
        }
    }

    #[test]
    fn unknown_bytes_are_rejected() {
        assert_eq!(Opcode::try_from(0b00000000), Err(0b00000000));
        assert_eq!(Opcode::try_from(0b11111111), Err(0b11111111));
    }

    #[test]
    fn mnemonics_render_through_display() {
        assert_eq!(Opcode::LoadImmediate.mnemonic(), "LDI");
        assert_eq!(Opcode::Halt.to_string(), "HLT");
        assert_eq!(Opcode::Return.to_string(), "RET");
    }
}
