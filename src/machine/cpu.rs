//! Machine state and the instruction cycle.
//!
//! The CPU executes one instruction per step: fetch the opcode byte at the
//! PC together with both operand slots, decode, dispatch through a single
//! match, then apply the handler's outcome. All register arithmetic wraps
//! modulo 256.

use crate::machine::errors::MachineError;
use crate::machine::isa::Opcode;
use crate::machine::output::OutputSink;

mod alu;
mod memory;
mod registers;

use memory::Memory;
use registers::RegisterFile;

pub use memory::MEMORY_SIZE;
pub use registers::{REGISTER_COUNT, RETURN_ADDRESS_REGISTER};

/// Execution state of the machine.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CpuState {
    /// The instruction cycle is making progress.
    Running,
    /// A HLT instruction executed. Terminal.
    Halted,
}

/// Outcome of one executed instruction.
///
/// Ordinary instructions continue one instruction further along; CALL and
/// RET continue at an absolute target. Keeping the jump explicit means a
/// handler cannot smuggle control flow through a byte-count delta.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Step {
    /// Resume the cycle with the PC set to this address.
    Continue(usize),
    /// Stop the machine. The PC keeps the address of the halting
    /// instruction.
    Halt,
}

/// The LS-8 machine: memory, registers and both control registers, owned as
/// one unit by the instruction cycle.
pub struct Cpu {
    /// Program and stack share this 256-byte address space.
    memory: Memory,
    /// Eight general-purpose registers.
    registers: RegisterFile,
    /// Address of the next instruction to fetch.
    pc: usize,
    /// Top of the full-descending stack; `MEMORY_SIZE` when empty.
    sp: usize,
    /// Current execution state.
    state: CpuState,
    /// When set, a trace line is printed before each fetch.
    trace: bool,
}

impl Cpu {
    /// Creates a machine with zeroed memory and registers.
    pub fn new() -> Self {
        Self {
            memory: Memory::new(),
            registers: RegisterFile::new(),
            pc: 0,
            sp: MEMORY_SIZE,
            state: CpuState::Running,
            trace: false,
        }
    }

    /// Copies a program into memory starting at address 0.
    pub fn load(&mut self, program: &[u8]) -> Result<(), MachineError> {
        if program.len() > MEMORY_SIZE {
            return Err(MachineError::ProgramTooLarge {
                size: program.len(),
                capacity: MEMORY_SIZE,
            });
        }
        for (address, byte) in program.iter().enumerate() {
            self.memory.write(address, *byte)?;
        }
        Ok(())
    }

    /// Enables or disables the per-step trace line.
    pub fn set_trace(&mut self, enabled: bool) {
        self.trace = enabled;
    }

    /// Current execution state.
    pub fn state(&self) -> CpuState {
        self.state
    }

    /// Address of the next instruction to fetch.
    pub fn pc(&self) -> usize {
        self.pc
    }

    /// Current stack pointer.
    pub fn sp(&self) -> usize {
        self.sp
    }

    /// Value of register `index`.
    pub fn register(&self, index: u8) -> Result<u8, MachineError> {
        self.registers.get(index)
    }

    /// Runs the instruction cycle until the machine halts or a fatal error
    /// surfaces.
    pub fn run<O: OutputSink>(&mut self, output: &mut O) -> Result<(), MachineError> {
        while self.state == CpuState::Running {
            if self.trace {
                println!("{}", self.trace_line());
            }
            self.step(output)?;
        }
        Ok(())
    }

    /// Executes a single instruction.
    ///
    /// Fetches the opcode byte and both operand slots regardless of how many
    /// operands the instruction uses, so the whole fetch window must lie in
    /// memory.
    pub fn step<O: OutputSink>(&mut self, output: &mut O) -> Result<(), MachineError> {
        let opcode_byte = self.memory.read(self.pc)?;
        let operand_a = self.memory.read(self.pc + 1)?;
        let operand_b = self.memory.read(self.pc + 2)?;

        let opcode =
            Opcode::try_from(opcode_byte).map_err(|opcode| MachineError::UnknownOpcode {
                opcode,
                address: self.pc,
            })?;

        match self.exec(opcode, operand_a, operand_b, output)? {
            Step::Continue(next_pc) => self.pc = next_pc,
            Step::Halt => self.state = CpuState::Halted,
        }
        Ok(())
    }

    fn exec<O: OutputSink>(
        &mut self,
        opcode: Opcode,
        operand_a: u8,
        operand_b: u8,
        output: &mut O,
    ) -> Result<Step, MachineError> {
        match opcode {
            Opcode::Halt => self.op_halt(),
            Opcode::LoadImmediate => self.op_load_immediate(operand_a, operand_b),
            Opcode::PrintRegister => self.op_print_register(operand_a, output),
            Opcode::Multiply => self.op_multiply(operand_a, operand_b),
            Opcode::Add => self.op_add(operand_a, operand_b),
            Opcode::Push => self.op_push(operand_a),
            Opcode::Pop => self.op_pop(operand_a),
            Opcode::Call => self.op_call(operand_a),
            Opcode::Return => self.op_return(),
        }
    }

    fn op_halt(&mut self) -> Result<Step, MachineError> {
        Ok(Step::Halt)
    }

    fn op_load_immediate(&mut self, reg: u8, value: u8) -> Result<Step, MachineError> {
        self.registers.set(reg, value)?;
        Ok(Step::Continue(self.pc + 3))
    }

    fn op_print_register<O: OutputSink>(
        &mut self,
        reg: u8,
        output: &mut O,
    ) -> Result<Step, MachineError> {
        let value = self.registers.get(reg)?;
        output.emit(value);
        Ok(Step::Continue(self.pc + 2))
    }

    fn op_multiply(&mut self, ra: u8, rb: u8) -> Result<Step, MachineError> {
        alu::execute(Opcode::Multiply, &mut self.registers, ra, rb)?;
        Ok(Step::Continue(self.pc + 3))
    }

    fn op_add(&mut self, ra: u8, rb: u8) -> Result<Step, MachineError> {
        alu::execute(Opcode::Add, &mut self.registers, ra, rb)?;
        Ok(Step::Continue(self.pc + 3))
    }

    fn op_push(&mut self, reg: u8) -> Result<Step, MachineError> {
        self.push_register(reg)?;
        Ok(Step::Continue(self.pc + 2))
    }

    fn op_pop(&mut self, reg: u8) -> Result<Step, MachineError> {
        self.pop_register(reg)?;
        Ok(Step::Continue(self.pc + 2))
    }

    fn op_call(&mut self, reg: u8) -> Result<Step, MachineError> {
        // Return address first, then the push, then the target read: a CALL
        // through register 2 therefore jumps to the return address.
        // The cast fits in a byte because the fetch of PC+2 bounds-checked it.
        let return_address = (self.pc + 2) as u8;
        self.registers.set(RETURN_ADDRESS_REGISTER, return_address)?;
        self.push_register(RETURN_ADDRESS_REGISTER)?;
        let target = self.registers.get(reg)?;
        Ok(Step::Continue(target as usize))
    }

    fn op_return(&mut self) -> Result<Step, MachineError> {
        self.pop_register(RETURN_ADDRESS_REGISTER)?;
        let target = self.registers.get(RETURN_ADDRESS_REGISTER)?;
        Ok(Step::Continue(target as usize))
    }

    /// The bytes-on-stack push shared by PUSH and CALL.
    fn push_register(&mut self, reg: u8) -> Result<(), MachineError> {
        let sp = self
            .sp
            .checked_sub(1)
            .ok_or(MachineError::StackOverflow { sp: self.sp })?;
        let value = self.registers.get(reg)?;
        self.memory.write(sp, value)?;
        self.sp = sp;
        Ok(())
    }

    /// The inverse pop shared by POP and RET.
    fn pop_register(&mut self, reg: u8) -> Result<(), MachineError> {
        if self.sp >= MEMORY_SIZE {
            return Err(MachineError::StackUnderflow { sp: self.sp });
        }
        let value = self.memory.read(self.sp)?;
        self.registers.set(reg, value)?;
        self.sp += 1;
        Ok(())
    }

    /// Renders one trace line: the PC, the three bytes in the fetch window,
    /// then every register, all as two-digit uppercase hex.
    pub fn trace_line(&self) -> String {
        let mut line = format!(
            "TRACE: {:02X} | {:02X} {:02X} {:02X} |",
            self.pc,
            self.peek(self.pc),
            self.peek(self.pc + 1),
            self.peek(self.pc + 2),
        );
        for index in 0..REGISTER_COUNT as u8 {
            line.push_str(&format!(" {:02X}", self.registers.get(index).unwrap_or(0)));
        }
        line
    }

    /// Reads a byte for diagnostics; out-of-range addresses render as zero.
    fn peek(&self, address: usize) -> u8 {
        self.memory.read(address).unwrap_or(0)
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}
