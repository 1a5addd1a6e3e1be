//! LS-8 emulator library.
//!
//! Provides the machine core (memory, registers, instruction cycle) and the
//! peripheral glue around it: program loading, output, logging.

pub mod machine;
pub mod utils;
