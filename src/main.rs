//! LS-8 emulator CLI.
//!
//! Loads a program file into the machine and runs it to completion.
//!
//! # Usage
//! ```text
//! ls8 <program.ls8> [OPTIONS]
//! ```
//!
//! # Arguments
//! - `program.ls8`: Program file, one binary instruction byte per line
//!
//! # Options
//! - `-t, --trace`: Print a machine-state trace line before each instruction

use ls8::error;
use ls8::machine::cpu::Cpu;
use ls8::machine::loader;
use ls8::machine::output::StdoutSink;
use std::env;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage(&args[0]);
        process::exit(if args.len() < 2 { 1 } else { 0 });
    }

    let program_path = &args[1];
    let mut trace = false;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--trace" | "-t" => {
                trace = true;
                i += 1;
            }
            other => {
                error!("Unexpected argument: {}\n", other);
                print_usage(&args[0]);
                process::exit(1);
            }
        }
    }

    let program = match loader::load_file(program_path) {
        Ok(program) => program,
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    };

    let mut cpu = Cpu::new();
    if let Err(e) = cpu.load(&program) {
        error!("{e}");
        process::exit(1);
    }
    cpu.set_trace(trace);

    if let Err(e) = cpu.run(&mut StdoutSink) {
        error!("{e}");
        process::exit(1);
    }
}

const USAGE: &str = "\
LS-8 Emulator

USAGE:
    {program} <program.ls8> [OPTIONS]

ARGS:
    <program.ls8>    Program file, one binary instruction byte per line

OPTIONS:
    -t, --trace      Print a machine-state trace line before each instruction
    -h, --help       Print this help message

EXAMPLES:
    # Run a program
    {program} programs/print8.ls8

    # Run with the per-instruction trace
    {program} programs/mult.ls8 --trace
";

/// Prints usage information to stderr.
fn print_usage(program: &str) {
    eprintln!("{}", USAGE.replace("{program}", program));
}
