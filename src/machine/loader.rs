//! Program text parsing.
//!
//! A program file carries one instruction byte per line as a binary literal
//! (`10000010`). A `#` starts a comment that runs to the end of the line;
//! blank lines and comment-only lines are skipped. Lines that do not parse
//! as a binary byte are skipped with a warning, so permissively formatted
//! programs keep loading unchanged.

use crate::machine::errors::MachineError;
use crate::warn;
use std::fs;

/// Comment introducer for program files.
const COMMENT_CHAR: char = '#';

/// Parses program text into the bytes to place in memory, in file order.
pub fn parse_program(source: &str) -> Vec<u8> {
    let mut bytes = Vec::new();
    for (index, line) in source.lines().enumerate() {
        let text = line.split(COMMENT_CHAR).next().unwrap_or(line).trim();
        if text.is_empty() {
            continue;
        }
        match u8::from_str_radix(text, 2) {
            Ok(byte) => bytes.push(byte),
            Err(_) => warn!("line {}: skipping unparsable byte {:?}", index + 1, text),
        }
    }
    bytes
}

/// Reads and parses the program file at `path`.
///
/// Returns [`MachineError::ProgramUnreadable`] if the file cannot be read.
/// Malformed lines never fail the load; they are skipped by
/// [`parse_program`].
pub fn load_file(path: &str) -> Result<Vec<u8>, MachineError> {
    let source = fs::read_to_string(path).map_err(|e| MachineError::ProgramUnreadable {
        path: path.to_string(),
        reason: e.to_string(),
    })?;
    Ok(parse_program(&source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bytes_in_file_order() {
        let source = "10000010\n00000000\n00001000\n";
        assert_eq!(parse_program(source), vec![0b10000010, 0, 8]);
    }

    #[test]
    fn strips_comments_and_blank_lines() {
        let source = "\
# print8.ls8
10000010 # LDI R0,8
00000000

00001000
";
        assert_eq!(parse_program(source), vec![0b10000010, 0, 8]);
    }

    #[test]
    fn skips_lines_that_are_not_a_binary_byte() {
        // "2" is not a binary digit and "111111111" is nine bits.
        let source = "10000010\nnot a byte\n2\n111111111\n00000001\n";
        assert_eq!(parse_program(source), vec![0b10000010, 0b00000001]);
    }

    #[test]
    fn short_literals_load() {
        // The format does not require all eight characters.
        assert_eq!(parse_program("101\n"), vec![0b101]);
    }

    #[test]
    fn empty_source_yields_no_bytes() {
        assert!(parse_program("").is_empty());
        assert!(parse_program("# only a comment\n").is_empty());
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let err = load_file("does-not-exist.ls8").unwrap_err();
        assert!(matches!(err, MachineError::ProgramUnreadable { .. }));
    }
}
