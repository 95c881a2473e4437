//! Line decoding
//!
//! [`decode_line`] is deliberately forgiving: every problem is reported as a
//! [`ParseWarning`] so that the caller can skip the line and keep going.

use super::ast::{Instruction, Register};
use crate::memory::MAX_RESERVE_BYTES;
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

/// Why a line did not produce an instruction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseWarning {
    #[error("unrecognized command `{0}`")]
    UnrecognizedCommand(String),

    #[error("malformed operand for `{mnemonic}`: `{operand}`")]
    MalformedOperand { mnemonic: String, operand: String },

    #[error("unhandled operands for `{mnemonic}`: `{operand}`")]
    UnhandledOperands { mnemonic: String, operand: String },

    #[error("invalid byte count `{0}`")]
    InvalidByteCount(String),

    #[error("reservation of {bytes} bytes exceeds the {limit}-byte limit")]
    ReservationTooLarge { bytes: u64, limit: u64 },
}

/// `[<digits>: ]<mnemonic>[ <operand>]`
fn line_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(?:\d+:\s+)?(\S+)(?:\s+(.*))?$").expect("line pattern is valid")
    })
}

/// Decode one source line. The caller is expected to skip blank lines.
pub fn decode_line(line: &str) -> Result<Instruction, ParseWarning> {
    let line = line.trim();
    let caps = line_pattern()
        .captures(line)
        .ok_or_else(|| ParseWarning::UnrecognizedCommand(line.to_string()))?;

    let mnemonic = &caps[1];
    let operand = caps.get(2).map(|m| m.as_str().trim()).unwrap_or("");

    if mnemonic.starts_with("push") {
        if operand.is_empty() {
            return Err(malformed(mnemonic, operand));
        }
        Ok(Instruction::Push(operand.to_string()))
    } else if mnemonic.starts_with("pop") {
        Ok(Instruction::Pop)
    } else if mnemonic.starts_with("mov") {
        let (dest, src) = split_operands(mnemonic, operand)?;
        match (Register::from_operand(dest), Register::from_operand(src)) {
            (Some(Register::BasePointer), Some(Register::StackPointer)) => {
                Ok(Instruction::SetBasePointer)
            }
            _ => Err(unhandled(mnemonic, operand)),
        }
    } else if mnemonic.starts_with("sub") {
        let (target, count) = split_operands(mnemonic, operand)?;
        match Register::from_operand(target) {
            Some(Register::StackPointer) => {
                let bytes = parse_byte_count(count)?;
                if bytes > MAX_RESERVE_BYTES {
                    return Err(ParseWarning::ReservationTooLarge {
                        bytes,
                        limit: MAX_RESERVE_BYTES,
                    });
                }
                Ok(Instruction::Reserve(bytes))
            }
            _ => Err(unhandled(mnemonic, operand)),
        }
    } else {
        Err(ParseWarning::UnrecognizedCommand(line.to_string()))
    }
}

/// Parse a byte count: `16`, `10h`, `0x10`, optionally prefixed with `$`
pub fn parse_byte_count(literal: &str) -> Result<u64, ParseWarning> {
    let text = literal.trim();
    let digits = text.strip_prefix('$').unwrap_or(text);

    let parsed = if let Some(hex) = digits
        .strip_suffix('h')
        .or_else(|| digits.strip_suffix('H'))
    {
        u64::from_str_radix(hex, 16)
    } else if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        u64::from_str_radix(hex, 16)
    } else {
        digits.parse::<u64>()
    };

    parsed.map_err(|_| ParseWarning::InvalidByteCount(text.to_string()))
}

fn split_operands<'a>(
    mnemonic: &str,
    operand: &'a str,
) -> Result<(&'a str, &'a str), ParseWarning> {
    operand
        .split_once(',')
        .map(|(left, right)| (left.trim(), right.trim()))
        .ok_or_else(|| malformed(mnemonic, operand))
}

fn malformed(mnemonic: &str, operand: &str) -> ParseWarning {
    ParseWarning::MalformedOperand {
        mnemonic: mnemonic.to_string(),
        operand: operand.to_string(),
    }
}

fn unhandled(mnemonic: &str, operand: &str) -> ParseWarning {
    ParseWarning::UnhandledOperands {
        mnemonic: mnemonic.to_string(),
        operand: operand.to_string(),
    }
}
