//! Pseudo-assembly line decoder
//!
//! This module turns one line of source text into an [`ast::Instruction`]:
//! - [`ast`]: the closed instruction vocabulary and register names
//! - [`parse`]: line splitting, mnemonic matching and operand decoding
//!
//! # Accepted Syntax
//!
//! ```text
//! [<digits>: ]<mnemonic> [<operand>]
//!
//! 12: push ret addr
//! mov ebp, esp
//! sub esp, 10h
//! pop eax
//! ```
//!
//! Mnemonics are matched by prefix (`pushl` is a `push`). Operands use Intel
//! order (destination first). Anything outside the vocabulary becomes a
//! [`parse::ParseWarning`] rather than a hard error.

pub mod ast;
pub mod parse;

pub use ast::{Instruction, Register};
pub use parse::{decode_line, parse_byte_count, ParseWarning};
