//! Instruction interpreter
//!
//! - [`engine`]: the [`Interpreter`] that owns the running stack and applies
//!   decoded instructions to it
//!
//! # Execution Model
//!
//! There is exactly one [`StackModel`](crate::memory::StackModel) per run.
//! Instructions are applied strictly in source order, so the stack seen after
//! line `n` reflects every instruction from line 1 to `n`. Lines that fail to
//! decode are skipped without touching the stack.

pub mod engine;

pub use engine::{Interpreter, Step};
