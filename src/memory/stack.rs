//! Abstract call stack
//!
//! [`StackModel`] holds the stack content as an ordered list of slot labels
//! (index 0 is the bottom) together with the two pointers the visualizer cares
//! about:
//!
//! - the **stack pointer**, always the index of the top slot (`-1` when empty)
//! - the **base pointer**, the zero reference for `[ebp+N]` offset labels
//!   (`-1` until a frame-setup instruction sets it)
//!
//! # Empty Slots
//!
//! A slot with an empty label is a reserved-but-unused cell, as produced by
//! `sub esp, N`. Empty slots are real entries in the slot list, so the stack
//! pointer never skips over them.

use super::{MAX_RESERVE_BYTES, SLOT_SIZE};
use thiserror::Error;

/// Errors raised by stack mutations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StackError {
    /// `pop` on an empty stack
    #[error("stack underflow: pop on an empty stack")]
    Underflow,

    /// `reserve` above [`MAX_RESERVE_BYTES`]; the stack is left unchanged
    #[error("reservation of {bytes} bytes exceeds the {limit}-byte limit")]
    ReservationTooLarge { bytes: u64, limit: u64 },
}

/// The running stack of the visualized program
#[derive(Debug, Clone, PartialEq)]
pub struct StackModel {
    slots: Vec<String>,
    base_pointer: isize,
    frame_number: usize,
    frame_label: Option<String>,
}

impl StackModel {
    pub fn new() -> Self {
        StackModel {
            slots: Vec::new(),
            base_pointer: -1,
            frame_number: 0,
            frame_label: None,
        }
    }

    /// Build a model from an existing slot list, bottom first
    pub fn from_slots<I, S>(slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StackModel {
            slots: slots.into_iter().map(Into::into).collect(),
            ..StackModel::new()
        }
    }

    /// Push a labelled slot
    pub fn push(&mut self, label: impl Into<String>) {
        self.slots.push(label.into());
    }

    /// Pop the top slot and return its label
    pub fn pop(&mut self) -> Result<String, StackError> {
        self.slots.pop().ok_or(StackError::Underflow)
    }

    /// `mov ebp, esp`
    pub fn set_base_pointer_to_stack_pointer(&mut self) {
        self.base_pointer = self.stack_pointer();
    }

    /// Reserve `byte_count` bytes as empty slots. Partial slots are dropped.
    pub fn reserve(&mut self, byte_count: u64) -> Result<(), StackError> {
        if byte_count > MAX_RESERVE_BYTES {
            return Err(StackError::ReservationTooLarge {
                bytes: byte_count,
                limit: MAX_RESERVE_BYTES,
            });
        }
        let slot_count = (byte_count / SLOT_SIZE) as usize;
        self.slots.resize(self.slots.len() + slot_count, String::new());
        Ok(())
    }

    pub fn set_base_pointer(&mut self, base_pointer: isize) {
        self.base_pointer = base_pointer;
    }

    pub fn set_frame_number(&mut self, frame_number: usize) {
        self.frame_number = frame_number;
    }

    pub fn set_frame_label(&mut self, label: Option<String>) {
        self.frame_label = label;
    }

    /// Index of the top slot, `-1` when the stack is empty
    pub fn stack_pointer(&self) -> isize {
        self.slots.len() as isize - 1
    }

    pub fn base_pointer(&self) -> isize {
        self.base_pointer
    }

    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn frame_number(&self) -> usize {
        self.frame_number
    }

    pub fn frame_label(&self) -> Option<&str> {
        self.frame_label.as_deref()
    }
}

impl Default for StackModel {
    fn default() -> Self {
        Self::new()
    }
}
