//! Memory model for the stack visualizer
//!
//! - [`stack`]: the abstract stack ([`stack::StackModel`]) mutated by the
//!   interpreter and read by the layout engine
//!
//! # Slot Size
//!
//! Every slot is one 32-bit word. Byte counts (from `sub esp, N`) and
//! base-pointer offsets (`[ebp+N]`) are both scaled by [`SLOT_SIZE`]:
//! ```text
//! slots  = bytes / 4
//! offset = (ebp - slot) * 4
//! ```

pub mod stack;

pub use stack::{StackError, StackModel};

/// Size of one stack slot in bytes
pub const SLOT_SIZE: u64 = 4;

/// Largest `sub esp, N` accepted, in bytes (16384 slots)
pub const MAX_RESERVE_BYTES: u64 = 64 * 1024;

/// Byte offset of `slot` relative to `base_pointer`
pub fn base_pointer_offset(base_pointer: isize, slot: usize) -> i64 {
    (base_pointer as i64 - slot as i64) * SLOT_SIZE as i64
}
