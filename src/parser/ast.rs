//! Instruction vocabulary

use std::fmt;

/// The two registers the visualizer tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    StackPointer,
    BasePointer,
}

impl Register {
    /// Resolve a register operand such as `esp`, `%rbp` or `EBP`
    pub fn from_operand(operand: &str) -> Option<Register> {
        let name = operand.trim().trim_start_matches('%').to_ascii_lowercase();
        match name.as_str() {
            "esp" | "rsp" | "sp" => Some(Register::StackPointer),
            "ebp" | "rbp" | "bp" => Some(Register::BasePointer),
            _ => None,
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Register::StackPointer => write!(f, "esp"),
            Register::BasePointer => write!(f, "ebp"),
        }
    }
}

/// A decoded instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// `push <label>`
    Push(String),
    /// `pop [<anything>]`
    Pop,
    /// `mov ebp, esp`
    SetBasePointer,
    /// `sub esp, <bytes>`
    Reserve(u64),
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Push(label) => write!(f, "push {}", label),
            Instruction::Pop => write!(f, "pop"),
            Instruction::SetBasePointer => write!(f, "mov ebp, esp"),
            Instruction::Reserve(bytes) => write!(f, "sub esp, {}", bytes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_names() {
        assert_eq!(Register::from_operand("esp"), Some(Register::StackPointer));
        assert_eq!(Register::from_operand(" %RSP "), Some(Register::StackPointer));
        assert_eq!(Register::from_operand("EBP"), Some(Register::BasePointer));
        assert_eq!(Register::from_operand("%rbp"), Some(Register::BasePointer));
        assert_eq!(Register::from_operand("eax"), None);
        assert_eq!(Register::from_operand(""), None);
    }

    #[test]
    fn test_instruction_display() {
        assert_eq!(Instruction::Push("a".into()).to_string(), "push a");
        assert_eq!(Instruction::Reserve(16).to_string(), "sub esp, 16");
    }
}
