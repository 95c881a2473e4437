//! Interpreter engine

use crate::memory::{StackError, StackModel};
use crate::parser::{decode_line, Instruction, ParseWarning};

/// Outcome of executing one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The line decoded and was applied to the stack
    Applied(Instruction),
    /// The line was skipped; the stack is unchanged
    Skipped(ParseWarning),
}

/// Applies instructions to a single running stack
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    stack: StackModel,
}

impl Interpreter {
    pub fn new() -> Self {
        Interpreter {
            stack: StackModel::new(),
        }
    }

    /// Start from a prepared stack instead of an empty one
    pub fn with_stack(stack: StackModel) -> Self {
        Interpreter { stack }
    }

    /// Decode and apply one line of source.
    ///
    /// Decode problems, oversized reservations included, come back as
    /// [`Step::Skipped`]; only popping an empty stack is an error here.
    pub fn execute_line(&mut self, line: &str) -> Result<Step, StackError> {
        match decode_line(line) {
            Ok(instruction) => {
                self.apply(&instruction)?;
                Ok(Step::Applied(instruction))
            }
            Err(warning) => Ok(Step::Skipped(warning)),
        }
    }

    /// Apply a decoded instruction
    pub fn apply(&mut self, instruction: &Instruction) -> Result<(), StackError> {
        match instruction {
            Instruction::Push(label) => self.stack.push(label.as_str()),
            Instruction::Pop => {
                self.stack.pop()?;
            }
            Instruction::SetBasePointer => self.stack.set_base_pointer_to_stack_pointer(),
            Instruction::Reserve(bytes) => self.stack.reserve(*bytes)?,
        }
        Ok(())
    }

    pub fn stack(&self) -> &StackModel {
        &self.stack
    }

    pub fn stack_mut(&mut self) -> &mut StackModel {
        &mut self.stack
    }

    pub fn into_stack(self) -> StackModel {
        self.stack
    }
}
