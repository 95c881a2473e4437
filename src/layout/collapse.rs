//! Collapsing runs of empty slots
//!
//! A `sub esp, 0x80` pushes 32 empty slots; drawing all of them would bury the
//! interesting part of the stack. Runs of empty *interior* slots are folded
//! with a three-state machine:
//!
//! | state     | slot                                 | decision   | next      |
//! |-----------|--------------------------------------|------------|-----------|
//! | any       | labelled                             | `Row`      | Normal    |
//! | any       | anchor, empty                        | `Row`      | Holding   |
//! | Normal    | empty                                | `Row`      | Holding   |
//! | Holding   | empty                                | `Ellipsis` | Collapsed |
//! | Collapsed | empty, next slot labelled            | `Row`      | Collapsed |
//! | Collapsed | empty, otherwise                     | `Suppress` | Collapsed |
//!
//! Anchors are the first slot, the last slot and the slot the base pointer
//! refers to. They are never folded, so both pointer annotations always have
//! a row to attach to.

/// What to draw for one slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowDecision {
    /// Draw the slot as-is
    Row,
    /// Draw the slot as the `...` marker of a collapsed run
    Ellipsis,
    /// Draw nothing; the slot contributes no height
    Suppress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunState {
    Normal,
    Holding,
    Collapsed,
}

/// Decide, slot by slot, which rows of `slots` are drawn.
///
/// `pinned` is an extra anchor index (the base-pointer slot); out-of-range
/// values are ignored.
pub fn plan_rows(slots: &[String], pinned: Option<usize>) -> Vec<RowDecision> {
    let last = slots.len().saturating_sub(1);
    let mut state = RunState::Normal;
    let mut decisions = Vec::with_capacity(slots.len());

    for (i, label) in slots.iter().enumerate() {
        let is_anchor = i == 0 || i == last || pinned == Some(i);

        let (decision, next) = if !label.is_empty() {
            (RowDecision::Row, RunState::Normal)
        } else if is_anchor {
            (RowDecision::Row, RunState::Holding)
        } else {
            match state {
                RunState::Normal => (RowDecision::Row, RunState::Holding),
                RunState::Holding => (RowDecision::Ellipsis, RunState::Collapsed),
                RunState::Collapsed => {
                    let next_is_labelled = slots.get(i + 1).is_some_and(|s| !s.is_empty());
                    if next_is_labelled {
                        (RowDecision::Row, RunState::Collapsed)
                    } else {
                        (RowDecision::Suppress, RunState::Collapsed)
                    }
                }
            }
        };

        decisions.push(decision);
        state = next;
    }

    decisions
}
