//! Segmented numeric code input (OTP boxes).
//!
//! The controller owns the slot values and the advisory focus index. Each
//! accepted edit commits the slot, moves focus, and recomputes the aggregate
//! code in one step, so a renderer routing focus from the returned
//! [`CodeEffect`] never shows a digit without having moved past it.

use serde::Serialize;
use shared::{domain::CodeVerdict, error::WidgetError, protocol::ValueChanged};

use crate::sink::{ChangeSink, Notifier};

/// Result of an accepted transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeEffect {
    pub slots: Vec<Option<char>>,
    /// Set only when the transition asks the renderer to move focus.
    pub focus_index: Option<usize>,
    pub aggregate_code: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    OutOfRange,
    TooLong,
    NotDigit,
}

#[derive(Debug)]
pub struct SegmentedCodeController {
    length: usize,
    slots: Vec<Option<char>>,
    focus_index: Option<usize>,
    notifier: Notifier,
}

impl SegmentedCodeController {
    pub fn new(length: usize) -> Result<Self, WidgetError> {
        if length == 0 {
            return Err(WidgetError::InvalidLength);
        }

        Ok(Self {
            length,
            slots: vec![None; length],
            focus_index: Some(0),
            notifier: Notifier::default(),
        })
    }

    pub fn with_sink(mut self, sink: impl ChangeSink + 'static) -> Self {
        self.set_sink(sink);
        self
    }

    pub fn set_sink(&mut self, sink: impl ChangeSink + 'static) {
        self.notifier.set(Box::new(sink));
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn slots(&self) -> &[Option<char>] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<char> {
        self.slots.get(index).copied().flatten()
    }

    pub fn focus_index(&self) -> Option<usize> {
        self.focus_index
    }

    pub fn aggregate_code(&self) -> String {
        self.slots.iter().flatten().collect()
    }

    /// True when every slot holds a digit.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Proposes `raw_input` as the new content of slot `index`.
    ///
    /// Returns `None` and leaves state untouched when the input is longer than
    /// one character, is not an ASCII digit, or targets a missing slot. An
    /// empty string clears the slot.
    pub fn set_slot_value(&mut self, index: usize, raw_input: &str) -> Option<CodeEffect> {
        let value = match self.parse_slot_input(index, raw_input) {
            Ok(value) => value,
            Err(reason) => {
                tracing::trace!(index, ?reason, "rejected slot input");
                return None;
            }
        };

        self.slots[index] = value;
        let focus_move = match value {
            Some(_) if index + 1 < self.length => Some(index + 1),
            _ => None,
        };

        tracing::debug!(index, filled = value.is_some(), "slot value committed");
        Some(self.commit(focus_move))
    }

    /// Backspace pressed on the already-empty slot `index`: clear the previous
    /// slot and move focus back to it. Slot 0 has nothing behind it.
    pub fn on_backspace_at_empty_slot(&mut self, index: usize) -> Option<CodeEffect> {
        if index == 0 || index >= self.length {
            return None;
        }

        let previous = index - 1;
        self.slots[previous] = None;
        tracing::debug!(index, previous, "backspace reached into previous slot");
        Some(self.commit(Some(previous)))
    }

    fn parse_slot_input(&self, index: usize, raw_input: &str) -> Result<Option<char>, Rejection> {
        if index >= self.length {
            return Err(Rejection::OutOfRange);
        }

        let mut chars = raw_input.chars();
        let Some(first) = chars.next() else {
            return Ok(None);
        };
        if chars.next().is_some() {
            return Err(Rejection::TooLong);
        }
        if !first.is_ascii_digit() {
            return Err(Rejection::NotDigit);
        }

        Ok(Some(first))
    }

    fn commit(&mut self, focus_move: Option<usize>) -> CodeEffect {
        if let Some(next) = focus_move {
            self.focus_index = Some(next);
        }

        let aggregate_code = self.aggregate_code();
        self.notifier.emit(ValueChanged::Code {
            aggregate_code: aggregate_code.clone(),
        });

        CodeEffect {
            slots: self.slots.clone(),
            focus_index: focus_move,
            aggregate_code,
        }
    }
}

/// Compares an aggregate code against the expected one once every slot is filled.
pub fn verify_code(aggregate_code: &str, expected: &str, length: usize) -> CodeVerdict {
    if aggregate_code.chars().count() < length {
        CodeVerdict::Incomplete
    } else if aggregate_code == expected {
        CodeVerdict::Match
    } else {
        CodeVerdict::Mismatch
    }
}

#[cfg(test)]
#[path = "tests/code_input_tests.rs"]
mod tests;
