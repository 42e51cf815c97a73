use serde::{Deserialize, Serialize};

use crate::domain::OptionId;

/// Notification delivered to a value-changed sink after an accepted transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum ValueChanged {
    Code {
        aggregate_code: String,
    },
    Selection {
        selected: Option<OptionId>,
        partial: Option<OptionId>,
    },
    Radio {
        selected: Option<OptionId>,
    },
}

impl ValueChanged {
    pub fn kind(&self) -> &'static str {
        match self {
            ValueChanged::Code { .. } => "code",
            ValueChanged::Selection { .. } => "selection",
            ValueChanged::Radio { .. } => "radio",
        }
    }
}
