use thiserror::Error;

use crate::domain::OptionId;

/// Construction-time failures. Transitions never fail; they reject silently.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidgetError {
    #[error("code length must be greater than zero")]
    InvalidLength,
    #[error("option '{0}' is not part of the group")]
    UnknownOption(OptionId),
    #[error("option '{0}' cannot be both selected and partial")]
    SelectedIsPartial(OptionId),
    #[error("option '{0}' appears more than once")]
    DuplicateOption(OptionId),
}
