//! State machines behind the input widgets: the segmented code input, the
//! tri-state selection group and the radio group. Nothing here touches a UI
//! toolkit; the presentation layer forwards events in and re-reads state out.

pub mod code_input;
pub mod radio;
pub mod selection;
pub mod sink;

pub use code_input::{verify_code, CodeEffect, SegmentedCodeController};
pub use radio::{RadioEffect, RadioGroupModel};
pub use selection::{next_selection, SelectionEffect, SelectionGroupModel};
pub use sink::{ChangeSink, FnSink};

use std::collections::HashSet;

use shared::{domain::OptionId, error::WidgetError};

pub(crate) fn validate_options(options: &[OptionId]) -> Result<(), WidgetError> {
    let mut seen = HashSet::with_capacity(options.len());
    for option in options {
        if !seen.insert(option) {
            return Err(WidgetError::DuplicateOption(option.clone()));
        }
    }
    Ok(())
}

pub(crate) fn require_member(
    options: &[OptionId],
    candidate: Option<OptionId>,
) -> Result<Option<OptionId>, WidgetError> {
    match candidate {
        Some(option) if !options.contains(&option) => Err(WidgetError::UnknownOption(option)),
        other => Ok(other),
    }
}
