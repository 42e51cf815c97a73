//! Input events forwarded from the widgets to the controller.

use shared::domain::OptionId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    SlotEdited { index: usize, value: String },
    BackspaceOnEmpty { index: usize },
    CheckboxClicked(OptionId),
    RadioClicked(OptionId),
}

impl WidgetEvent {
    pub fn name(&self) -> &'static str {
        match self {
            WidgetEvent::SlotEdited { .. } => "slot_edited",
            WidgetEvent::BackspaceOnEmpty { .. } => "backspace_on_empty",
            WidgetEvent::CheckboxClicked(_) => "checkbox_clicked",
            WidgetEvent::RadioClicked(_) => "radio_clicked",
        }
    }

    pub fn touches_code(&self) -> bool {
        matches!(
            self,
            WidgetEvent::SlotEdited { .. } | WidgetEvent::BackspaceOnEmpty { .. }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchOutcome {
    pub accepted: bool,
    /// Slot the renderer should focus next frame.
    pub focus_request: Option<usize>,
}

impl DispatchOutcome {
    pub fn rejected() -> Self {
        Self::default()
    }

    pub fn accepted(focus_request: Option<usize>) -> Self {
        Self {
            accepted: true,
            focus_request,
        }
    }
}
