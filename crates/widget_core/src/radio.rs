//! Single-select radio group. Clicking an option selects it; there is no
//! deselect, so a click on the current selection changes nothing.

use serde::Serialize;
use shared::{domain::OptionId, error::WidgetError, protocol::ValueChanged};

use crate::{
    require_member,
    sink::{ChangeSink, Notifier},
    validate_options,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RadioEffect {
    pub selected: OptionId,
}

#[derive(Debug)]
pub struct RadioGroupModel {
    options: Vec<OptionId>,
    selected: Option<OptionId>,
    notifier: Notifier,
}

impl RadioGroupModel {
    pub fn new(
        options: Vec<OptionId>,
        initial_selected: Option<OptionId>,
    ) -> Result<Self, WidgetError> {
        validate_options(&options)?;
        let selected = require_member(&options, initial_selected)?;

        Ok(Self {
            options,
            selected,
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

    pub fn options(&self) -> &[OptionId] {
        &self.options
    }

    pub fn selected(&self) -> Option<&OptionId> {
        self.selected.as_ref()
    }

    pub fn is_selected(&self, option: &OptionId) -> bool {
        self.selected.as_ref() == Some(option)
    }

    pub fn click(&mut self, option: &OptionId) -> Option<RadioEffect> {
        if !self.options.contains(option) || self.is_selected(option) {
            return None;
        }

        self.selected = Some(option.clone());
        tracing::debug!(%option, "radio selection changed");
        self.notifier.emit(ValueChanged::Radio {
            selected: self.selected.clone(),
        });

        Some(RadioEffect {
            selected: option.clone(),
        })
    }
}
