//! Tri-state checkbox group.
//!
//! At most one option is SELECTED and at most one is PARTIAL, never the same
//! one. Everything else is UNSELECTED and is not stored.

use serde::Serialize;
use shared::{
    domain::{CheckboxState, OptionId},
    error::WidgetError,
    protocol::ValueChanged,
};

use crate::{
    require_member,
    sink::{ChangeSink, Notifier},
    validate_options,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionEffect {
    pub selected: Option<OptionId>,
    pub partial: Option<OptionId>,
}

/// Next `(selected, partial)` pair after `clicked` is clicked.
///
/// The selected match wins over the partial match. The two can only coincide
/// for a hand-built pair, which construction forbids.
pub fn next_selection(
    selected: Option<&OptionId>,
    partial: Option<&OptionId>,
    clicked: &OptionId,
) -> (Option<OptionId>, Option<OptionId>) {
    if selected == Some(clicked) {
        (None, partial.cloned())
    } else if partial == Some(clicked) {
        (selected.cloned(), None)
    } else {
        (Some(clicked.clone()), partial.cloned())
    }
}

#[derive(Debug)]
pub struct SelectionGroupModel {
    options: Vec<OptionId>,
    selected: Option<OptionId>,
    partial: Option<OptionId>,
    notifier: Notifier,
}

impl SelectionGroupModel {
    pub fn new(
        options: Vec<OptionId>,
        initial_selected: Option<OptionId>,
        initial_partial: Option<OptionId>,
    ) -> Result<Self, WidgetError> {
        validate_options(&options)?;
        let selected = require_member(&options, initial_selected)?;
        let partial = require_member(&options, initial_partial)?;
        if let (Some(selected), Some(partial)) = (&selected, &partial) {
            if selected == partial {
                return Err(WidgetError::SelectedIsPartial(selected.clone()));
            }
        }

        Ok(Self {
            options,
            selected,
            partial,
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

    pub fn partial(&self) -> Option<&OptionId> {
        self.partial.as_ref()
    }

    pub fn state_of(&self, option: &OptionId) -> CheckboxState {
        if self.selected.as_ref() == Some(option) {
            CheckboxState::Selected
        } else if self.partial.as_ref() == Some(option) {
            CheckboxState::Partial
        } else {
            CheckboxState::Unselected
        }
    }

    pub fn states(&self) -> impl Iterator<Item = (&OptionId, CheckboxState)> + '_ {
        self.options
            .iter()
            .map(move |option| (option, self.state_of(option)))
    }

    /// Applies a click. Ids outside the group are ignored.
    pub fn click(&mut self, option: &OptionId) -> Option<SelectionEffect> {
        if !self.options.contains(option) {
            tracing::debug!(%option, "ignored click on unknown option");
            return None;
        }

        let (selected, partial) =
            next_selection(self.selected.as_ref(), self.partial.as_ref(), option);
        self.selected = selected;
        self.partial = partial;
        tracing::debug!(
            %option,
            selected = ?self.selected,
            partial = ?self.partial,
            "selection group updated"
        );

        self.notifier.emit(ValueChanged::Selection {
            selected: self.selected.clone(),
            partial: self.partial.clone(),
        });

        Some(SelectionEffect {
            selected: self.selected.clone(),
            partial: self.partial.clone(),
        })
    }
}

#[cfg(test)]
#[path = "tests/selection_tests.rs"]
mod tests;
