//! Routing from widget events to the owning model.

use anyhow::Context;
use crossbeam_channel::Sender;
use shared::{
    domain::{CodeVerdict, OptionId},
    protocol::ValueChanged,
};
use widget_core::{verify_code, RadioGroupModel, SegmentedCodeController, SelectionGroupModel};

use crate::config::Settings;
use crate::controller::events::{DispatchOutcome, WidgetEvent};

#[derive(Debug)]
pub struct WidgetModels {
    pub code: SegmentedCodeController,
    pub checkboxes: SelectionGroupModel,
    pub radios: RadioGroupModel,
    pub expected_code: String,
    /// Red border flag for the code slots; never read by the controller.
    pub show_error: bool,
}

fn option_ids(labels: &[String]) -> Vec<OptionId> {
    labels.iter().cloned().map(OptionId::from).collect()
}

fn validate_expected_code(expected: &str, length: usize) -> anyhow::Result<()> {
    let digits = expected.chars().count();
    if digits != length {
        anyhow::bail!("expected_code has {digits} characters but otp_length is {length}");
    }
    if !expected.chars().all(|c| c.is_ascii_digit()) {
        anyhow::bail!("expected_code must contain only digits 0-9");
    }
    Ok(())
}

pub fn build_models(
    settings: &Settings,
    changes: Sender<ValueChanged>,
) -> anyhow::Result<WidgetModels> {
    let code = SegmentedCodeController::new(settings.otp_length)
        .context("invalid otp_length setting")?
        .with_sink(changes.clone());
    validate_expected_code(&settings.expected_code, settings.otp_length)
        .context("invalid expected_code setting")?;

    let checkboxes = SelectionGroupModel::new(
        option_ids(&settings.checkbox_options),
        settings.checkbox_selected.clone().map(OptionId::from),
        settings.checkbox_partial.clone().map(OptionId::from),
    )
    .context("invalid checkbox settings")?
    .with_sink(changes.clone());

    let radios = RadioGroupModel::new(
        option_ids(&settings.radio_options),
        settings.radio_selected.clone().map(OptionId::from),
    )
    .context("invalid radio settings")?
    .with_sink(changes);

    Ok(WidgetModels {
        code,
        checkboxes,
        radios,
        expected_code: settings.expected_code.clone(),
        show_error: false,
    })
}

pub fn dispatch_widget_event(
    models: &mut WidgetModels,
    event: WidgetEvent,
    status: &mut String,
) -> DispatchOutcome {
    let event_name = event.name();
    let touches_code = event.touches_code();

    let outcome = match event {
        WidgetEvent::SlotEdited { index, value } => models
            .code
            .set_slot_value(index, &value)
            .map(|effect| DispatchOutcome::accepted(effect.focus_index)),
        WidgetEvent::BackspaceOnEmpty { index } => models
            .code
            .on_backspace_at_empty_slot(index)
            .map(|effect| DispatchOutcome::accepted(effect.focus_index)),
        WidgetEvent::CheckboxClicked(option) => models
            .checkboxes
            .click(&option)
            .map(|_| DispatchOutcome::accepted(None)),
        WidgetEvent::RadioClicked(option) => models
            .radios
            .click(&option)
            .map(|_| DispatchOutcome::accepted(None)),
    }
    .unwrap_or_else(DispatchOutcome::rejected);

    if !outcome.accepted {
        tracing::trace!(event = event_name, "widget event rejected");
        return outcome;
    }
    tracing::debug!(
        event = event_name,
        focus = ?outcome.focus_request,
        "widget event accepted"
    );

    if touches_code {
        refresh_code_verdict(models, status);
    }

    outcome
}

fn refresh_code_verdict(models: &mut WidgetModels, status: &mut String) {
    let verdict = verify_code(
        &models.code.aggregate_code(),
        &models.expected_code,
        models.code.length(),
    );
    models.show_error = verdict == CodeVerdict::Mismatch;

    match verdict {
        CodeVerdict::Incomplete => {}
        CodeVerdict::Match => {
            *status = "Code verified".to_string();
            tracing::info!("entered code matches");
        }
        CodeVerdict::Mismatch => {
            *status = "Code does not match; try again".to_string();
            tracing::info!("entered code does not match");
        }
    }
}
