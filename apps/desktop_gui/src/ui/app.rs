use crossbeam_channel::Receiver;
use eframe::egui;
use shared::{domain::OptionId, protocol::ValueChanged};

use crate::controller::events::WidgetEvent;
use crate::controller::orchestration::{dispatch_widget_event, WidgetModels};
use crate::ui::widgets;

const MAX_RECENT_CHANGES: usize = 8;

pub struct WidgetGalleryApp {
    models: WidgetModels,
    changes_rx: Receiver<ValueChanged>,
    pending_focus: Option<usize>,
    status: String,
    recent_changes: Vec<String>,
}

impl WidgetGalleryApp {
    pub fn new(models: WidgetModels, changes_rx: Receiver<ValueChanged>) -> Self {
        let pending_focus = models.code.focus_index();
        Self {
            models,
            changes_rx,
            pending_focus,
            status: "Enter the code".to_string(),
            recent_changes: Vec::new(),
        }
    }

    fn process_value_changes(&mut self) {
        while let Ok(change) = self.changes_rx.try_recv() {
            match serde_json::to_string(&change) {
                Ok(line) => self.recent_changes.push(line),
                Err(err) => tracing::warn!(%err, "failed to render value change"),
            }
        }

        let overflow = self.recent_changes.len().saturating_sub(MAX_RECENT_CHANGES);
        self.recent_changes.drain(..overflow);
    }

    fn dispatch(&mut self, event: WidgetEvent) {
        let outcome = dispatch_widget_event(&mut self.models, event, &mut self.status);
        if let Some(index) = outcome.focus_request {
            self.pending_focus = Some(index);
        }
    }

    fn show_code_input(&mut self, ui: &mut egui::Ui) {
        let focus_now = self.pending_focus.take();
        let backspace = ui.input(|i| i.key_pressed(egui::Key::Backspace));
        let mut events = Vec::new();

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 8.0;
            for index in 0..self.models.code.length() {
                let current: String = self.models.code.slot(index).into_iter().collect();
                let mut buffer = current.clone();
                let response = widgets::code_slot(
                    ui,
                    index,
                    &mut buffer,
                    self.models.show_error,
                    focus_now == Some(index),
                );

                if response.has_focus() && backspace && current.is_empty() {
                    events.push(WidgetEvent::BackspaceOnEmpty { index });
                } else if buffer != current {
                    events.push(WidgetEvent::SlotEdited {
                        index,
                        value: buffer,
                    });
                }
            }
        });

        for event in events {
            self.dispatch(event);
        }

        ui.horizontal(|ui| {
            ui.weak("Code:");
            ui.monospace(self.models.code.aggregate_code());
        });
    }

    fn show_checkbox_group(&mut self, ui: &mut egui::Ui) {
        ui.heading("Select Options:");
        let mut clicked: Option<OptionId> = None;

        for (option, state) in self.models.checkboxes.states() {
            ui.horizontal(|ui| {
                let box_resp = widgets::tri_state_checkbox(ui, state);
                let label_resp =
                    ui.add(egui::Label::new(option.as_str()).sense(egui::Sense::click()));
                if box_resp.clicked() || label_resp.clicked() {
                    clicked = Some(option.clone());
                }
            });
        }

        if let Some(option) = clicked {
            self.dispatch(WidgetEvent::CheckboxClicked(option));
        }
    }

    fn show_radio_group(&mut self, ui: &mut egui::Ui) {
        ui.heading("Select an Option:");
        let mut clicked: Option<OptionId> = None;

        for option in self.models.radios.options() {
            ui.horizontal(|ui| {
                let selected = self.models.radios.is_selected(option);
                let button_resp = widgets::radio_button(ui, selected);
                let label_resp =
                    ui.add(egui::Label::new(option.as_str()).sense(egui::Sense::click()));
                if button_resp.clicked() || label_resp.clicked() {
                    clicked = Some(option.clone());
                }
            });
        }

        if let Some(option) = clicked {
            self.dispatch(WidgetEvent::RadioClicked(option));
        }
    }

    fn show_status(&self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            ui.small("Status:");
            ui.small(egui::RichText::new(&self.status).weak());
        });
        egui::CollapsingHeader::new("Recent changes")
            .default_open(false)
            .show(ui, |ui| {
                for line in self.recent_changes.iter().rev() {
                    ui.monospace(line);
                }
            });
    }
}

impl eframe::App for WidgetGalleryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_value_changes();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().spacing.item_spacing = egui::vec2(8.0, 8.0);
            ui.vertical_centered(|ui| {
                ui.heading("One-time code");
            });
            self.show_code_input(ui);
            ui.separator();
            self.show_checkbox_group(ui);
            ui.separator();
            self.show_radio_group(ui);
            ui.separator();
            self.show_status(ui);
        });

        // Focus requests land on the next frame.
        if self.pending_focus.is_some() {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::controller::orchestration::build_models;
    use crossbeam_channel::unbounded;

    fn app() -> WidgetGalleryApp {
        let (tx, rx) = unbounded();
        let models = build_models(&Settings::default(), tx).expect("models");
        WidgetGalleryApp::new(models, rx)
    }

    #[test]
    fn starts_with_focus_on_first_slot() {
        let app = app();
        assert_eq!(app.pending_focus, Some(0));
        assert!(app.recent_changes.is_empty());
    }

    #[test]
    fn dispatch_records_focus_request_and_change_log() {
        let mut app = app();
        app.pending_focus = None;

        app.dispatch(WidgetEvent::SlotEdited {
            index: 0,
            value: "4".into(),
        });
        app.process_value_changes();

        assert_eq!(app.pending_focus, Some(1));
        assert_eq!(app.recent_changes.len(), 1);
        assert!(app.recent_changes[0].contains("\"aggregate_code\":\"4\""));
    }

    #[test]
    fn change_log_keeps_only_latest_entries() {
        let mut app = app();
        for _ in 0..(MAX_RECENT_CHANGES + 3) {
            app.dispatch(WidgetEvent::CheckboxClicked(OptionId::from("Option C")));
        }
        app.process_value_changes();
        assert_eq!(app.recent_changes.len(), MAX_RECENT_CHANGES);
    }
}
