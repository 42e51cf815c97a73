//! Painted input widgets. These only draw state handed to them and report
//! raw interaction; all state changes go through the controller.

use eframe::egui;
use shared::domain::CheckboxState;

pub const CONTROL_SIZE: f32 = 24.0;
const SLOT_SIZE: [f32; 2] = [48.0, 56.0];
const BORDER_WIDTH: f32 = 1.5;

const PARTIAL_GRAY: egui::Color32 = egui::Color32::from_rgb(0xBD, 0xBD, 0xBD);

pub fn code_slot_id(index: usize) -> egui::Id {
    egui::Id::new(("code_slot", index))
}

fn slot_border_color(show_error: bool, focused: bool) -> egui::Color32 {
    match (show_error, focused) {
        (true, _) => egui::Color32::RED,
        (false, true) => egui::Color32::from_rgb(0x00, 0xBC, 0xD4),
        (false, false) => egui::Color32::GRAY,
    }
}

/// One single-digit box of the segmented code input.
pub fn code_slot(
    ui: &mut egui::Ui,
    index: usize,
    value: &mut String,
    show_error: bool,
    request_focus: bool,
) -> egui::Response {
    let id = code_slot_id(index);
    let focused = ui.memory(|m| m.has_focus(id));

    let response = egui::Frame::NONE
        .stroke(egui::Stroke::new(
            BORDER_WIDTH,
            slot_border_color(show_error, focused),
        ))
        .corner_radius(8.0)
        .inner_margin(egui::Margin::same(4))
        .show(ui, |ui| {
            let edit = egui::TextEdit::singleline(value)
                .id(id)
                .frame(false)
                .font(egui::TextStyle::Heading)
                .horizontal_align(egui::Align::Center)
                .desired_width(SLOT_SIZE[0]);
            ui.add_sized(SLOT_SIZE, edit)
        })
        .inner;

    if request_focus {
        response.request_focus();
    }

    response
}

/// Square tri-state checkbox: filled with a tick when selected, a dash when
/// partial, empty otherwise.
pub fn tri_state_checkbox(ui: &mut egui::Ui, state: CheckboxState) -> egui::Response {
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(CONTROL_SIZE, CONTROL_SIZE), egui::Sense::click());
    if !ui.is_rect_visible(rect) {
        return response;
    }

    let painter = ui.painter();
    let accent = ui.visuals().selection.bg_fill;
    let size = rect.width();
    let at = |x: f32, y: f32| rect.min + egui::vec2(size * x, size * y);

    painter.rect_stroke(
        rect,
        4.0,
        egui::Stroke::new(BORDER_WIDTH, egui::Color32::LIGHT_GRAY),
        egui::StrokeKind::Inside,
    );

    match state {
        CheckboxState::Selected => {
            painter.rect_filled(rect, 4.0, accent);
            let tick = egui::Stroke::new(size * 0.1, egui::Color32::WHITE);
            painter.line_segment([at(0.2, 0.5), at(0.4, 0.7)], tick);
            painter.line_segment([at(0.4, 0.7), at(0.8, 0.3)], tick);
        }
        CheckboxState::Partial => {
            painter.line_segment(
                [at(0.2, 0.5), at(0.8, 0.5)],
                egui::Stroke::new(size * 0.1, PARTIAL_GRAY),
            );
        }
        CheckboxState::Unselected => {}
    }

    response
}

pub fn radio_button(ui: &mut egui::Ui, selected: bool) -> egui::Response {
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(CONTROL_SIZE, CONTROL_SIZE), egui::Sense::click());
    if !ui.is_rect_visible(rect) {
        return response;
    }

    let color = if selected {
        egui::Color32::BLUE
    } else {
        egui::Color32::GRAY
    };
    let radius = rect.width() / 2.0;
    let painter = ui.painter();
    painter.circle_stroke(
        rect.center(),
        radius - BORDER_WIDTH / 2.0,
        egui::Stroke::new(BORDER_WIDTH, color),
    );
    if selected {
        painter.circle_filled(rect.center(), radius * 0.6, color);
    }

    response
}
