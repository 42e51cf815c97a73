use super::*;

use crossbeam_channel::{unbounded, Receiver};

fn controller_with_channel(length: usize) -> (SegmentedCodeController, Receiver<ValueChanged>) {
    let (tx, rx) = unbounded();
    let controller = SegmentedCodeController::new(length)
        .expect("controller")
        .with_sink(tx);
    (controller, rx)
}

fn code_changes(rx: &Receiver<ValueChanged>) -> Vec<String> {
    rx.try_iter()
        .map(|change| match change {
            ValueChanged::Code { aggregate_code } => aggregate_code,
            other => panic!("unexpected notification {other:?}"),
        })
        .collect()
}

#[test]
fn zero_length_is_rejected_at_construction() {
    let err = SegmentedCodeController::new(0).expect_err("should fail");
    assert_eq!(err, WidgetError::InvalidLength);
}

#[test]
fn fresh_controller_is_empty_and_focused_on_first_slot() {
    for length in 1..=8 {
        let controller = SegmentedCodeController::new(length).expect("controller");
        assert_eq!(controller.slots().len(), length);
        assert!(controller.slots().iter().all(Option::is_none));
        assert_eq!(controller.aggregate_code(), "");
        assert_eq!(controller.focus_index(), Some(0));
        assert!(!controller.is_complete());
    }
}

#[test]
fn digit_entry_advances_focus() {
    let (mut controller, rx) = controller_with_channel(4);

    let effect = controller.set_slot_value(1, "7").expect("accepted");

    assert_eq!(controller.slot(1), Some('7'));
    assert_eq!(controller.focus_index(), Some(2));
    assert_eq!(effect.focus_index, Some(2));
    assert_eq!(effect.aggregate_code, "7");
    assert_eq!(code_changes(&rx), vec!["7".to_string()]);
}

#[test]
fn digit_in_last_slot_keeps_focus() {
    let (mut controller, _rx) = controller_with_channel(3);
    controller.set_slot_value(1, "4").expect("accepted");

    let effect = controller.set_slot_value(2, "7").expect("accepted");

    assert_eq!(controller.slot(2), Some('7'));
    assert_eq!(controller.focus_index(), Some(2));
    assert_eq!(effect.focus_index, None);
}

#[test]
fn invalid_input_is_a_silent_no_op() {
    let (mut controller, rx) = controller_with_channel(4);
    controller.set_slot_value(0, "5").expect("accepted");
    let _ = code_changes(&rx);
    let before_slots = controller.slots().to_vec();
    let before_focus = controller.focus_index();

    for raw in ["ab", "a", "12", "-", " ", "٣", "5x"] {
        assert_eq!(controller.set_slot_value(1, raw), None, "input {raw:?}");
    }
    assert_eq!(controller.set_slot_value(4, "1"), None);

    assert_eq!(controller.slots(), before_slots.as_slice());
    assert_eq!(controller.focus_index(), before_focus);
    assert!(code_changes(&rx).is_empty());
}

#[test]
fn empty_input_clears_slot_without_moving_focus() {
    let (mut controller, rx) = controller_with_channel(4);
    controller.set_slot_value(0, "1").expect("accepted");
    controller.set_slot_value(1, "2").expect("accepted");

    let effect = controller.set_slot_value(0, "").expect("accepted");

    assert_eq!(controller.slot(0), None);
    assert_eq!(effect.focus_index, None);
    assert_eq!(controller.focus_index(), Some(2));
    assert_eq!(effect.aggregate_code, "2");
    assert_eq!(code_changes(&rx), vec!["1", "12", "2"]);
}

#[test]
fn typing_four_digits_builds_the_code() {
    let (mut controller, rx) = controller_with_channel(4);

    for (index, digit) in ["1", "2", "3", "4"].into_iter().enumerate() {
        controller.set_slot_value(index, digit).expect("accepted");
    }

    assert_eq!(controller.aggregate_code(), "1234");
    assert_eq!(controller.focus_index(), Some(3));
    assert!(controller.is_complete());
    assert_eq!(code_changes(&rx), vec!["1", "12", "123", "1234"]);
}

#[test]
fn backspace_on_empty_slot_clears_previous_slot() {
    let (mut controller, rx) = controller_with_channel(4);
    controller.set_slot_value(0, "1").expect("accepted");
    controller.set_slot_value(1, "2").expect("accepted");
    let _ = code_changes(&rx);

    let effect = controller.on_backspace_at_empty_slot(2).expect("accepted");

    assert_eq!(controller.slot(1), None);
    assert_eq!(controller.focus_index(), Some(1));
    assert_eq!(effect.focus_index, Some(1));
    assert_eq!(effect.aggregate_code, "1");
    assert_eq!(code_changes(&rx), vec!["1".to_string()]);
}

#[test]
fn backspace_on_empty_slot_moves_back_even_when_previous_is_empty() {
    let (mut controller, rx) = controller_with_channel(4);

    controller.on_backspace_at_empty_slot(3).expect("accepted");

    assert_eq!(controller.focus_index(), Some(2));
    assert_eq!(controller.aggregate_code(), "");
    assert_eq!(code_changes(&rx), vec![String::new()]);
}

#[test]
fn backspace_on_first_slot_is_a_no_op() {
    let (mut controller, rx) = controller_with_channel(4);
    controller.set_slot_value(0, "9").expect("accepted");
    let _ = code_changes(&rx);

    assert_eq!(controller.on_backspace_at_empty_slot(0), None);
    assert_eq!(controller.on_backspace_at_empty_slot(7), None);

    assert_eq!(controller.slot(0), Some('9'));
    assert_eq!(controller.focus_index(), Some(1));
    assert!(code_changes(&rx).is_empty());
}

#[test]
fn single_slot_code_never_moves_focus() {
    let mut controller = SegmentedCodeController::new(1).expect("controller");
    let effect = controller.set_slot_value(0, "0").expect("accepted");
    assert_eq!(effect.focus_index, None);
    assert_eq!(controller.focus_index(), Some(0));
    assert!(controller.is_complete());
}

#[test]
fn effect_serializes_for_status_output() {
    let mut controller = SegmentedCodeController::new(2).expect("controller");
    let effect = controller.set_slot_value(0, "3").expect("accepted");
    let json = serde_json::to_value(&effect).expect("json");
    assert_eq!(json["aggregate_code"], "3");
    assert_eq!(json["focus_index"], 1);
    assert_eq!(json["slots"][0], "3");
    assert!(json["slots"][1].is_null());
}

#[test]
fn verify_code_waits_for_every_slot() {
    assert_eq!(verify_code("123", "1234", 4), CodeVerdict::Incomplete);
    assert_eq!(verify_code("1234", "1234", 4), CodeVerdict::Match);
    assert_eq!(verify_code("1243", "1234", 4), CodeVerdict::Mismatch);
    assert_eq!(verify_code("", "", 1), CodeVerdict::Incomplete);
}
