//! Controller layer: widget input events and their routing into the models.

pub mod events;
pub mod orchestration;
