//! Value-changed sinks fed by the widget models after accepted transitions.

use std::fmt;

use crossbeam_channel::{Sender, TrySendError};
use shared::protocol::ValueChanged;

pub trait ChangeSink {
    fn notify(&mut self, change: &ValueChanged);
}

/// Adapts a closure into a [`ChangeSink`].
pub struct FnSink<F>(pub F);

impl<F> ChangeSink for FnSink<F>
where
    F: FnMut(&ValueChanged),
{
    fn notify(&mut self, change: &ValueChanged) {
        (self.0)(change)
    }
}

impl ChangeSink for Sender<ValueChanged> {
    fn notify(&mut self, change: &ValueChanged) {
        match self.try_send(change.clone()) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                tracing::warn!(kind = change.kind(), "value change queue is full; dropping");
            }
            Err(TrySendError::Disconnected(_)) => {
                tracing::warn!(kind = change.kind(), "value change receiver disconnected");
            }
        }
    }
}

#[derive(Default)]
pub(crate) struct Notifier {
    sink: Option<Box<dyn ChangeSink>>,
}

impl Notifier {
    pub(crate) fn set(&mut self, sink: Box<dyn ChangeSink>) {
        self.sink = Some(sink);
    }

    pub(crate) fn emit(&mut self, change: ValueChanged) {
        if let Some(sink) = self.sink.as_mut() {
            sink.notify(&change);
        }
    }
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("attached", &self.sink.is_some())
            .finish()
    }
}
