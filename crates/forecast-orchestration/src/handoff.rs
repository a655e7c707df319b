//! One-shot handoff from the aggregator to the analyzer.
//!
//! Backed by a single-slot channel. Both ends are consumed by use, so a
//! handoff carries at most one value.

use crossbeam_channel::{bounded, Receiver, Sender};

/// Error type for a failed handoff.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum HandoffError {
    /// The receiving side was dropped before the value was sent.
    #[error("analysis receiver dropped before the ranking was sent")]
    ReceiverGone,

    /// The sending side was dropped without sending.
    #[error("aggregation finished without sending a ranking")]
    NothingSent,
}

/// Sending end, held by the aggregator.
pub struct HandoffSender<T> {
    tx: Sender<T>,
}

/// Receiving end, held by the analyzer.
pub struct HandoffReceiver<T> {
    rx: Receiver<T>,
}

/// Create a one-shot handoff pair.
#[must_use]
pub fn oneshot<T>() -> (HandoffSender<T>, HandoffReceiver<T>) {
    let (tx, rx) = bounded(1);
    (HandoffSender { tx }, HandoffReceiver { rx })
}

impl<T> HandoffSender<T> {
    /// Send the value. Only blocks while the slot is occupied, which cannot
    /// happen for a single send.
    pub fn send(self, value: T) -> Result<(), HandoffError> {
        self.tx.send(value).map_err(|_| HandoffError::ReceiverGone)
    }
}

impl<T> HandoffReceiver<T> {
    /// Block until the value arrives or the sender is dropped.
    pub fn recv(self) -> Result<T, HandoffError> {
        self.rx.recv().map_err(|_| HandoffError::NothingSent)
    }
}
