//! Event publishing/subscription port.
//!
//! The bus is the transport seam between the pricing runtime and whatever
//! wants to hear about price changes (sales terminals, buyback, dashboards).
//! The contract is deliberately small:
//!
//! - **Transport-agnostic**: in-memory channels here; a broker adapter can
//!   implement the same trait without touching domain code.
//! - **At-least-once**: consumers must tolerate duplicate delivery.
//! - **No storage**: the repository is the system of record for prices; the
//!   bus only distributes change notifications.

use std::sync::mpsc::Receiver;
use std::time::Duration;

/// A subscription to a message stream.
///
/// Each subscription receives its own copy of every message published after
/// it was created (broadcast semantics). Consume from a single thread.
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Block until the next message is available.
    pub fn recv(&self) -> Result<M, std::sync::mpsc::RecvError> {
        self.receiver.recv()
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<M, std::sync::mpsc::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Block for up to `timeout` waiting for a message.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<M, std::sync::mpsc::RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }
}

/// Publish/subscribe port.
///
/// Publish failures surface to the caller; since the repository already
/// holds the accepted record, republishing is always safe.
pub trait EventBus<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<M>;
}
