//! Cancellable deferred messages.
//!
//! UI state in this crate is only mutated from discrete event handlers. Work
//! that has to happen later (autoplay reveal, simulated load latency, the
//! auto-advance tick) is expressed as a message delivered on a channel after
//! a delay, which the host feeds back into the owning controller's `update`.
//!
//! Every scheduled message returns a [`TaskHandle`]. Cancelling or dropping
//! the handle aborts the task, so a superseded message is never delivered.
//! Scheduling requires a running tokio runtime.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::trace;

/// Sends messages of type `M` after a delay or on a fixed period.
#[derive(Debug)]
pub struct Scheduler<M> {
    tx: mpsc::UnboundedSender<M>,
}

impl<M> Clone for Scheduler<M> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<M: Send + 'static> Scheduler<M> {
    /// Create a scheduler and the receiver its messages arrive on.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<M>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Deliver `message` once, `delay` from now.
    pub fn after(&self, delay: Duration, message: M) -> TaskHandle {
        let deadline = Instant::now() + delay;
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            if tx.send(message).is_err() {
                trace!("deferred message dropped; receiver closed");
            }
        });
        TaskHandle::new(handle)
    }

    /// Deliver a clone of `message` every `period`, first after one period.
    pub fn every(&self, period: Duration, message: M) -> TaskHandle
    where
        M: Clone,
    {
        let start = Instant::now() + period;
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(start, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if tx.send(message.clone()).is_err() {
                    trace!("periodic message stopped; receiver closed");
                    break;
                }
            }
        });
        TaskHandle::new(handle)
    }
}

/// Handle to a scheduled message. Aborts the task on cancel or drop.
#[derive(Debug)]
pub struct TaskHandle {
    handle: Option<JoinHandle<()>>,
}

impl TaskHandle {
    fn new(handle: JoinHandle<()>) -> Self {
        Self {
            handle: Some(handle),
        }
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    /// True until the message was sent (one-shot) or the task was cancelled.
    pub fn is_pending(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}
