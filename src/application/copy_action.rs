//! Copy-to-clipboard use case with transient confirmation
//!
//! One activation writes the payload to the clipboard, queues a success
//! toast and keeps the widget confirmed for the dwell time. Each success
//! opens its own window on a shared counter, so rapid repeated activations
//! extend the confirmed period instead of flashing back to idle.
//!
//! Toasts are handed to a delivery task owned by the widget. They go out in
//! the order the activations succeeded, and a slow notification daemon never
//! holds up `activate`.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use thiserror::Error;
use tokio::sync::{mpsc, watch};
use tokio::task::{JoinHandle, JoinSet};
use tracing::{debug, warn};

use crate::domain::copy::{CopyIndicator, CopyState, DwellTime};

use super::ports::{Clipboard, ClipboardError, Notifier};

/// Toast shown after a successful copy
pub const COPIED_MESSAGE: &str = "Text copied";

/// Toast shown after a failed copy (only when failure toasts are enabled)
pub const COPY_FAILED_MESSAGE: &str = "Could not copy to clipboard";

/// Errors from the copy use case
#[derive(Debug, Error)]
pub enum CopyError {
    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(#[from] ClipboardError),

    #[error("Copy widget has been disposed")]
    Disposed,
}

/// Behavior knobs for the copy widget
#[derive(Debug, Clone)]
pub struct CopyConfig {
    /// How long each activation keeps the widget confirmed
    pub dwell: DwellTime,
    /// Whether to raise the success toast
    pub notify: bool,
    /// Whether to raise a toast when the clipboard write fails
    pub notify_failure: bool,
}

impl Default for CopyConfig {
    fn default() -> Self {
        Self {
            dwell: DwellTime::default(),
            notify: true,
            notify_failure: false,
        }
    }
}

/// A toast waiting for the delivery task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Notice {
    Copied,
    CopyFailed,
}

/// The copy-command widget.
///
/// Must be created and used within a tokio runtime. The widget spawns its
/// notification delivery task on creation, and every successful activation
/// spawns a timer task that closes its confirmation window. Dropping the
/// widget (or calling [`CopyAction::dispose`]) cancels both.
pub struct CopyAction<C>
where
    C: Clipboard,
{
    payload: String,
    config: CopyConfig,
    clipboard: C,
    notices: mpsc::UnboundedSender<Notice>,
    delivery: JoinHandle<()>,
    state: Arc<Mutex<CopyState>>,
    indicator: Arc<watch::Sender<CopyIndicator>>,
    timers: Mutex<JoinSet<()>>,
}

impl<C> CopyAction<C>
where
    C: Clipboard,
{
    /// Create a new widget copying `payload`
    pub fn new<N>(payload: impl Into<String>, config: CopyConfig, clipboard: C, notifier: N) -> Self
    where
        N: Notifier + 'static,
    {
        let (indicator, _) = watch::channel(CopyIndicator::Idle);
        let (notices, queue) = mpsc::unbounded_channel();
        Self {
            payload: payload.into(),
            config,
            clipboard,
            notices,
            delivery: tokio::spawn(deliver_notices(notifier, queue)),
            state: Arc::new(Mutex::new(CopyState::new())),
            indicator: Arc::new(indicator),
            timers: Mutex::new(JoinSet::new()),
        }
    }

    /// The text written on every activation
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Current visual state
    pub fn indicator(&self) -> CopyIndicator {
        lock(&self.state).indicator()
    }

    /// Number of confirmation windows still open
    pub fn pending_count(&self) -> u32 {
        lock(&self.state).pending_count()
    }

    /// Whether the widget has been torn down
    pub fn is_disposed(&self) -> bool {
        lock(&self.state).is_disposed()
    }

    /// Receiver that observes every Idle/Confirmed edge
    pub fn subscribe(&self) -> watch::Receiver<CopyIndicator> {
        self.indicator.subscribe()
    }

    /// Copy the payload and open a confirmation window.
    ///
    /// Safe to call while a previous window is still open. A failed write
    /// leaves the counter untouched and raises no success toast. The only
    /// suspension point is the clipboard write; toasts are queued.
    pub async fn activate(&self) -> Result<(), CopyError> {
        if self.is_disposed() {
            return Err(CopyError::Disposed);
        }

        if let Err(e) = self.clipboard.copy(&self.payload).await {
            warn!(error = %e, "clipboard write failed");
            if self.config.notify_failure && !self.is_disposed() {
                self.queue_notice(Notice::CopyFailed);
            }
            return Err(CopyError::ClipboardUnavailable(e));
        }

        {
            let mut state = lock(&self.state);
            if state.is_disposed() {
                debug!("widget disposed during clipboard write");
                return Err(CopyError::Disposed);
            }
            let next = state.confirm();
            publish(&self.indicator, next);
            debug!(pending = state.pending_count(), "copy confirmed");
        }

        self.schedule_release();

        if self.config.notify {
            self.queue_notice(Notice::Copied);
        }

        Ok(())
    }

    /// Wait until every confirmation window has closed.
    /// Never resolves if the widget is disposed while confirmed.
    pub async fn wait_until_idle(&self) {
        let mut rx = self.subscribe();
        // The sender lives as long as self, so this cannot fail.
        let _ = rx.wait_for(|indicator| !indicator.is_confirmed()).await;
    }

    /// Cancel outstanding windows and queued toasts, and freeze the state
    pub fn dispose(&self) {
        lock(&self.state).dispose();
        lock(&self.timers).abort_all();
        self.delivery.abort();
        debug!("copy widget disposed");
    }

    fn queue_notice(&self, notice: Notice) {
        if self.notices.send(notice).is_err() {
            debug!(?notice, "notification task gone, dropping toast");
        }
    }

    fn schedule_release(&self) {
        let state = Arc::clone(&self.state);
        let indicator = Arc::clone(&self.indicator);
        let dwell = self.config.dwell.as_std();

        let mut timers = lock(&self.timers);
        // Reap finished timers so the set stays small.
        while timers.try_join_next().is_some() {}

        timers.spawn(async move {
            tokio::time::sleep(dwell).await;

            let mut state = lock(&state);
            if state.is_disposed() {
                return;
            }
            let next = state.release();
            publish(&indicator, next);
            debug!(pending = state.pending_count(), "confirmation window closed");
        });
    }
}

impl<C> Drop for CopyAction<C>
where
    C: Clipboard,
{
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Show queued toasts one at a time, in queue order
async fn deliver_notices<N: Notifier>(notifier: N, mut queue: mpsc::UnboundedReceiver<Notice>) {
    while let Some(notice) = queue.recv().await {
        let result = match notice {
            Notice::Copied => notifier.success(COPIED_MESSAGE).await,
            Notice::CopyFailed => notifier.failure(COPY_FAILED_MESSAGE).await,
        };
        if let Err(e) = result {
            warn!(error = %e, ?notice, "failed to show notification");
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn publish(sender: &watch::Sender<CopyIndicator>, next: CopyIndicator) {
    sender.send_if_modified(|current| {
        if *current == next {
            false
        } else {
            *current = next;
            true
        }
    });
}
