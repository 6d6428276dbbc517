//! Cross-platform clipboard adapter using arboard
//!
//! Works on Windows, macOS, and Linux (X11/Wayland). On X11 and Wayland the
//! copied text is served by whoever holds the `arboard::Clipboard`, so the
//! handle lives on an owner thread for as long as the adapter does.

use std::marker::PhantomData;
use std::sync::{mpsc, Mutex, PoisonError};
use std::thread;

use async_trait::async_trait;
use tokio::sync::oneshot;
use tracing::debug;

use crate::application::ports::{Clipboard, ClipboardError};

type Reply = oneshot::Sender<Result<(), ClipboardError>>;

/// A handle that holds the system selection while it is alive
trait Selection: Sized {
    fn open() -> Result<Self, ClipboardError>;
    fn set_text(&mut self, text: String) -> Result<(), ClipboardError>;
}

impl Selection for arboard::Clipboard {
    fn open() -> Result<Self, ClipboardError> {
        arboard::Clipboard::new().map_err(|e| ClipboardError::ClipboardUnavailable(e.to_string()))
    }

    fn set_text(&mut self, text: String) -> Result<(), ClipboardError> {
        arboard::Clipboard::set_text(self, text).map_err(|e| ClipboardError::CopyFailed(e.to_string()))
    }
}

/// Runs every write on one thread that keeps the selection handle open.
/// The thread exits, releasing the handle, once the owner is dropped.
struct SelectionOwner<S> {
    requests: Mutex<Option<mpsc::Sender<(String, Reply)>>>,
    _selection: PhantomData<fn() -> S>,
}

impl<S: Selection + 'static> SelectionOwner<S> {
    fn new() -> Self {
        Self {
            requests: Mutex::new(None),
            _selection: PhantomData,
        }
    }

    fn sender(&self) -> Result<mpsc::Sender<(String, Reply)>, ClipboardError> {
        let mut requests = self.requests.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(tx) = requests.as_ref() {
            return Ok(tx.clone());
        }

        let (tx, rx) = mpsc::channel();
        thread::Builder::new()
            .name("clipboard-owner".to_string())
            .spawn(move || serve::<S>(rx))
            .map_err(|e| ClipboardError::ClipboardUnavailable(e.to_string()))?;
        *requests = Some(tx.clone());
        Ok(tx)
    }

    async fn write(&self, text: &str) -> Result<(), ClipboardError> {
        let (reply, response) = oneshot::channel();
        self.sender()?
            .send((text.to_owned(), reply))
            .map_err(|_| ClipboardError::CopyFailed("clipboard owner stopped".to_string()))?;

        response
            .await
            .map_err(|_| ClipboardError::CopyFailed("clipboard owner stopped".to_string()))?
    }
}

fn serve<S: Selection>(requests: mpsc::Receiver<(String, Reply)>) {
    let mut selection: Option<S> = None;

    for (text, reply) in requests {
        let result = set_selection(&mut selection, text);
        if result.is_err() {
            // Reopen on the next write
            selection = None;
        }
        let _ = reply.send(result);
    }

    debug!("clipboard owner released the selection");
}

fn set_selection<S: Selection>(slot: &mut Option<S>, text: String) -> Result<(), ClipboardError> {
    if slot.is_none() {
        *slot = Some(S::open()?);
    }
    match slot.as_mut() {
        Some(selection) => selection.set_text(text),
        None => Err(ClipboardError::ClipboardUnavailable(
            "clipboard not open".to_string(),
        )),
    }
}

/// Cross-platform clipboard adapter using arboard
pub struct ArboardClipboard {
    owner: SelectionOwner<arboard::Clipboard>,
}

impl ArboardClipboard {
    /// Create a new arboard clipboard adapter.
    /// The display connection is opened on the first copy.
    pub fn new() -> Self {
        Self {
            owner: SelectionOwner::new(),
        }
    }
}

impl Default for ArboardClipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Clipboard for ArboardClipboard {
    async fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        self.owner.write(text).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::{Duration, Instant};

    static OPENED: AtomicUsize = AtomicUsize::new(0);
    static RELEASED: AtomicUsize = AtomicUsize::new(0);
    static WRITTEN: Mutex<Vec<String>> = Mutex::new(Vec::new());

    struct FakeSelection;

    impl Selection for FakeSelection {
        fn open() -> Result<Self, ClipboardError> {
            OPENED.fetch_add(1, Ordering::SeqCst);
            Ok(Self)
        }

        fn set_text(&mut self, text: String) -> Result<(), ClipboardError> {
            WRITTEN.lock().unwrap().push(text);
            Ok(())
        }
    }

    impl Drop for FakeSelection {
        fn drop(&mut self) {
            RELEASED.fetch_add(1, Ordering::SeqCst);
        }
    }

    static FLAKY_OPENS: AtomicUsize = AtomicUsize::new(0);

    struct FlakySelection;

    impl Selection for FlakySelection {
        fn open() -> Result<Self, ClipboardError> {
            if FLAKY_OPENS.fetch_add(1, Ordering::SeqCst) == 0 {
                return Err(ClipboardError::ClipboardUnavailable("no display".to_string()));
            }
            Ok(Self)
        }

        fn set_text(&mut self, _text: String) -> Result<(), ClipboardError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn selection_stays_open_until_owner_is_dropped() {
        let owner = SelectionOwner::<FakeSelection>::new();

        owner.write("first").await.unwrap();
        owner.write("second").await.unwrap();

        assert_eq!(OPENED.load(Ordering::SeqCst), 1);
        assert_eq!(RELEASED.load(Ordering::SeqCst), 0);
        assert_eq!(*WRITTEN.lock().unwrap(), vec!["first", "second"]);

        drop(owner);
        let deadline = Instant::now() + Duration::from_secs(5);
        while RELEASED.load(Ordering::SeqCst) == 0 && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(10));
        }
        assert_eq!(RELEASED.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failed_open_is_retried_on_next_write() {
        let owner = SelectionOwner::<FlakySelection>::new();

        let err = owner.write("text").await.unwrap_err();
        assert!(matches!(err, ClipboardError::ClipboardUnavailable(_)));

        owner.write("text").await.unwrap();
        assert_eq!(FLAKY_OPENS.load(Ordering::SeqCst), 2);
    }
}
