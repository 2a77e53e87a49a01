use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};
use tracing::{debug, warn};

use super::document::{Document, LoadEvent, ScriptElement};

/// An in-process document with no network behind it.
///
/// Appended elements are kept in the document head, in insertion order. Each one is
/// answered with [`LoadEvent::Load`] if its `src` was registered as available and
/// [`LoadEvent::Error`] otherwise. The event is fired from a spawned task, never
/// from inside [`Document::append`], so this must be used within a Tokio runtime.
#[derive(Debug, Default)]
pub struct HeadlessDocument {
    available: HashSet<String>,
    head: Mutex<Vec<ScriptElement>>,
}

impl HeadlessDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `src` as loadable.
    pub fn with_available(mut self, src: impl Into<String>) -> Self {
        self.available.insert(src.into());
        self
    }

    pub fn is_available(&self, src: &str) -> bool {
        self.available.contains(src)
    }

    /// Snapshot of the elements appended so far.
    pub fn head(&self) -> Vec<ScriptElement> {
        self.head
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Document for HeadlessDocument {
    fn append(&self, element: ScriptElement) {
        let event = if self.is_available(element.src()) {
            LoadEvent::Load
        } else {
            warn!(src = element.src(), "Script not available");
            LoadEvent::Error
        };

        self.head
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(element.clone());
        debug!(src = element.src(), ?event, "Appended to head");

        tokio::spawn(async move {
            element.dispatch(event);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::oneshot;

    fn watch(element: &ScriptElement) -> oneshot::Receiver<LoadEvent> {
        let (tx, rx) = oneshot::channel();
        let tx = std::sync::Arc::new(Mutex::new(Some(tx)));
        let on_error = tx.clone();
        element.set_onload(move |_| {
            if let Some(tx) = tx.lock().unwrap().take() {
                let _ = tx.send(LoadEvent::Load);
            }
        });
        element.set_onerror(move || {
            if let Some(tx) = on_error.lock().unwrap().take() {
                let _ = tx.send(LoadEvent::Error);
            }
        });
        rx
    }

    #[tokio::test]
    async fn test_available_script_loads() {
        let document = HeadlessDocument::new().with_available("ok.js");
        let element = ScriptElement::new("ok.js");
        let events = watch(&element);

        document.append(element.clone());

        assert_eq!(events.await.unwrap(), LoadEvent::Load);
        let head = document.head();
        assert_eq!(head.len(), 1);
        assert!(head[0].ptr_eq(&element));
    }

    #[tokio::test]
    async fn test_unknown_script_errors() {
        let document = HeadlessDocument::new().with_available("ok.js");
        let element = ScriptElement::new("missing.js");
        let events = watch(&element);

        document.append(element);

        assert_eq!(events.await.unwrap(), LoadEvent::Error);
        assert_eq!(document.head().len(), 1);
    }
}
