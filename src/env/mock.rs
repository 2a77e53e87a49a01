//! # Mock Environment
//!
//! Test doubles for every collaborator the script loader talks to.
//!
//! - [`ManualTimer`]: Nothing fires until the test calls [`ManualTimer::advance`].
//! - [`MockDocument`]: Records appended elements; the test decides which
//!   [`LoadEvent`] each one gets, or sets an automatic response.
//! - [`RecordingConsole`]: Keeps every logged line for assertions.
//!
//! # Example
//! ```ignore
//! let timer = Arc::new(ManualTimer::new());
//! let document = Arc::new(MockDocument::new());
//! let loader = ScriptLoader::new(document.clone(), timer.clone(), LoaderConfig::default());
//!
//! let task = loader.load_script("foo.js");
//! assert!(document.appended().is_empty());
//!
//! timer.advance(Duration::from_millis(5000));
//! document.fire(0, LoadEvent::Load);
//! let script = task.await?;
//! ```

use super::console::Console;
use super::document::{Document, LoadEvent, ScriptElement};
use super::timer::{Timer, TimerCallback};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

// =============================================================================
// TIMER
// =============================================================================

/// A [`Timer`] driven by hand.
///
/// Time only moves when [`advance`](Self::advance) is called; callbacks whose
/// deadline has been reached then run in deadline order on the caller's thread.
#[derive(Default)]
pub struct ManualTimer {
    state: Mutex<ManualState>,
}

#[derive(Default)]
struct ManualState {
    now: Duration,
    scheduled: Vec<(Duration, TimerCallback)>,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since creation, as seen by this timer.
    pub fn now(&self) -> Duration {
        lock(&self.state).now
    }

    /// Number of callbacks still waiting for their deadline.
    pub fn pending(&self) -> usize {
        lock(&self.state).scheduled.len()
    }

    /// Moves time forward by `by` and runs every callback that became due.
    /// Returns how many ran.
    pub fn advance(&self, by: Duration) -> usize {
        let mut due = {
            let mut state = lock(&self.state);
            state.now += by;
            let now = state.now;
            let (due, waiting): (Vec<_>, Vec<_>) = state
                .scheduled
                .drain(..)
                .partition(|(deadline, _)| *deadline <= now);
            state.scheduled = waiting;
            due
        };
        due.sort_by_key(|(deadline, _)| *deadline);

        let fired = due.len();
        for (_, callback) in due {
            callback();
        }
        fired
    }
}

impl Timer for ManualTimer {
    fn set_timeout(&self, delay: Duration, callback: TimerCallback) {
        let mut state = lock(&self.state);
        let deadline = state.now + delay;
        state.scheduled.push((deadline, callback));
    }
}

// =============================================================================
// DOCUMENT
// =============================================================================

/// A [`Document`] that records what was appended.
#[derive(Debug, Default)]
pub struct MockDocument {
    appended: Mutex<Vec<ScriptElement>>,
    auto_respond: Option<LoadEvent>,
}

impl MockDocument {
    /// A document that never fires events on its own.
    pub fn new() -> Self {
        Self::default()
    }

    /// A document that fires `event` at every element as soon as it is appended.
    pub fn responding(event: LoadEvent) -> Self {
        Self {
            appended: Mutex::new(Vec::new()),
            auto_respond: Some(event),
        }
    }

    /// Snapshot of the appended elements, in insertion order.
    pub fn appended(&self) -> Vec<ScriptElement> {
        lock(&self.appended).clone()
    }

    /// Fires `event` at the `index`-th appended element.
    ///
    /// # Panics
    /// If fewer than `index + 1` elements were appended.
    pub fn fire(&self, index: usize, event: LoadEvent) {
        let element = lock(&self.appended)
            .get(index)
            .cloned()
            .unwrap_or_else(|| panic!("No element appended at index {index}"));
        element.dispatch(event);
    }
}

impl Document for MockDocument {
    fn append(&self, element: ScriptElement) {
        lock(&self.appended).push(element.clone());
        if let Some(event) = self.auto_respond {
            element.dispatch(event);
        }
    }
}

// =============================================================================
// CONSOLE
// =============================================================================

/// A [`Console`] that remembers every line.
#[derive(Debug, Default)]
pub struct RecordingConsole {
    lines: Mutex<Vec<String>>,
}

impl RecordingConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        lock(&self.lines).clone()
    }
}

impl Console for RecordingConsole {
    fn log(&self, message: &str) {
        lock(&self.lines).push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_manual_timer_fires_only_when_due() {
        let timer = ManualTimer::new();
        let fired = Arc::new(AtomicUsize::new(0));

        for delay in [30, 10] {
            let fired = fired.clone();
            timer.set_timeout(
                Duration::from_millis(delay),
                Box::new(move || {
                    fired.fetch_add(1, Ordering::SeqCst);
                }),
            );
        }

        assert_eq!(timer.advance(Duration::from_millis(9)), 0);
        assert_eq!(timer.advance(Duration::from_millis(1)), 1);
        assert_eq!(timer.pending(), 1);
        assert_eq!(timer.advance(Duration::from_millis(20)), 1);
        assert_eq!(fired.load(Ordering::SeqCst), 2);
        assert_eq!(timer.now(), Duration::from_millis(30));
    }

    #[test]
    fn test_manual_timer_runs_in_deadline_order() {
        let timer = ManualTimer::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        for delay in [3u64, 1, 2] {
            let order = order.clone();
            timer.set_timeout(
                Duration::from_millis(delay),
                Box::new(move || order.lock().unwrap().push(delay)),
            );
        }

        timer.advance(Duration::from_millis(5));
        assert_eq!(*order.lock().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_recording_console_keeps_lines() {
        let console = RecordingConsole::new();
        console.log("one");
        console.log("two");
        assert_eq!(console.lines(), vec!["one", "two"]);
    }

    #[test]
    fn test_mock_document_auto_responds() {
        let document = MockDocument::responding(LoadEvent::Error);
        let errors = Arc::new(AtomicUsize::new(0));
        let element = ScriptElement::new("x.js");
        let e = errors.clone();
        element.set_onerror(move || {
            e.fetch_add(1, Ordering::SeqCst);
        });

        document.append(element);
        assert_eq!(errors.load(Ordering::SeqCst), 1);
        assert_eq!(document.appended().len(), 1);
    }
}
