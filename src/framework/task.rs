//! # Task Framework
//!
//! This module defines a single-assignment task: a future that settles exactly once,
//! to either a value or an error, and lets callers chain handlers onto it.
//!
//! ## Key Types
//!
//! - [`Task`]: The receiving half. Await it, or chain [`Task::then`] / [`Task::then_ok`].
//! - [`Settler`]: The settling half. Cheap to clone; the first settlement wins.
//! - [`TaskError`]: What awaiting a task can fail with.

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, PoisonError};
use std::task::{Context, Poll};
use tokio::sync::oneshot;
use tracing::trace;

// =============================================================================
// 1. ERRORS
// =============================================================================

/// Errors observed when awaiting a [`Task`].
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum TaskError<E> {
    /// The task was settled with an error.
    #[error("{0}")]
    Rejected(E),
    /// Every [`Settler`] was dropped while the task was still pending.
    #[error("Task abandoned before settlement")]
    Abandoned,
}

impl<E> TaskError<E> {
    /// Returns the rejection reason, if there is one.
    pub fn into_rejection(self) -> Option<E> {
        match self {
            TaskError::Rejected(error) => Some(error),
            TaskError::Abandoned => None,
        }
    }
}

/// Type alias for the one-shot channel a task settles through.
type Outcome<T, E> = oneshot::Sender<Result<T, E>>;

// =============================================================================
// 2. THE SETTLING HALF
// =============================================================================

/// Settles the [`Task`] it was created with.
///
/// # Single Assignment
/// All clones share one slot holding the channel sender. Settling takes the sender
/// out of the slot, so only the first `resolve`/`reject` across all clones has an
/// effect. Later calls return `false` and drop their argument.
pub struct Settler<T, E> {
    slot: Arc<Mutex<Option<Outcome<T, E>>>>,
}

impl<T, E> Clone for Settler<T, E> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<T, E> Settler<T, E> {
    /// Fulfils the task with `value`. Returns `false` if it was already settled.
    pub fn resolve(&self, value: T) -> bool {
        self.settle(Ok(value))
    }

    /// Rejects the task with `error`. Returns `false` if it was already settled.
    pub fn reject(&self, error: E) -> bool {
        self.settle(Err(error))
    }

    /// True once any clone has resolved or rejected the task.
    pub fn is_settled(&self) -> bool {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }

    fn settle(&self, outcome: Result<T, E>) -> bool {
        let sender = self
            .slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        match sender {
            Some(sender) => {
                // A dropped task still counts as settled.
                let _ = sender.send(outcome);
                true
            }
            None => {
                trace!(fulfilled = outcome.is_ok(), "Ignoring settlement of settled task");
                false
            }
        }
    }
}

// =============================================================================
// 3. THE TASK
// =============================================================================

/// A single-assignment future.
///
/// # Architecture Note
/// A `Task` is the receiver end of a `oneshot` channel whose sender lives in a
/// shared [`Settler`]. Awaiting the task yields:
/// - `Ok(value)` when fulfilled
/// - `Err(TaskError::Rejected(error))` when rejected
/// - `Err(TaskError::Abandoned)` when every settler was dropped first
///
/// Handlers chained with [`Task::then`] run on a spawned Tokio task, so they never
/// run synchronously inside the `then` call, and chaining requires a running
/// runtime.
#[must_use = "a task does nothing observable unless awaited or chained"]
pub struct Task<T, E> {
    receiver: oneshot::Receiver<Result<T, E>>,
}

impl<T, E> Task<T, E> {
    /// Creates a pending task and the settler that completes it.
    pub fn pending() -> (Self, Settler<T, E>) {
        let (sender, receiver) = oneshot::channel();
        let settler = Settler {
            slot: Arc::new(Mutex::new(Some(sender))),
        };
        (Self { receiver }, settler)
    }

    /// A task that is already fulfilled with `value`.
    pub fn resolved(value: T) -> Self {
        let (task, settler) = Self::pending();
        settler.resolve(value);
        task
    }

    /// A task that is already rejected with `error`.
    pub fn rejected(error: E) -> Self {
        let (task, settler) = Self::pending();
        settler.reject(error);
        task
    }
}

impl<T, E> Future for Task<T, E> {
    type Output = Result<T, TaskError<E>>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.receiver).poll(cx).map(|received| match received {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(error)) => Err(TaskError::Rejected(error)),
            Err(_) => Err(TaskError::Abandoned),
        })
    }
}

impl<T, E> Task<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Chains a fulfilment handler and a rejection handler onto this task.
    ///
    /// Exactly one of the handlers runs once this task settles. Whatever it returns
    /// settles the returned task: `Ok` fulfils it, `Err` rejects it. A rejection
    /// handler that returns `Ok` therefore turns a failure into a success for the
    /// next stage.
    ///
    /// If this task is abandoned, neither handler runs and the returned task is
    /// abandoned too.
    pub fn then<U, F, R>(self, on_fulfilled: F, on_rejected: R) -> Task<U, E>
    where
        U: Send + 'static,
        F: FnOnce(T) -> Result<U, E> + Send + 'static,
        R: FnOnce(E) -> Result<U, E> + Send + 'static,
    {
        let (next, settler) = Task::pending();
        tokio::spawn(async move {
            let outcome = match self.await {
                Ok(value) => on_fulfilled(value),
                Err(TaskError::Rejected(error)) => on_rejected(error),
                Err(TaskError::Abandoned) => {
                    trace!("Upstream task abandoned, dropping handlers");
                    return;
                }
            };
            match outcome {
                Ok(value) => settler.resolve(value),
                Err(error) => settler.reject(error),
            };
        });
        next
    }

    /// Chains a fulfilment handler only. Rejections pass through untouched.
    pub fn then_ok<U, F>(self, on_fulfilled: F) -> Task<U, E>
    where
        U: Send + 'static,
        F: FnOnce(T) -> Result<U, E> + Send + 'static,
    {
        self.then(on_fulfilled, Err)
    }
}

// =============================================================================
// 4. TESTS
// =============================================================================
