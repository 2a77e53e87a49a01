//! Deferred script loading.
//!
//! [`ScriptLoader::load_script`] creates a [`ScriptElement`], wires its load and
//! error handlers to a fresh [`Task`], and asks the [`Timer`] to append it to the
//! [`Document`] once the configured delay has passed.

pub mod config;
pub mod error;

pub use config::*;
pub use error::*;

use crate::env::{Document, ScriptElement, Timer};
use crate::framework::Task;
use std::sync::Arc;
use tracing::{debug, info, instrument, trace};

/// Loads scripts into a [`Document`] after a fixed delay.
///
/// Cloning shares the same document and timer.
#[derive(Clone)]
pub struct ScriptLoader {
    document: Arc<dyn Document>,
    timer: Arc<dyn Timer>,
    config: LoaderConfig,
}

impl ScriptLoader {
    pub fn new(document: Arc<dyn Document>, timer: Arc<dyn Timer>, config: LoaderConfig) -> Self {
        Self {
            document,
            timer,
            config,
        }
    }

    /// Starts loading `src` and returns the task tracking it.
    ///
    /// # Ordering
    /// Both handlers are registered before anything is scheduled, and insertion
    /// always goes through the timer, so the document never sees the element
    /// before the delay has elapsed.
    ///
    /// # Settlement
    /// - load event: fulfilled with the element (which exposes `src`)
    /// - error event: rejected with [`LoadError::Failed`]
    ///
    /// Whichever event comes first wins; later events are ignored. There is no
    /// cancellation and no timeout once the element is inserted.
    #[instrument(skip(self), fields(delay_ms = self.config.delay_ms))]
    pub fn load_script(&self, src: &str) -> Task<ScriptElement, LoadError> {
        let (task, settler) = Task::pending();
        let element = ScriptElement::new(src);

        let on_load = settler.clone();
        element.set_onload(move |script| {
            if on_load.resolve(script.clone()) {
                info!(src = script.src(), "Script loaded");
            } else {
                trace!(src = script.src(), "Late load event ignored");
            }
        });

        let on_error = settler;
        let failed_src = src.to_string();
        element.set_onerror(move || {
            if on_error.reject(LoadError::failed(failed_src.as_str())) {
                info!(src = %failed_src, "Script failed to load");
            } else {
                trace!(src = %failed_src, "Late error event ignored");
            }
        });

        let document = Arc::clone(&self.document);
        debug!("Scheduling insertion");
        self.timer.set_timeout(
            self.config.delay(),
            Box::new(move || {
                debug!(src = element.src(), "Inserting script");
                document.append(element);
            }),
        );

        task
    }
}
