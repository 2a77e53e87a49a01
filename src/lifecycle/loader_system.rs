use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::env::{Console, Document, Timer};
use crate::framework::{Task, TaskError};
use crate::lifecycle::report_load;
use crate::script_loader::{LoadError, LoaderConfig, ScriptLoader};

/// The runtime orchestrator for script loading.
///
/// `LoaderSystem` is responsible for:
/// - **Dependency Wiring**: Connecting the loader to a document, a timer and a console
/// - **Report Tracking**: Keeping every two-stage report it started
/// - **Shutdown**: Waiting for those reports before the process exits
///
/// # Example
///
/// ```ignore
/// let config = LoaderConfig::default();
/// let mut system = LoaderSystem::new(document, Arc::new(TokioTimer), console, config);
/// system.load("https://example.com/lib.js");
/// system.shutdown().await?;
/// ```
pub struct LoaderSystem {
    /// The loader all reports go through
    pub loader: ScriptLoader,

    console: Arc<dyn Console>,

    /// Reports started by [`LoaderSystem::load`], awaited on shutdown
    reports: Vec<(String, Task<(), LoadError>)>,
}

impl LoaderSystem {
    pub fn new(
        document: Arc<dyn Document>,
        timer: Arc<dyn Timer>,
        console: Arc<dyn Console>,
        config: LoaderConfig,
    ) -> Self {
        Self {
            loader: ScriptLoader::new(document, timer, config),
            console,
            reports: Vec::new(),
        }
    }

    /// Starts loading `src` with the two-stage report chained on.
    #[instrument(skip(self))]
    pub fn load(&mut self, src: &str) {
        let task = self.loader.load_script(src);
        let report = report_load(task, Arc::clone(&self.console));
        self.reports.push((src.to_string(), report));
    }

    /// Number of reports not yet awaited.
    pub fn outstanding(&self) -> usize {
        self.reports.len()
    }

    /// Waits for every report to finish.
    ///
    /// Load failures are already turned into console lines by the report chain, so
    /// the only thing that can fail here is a load whose element was dropped before
    /// any event fired.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if every report completed
    /// - `Err(String)` naming the first abandoned `src`
    pub async fn shutdown(self) -> Result<(), String> {
        info!(reports = self.reports.len(), "Waiting for reports...");

        for (src, report) in self.reports {
            match report.await {
                Ok(()) => {}
                Err(TaskError::Abandoned) => {
                    error!(%src, "Load abandoned before settlement");
                    return Err(format!("Load of {src} was abandoned"));
                }
                Err(TaskError::Rejected(e)) => {
                    error!(%src, error = %e, "Report failed");
                    return Err(e.to_string());
                }
            }
        }

        info!("All reports complete.");
        Ok(())
    }
}
