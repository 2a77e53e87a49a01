use tracing::info;

/// A log sink that accepts whole lines.
pub trait Console: Send + Sync {
    fn log(&self, message: &str);
}

/// Forwards console lines to `tracing` at `INFO`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingConsole;

impl Console for TracingConsole {
    fn log(&self, message: &str) {
        info!(console = true, "{message}");
    }
}

/// Prints console lines to stdout, as a terminal would show them.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn log(&self, message: &str) {
        println!("{message}");
    }
}
