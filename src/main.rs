//! # Script Recipe demo
//!
//! Loads one script through a [`HeadlessDocument`] and prints the two-stage report.
//!
//! ```text
//! script-recipe [--fail] [--log-console] [SRC]
//! ```
//!
//! - `SRC` defaults to the lodash 3.2.0 CDN URL.
//! - `--fail` leaves `SRC` unavailable so the load errors.
//! - `--log-console` sends the report to `tracing` instead of stdout.
//! - `SCRIPT_RECIPE_DELAY_MS` overrides the 5000 ms insertion delay.

use clap::Parser;
use script_recipe::env::{Console, HeadlessDocument, StdoutConsole, TokioTimer, TracingConsole};
use script_recipe::lifecycle::{setup_tracing, LoaderSystem};
use script_recipe::model::{ExtendedUser, Person, User};
use script_recipe::script_loader::LoaderConfig;
use std::sync::Arc;
use tracing::info;

const DEFAULT_SRC: &str = "https://cdnjs.cloudflare.com/ajax/libs/lodash.js/3.2.0/lodash.js";

#[derive(Parser, Debug)]
#[command(author, version, about = "Load a script after a delay and report the outcome")]
struct Cli {
    /// Treat SRC as unavailable so the load fails
    #[arg(long)]
    fail: bool,

    /// Write the report through tracing instead of stdout
    #[arg(long)]
    log_console: bool,

    /// Script to load
    #[arg(default_value = DEFAULT_SRC)]
    src: String,
}

impl Cli {
    fn console(&self) -> Arc<dyn Console> {
        if self.log_console {
            Arc::new(TracingConsole)
        } else {
            Arc::new(StdoutConsole)
        }
    }

    fn document(&self) -> HeadlessDocument {
        let document = HeadlessDocument::new();
        if self.fail {
            document
        } else {
            document.with_available(self.src.as_str())
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let cli = Cli::parse();
    setup_tracing();

    let user = User::new("Nat");
    let extended = ExtendedUser::new("Nat", 30);
    info!(
        user = user.name(),
        surname = user.surname(),
        extended = extended.name(),
        extended_age = extended.age(),
        "Entities ready"
    );

    let config = LoaderConfig::from_env().map_err(|e| e.to_string())?;
    let mut system = LoaderSystem::new(
        Arc::new(cli.document()),
        Arc::new(TokioTimer),
        cli.console(),
        config,
    );

    info!(src = %cli.src, delay_ms = config.delay_ms, "Loading script");
    system.load(&cli.src);

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
