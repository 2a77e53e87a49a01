//! # Observability & Tracing
//!
//! This module provides the tracing infrastructure for the loader.
//!
//! ## Overview
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//! Log output is separate from console output: the two-stage report writes to a
//! [`Console`](crate::env::Console), while the loader itself emits `tracing` events.
//!
//! ## Configuration
//!
//! The compact format hides the crate/module prefix (`with_target(false)`) and
//! shows spans inline, so every line carries the `load_script{src=...}` it belongs to.
//!
//! ## What Gets Traced
//!
//! - **Scheduling**: `load_script` entry with `src` and `delay_ms`
//! - **Insertion**: When the timer appends the element to the document
//! - **Settlement**: Load or error, plus late events that were ignored (`trace`)
//! - **Shutdown**: Reports that were abandoned without settling
//!
//! ## Usage Examples
//!
//! ```bash
//! # Settlement only
//! RUST_LOG=info cargo run
//!
//! # Scheduling and insertion too
//! RUST_LOG=debug cargo run
//!
//! # Include ignored late events
//! RUST_LOG=trace cargo run
//!
//! # Filter to specific modules
//! RUST_LOG=script_recipe::script_loader=debug cargo run
//! ```
//!
//! **With `RUST_LOG=debug`**:
//!
//! ```text
//! DEBUG load_script: Scheduling insertion src="foo.js" delay_ms=5000
//! DEBUG Inserting script src="foo.js"
//! DEBUG Appended to head src="foo.js" event=Load
//! INFO Script loaded src="foo.js"
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
