//! Runtime orchestration.
//!
//! This module wires the loader to its environment and provides the pieces the
//! binary runs:
//!
//! - **Report chain**: [`report_load`] turns a load task into two console lines
//! - **System orchestration**: [`LoaderSystem`] owns the loader and waits for reports
//! - **Observability setup**: [`setup_tracing`]

pub mod loader_system;
pub mod report;
pub mod tracing;

pub use loader_system::*;
pub use report::*;
pub use self::tracing::*;
