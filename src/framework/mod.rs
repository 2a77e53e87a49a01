//! Single-assignment task framework.
//!
//! This module provides the building block the script loader returns: a future
//! that settles exactly once and supports two-handler chaining.
//!
//! # Main Components
//!
//! - [`Task`] - Awaitable, chainable single-assignment future
//! - [`Settler`] - Cloneable handle that settles a task once
//! - [`TaskError`] - Rejection or abandonment
//!
//! # Testing
//!
//! See [`crate::env::mock`] for environment doubles that drive tasks to settlement.

pub mod task;

// Re-export core types for convenience
pub use task::*;
