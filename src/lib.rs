#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Script Recipe
//!
//! > **Encapsulated entities and a deferred script loader, in Rust.**
//!
//! This crate holds two small, independent pieces:
//!
//! - A [`User`](model::User) entity whose name is only reachable through accessors, and an
//!   [`ExtendedUser`](model::ExtendedUser) built on top of it by composition.
//! - A [`ScriptLoader`](script_loader::ScriptLoader) that appends a script to a
//!   document after a delay and hands back a single-assignment [`Task`](framework::Task).
//!
//! ## 🏗️ Design Notes
//!
//! ### 1. Visibility instead of access control
//! `User::name` is a private field. Reading and writing go through the
//! [`Person`](model::Person) trait, which both entity types implement. There is no runtime
//! check involved; the module boundary is the guard.
//!
//! ### 2. Settling exactly once
//! A [`Task`](framework::Task) is backed by a `oneshot` channel. The sending half sits
//! behind a shared [`Settler`](framework::Settler); whoever takes it first settles the
//! task and every later attempt is a no-op. That is what makes a load event followed by an
//! error event harmless.
//!
//! ### 3. Environment as traits
//! The loader never assumes a browser. [`Document`](env::Document), [`Timer`](env::Timer)
//! and [`Console`](env::Console) are injected, with Tokio-backed and in-memory
//! implementations in [`env`] and test doubles in [`env::mock`].
//!
//! ### 4. Observability
//! Everything goes through `tracing`. See [`lifecycle::tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`] - `User`, `ExtendedUser`, `Person`
//! - [`framework`] - `Task`, `Settler`, `TaskError`
//! - [`env`] - `Document`, `ScriptElement`, `Timer`, `Console` and their implementations
//! - [`script_loader`] - `ScriptLoader`, `LoadError`, `LoaderConfig`
//! - [`lifecycle`] - `report_load`, `LoaderSystem`, `setup_tracing`
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Load the default script and print the report
//! RUST_LOG=info cargo run
//!
//! # Make the load fail, with a shorter delay
//! SCRIPT_RECIPE_DELAY_MS=100 cargo run -- --fail
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod env;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod script_loader;
