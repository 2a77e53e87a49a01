//! Collaborators the script loader runs against.
//!
//! The loader never touches a real browser. Instead it depends on three small traits:
//!
//! - [`Document`] - Somewhere to append a [`ScriptElement`]; fires its load/error event
//! - [`Timer`] - Schedule-after-delay
//! - [`Console`] - Line-oriented log sink
//!
//! Runtime implementations are [`HeadlessDocument`], [`TokioTimer`], [`TracingConsole`]
//! and [`StdoutConsole`]. Test doubles live in [`mock`].

pub mod console;
pub mod document;
pub mod headless;
pub mod mock;
pub mod timer;

pub use console::*;
pub use document::*;
pub use headless::*;
pub use timer::*;
