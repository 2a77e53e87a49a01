use std::sync::Arc;

use crate::env::{Console, ScriptElement};
use crate::framework::Task;
use crate::script_loader::LoadError;

/// Line logged by the second stage, whatever happened in the first.
pub const SECOND_STAGE_MESSAGE: &str = "Another succes handler...";

/// Chains the two-stage console report onto a load task.
///
/// Stage one logs `"<src> is loaded!"` on success and `"<error> is loaded!"` on
/// failure. The failure handler returns normally, so stage two always runs and logs
/// [`SECOND_STAGE_MESSAGE`]. The returned task is fulfilled in both cases; it only
/// fails if the load task is abandoned.
///
/// Both messages are intentional as written, including the misspelt second one.
pub fn report_load(
    task: Task<ScriptElement, LoadError>,
    console: Arc<dyn Console>,
) -> Task<(), LoadError> {
    let on_loaded = Arc::clone(&console);
    let on_failed = Arc::clone(&console);

    task.then(
        move |script| {
            on_loaded.log(&format!("{} is loaded!", script.src()));
            Ok(())
        },
        move |error| {
            on_failed.log(&format!("{error} is loaded!"));
            Ok(())
        },
    )
    .then_ok(move |()| {
        console.log(SECOND_STAGE_MESSAGE);
        Ok(())
    })
}
