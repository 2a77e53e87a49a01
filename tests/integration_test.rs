use script_recipe::env::mock::{ManualTimer, MockDocument, RecordingConsole};
use script_recipe::env::{HeadlessDocument, LoadEvent, TokioTimer};
use script_recipe::framework::TaskError;
use script_recipe::lifecycle::{report_load, LoaderSystem, SECOND_STAGE_MESSAGE};
use script_recipe::script_loader::{LoadError, LoaderConfig, ScriptLoader};
use std::sync::Arc;
use std::time::Duration;

const DELAY: Duration = Duration::from_millis(5000);

struct Harness {
    loader: ScriptLoader,
    document: Arc<MockDocument>,
    timer: Arc<ManualTimer>,
    console: Arc<RecordingConsole>,
}

fn harness() -> Harness {
    let document = Arc::new(MockDocument::new());
    let timer = Arc::new(ManualTimer::new());
    let console = Arc::new(RecordingConsole::new());
    let loader = ScriptLoader::new(document.clone(), timer.clone(), LoaderConfig::default());
    Harness {
        loader,
        document,
        timer,
        console,
    }
}

/// Successful load: both stages log, in order.
#[tokio::test]
async fn test_success_chain() {
    let h = harness();
    let report = report_load(h.loader.load_script("foo.js"), h.console.clone());

    h.timer.advance(DELAY);
    h.document.fire(0, LoadEvent::Load);
    report.await.expect("report should complete");

    assert_eq!(h.console.lines(), vec!["foo.js is loaded!", SECOND_STAGE_MESSAGE]);
}

/// Failed load: the failure handler logs the error with the success wording, and
/// the second stage still runs.
#[tokio::test]
async fn test_error_chain() {
    let h = harness();
    let report = report_load(h.loader.load_script("foo.js"), h.console.clone());

    h.timer.advance(DELAY);
    h.document.fire(0, LoadEvent::Error);
    report.await.expect("failure is recovered by the first stage");

    assert_eq!(
        h.console.lines(),
        vec!["Script load error for foo.js is loaded!", "Another succes handler..."]
    );
}

/// Firing the opposite event after settlement changes nothing.
#[tokio::test]
async fn test_opposite_event_after_settlement_is_ignored() {
    let h = harness();
    let report = report_load(h.loader.load_script("foo.js"), h.console.clone());

    h.timer.advance(DELAY);
    h.document.fire(0, LoadEvent::Error);
    h.document.fire(0, LoadEvent::Load);
    h.document.fire(0, LoadEvent::Error);
    report.await.unwrap();

    assert_eq!(
        h.console.lines(),
        vec!["Script load error for foo.js is loaded!", SECOND_STAGE_MESSAGE]
    );
}

/// Nothing reaches the document before the delay, whatever the source.
#[tokio::test]
async fn test_insertion_never_precedes_delay() {
    let h = harness();
    let sources = ["", "foo.js", "https://cdn.example/lib.js", "../relative path.js"];
    let tasks: Vec<_> = sources.iter().map(|src| h.loader.load_script(src)).collect();

    h.timer.advance(DELAY - Duration::from_millis(1));
    assert!(h.document.appended().is_empty());
    assert_eq!(h.timer.pending(), sources.len());

    h.timer.advance(Duration::from_millis(1));
    let appended: Vec<String> = h
        .document
        .appended()
        .iter()
        .map(|element| element.src().to_string())
        .collect();
    assert_eq!(appended, sources);

    for index in 0..sources.len() {
        h.document.fire(index, LoadEvent::Load);
    }
    for (task, src) in tasks.into_iter().zip(sources) {
        assert_eq!(task.await.unwrap().src(), src);
    }
}

/// The load task itself rejects with the constructed message.
#[tokio::test]
async fn test_load_task_rejection_message() {
    let h = harness();
    let task = h.loader.load_script("foo.js");

    h.timer.advance(DELAY);
    h.document.fire(0, LoadEvent::Error);

    match task.await {
        Err(TaskError::Rejected(error)) => {
            assert_eq!(error, LoadError::Failed { src: "foo.js".to_string() });
            assert_eq!(error.to_string(), "Script load error for foo.js");
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

/// Full stack: real timer, headless document, system shutdown.
#[tokio::test]
async fn test_headless_system_end_to_end() {
    let document = Arc::new(HeadlessDocument::new().with_available("present.js"));
    let console = Arc::new(RecordingConsole::new());
    let mut system = LoaderSystem::new(
        document.clone(),
        Arc::new(TokioTimer),
        console.clone(),
        LoaderConfig::with_delay(Duration::from_millis(10)),
    );

    system.load("present.js");
    system.load("missing.js");
    system.shutdown().await.expect("shutdown should succeed");

    let mut lines = console.lines();
    lines.sort();
    assert_eq!(
        lines,
        vec![
            SECOND_STAGE_MESSAGE,
            SECOND_STAGE_MESSAGE,
            "Script load error for missing.js is loaded!",
            "present.js is loaded!",
        ]
    );
    assert_eq!(document.head().len(), 2);
}
