//! End-to-end runs through `run_pipeline` with in-memory and filesystem publishers.

use autobump_core::adapters::{
    FsPublisher, GITIGNORE_FILE, InMemoryPublisher, PR_BODY_FILE, PR_TITLE_FILE, RUN_RECORD_FILE,
};
use autobump_core::{
    BumpHandler, Change, ChangeError, FnChange, PR_TITLE, PrHandler, Publisher, ToolError,
    run_pipeline,
};
use autobump_types::{Options, RunRecord, ToolInfo};
use camino::Utf8PathBuf;
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;
use std::fs;

fn tool() -> ToolInfo {
    ToolInfo {
        name: "autobump".to_string(),
        version: Some("0.0.0".to_string()),
    }
}

fn temp_root() -> (tempfile::TempDir, Utf8PathBuf) {
    let td = tempfile::tempdir().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(td.path().to_path_buf()).expect("utf8 tempdir");
    (td, root)
}

struct EmptyHandler;

impl PrHandler for EmptyHandler {
    fn changes(&self) -> Vec<Box<dyn Change + '_>> {
        vec![]
    }
}

struct FailingHandler;

impl PrHandler for FailingHandler {
    fn changes(&self) -> Vec<Box<dyn Change + '_>> {
        vec![Box::new(FnChange::new("explode", || {
            Err(ChangeError::execution("boom"))
        }))]
    }
}

struct RejectingPublisher;

impl Publisher for RejectingPublisher {
    fn publish(&self, _record: &RunRecord) -> anyhow::Result<()> {
        anyhow::bail!("remote rejected push")
    }
}

#[test]
fn empty_pipeline_publishes_empty_body() {
    let publisher = InMemoryPublisher::new();

    let record = run_pipeline(&EmptyHandler, &publisher, tool()).expect("empty run");

    assert!(record.results.is_empty());
    assert_eq!(record.pr.title, PR_TITLE);
    assert_eq!(record.pr.body, "");
    assert_eq!(publisher.published().len(), 1);
}

#[test]
fn failed_change_is_never_published() {
    let publisher = InMemoryPublisher::new();

    let err = run_pipeline(&FailingHandler, &publisher, tool()).expect_err("change fails");

    assert!(matches!(err, ToolError::ChangeSet(_)));
    assert_eq!(err.step(), "explode");
    assert!(publisher.published().is_empty());
}

#[test]
fn publish_failure_is_reported() {
    let err = run_pipeline(&EmptyHandler, &RejectingPublisher, tool()).expect_err("publish");

    assert_eq!(err.step(), "publish");
    assert!(err.to_string().contains("remote rejected push"));
}

#[test]
fn bump_handler_run_rewrites_tree_and_writes_artifacts() {
    let (_td, root) = temp_root();
    fs::write(
        root.join("Dockerfile"),
        "FROM debian:testing-20211201-slim\nCOPY --from=fluent/fluent-bit:1.8.11 /fluent-bit /fluent-bit\n",
    )
    .expect("write");
    let options = Options {
        images: BTreeMap::from([("fluent-bit".to_string(), "fluent/fluent-bit".to_string())]),
        versions: BTreeMap::from([(
            "fluent-bit".to_string(),
            vec!["1.8.11".to_string(), "1.8.12".to_string()],
        )]),
    };
    let out_dir = root.join("artifacts/autobump");
    let publisher = FsPublisher::new(out_dir.clone());

    let record = run_pipeline(&BumpHandler::new(&root, &options), &publisher, tool())
        .expect("pipeline");

    assert_eq!(
        fs::read_to_string(root.join("Dockerfile")).expect("read"),
        "FROM debian:testing-20220101-slim\nCOPY --from=fluent/fluent-bit:1.8.12 /fluent-bit /fluent-bit\n"
    );
    let expected_body = "Bump Debian base image debian:testing-20220101-slim\n\
                         Bump fluent-bit to fluent/fluent-bit:1.8.12";
    assert_eq!(record.pr.body, expected_body);
    assert_eq!(
        fs::read_to_string(out_dir.join(PR_TITLE_FILE)).expect("title"),
        format!("{PR_TITLE}\n")
    );
    assert_eq!(
        fs::read_to_string(out_dir.join(PR_BODY_FILE)).expect("body"),
        expected_body
    );

    assert_eq!(
        fs::read_to_string(out_dir.join(GITIGNORE_FILE)).expect("gitignore"),
        "*\n"
    );

    let json = fs::read_to_string(out_dir.join(RUN_RECORD_FILE)).expect("run.json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["schema"], "autobump.run.v1");
    assert_eq!(value["results"].as_array().map(Vec::len), Some(2));
}
