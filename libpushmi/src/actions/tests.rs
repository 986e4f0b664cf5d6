use super::*;
use crate::error::PushmiError;
use std::cell::RefCell;

/// Records every runtime call and fails the one matching `fail_on`.
#[derive(Default)]
struct RecordingRuntime {
    calls: RefCell<Vec<String>>,
    fail_on: Option<String>,
}

impl RecordingRuntime {
    fn failing_on(call: &str) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail_on: Some(call.to_string()),
        }
    }

    fn record(&self, operation: &str, call: String) -> Result<()> {
        self.calls.borrow_mut().push(call.clone());
        if self.fail_on.as_deref() == Some(call.as_str()) {
            return Err(PushmiError::runtime(operation, call, "simulated failure"));
        }
        Ok(())
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl ContainerRuntime for RecordingRuntime {
    fn pull(&self, image: &str, tag: &str) -> Result<()> {
        self.record("pull", format!("pull {}:{}", image, tag))
    }

    fn tag(&self, image: &str, tag: &str, destination: &str, destination_tag: &str) -> Result<()> {
        self.record(
            "tag",
            format!("tag {}:{} {}:{}", image, tag, destination, destination_tag),
        )
    }

    fn push(&self, image: &str, tag: &str) -> Result<()> {
        self.record("push", format!("push {}:{}", image, tag))
    }
}

fn tags(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

#[test]
fn test_list_writes_one_tag_per_line_in_order() {
    let mut out = Vec::new();
    list(&mut out, &tags(&["2.0", "1.0", "latest"])).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "2.0\n1.0\nlatest\n");
}

#[test]
fn test_list_empty_writes_nothing() {
    let mut out = Vec::new();
    list(&mut out, &[]).unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_pull_pulls_each_tag_in_order() {
    let runtime = RecordingRuntime::default();
    let mut out = Vec::new();

    pull(&runtime, &mut out, "mongo", &tags(&["3.6", "4.0"])).unwrap();

    assert_eq!(runtime.calls(), vec!["pull mongo:3.6", "pull mongo:4.0"]);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Pulling image mongo:3.6\nPulling image mongo:4.0\n"
    );
}

#[test]
fn test_pull_stops_at_first_failure() {
    let runtime = RecordingRuntime::failing_on("pull mongo:3.6");
    let mut out = Vec::new();

    let result = pull(&runtime, &mut out, "mongo", &tags(&["3.6", "4.0"]));

    assert!(matches!(result.unwrap_err(), PushmiError::Runtime { .. }));
    assert_eq!(runtime.calls(), vec!["pull mongo:3.6"]);
}

#[test]
fn test_sync_completes_each_tag_before_the_next() {
    let runtime = RecordingRuntime::default();
    let mut out = Vec::new();

    sync(&runtime, &mut out, "mongo", "mirror.local/mongo", &tags(&["a", "b"])).unwrap();

    assert_eq!(
        runtime.calls(),
        vec![
            "pull mongo:a",
            "tag mongo:a mirror.local/mongo:a",
            "push mirror.local/mongo:a",
            "pull mongo:b",
            "tag mongo:b mirror.local/mongo:b",
            "push mirror.local/mongo:b",
        ]
    );
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Pulling image mongo:a\nPushing image mirror.local/mongo:a\n\
         Pulling image mongo:b\nPushing image mirror.local/mongo:b\n"
    );
}

#[test]
fn test_sync_push_failure_skips_remaining_tags() {
    let runtime = RecordingRuntime::failing_on("push mirror.local/mongo:a");
    let mut out = Vec::new();

    let result = sync(&runtime, &mut out, "mongo", "mirror.local/mongo", &tags(&["a", "b"]));

    assert!(result.is_err());
    assert_eq!(
        runtime.calls(),
        vec![
            "pull mongo:a",
            "tag mongo:a mirror.local/mongo:a",
            "push mirror.local/mongo:a",
        ]
    );
}

#[test]
fn test_sync_tag_failure_skips_push() {
    let runtime = RecordingRuntime::failing_on("tag mongo:a mirror.local/mongo:a");
    let mut out = Vec::new();

    let result = sync(&runtime, &mut out, "mongo", "mirror.local/mongo", &tags(&["a"]));

    assert!(result.is_err());
    assert_eq!(
        runtime.calls(),
        vec!["pull mongo:a", "tag mongo:a mirror.local/mongo:a"]
    );
    assert_eq!(String::from_utf8(out).unwrap(), "Pulling image mongo:a\n");
}

#[test]
fn test_sync_with_no_tags_does_nothing() {
    let runtime = RecordingRuntime::default();
    let mut out = Vec::new();

    sync(&runtime, &mut out, "mongo", "mirror.local/mongo", &[]).unwrap();

    assert!(runtime.calls().is_empty());
    assert!(out.is_empty());
}

#[test]
fn test_actions_accept_trait_objects() {
    let runtime = RecordingRuntime::default();
    let dyn_runtime: &dyn ContainerRuntime = &runtime;
    let mut out = Vec::new();

    pull(dyn_runtime, &mut out, "mongo", &tags(&["4.0"])).unwrap();

    assert_eq!(runtime.calls(), vec!["pull mongo:4.0"]);
}
