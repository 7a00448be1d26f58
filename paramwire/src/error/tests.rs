//! Unit tests for error rendering and subject extraction.

use std::error::Error as _;

use rstest::rstest;

use super::{LifecycleStage, WireError};
use crate::value::ValueKind;

#[rstest]
#[case(WireError::not_found("fetcher"), "could not find 'fetcher'")]
#[case(
    WireError::duplicate("fetcher"),
    "there can only be one 'fetcher' in a configuration"
)]
#[case(
    WireError::TypeConstraint {
        tag: "fetcher".into(),
        class: "demo.Emitter".into(),
        capability: "dyn Fetcher",
    },
    "'fetcher' with class name 'demo.Emitter' must be of type 'dyn Fetcher'"
)]
#[case(
    WireError::MalformedMapEntry {
        parameter: "headers".into(),
        entry: "entry".into(),
        missing: "value' or 'to",
    },
    "must specify a 'value' or 'to' value in map entry <entry> of 'headers'"
)]
fn renders_messages(#[case] err: WireError, #[case] expected: &str) {
    assert_eq!(err.to_string(), expected);
}

#[test]
fn coercion_error_exposes_parse_failure() {
    let source = "abc".parse::<i32>().expect_err("abc is not an integer");
    let err = WireError::Coercion {
        parameter: "timeout".into(),
        value: "abc".into(),
        expected: ValueKind::Int32,
        source: Box::new(source),
    };
    assert_eq!(
        err.to_string(),
        "bad parameter 'timeout': 'abc' is not a valid 32-bit integer"
    );
    assert!(err.source().is_some());
    assert_eq!(err.subject(), Some("timeout"));
}

#[test]
fn lifecycle_error_names_stage() {
    let err = WireError::Lifecycle {
        component: "demo::S3Fetcher",
        stage: LifecycleStage::CheckInitialization,
        source: "'bucket' must not be empty".into(),
    };
    assert_eq!(
        err.to_string(),
        "validation of demo::S3Fetcher failed: 'bucket' must not be empty"
    );
}

#[test]
fn document_format_without_cause_has_no_subject() {
    let err = WireError::document_format("expect properties as root node");
    assert!(err.source().is_none());
    assert_eq!(err.subject(), None);
}
