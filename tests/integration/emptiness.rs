use std::{collections::HashMap, rc::Rc, sync::Arc};

use emptykit::{empty::is_struct_empty, is_empty, reflect::Value};

use crate::common::{Marker, Pair, Sample, Wrapper};

#[test]
fn default_record_is_empty() {
    assert!(is_empty(&Sample::default()));
    assert!(is_empty(&Marker));
    assert!(is_empty(&Pair::default()));
}

#[test]
fn any_non_zero_field_makes_a_record_non_empty() {
    let variants = [
        Sample {
            id: 1,
            ..Sample::default()
        },
        Sample {
            count: 1,
            ..Sample::default()
        },
        Sample {
            ratio: 0.5,
            ..Sample::default()
        },
        Sample {
            name: "n".into(),
            ..Sample::default()
        },
        Sample {
            tags: vec![String::new()],
            ..Sample::default()
        },
        Sample {
            labels: HashMap::from([(String::new(), String::new())]),
            ..Sample::default()
        },
        Sample {
            enabled: true,
            ..Sample::default()
        },
    ];

    for sample in variants {
        assert!(!is_empty(&sample), "{sample:?} should not be empty");
    }
}

#[test]
fn pointer_fields_are_zero_when_their_target_is() {
    let sample = Sample {
        parent: Some(Box::default()),
        ..Sample::default()
    };
    assert!(is_empty(&sample));

    let sample = Sample {
        parent: Some(Box::new(Sample {
            count: 2,
            ..Sample::default()
        })),
        ..Sample::default()
    };
    assert!(!is_empty(&sample));
}

#[test]
fn nan_field_is_not_a_zero_value() {
    let sample = Sample {
        ratio: f64::NAN,
        ..Sample::default()
    };
    assert!(!is_empty(&sample));
    assert!(is_empty(&sample.ratio));
}

#[test]
fn pointers_to_default_records_are_empty() {
    let record = Sample::default();
    assert!(is_empty(&&record));
    assert!(is_empty(&Some(Sample::default())));
    assert!(is_empty(&Box::new(Sample::default())));
    assert!(is_empty(&Rc::new(Sample::default())));
    assert!(is_empty(&Arc::new(Sample::default())));
    assert!(is_empty(&None::<Sample>));
}

#[test]
fn pointers_to_populated_records_are_not_empty() {
    let record = Sample {
        id: 1,
        ..Sample::default()
    };
    assert!(!is_empty(&&record));
    assert!(!is_empty(&Some(record)));
}

#[test]
fn skipped_fields_never_count() {
    let wrapper = Wrapper {
        inner: 0_u8,
        cache: vec![1, 2, 3],
    };
    assert!(is_empty(&wrapper));

    let wrapper = Wrapper {
        inner: String::from("x"),
        cache: Vec::new(),
    };
    assert!(!is_empty(&wrapper));
}

#[test]
fn tuple_records_check_positional_fields() {
    assert!(!is_empty(&Pair(0, "x")));
    assert!(!is_empty(&Pair(-5, "")));
}

#[test]
fn empty_record_reflection_is_empty() {
    let record = Sample::default();
    match emptykit::Reflect::reflect(&record) {
        Value::Struct(fields) => assert!(is_struct_empty(fields)),
        other => panic!("Unexpected reflection: {other:?}"),
    }
}

#[test]
fn collections_of_records_are_judged_by_length() {
    assert!(is_empty(&Vec::<Sample>::new()));
    assert!(!is_empty(&vec![Sample::default()]));
}
