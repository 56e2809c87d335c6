use emptykit::{
    is_pointer_like, is_string_like, reflect::Value, type_of, value_of, Kind, Record, Reflect,
};

use crate::common::{Pair, Sample, Wrapper};

#[test]
fn derived_records_expose_fields_in_order() {
    let sample = Sample::default();
    let names: Vec<_> = sample.fields().iter().map(|field| field.name).collect();
    assert_eq!(
        names,
        ["id", "count", "ratio", "name", "tags", "labels", "parent", "enabled"]
    );
}

#[test]
fn tuple_fields_are_named_by_position() {
    let pair = Pair(4, "four");
    let fields = pair.fields();
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0].name, "0");
    assert_eq!(fields[0].value.reflect(), Value::Int(4));
    assert_eq!(fields[1].name, "1");
    assert_eq!(fields[1].value.reflect(), Value::Str("four"));
}

#[test]
fn skipped_fields_are_hidden() {
    let wrapper = Wrapper {
        inner: 1_u8,
        cache: vec![9],
    };
    let names: Vec<_> = wrapper.fields().iter().map(|field| field.name).collect();
    assert_eq!(names, ["inner"]);
}

#[test]
fn records_reflect_as_structs() {
    let handle = type_of(&Sample::default());
    assert_eq!(handle.kind(), Kind::Struct);
    assert!(handle.name().ends_with("Sample"));
}

#[test]
fn handles_pass_through_unchanged() {
    let sample = Sample::default();
    let ty = type_of(&sample);
    assert_eq!(type_of(&ty), ty);

    let handle = value_of(&sample);
    assert_eq!(value_of(&handle), handle);
    assert_eq!(handle.type_handle(), ty);
}

#[test]
fn pointer_and_string_predicates() {
    let sample = Sample::default();
    let name = String::from("name");

    assert!(is_pointer_like(&&sample));
    assert!(is_pointer_like(&sample.parent));
    assert!(!is_pointer_like(&sample));

    assert!(is_string_like(&name));
    assert!(is_string_like(&Some(&name)));
    assert!(!is_string_like(&sample));
    assert!(!is_string_like(&None::<&str>));
}
