use emptykit::{chunk, chunk_slices, compact, compact_owned, ChunkError, ErrorKind};

use crate::common::Sample;

#[test]
fn chunk_covers_every_element_in_order() {
    let items: Vec<u32> = (1..=10).collect();
    for size in 1..=12 {
        let groups = chunk(Some(&items), size).expect("valid arguments");
        let flattened: Vec<u32> = groups.iter().flatten().copied().collect();
        assert_eq!(flattened, items, "size {size}");

        let width = usize::try_from(size).expect("positive size");
        let (last, full) = groups.split_last().expect("non-empty input has groups");
        assert!(full.iter().all(|group| group.len() == width));
        assert!((1..=width).contains(&last.len()));
    }
}

#[test]
fn chunk_failures_are_invalid_arguments() {
    let failures = [
        chunk::<u8, Vec<u8>>(None, 2).expect_err("absent input"),
        chunk(Some(vec![1_u8]), 0).expect_err("zero size"),
        chunk(Some(vec![1_u8]), -1).expect_err("negative size"),
    ];

    for error in failures {
        assert_eq!(error.kind(), ErrorKind::InvalidArgument);
    }
}

#[test]
fn chunk_slices_mirror_chunk() {
    let items = ["a", "b", "c"];
    let owned = chunk(Some(items), 2).expect("valid arguments");
    let borrowed = chunk_slices(Some(&items[..]), 2).expect("valid arguments");
    assert_eq!(owned, borrowed);
    assert_eq!(
        chunk_slices::<&str>(Some(&[]), 0),
        Err(ChunkError::SizeTooSmall { size: 0 })
    );
}

#[test]
fn compact_removes_default_records() {
    let populated = Sample {
        name: "kept".into(),
        ..Sample::default()
    };
    let items = vec![Sample::default(), populated, Sample::default()];

    let kept = compact(&items);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].name, "kept");
}

#[test]
fn compact_is_idempotent_for_mixed_options() {
    let items = vec![Some(""), None, Some("a"), Some(""), Some("b")];
    let once = compact(&items);
    assert_eq!(once, vec![Some("a"), Some("b")]);
    assert_eq!(compact(&once), once);
    assert_eq!(compact_owned(items), once);
}
