use tracing::debug;

use crate::lib::errors::ChunkError;

/// Smallest accepted group size.
pub const MIN_CHUNK_SIZE: isize = 1;

/// Splits `items` into consecutive groups of `size` elements.
///
/// The last group holds the remainder. Absence is checked before the size,
/// and a present empty input yields no groups.
///
/// ```
/// let groups = emptykit::chunk(Some([1, 2, 3, 4]), 3).unwrap();
/// assert_eq!(groups, vec![vec![1, 2, 3], vec![4]]);
/// ```
pub fn chunk<T, S>(items: Option<S>, size: isize) -> Result<Vec<Vec<T>>, ChunkError>
where
    T: Clone,
    S: AsRef<[T]>,
{
    let items = items.ok_or_else(|| reject(ChunkError::MissingInput))?;
    let size = validate_size(size)?;
    Ok(items.as_ref().chunks(size).map(<[T]>::to_vec).collect())
}

/// Borrowing variant of [`chunk`]: groups are views into `items`.
pub fn chunk_slices<T>(items: Option<&[T]>, size: isize) -> Result<Vec<&[T]>, ChunkError> {
    let items = items.ok_or_else(|| reject(ChunkError::MissingInput))?;
    let size = validate_size(size)?;
    Ok(items.chunks(size).collect())
}

fn validate_size(size: isize) -> Result<usize, ChunkError> {
    if size < MIN_CHUNK_SIZE {
        return Err(reject(ChunkError::SizeTooSmall { size }));
    }
    usize::try_from(size).map_err(|_| reject(ChunkError::SizeTooSmall { size }))
}

fn reject(error: ChunkError) -> ChunkError {
    debug!(
        target: "emptykit::seq",
        kind = %error.kind(),
        reason = %error,
        "Rejected chunk arguments"
    );
    error
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lib::errors::ErrorKind;

    #[test]
    fn size_one_yields_singletons() {
        let groups = chunk(Some(vec![1, 2, 3]), 1).expect("valid arguments");
        assert_eq!(groups, vec![vec![1], vec![2], vec![3]]);
    }

    #[test]
    fn last_group_holds_the_remainder() {
        let groups = chunk(Some([1, 2, 3, 4]), 3).expect("valid arguments");
        assert_eq!(groups, vec![vec![1, 2, 3], vec![4]]);
    }

    #[test]
    fn oversized_chunk_keeps_everything_together() {
        let groups = chunk(Some(&[1, 2, 3, 4][..]), 8).expect("valid arguments");
        assert_eq!(groups, vec![vec![1, 2, 3, 4]]);
    }

    #[test]
    fn even_split_has_no_partial_group() {
        let groups = chunk(Some(vec!['a', 'b', 'c', 'd']), 2).expect("valid arguments");
        assert_eq!(groups, vec![vec!['a', 'b'], vec!['c', 'd']]);
    }

    #[test]
    fn empty_input_yields_no_groups() {
        let groups = chunk(Some(Vec::<u8>::new()), 3).expect("valid arguments");
        assert!(groups.is_empty());
    }

    #[test]
    fn absent_input_is_rejected() {
        let error = chunk::<i32, Vec<i32>>(None, 2).expect_err("absent input must fail");
        assert_eq!(error, ChunkError::MissingInput);
        assert_eq!(error.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn non_positive_sizes_are_rejected() {
        for size in [0, -1, isize::MIN] {
            let error = chunk(Some(vec![1, 2, 3]), size).expect_err("size must be positive");
            assert_eq!(error, ChunkError::SizeTooSmall { size });
            assert_eq!(error.kind(), ErrorKind::InvalidArgument);
        }
    }

    #[test]
    fn absence_is_reported_before_size() {
        let error = chunk::<i32, Vec<i32>>(None, 0).expect_err("absent input must fail");
        assert_eq!(error, ChunkError::MissingInput);
    }

    #[test]
    fn groups_are_independent_copies() {
        let source = vec![String::from("a"), String::from("b")];
        let mut groups: Vec<Vec<String>> = chunk(Some(&source), 1).expect("valid arguments");
        groups[0][0].push('!');
        assert_eq!(source, ["a", "b"]);
        assert_eq!(groups[0], ["a!"]);
    }

    #[test]
    fn slices_borrow_the_input() {
        let source = [1, 2, 3, 4, 5];
        let groups = chunk_slices(Some(&source[..]), 2).expect("valid arguments");
        assert_eq!(groups, vec![&[1, 2][..], &[3, 4][..], &[5][..]]);
        assert_eq!(
            chunk_slices::<u8>(None, 2),
            Err(ChunkError::MissingInput)
        );
        assert_eq!(
            chunk_slices(Some(&source[..]), 0),
            Err(ChunkError::SizeTooSmall { size: 0 })
        );
    }
}
