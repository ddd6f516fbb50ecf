use thiserror::Error;

/// Error for an index argument outside `0..len`.
///
/// ```
/// # use index_bounds::{ensure_index, IndexOutOfBounds};
/// assert_eq!(ensure_index(3, 10), Ok(3));
/// assert_eq!(ensure_index(10, 10), Err(IndexOutOfBounds { index: 10, len: 10 }));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("index out of bounds: the len is {len} but the index is {index}")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

pub fn ensure_index(
    index: usize,
    len: usize,
) -> Result<usize, IndexOutOfBounds> {
    if index < len {
        Ok(index)
    } else {
        Err(IndexOutOfBounds { index, len })
    }
}

#[test]
fn error_message() {
    let e = ensure_index(50, 10).unwrap_err();
    assert_eq!(
        e.to_string(),
        "index out of bounds: the len is 10 but the index is 50"
    );
}

#[test]
fn zero_len_rejects_everything() {
    assert!(ensure_index(0, 0).is_err());
}
