use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
pub enum KdIndexError {
    /// The slice handed to [`KdTreeRef::try_new`][crate::KdTreeRef::try_new]
    /// does not satisfy the kd-sorted invariant.
    #[error("Array is not kd-sorted; build it with kd_sort first.")]
    NotKdSorted,
}

pub type Result<T> = std::result::Result<T, KdIndexError>;
