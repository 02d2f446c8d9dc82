//! Merge contract for rendered documents

/// Binary combination of two rendered documents into one
///
/// `merge` consumes both operands and returns the combined document,
/// with `self` first. Implementations are expected to be associative
/// in practice, but [`RenderStack`](crate::RenderStack) never relies
/// on that: ranges are always folded strictly left to right.
pub trait Merge: Sized {
    /// Combine `self` with `other`, in that order
    fn merge(self, other: Self) -> Self;
}
