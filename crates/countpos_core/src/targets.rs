//! The `count_positive` target contract and the reference target.

/// A target that counts the elements of a sequence strictly greater than zero.
///
/// The return type is wider than the harness's `int` contract so that a target can be caught returning a value
/// that does not fit; the harness checks the range, not the trait.
pub trait CountPositive {
    fn count_positive(&self, values: &[i32]) -> i64;
}

/// Count the elements of `values` strictly greater than zero.
///
/// ## Examples
/// ```rust
/// use countpos_core::targets::count_positive;
///
/// assert_eq!(count_positive(&[3, -1, 0, 2]), 2);
/// assert_eq!(count_positive(&[]), 0);
/// ```
pub fn count_positive(values: &[i32]) -> usize {
    values.iter().filter(|&&v| v > 0).count()
}

/// The reference target, registered as `Main`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReferenceCounter;

impl CountPositive for ReferenceCounter {
    fn count_positive(&self, values: &[i32]) -> i64 {
        // A slice of i32 can never hold more than i64::MAX elements.
        count_positive(values) as i64
    }
}
