//! Fixed test vectors for `count_positive` targets.
//!
//! The harness runs [`DEFAULT_FIXTURE`] unless told otherwise; the property suite runs every entry of
//! [`PROPERTY_FIXTURES`] in order.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - Expected values are `i64` so they compare directly with what a target returns.

/// Input vector of the default run.
pub const FIXED_INPUT: &[i32] = &[3, 5, 12, -4, -1, 5, 4, -7, 9, 0];

/// Number of strictly positive elements in [`FIXED_INPUT`] (3, 5, 12, 5, 4, 9).
pub const EXPECTED: i64 = 6;

/// A named input vector together with the count a correct target returns for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fixture {
    pub name: &'static str,
    pub input: &'static [i32],
    pub expected: i64,
}

impl Fixture {
    /// Whether `actual` is the value a correct target returns for this fixture.
    pub fn accepts(&self, actual: i64) -> bool {
        actual == self.expected
    }
}

/// The fixture the harness runs by default.
pub const DEFAULT_FIXTURE: Fixture = fixture("fixed_vector", FIXED_INPUT, EXPECTED);

/// Fixtures run by the property suite, in execution order.
pub const PROPERTY_FIXTURES: &[Fixture] = &[
    DEFAULT_FIXTURE,
    fixture("empty", &[], 0),
    fixture("all_negative", &[-1, -2, -3], 0),
    fixture("all_positive", &[1, 2, 3], 3),
    // zero is not positive
    fixture("zeros", &[0, 0, 0], 0),
];

/// Resolve a fixture by name.
///
/// ## Returns
/// - `Some(&Fixture)` when `name` matches an entry of [`PROPERTY_FIXTURES`].
/// - `None` otherwise.
pub fn from_str(name: &str) -> Option<&'static Fixture> {
    PROPERTY_FIXTURES.iter().find(|f| f.name == name)
}

const fn fixture(name: &'static str, input: &'static [i32], expected: i64) -> Fixture {
    Fixture { name, input, expected }
}
