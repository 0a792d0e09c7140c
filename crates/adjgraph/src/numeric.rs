//! Numeric accumulator used to count path length and sum path cost.
//!
//! [`ArithmeticNumber`] is the minimal arithmetic the path algorithms need:
//! a zero, a unit step, a negative "not found" sentinel, addition and
//! ordering. It is implemented for the signed primitive integers and floats.
//!
//! The path algorithms accumulate through [`ArithmeticNumber::checked_sum`]
//! and report "not found" rather than a clamped value when a distance or
//! cost no longer fits the chosen type.

use std::fmt::Debug;

/// Minimal arithmetic abstraction for accumulating distances and costs.
///
/// # Example
///
/// ```rust
/// use adjgraph::ArithmeticNumber;
///
/// let mut hops = i64::zero();
/// hops.increment();
/// hops.increment();
/// hops.decrement();
/// assert_eq!(hops, 1);
/// assert!(hops.is_found());
/// assert!(!i64::not_found().is_found());
/// ```
pub trait ArithmeticNumber: Copy + PartialOrd + Debug {
    /// The additive identity.
    fn zero() -> Self;

    /// One step (one hop).
    fn one() -> Self;

    /// Negative sentinel returned when no path exists.
    fn not_found() -> Self;

    /// Returns `self + other`.
    #[must_use]
    fn sum(self, other: Self) -> Self;

    /// Returns `self - other`.
    #[must_use]
    fn subtract(self, other: Self) -> Self;

    /// Returns `self + other`, or `None` if the result is not representable.
    #[must_use]
    fn checked_sum(self, other: Self) -> Option<Self>;

    /// Adds `other` to `self` in place.
    fn sum_assign(&mut self, other: Self) {
        *self = self.sum(other);
    }

    /// Adds one step in place.
    fn increment(&mut self) {
        *self = self.sum(Self::one());
    }

    /// Adds one step in place; returns `false` (leaving `self` unchanged)
    /// on overflow.
    fn try_increment(&mut self) -> bool {
        match self.checked_sum(Self::one()) {
            Some(next) => {
                *self = next;
                true
            }
            None => false,
        }
    }

    /// Removes one step in place.
    fn decrement(&mut self) {
        *self = self.subtract(Self::one());
    }

    /// Returns `true` unless the value is the negative not-found sentinel.
    fn is_found(self) -> bool {
        self >= Self::zero()
    }
}

macro_rules! impl_arithmetic_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl ArithmeticNumber for $t {
                fn zero() -> Self {
                    0
                }

                fn one() -> Self {
                    1
                }

                fn not_found() -> Self {
                    -1
                }

                fn sum(self, other: Self) -> Self {
                    self.saturating_add(other)
                }

                fn subtract(self, other: Self) -> Self {
                    self.saturating_sub(other)
                }

                fn checked_sum(self, other: Self) -> Option<Self> {
                    self.checked_add(other)
                }
            }
        )*
    };
}

macro_rules! impl_arithmetic_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl ArithmeticNumber for $t {
                fn zero() -> Self {
                    0.0
                }

                fn one() -> Self {
                    1.0
                }

                fn not_found() -> Self {
                    -1.0
                }

                fn sum(self, other: Self) -> Self {
                    self + other
                }

                fn subtract(self, other: Self) -> Self {
                    self - other
                }

                fn checked_sum(self, other: Self) -> Option<Self> {
                    let sum = self + other;
                    sum.is_finite().then_some(sum)
                }
            }
        )*
    };
}

impl_arithmetic_int!(i8, i16, i32, i64, isize);
impl_arithmetic_float!(f32, f64);
