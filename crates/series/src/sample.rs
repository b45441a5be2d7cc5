use num_traits::{Num, NumCast};

/// A scalar that can be accumulated into a [`StatisticsSeries`].
///
/// Implementors are plain values: ordered, closed under `+` and `/`, and
/// constructible from a sample count so a mean can be taken in the type's own
/// arithmetic.  Floats treat NaN as the missing-reading sentinel; integer
/// types have no sentinel and accept every value.
///
/// [`StatisticsSeries`]: crate::StatisticsSeries
pub trait Sample: Copy + PartialOrd + Num + NumCast {
    /// `true` if this value stands for "no valid reading".
    fn is_missing(&self) -> bool {
        false
    }

    /// `self + rhs`, or `None` if the sum does not fit in the type.
    fn accumulate(self, rhs: Self) -> Option<Self>;
}

impl Sample for f32 {
    fn is_missing(&self) -> bool {
        self.is_nan()
    }

    fn accumulate(self, rhs: Self) -> Option<Self> {
        Some(self + rhs)
    }
}

impl Sample for f64 {
    fn is_missing(&self) -> bool {
        self.is_nan()
    }

    fn accumulate(self, rhs: Self) -> Option<Self> {
        Some(self + rhs)
    }
}

macro_rules! integer_sample {
    ($($t:ty),*) => {
        $(impl Sample for $t {
            fn accumulate(self, rhs: Self) -> Option<Self> {
                self.checked_add(rhs)
            }
        })*
    };
}

integer_sample!(i16, i32, i64, u16, u32, u64);
