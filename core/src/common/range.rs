use std::ops::{Add, Sub};

use derive_more::Constructor;
use serde::{Deserialize, Serialize};

/// An inclusive range; both `min` and `max` are valid values.
#[derive(Constructor, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RangeIncl<N> {
    pub min: N,
    pub max: N,
}

impl<N: Sub<Output = N> + Copy> RangeIncl<N> {
    pub fn width(&self) -> N {
        self.max - self.min
    }
}

impl<N: Add<Output = N> + Sub<Output = N> + Copy> RangeIncl<N> {
    /// Grows the range by `margin` on both ends.
    pub fn pad(&self, margin: N) -> Self {
        Self::new(self.min - margin, self.max + margin)
    }
}

impl<N: PartialOrd + Copy> RangeIncl<N> {
    pub fn contains(&self, value: N) -> bool {
        self.min <= value && value <= self.max
    }

    pub fn expand(&self, new: N) -> Self {
        Self::new(
            if self.min < new { self.min } else { new },
            if self.max > new { self.max } else { new },
        )
    }

    pub fn from_iter_val(iter: impl IntoIterator<Item = N>) -> Option<Self> {
        iter.into_iter().fold(None, |acc, n| match acc {
            Some(acc) => Some(acc.expand(n)),
            None => Some(RangeIncl::new(n, n)),
        })
    }
}

impl<N> RangeIncl<N> {
    pub fn into_range_inclusive(self) -> std::ops::RangeInclusive<N> {
        self.min..=self.max
    }
}

impl<N> From<RangeIncl<N>> for std::ops::RangeInclusive<N> {
    fn from(range: RangeIncl<N>) -> Self {
        range.into_range_inclusive()
    }
}
