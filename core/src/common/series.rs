use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::common::range::RangeIncl;
use crate::err::UsageErr;

/// The snapshots available in one simulation output series: every simulation
/// time paired with the iteration number it was written at.
///
/// Both arrays share the same length and ordering; index `i` refers to the
/// same snapshot in both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSeries {
    times: Array1<f64>,
    iterations: Array1<u64>,
}

impl OutputSeries {
    pub fn new(times: Array1<f64>, iterations: Array1<u64>) -> Self {
        assert_eq!(times.len(), iterations.len());
        assert!(!times.is_empty());
        Self { times, iterations }
    }

    pub fn from_vecs(times: Vec<f64>, iterations: Vec<u64>) -> Self {
        Self::new(Array1::from_vec(times), Array1::from_vec(iterations))
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn times(&self) -> ArrayView1<f64> {
        self.times.view()
    }

    pub fn iterations(&self) -> ArrayView1<u64> {
        self.iterations.view()
    }

    pub fn time(&self, index: usize) -> f64 {
        self.times[index]
    }

    pub fn iteration(&self, index: usize) -> u64 {
        self.iterations[index]
    }

    /// Range of available simulation times. Never empty by construction.
    pub fn time_bounds(&self) -> RangeIncl<f64> {
        self.times
            .iter()
            .copied()
            .fold(RangeIncl::new(self.times[0], self.times[0]), |acc, t| {
                acc.expand(t)
            })
    }

    /// Finds the snapshot index for a requested time or iteration.
    ///
    /// At most one selector may be given. A requested time outside the
    /// available bounds clamps to the first or last snapshot; inside the
    /// bounds the closest time wins. A requested iteration must match
    /// exactly. Without a selector, `previous` is returned unchanged.
    pub fn resolve(
        &self,
        t: Option<f64>,
        iteration: Option<u64>,
        previous: usize,
    ) -> Result<usize, UsageErr> {
        match (t, iteration) {
            (Some(_), Some(_)) => Err(UsageErr::BothTimeAndIteration),
            (Some(t), None) => {
                let bounds = self.time_bounds();
                if t < bounds.min {
                    Ok(0)
                } else if t > bounds.max {
                    Ok(self.len() - 1)
                } else {
                    Ok(self.nearest_time(t))
                }
            }
            (None, Some(iteration)) => self
                .iterations
                .iter()
                .position(|&it| it == iteration)
                .ok_or_else(|| UsageErr::IterationNotAvailable {
                    requested: iteration,
                    available: self.iterations.iter().copied().collect(),
                }),
            (None, None) => Ok(previous),
        }
    }

    /// Index of the time closest to `t`; ties go to the first occurrence.
    fn nearest_time(&self, t: f64) -> usize {
        let mut best = 0;
        let mut best_dist = (self.times[0] - t).abs();
        for (i, &ti) in self.times.iter().enumerate().skip(1) {
            let dist = (ti - t).abs();
            if dist < best_dist {
                best = i;
                best_dist = dist;
            }
        }
        best
    }
}
