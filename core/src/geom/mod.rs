use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::common::range::RangeIncl;

/// The grid-point positions along one axis of a field array, in SI units.
///
/// `min`/`max` are always the first/last coordinate and are never stored
/// separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    label: String,
    coords: Array1<f64>,
    step: f64,
}

impl Axis {
    /// Builds the coordinates from the raw openPMD record attributes of one
    /// axis: point count, `gridSpacing`, `gridGlobalOffset`, `gridUnitSI`
    /// and the fractional in-cell `position`.
    pub fn from_record(
        label: impl Into<String>,
        n_points: usize,
        grid_spacing: f64,
        global_offset: f64,
        grid_unit_si: f64,
        position: f64,
    ) -> Self {
        assert!(n_points > 0);
        let step = grid_spacing * grid_unit_si;
        let start = global_offset * grid_unit_si + position * step;
        let end = start + (n_points - 1) as f64 * step;
        Self {
            label: label.into(),
            coords: Array1::linspace(start, end, n_points),
            step,
        }
    }

    /// Reconstructs a full-diameter axis from a radius-only grid by
    /// prepending the negated, reversed coordinates.
    ///
    /// The sample at the seam is duplicated on purpose: the result always has
    /// exactly twice as many points as the radial grid, which downstream
    /// array-shape handling relies on.
    pub fn mirrored(self) -> Self {
        let coords = self
            .coords
            .iter()
            .rev()
            .map(|x| -x)
            .chain(self.coords.iter().copied())
            .collect();
        Self { coords, ..self }
    }

    /// An exact copy of this axis under another label.
    pub fn relabeled(&self, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            coords: self.coords.clone(),
            step: self.step,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// The position of every grid point along this axis.
    pub fn coords(&self) -> ArrayView1<f64> {
        self.coords.view()
    }

    /// The grid resolution along this axis.
    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// The position of the first grid point.
    pub fn min(&self) -> f64 {
        self.coords[0]
    }

    /// The position of the last grid point.
    pub fn max(&self) -> f64 {
        self.coords[self.coords.len() - 1]
    }

    pub fn range(&self) -> RangeIncl<f64> {
        RangeIncl::new(self.min(), self.max())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn coords_span_offset_to_offset_plus_extent() {
        let axis = Axis::from_record("x", 5, 2.0, 10.0, 1.0, 0.0);
        assert_eq!(axis.len(), 5);
        assert_relative_eq!(axis.min(), 10.0);
        assert_relative_eq!(axis.max(), 18.0);
        assert_relative_eq!(axis.max() - axis.min(), (axis.len() - 1) as f64 * axis.step());
        for window in axis.coords().to_vec().windows(2) {
            assert!(window[0] < window[1]);
        }
    }

    #[test]
    fn unit_si_and_position_shift_the_samples() {
        // raw spacing 1, unit 1e-6, half-cell position offset
        let axis = Axis::from_record("z", 3, 1.0, 2.0, 1e-6, 0.5);
        assert_relative_eq!(axis.step(), 1e-6);
        assert_relative_eq!(axis.min(), 2.5e-6);
        assert_relative_eq!(axis.max(), 4.5e-6);
    }

    #[test]
    fn single_point_axis_has_zero_extent() {
        let axis = Axis::from_record("y", 1, 0.5, 3.0, 1.0, 0.0);
        assert_eq!(axis.coords().to_vec(), vec![3.0]);
        assert_relative_eq!(axis.min(), axis.max());
    }

    #[test]
    fn mirrored_doubles_the_point_count() {
        let axis = Axis::from_record("r", 3, 1.0, 0.5, 1.0, 0.0).mirrored();
        assert_eq!(axis.len(), 6);
        assert_eq!(axis.coords().to_vec(), vec![-2.5, -1.5, -0.5, 0.5, 1.5, 2.5]);
        assert_relative_eq!(axis.min(), -axis.max());
    }

    #[test]
    fn mirrored_keeps_the_seam_sample_duplicated() {
        // a radial grid starting on the axis mirrors its first sample
        let axis = Axis::from_record("r", 3, 1.0, 0.0, 1.0, 0.0).mirrored();
        assert_eq!(axis.coords().to_vec(), vec![-2.0, -1.0, -0.0, 0.0, 1.0, 2.0]);
        let coords = axis.coords();
        let n = axis.len();
        for i in 0..n / 2 {
            assert_relative_eq!(coords[i], -coords[n - 1 - i]);
        }
    }
}
