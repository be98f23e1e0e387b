use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::common::series::OutputSeries;
use crate::err::UsageErr;
use crate::geom::Axis;


/// The raw grid attributes of one field record, as stored in the file.
///
/// All per-axis slices are aligned to `axis_labels`: entry `i` describes the
/// axis at index `i` of the field array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridDescriptor {
    pub axis_labels: Vec<String>,
    pub shape: Vec<usize>,
    pub grid_spacing: Vec<f64>,
    pub global_offset: Vec<f64>,
    pub grid_unit_si: f64,
    pub position: Vec<f64>,
    pub theta_mode: bool,
}

/// Meta-information about the grid of one field record, typically returned
/// along with the array of field values.
///
/// Holds the physical coordinates, spacing and extrema of every axis of the
/// field array, which snapshot of the output series the values belong to,
/// and (for 2D data) the extent to hand to a raster-image plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridMetaInformation {
    /// Axis labels in field-array order; the position in this list is the
    /// axis index.
    axes: Vec<String>,
    descriptors: HashMap<String, Axis>,
    series: OutputSeries,
    current: usize,
    theta_mode: bool,
    imshow_extent: Option<[f64; 4]>,
}

impl GridMetaInformation {
    /// Derives the coordinates of every axis from `grid`, resolves the
    /// snapshot matching the requested `t` or `iteration` and builds the
    /// plotting extent.
    pub fn new(
        grid: &GridDescriptor,
        series: OutputSeries,
        t: Option<f64>,
        iteration: Option<u64>,
    ) -> Result<Self, UsageErr> {
        let ndim = grid.axis_labels.len();
        assert_eq!(grid.shape.len(), ndim);
        assert_eq!(grid.grid_spacing.len(), ndim);
        assert_eq!(grid.global_offset.len(), ndim);
        assert_eq!(grid.position.len(), ndim);

        let mut axes = Vec::with_capacity(ndim);
        let mut descriptors = HashMap::with_capacity(ndim);
        for (i, label) in grid.axis_labels.iter().enumerate() {
            let mut axis = Axis::from_record(
                label.clone(),
                grid.shape[i],
                grid.grid_spacing[i],
                grid.global_offset[i],
                grid.grid_unit_si,
                grid.position[i],
            );
            if grid.theta_mode && label == "r" {
                axis = axis.mirrored();
            }
            axes.push(label.clone());
            descriptors.insert(label.clone(), axis);
        }

        let mut meta = Self {
            axes,
            descriptors,
            series,
            current: 0,
            theta_mode: grid.theta_mode,
            imshow_extent: None,
        };
        meta.find_output(t, iteration)?;
        meta.generate_imshow_extent();
        Ok(meta)
    }

    /// Re-resolves which snapshot of the output series this metadata refers
    /// to. With neither selector given, the current snapshot is kept.
    pub fn find_output(&mut self, t: Option<f64>, iteration: Option<u64>) -> Result<(), UsageErr> {
        self.current = self.series.resolve(t, iteration, self.current)?;
        debug!(
            index = self.current,
            time = self.current_time(),
            iteration = self.current_iteration(),
            "resolved output snapshot"
        );
        Ok(())
    }

    /// The simulation time of the data, in seconds.
    pub fn current_time(&self) -> f64 {
        self.series.time(self.current)
    }

    /// The iteration the data was written at.
    pub fn current_iteration(&self) -> u64 {
        self.series.iteration(self.current)
    }

    pub fn series(&self) -> &OutputSeries {
        &self.series
    }

    pub fn theta_mode(&self) -> bool {
        self.theta_mode
    }

    /// Number of axes of the field array.
    pub fn ndim(&self) -> usize {
        self.axes.len()
    }

    /// Axis labels in field-array order.
    pub fn axis_labels(&self) -> &[String] {
        &self.axes
    }

    pub fn axis(&self, label: &str) -> Option<&Axis> {
        self.descriptors.get(label)
    }

    pub fn axis_at(&self, index: usize) -> Option<&Axis> {
        self.axes.get(index).map(|label| &self.descriptors[label.as_str()])
    }

    /// The `extent` to pass to a raster-image plot of 2D data, or `None` for
    /// any other dimensionality.
    pub fn imshow_extent(&self) -> Option<[f64; 4]> {
        self.imshow_extent
    }

    /// Suppresses every axis other than `label`.
    pub fn restrict_to_axis(&mut self, label: &str) -> Result<(), UsageErr> {
        if !self.axes.iter().any(|l| l == label) {
            return Err(UsageErr::UnknownAxis(label.to_string()));
        }
        let obsolete: Vec<String> = self.axes.iter().filter(|l| *l != label).cloned().collect();
        for axis in &obsolete {
            self.remove_axis(axis);
        }
        Ok(())
    }

    /// Drops the axis `label`. The remaining axes keep their relative order
    /// and are re-indexed contiguously from 0.
    pub fn remove_axis(&mut self, label: &str) {
        self.descriptors.remove(label);
        self.axes.retain(|l| l != label);
        self.generate_imshow_extent();
    }

    /// Relabels a cylindrical `{r, z}` description into a 3D Cartesian one.
    ///
    /// The radial extent of a theta-mode grid applies equally to both
    /// transverse directions, so `x` and `y` both become exact copies of the
    /// former `r` axis; `z` is untouched.
    pub fn convert_cylindrical_to_cartesian(&mut self) -> Result<(), UsageErr> {
        if self.axes.len() != 2 || !self.descriptors.contains_key("z") {
            return Err(UsageErr::NotThetaMode);
        }
        let Some(r) = self.descriptors.remove("r") else {
            return Err(UsageErr::NotThetaMode);
        };
        self.descriptors.insert("x".to_string(), r.relabeled("x"));
        self.descriptors.insert("y".to_string(), r.relabeled("y"));
        self.axes = vec!["x".to_string(), "y".to_string(), "z".to_string()];
        self.generate_imshow_extent();
        Ok(())
    }

    /// Rebuilds `imshow_extent` from the active axis set.
    ///
    /// The extent only exists for 2D data. Its coordinates are swapped
    /// relative to the axis order (the plot maps axis 1 to the horizontal
    /// direction) and each bound moves half a cell outward, since the plot
    /// draws a finite-width square per sample.
    fn generate_imshow_extent(&mut self) {
        if self.axes.len() == 2 {
            let mut extent = [0.0; 4];
            for (slot, label) in [&self.axes[1], &self.axes[0]].into_iter().enumerate() {
                let axis = &self.descriptors[label.as_str()];
                let padded = axis.range().pad(0.5 * axis.step());
                extent[2 * slot] = padded.min;
                extent[2 * slot + 1] = padded.max;
            }
            self.imshow_extent = Some(extent);
        } else {
            self.imshow_extent = None;
        }
    }
}
