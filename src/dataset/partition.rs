//! Partition selection and dataset assembly.
//!
//! The raw series splits into contiguous day-aligned ranges: the first
//! `n_train` days train, the next `n_val` days validate, and the following
//! range tests. Standardization statistics come from the training range
//! only; callers must build the training partition before validation/test so
//! the shared standardizer is fitted when they apply it.

use super::window::{self, WindowConfig};
use crate::config::DatasetConfig;
use crate::data::{CsvConnector, DataValidator};
use crate::error::{Result, RoadflowError};
use crate::preprocess::SharedStandardizer;
use crate::types::Partition;
use ndarray::{s, Array4, ArrayView2, ArrayView3, Axis};

pub struct TrafficDataset {
    x: Array4<f64>,
    y: Array4<f64>,
}

impl TrafficDataset {
    /// Load the configured CSV and build the windowed dataset for one
    /// partition
    pub fn from_csv(
        cfg: &DatasetConfig,
        partition: Partition,
        scaler: &SharedStandardizer,
    ) -> Result<Self> {
        let series = CsvConnector::load_series(&cfg.data_path)?;
        Self::from_series(series.view(), cfg, partition, scaler)
    }

    /// Build the windowed dataset for one partition from an in-memory
    /// series (rows = slots, columns = sensors)
    pub fn from_series(
        series: ArrayView2<f64>,
        cfg: &DatasetConfig,
        partition: Partition,
        scaler: &SharedStandardizer,
    ) -> Result<Self> {
        if series.ncols() != cfg.n_route {
            return Err(RoadflowError::Shape {
                expected: format!("{} sensor columns", cfg.n_route),
                actual: format!("{}", series.ncols()),
            });
        }
        DataValidator::validate_day_alignment(series.nrows(), cfg.day_slot)?;

        let (start, end) = Self::row_range(cfg, partition);
        if series.nrows() < end {
            return Err(RoadflowError::Shape {
                expected: format!(
                    "at least {} rows for the {} partition",
                    end,
                    partition.as_str()
                ),
                actual: format!("{} rows", series.nrows()),
            });
        }

        let range = series.slice(s![start..end, ..]);
        let standardized = if cfg.standardize {
            if partition.is_train() {
                scaler.write().unwrap().fit_transform(range)
            } else {
                scaler.read().unwrap().transform(range)?
            }
        } else {
            range.to_owned()
        };

        let (x, y) = window::transform(standardized.view(), partition.window_mode(), &cfg.window());
        log::debug!(
            "Built {} partition: rows [{}, {}), {} windows",
            partition.as_str(),
            start,
            end,
            x.shape()[0]
        );

        Ok(Self { x, y })
    }

    /// Absolute row boundaries of a partition. The test range mirrors the
    /// validation width instead of consuming the remainder of the series,
    /// matching the reference experiment splits.
    fn row_range(cfg: &DatasetConfig, partition: Partition) -> (usize, usize) {
        let len_train = cfg.n_train * cfg.day_slot;
        let len_val = cfg.n_val * cfg.day_slot;

        match partition {
            Partition::Train => (0, len_train),
            Partition::Validation => (len_train, len_train + len_val),
            Partition::Test => (len_train + len_val, len_train + 2 * len_val),
        }
    }

    pub fn len(&self) -> usize {
        self.x.shape()[0]
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// (input window, target window) at `index`, each shaped
    /// (sensor, time, 1)
    pub fn get(&self, index: usize) -> Option<(ArrayView3<'_, f64>, ArrayView3<'_, f64>)> {
        if index >= self.len() {
            return None;
        }
        Some((
            self.x.index_axis(Axis(0), index),
            self.y.index_axis(Axis(0), index),
        ))
    }

    pub fn iter(&self) -> impl Iterator<Item = (ArrayView3<'_, f64>, ArrayView3<'_, f64>)> {
        self.x.axis_iter(Axis(0)).zip(self.y.axis_iter(Axis(0)))
    }

    /// Full input batch, (sample, sensor, time, 1)
    pub fn inputs(&self) -> &Array4<f64> {
        &self.x
    }

    /// Full target batch, (sample, sensor, time, 1)
    pub fn targets(&self) -> &Array4<f64> {
        &self.y
    }
}
