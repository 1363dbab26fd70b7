//! Per-sensor standardization.
//!
//! Statistics are fitted once, on the training partition only, and applied
//! read-only to every other partition. Scale is the population standard
//! deviation, with zero-variance sensors clamped to 1.0 so constant columns
//! pass through centered but unscaled.

use crate::error::{Result, RoadflowError};
use ndarray::{Array1, Array2, ArrayView2, Axis};
use std::sync::{Arc, RwLock};

/// One standardizer shared across all partitions of an experiment, written
/// during the training fit and read-only afterwards.
pub type SharedStandardizer = Arc<RwLock<Standardizer>>;

#[derive(Debug, Clone, Default)]
pub struct Standardizer {
    mean: Array1<f64>,
    scale: Array1<f64>,
    fitted: bool,
}

impl Standardizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedStandardizer {
        Arc::new(RwLock::new(Self::new()))
    }

    /// Fit per-column mean and scale on the given range
    pub fn fit(&mut self, data: ArrayView2<f64>) {
        let n_cols = data.ncols();

        if data.nrows() == 0 {
            self.mean = Array1::zeros(n_cols);
            self.scale = Array1::ones(n_cols);
        } else {
            self.mean = data
                .mean_axis(Axis(0))
                .unwrap_or_else(|| Array1::zeros(n_cols));
            let var = data.var_axis(Axis(0), 0.0);
            self.scale = var.mapv(|v| {
                let std = v.sqrt();
                if std == 0.0 {
                    1.0
                } else {
                    std
                }
            });
        }

        self.fitted = true;
        log::debug!("Fitted standardizer on {} sensor columns", n_cols);
    }

    /// Apply the fitted transform; errors if fit has not happened or the
    /// column count differs from the fitted width
    pub fn transform(&self, data: ArrayView2<f64>) -> Result<Array2<f64>> {
        self.check_ready(data.ncols())?;
        Ok((data.to_owned() - &self.mean) / &self.scale)
    }

    pub fn fit_transform(&mut self, data: ArrayView2<f64>) -> Array2<f64> {
        self.fit(data);
        (data.to_owned() - &self.mean) / &self.scale
    }

    /// Undo the forward transform
    pub fn inverse_transform(&self, data: ArrayView2<f64>) -> Result<Array2<f64>> {
        self.check_ready(data.ncols())?;
        Ok(data.to_owned() * &self.scale + &self.mean)
    }

    pub fn is_fitted(&self) -> bool {
        self.fitted
    }

    pub fn mean(&self) -> &Array1<f64> {
        &self.mean
    }

    pub fn scale(&self) -> &Array1<f64> {
        &self.scale
    }

    fn check_ready(&self, n_cols: usize) -> Result<()> {
        if !self.fitted {
            return Err(RoadflowError::NotFitted);
        }
        if n_cols != self.mean.len() {
            return Err(RoadflowError::Shape {
                expected: format!("{} sensor columns", self.mean.len()),
                actual: format!("{}", n_cols),
            });
        }
        Ok(())
    }
}
