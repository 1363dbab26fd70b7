use super::{
    types::{SensorStats, SeriesMetadata},
    validator::DataValidator,
};
use crate::error::{Result, RoadflowError};
use ndarray::Array2;
use polars::prelude::*;
use std::path::Path;

pub struct CsvConnector;

impl CsvConnector {
    /// Load a headerless sensor-readings CSV into a DataFrame, all columns
    /// cast to f64
    pub fn load<P: AsRef<Path>>(path: P) -> Result<DataFrame> {
        let df = CsvReadOptions::default()
            .with_has_header(false)
            .try_into_reader_with_file_path(Some(path.as_ref().to_path_buf()))?
            .finish()
            .map_err(|e| RoadflowError::DataLoading(format!("Failed to read CSV: {}", e)))?;

        Self::cast_numeric(df)
    }

    /// Load, validate and convert to the time-major readings matrix
    /// (rows = slots, columns = sensors)
    pub fn load_series<P: AsRef<Path>>(path: P) -> Result<Array2<f64>> {
        let df = Self::load(&path)?;

        // Warn about nulls but don't fail
        let null_report = DataValidator::check_nulls(&df)?;
        if !null_report.is_empty() {
            log::warn!("Null values detected: {:?}", null_report);
        }

        let matrix = Self::to_matrix(&df)?;
        log::debug!(
            "Loaded series of {} slots x {} sensors from {}",
            matrix.nrows(),
            matrix.ncols(),
            path.as_ref().display()
        );

        Ok(matrix)
    }

    /// Convert a numeric DataFrame into a dense f64 matrix
    pub fn to_matrix(df: &DataFrame) -> Result<Array2<f64>> {
        df.to_ndarray::<Float64Type>(IndexOrder::C)
            .map_err(|e| RoadflowError::DataLoading(format!("Failed to densify series: {}", e)))
    }

    /// Create metadata for a loaded series
    pub fn create_metadata<P: AsRef<Path>>(path: P, df: &DataFrame) -> Result<SeriesMetadata> {
        let mut sensor_stats = Vec::new();
        let mut global_min = f64::INFINITY;
        let mut global_max = f64::NEG_INFINITY;
        let mut global_sum = 0.0;
        let mut global_count = 0usize;

        for (index, col_name) in df.get_column_names().iter().enumerate() {
            let column = df.column(col_name)?.cast(&DataType::Float64)?;
            let values = column.f64()?;

            let min = values.min();
            let max = values.max();
            let mean_scalar = column.mean_reduce();
            let mean = mean_scalar.value().extract::<f64>();

            if let Some(m) = min {
                global_min = global_min.min(m);
            }
            if let Some(m) = max {
                global_max = global_max.max(m);
            }
            if let Some(s) = values.sum() {
                global_sum += s;
                global_count += values.len() - column.null_count();
            }

            sensor_stats.push(SensorStats {
                index,
                null_count: column.null_count(),
                min,
                max,
                mean,
            });
        }

        let value_range = if global_min <= global_max {
            (global_min, global_max)
        } else {
            (0.0, 0.0)
        };
        let mean = if global_count > 0 {
            Some(global_sum / global_count as f64)
        } else {
            None
        };

        Ok(SeriesMetadata {
            file_path: path.as_ref().to_string_lossy().to_string(),
            n_slots: df.height(),
            n_route: df.width(),
            value_range,
            mean,
            sensor_stats,
        })
    }

    fn cast_numeric(mut df: DataFrame) -> Result<DataFrame> {
        DataValidator::validate_numeric(&df)?;

        for name in df.get_column_names_owned() {
            let casted = df.column(name.as_str())?.cast(&DataType::Float64)?;
            df.with_column(casted)?;
        }

        Ok(df)
    }
}
