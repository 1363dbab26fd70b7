use crate::error::{Result, RoadflowError};
use polars::prelude::*;

pub struct DataValidator;

impl DataValidator {
    /// Validate that every column holds numeric readings
    pub fn validate_numeric(df: &DataFrame) -> Result<()> {
        for col_name in df.get_column_names() {
            let series = df.column(col_name)?;
            if !matches!(
                series.dtype(),
                DataType::Float64
                    | DataType::Float32
                    | DataType::Int64
                    | DataType::Int32
                    | DataType::UInt64
                    | DataType::UInt32
            ) {
                return Err(RoadflowError::DataLoading(format!(
                    "Column '{}' must be numeric, found {:?}",
                    col_name,
                    series.dtype()
                )));
            }
        }
        Ok(())
    }

    /// Check for minimum required rows
    pub fn validate_minimum_rows(df: &DataFrame, min_rows: usize) -> Result<()> {
        if df.height() < min_rows {
            return Err(RoadflowError::DataLoading(format!(
                "Insufficient data: {} rows, minimum {} required",
                df.height(),
                min_rows
            )));
        }
        Ok(())
    }

    /// Check for null values across sensor columns
    pub fn check_nulls(df: &DataFrame) -> Result<Vec<(String, usize)>> {
        let mut null_report = Vec::new();

        for col_name in df.get_column_names() {
            let series = df.column(col_name)?;
            let null_count = series.null_count();
            if null_count > 0 {
                null_report.push((col_name.to_string(), null_count));
            }
        }

        Ok(null_report)
    }

    /// Row count must be an exact multiple of the slots-per-day grid, or
    /// day-based partition boundaries stop meaning anything.
    pub fn validate_day_alignment(n_rows: usize, day_slot: usize) -> Result<()> {
        if day_slot == 0 || n_rows % day_slot != 0 {
            return Err(RoadflowError::Shape {
                expected: format!("row count divisible by day_slot {}", day_slot),
                actual: format!("{} rows", n_rows),
            });
        }
        Ok(())
    }
}
