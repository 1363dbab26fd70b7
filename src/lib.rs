//! Dataset preparation for spatio-temporal traffic forecasting.
//!
//! Takes a long time-major matrix of sensor readings (one row per 5-minute
//! slot, one column per route), splits it into contiguous train/validation/
//! test partitions, standardizes each partition with statistics fitted on the
//! training range only, and slices every day into fixed-length
//! (input window, target window) sample pairs that never cross a day
//! boundary.

pub mod config;
pub mod data;
pub mod dataset;
pub mod error;
pub mod preprocess;
pub mod types;

pub use config::{AppConfig, ConfigManager, DatasetConfig};
pub use data::{CsvConnector, DataValidator, SeriesMetadata};
pub use dataset::{transform, TrafficDataset, WindowConfig};
pub use error::{Result, RoadflowError};
pub use preprocess::{SharedStandardizer, Standardizer};
pub use types::{Partition, WindowMode};
