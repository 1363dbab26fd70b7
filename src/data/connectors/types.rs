use serde::{Deserialize, Serialize};

/// Metadata about a loaded sensor series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesMetadata {
    pub file_path: String,
    /// Rows = time slots
    pub n_slots: usize,
    /// Columns = sensor/route indices
    pub n_route: usize,
    /// (min, max) across all sensors
    pub value_range: (f64, f64),
    /// Mean over all non-null readings
    pub mean: Option<f64>,
    pub sensor_stats: Vec<SensorStats>,
}

/// Per-sensor column summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorStats {
    pub index: usize,
    pub null_count: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
}
