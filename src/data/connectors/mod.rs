mod csv;
mod types;
mod validator;

pub use csv::CsvConnector;
pub use types::{SensorStats, SeriesMetadata};
pub use validator::DataValidator;
