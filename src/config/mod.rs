pub mod dataset;
pub mod manager;
pub mod traits;

pub use dataset::DatasetConfig;
pub use manager::{AppConfig, ConfigManager};
pub use traits::ConfigSection;
