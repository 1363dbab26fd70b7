pub mod partition;
pub mod window;

pub use partition::TrafficDataset;
pub use window::{transform, WindowConfig};
