pub mod standardize;

pub use standardize::{SharedStandardizer, Standardizer};
