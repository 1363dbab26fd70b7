use super::traits::ConfigSection;
use crate::dataset::WindowConfig;
use crate::error::RoadflowError;
use crate::types::WindowMode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Headerless CSV, one row per time slot, one column per route
    pub data_path: PathBuf,
    /// Number of sensor/route columns
    pub n_route: usize,
    /// Time slots per calendar day (288 for 5-minute slots)
    pub day_slot: usize,
    /// Input window length in slots
    pub n_his: usize,
    /// Target window length in slots
    pub n_pred: usize,
    /// Extra target steps appended in training mode for multi-step
    /// auxiliary supervision
    pub aux_step: usize,
    /// Days assigned to the training partition
    pub n_train: usize,
    /// Days assigned to the validation partition (the test partition
    /// mirrors this width)
    pub n_val: usize,
    /// Fit/apply the shared standardizer; when false the raw values flow
    /// through unscaled
    pub standardize: bool,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        // PeMSD7(M) experiment layout: 228 routes sampled every 5 minutes,
        // one-hour history, 15-minute horizon.
        Self {
            data_path: PathBuf::from("data/pemsd7_v228.csv"),
            n_route: 228,
            day_slot: 288,
            n_his: 12,
            n_pred: 3,
            aux_step: 1,
            n_train: 34,
            n_val: 5,
            standardize: true,
        }
    }
}

impl DatasetConfig {
    pub fn window(&self) -> WindowConfig {
        WindowConfig {
            n_his: self.n_his,
            n_pred: self.n_pred,
            n_route: self.n_route,
            day_slot: self.day_slot,
            aux_step: self.aux_step,
        }
    }
}

impl ConfigSection for DatasetConfig {
    fn section_name() -> &'static str {
        "dataset"
    }

    fn validate(&self) -> Result<(), RoadflowError> {
        for (name, value) in [
            ("n_route", self.n_route),
            ("day_slot", self.day_slot),
            ("n_his", self.n_his),
            ("n_pred", self.n_pred),
            ("aux_step", self.aux_step),
        ] {
            if value == 0 {
                return Err(RoadflowError::Configuration(format!(
                    "{} must be positive",
                    name
                )));
            }
        }

        let window = self.window();
        if window.windows_per_day(WindowMode::Train) == 0 {
            log::warn!(
                "n_his + n_pred + aux_step exceeds day_slot; training datasets will be empty"
            );
        }

        Ok(())
    }
}
