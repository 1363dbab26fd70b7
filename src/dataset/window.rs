//! Day-bounded windowing of the standardized series.
//!
//! Every calendar day is sliced independently, so a window of history plus
//! its forecast target always comes from a single day. Training mode extends
//! the target by `aux_step - 1` extra slots for multi-step auxiliary
//! supervision; evaluation mode keeps the plain `n_pred` horizon.

use crate::types::WindowMode;
use ndarray::{s, Array4, ArrayView2, Axis};

#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub n_his: usize,
    pub n_pred: usize,
    pub n_route: usize,
    pub day_slot: usize,
    pub aux_step: usize,
}

impl WindowConfig {
    /// Windows that fit in one day. Saturates to 0 when the window lengths
    /// exceed the day, so a malformed configuration yields empty output
    /// rather than a panic.
    pub fn windows_per_day(&self, mode: WindowMode) -> usize {
        match mode {
            WindowMode::Train => {
                (self.day_slot + 2).saturating_sub(self.n_his + self.n_pred + self.aux_step)
            }
            WindowMode::Eval => (self.day_slot + 1).saturating_sub(self.n_his + self.n_pred),
        }
    }

    /// Temporal length of the target window
    pub fn target_len(&self, mode: WindowMode) -> usize {
        match mode {
            WindowMode::Train => (self.n_pred + self.aux_step).saturating_sub(1),
            WindowMode::Eval => self.n_pred,
        }
    }
}

/// Slice a time-major series (slots x sensors) into input/target window
/// batches laid out as (sample, sensor, time, 1), sensors leading so
/// downstream per-node models can index their own history directly.
pub fn transform(
    series: ArrayView2<f64>,
    mode: WindowMode,
    cfg: &WindowConfig,
) -> (Array4<f64>, Array4<f64>) {
    let n_day = if cfg.day_slot == 0 {
        0
    } else {
        series.nrows() / cfg.day_slot
    };
    let n_slot = cfg.windows_per_day(mode);
    let target_len = cfg.target_len(mode);

    let mut x = Array4::zeros((n_day * n_slot, cfg.n_route, cfg.n_his, 1));
    let mut y = Array4::zeros((n_day * n_slot, cfg.n_route, target_len, 1));

    for day in 0..n_day {
        for offset in 0..n_slot {
            let t = day * n_slot + offset;
            let start = day * cfg.day_slot + offset;
            let end = start + cfg.n_his;

            let input = series.slice(s![start..end, ..]);
            x.index_axis_mut(Axis(0), t)
                .assign(&input.t().insert_axis(Axis(2)));

            let target = series.slice(s![end..end + target_len, ..]);
            y.index_axis_mut(Axis(0), t)
                .assign(&target.t().insert_axis(Axis(2)));
        }
    }

    (x, y)
}
