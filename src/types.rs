use serde::{Deserialize, Serialize};

/// Contiguous slice of the raw series a dataset is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Partition {
    Train,
    Validation,
    Test,
}

impl Partition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Train => "train",
            Self::Validation => "validation",
            Self::Test => "test",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![Self::Train, Self::Validation, Self::Test]
    }

    pub fn is_train(&self) -> bool {
        matches!(self, Self::Train)
    }

    /// Training windows carry the extended multi-step target; everything
    /// else gets the plain evaluation horizon.
    pub fn window_mode(&self) -> WindowMode {
        if self.is_train() {
            WindowMode::Train
        } else {
            WindowMode::Eval
        }
    }
}

/// Target-window layout produced by the windowing transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowMode {
    Train,
    Eval,
}
