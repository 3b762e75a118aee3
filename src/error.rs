// src/error.rs

use thiserror::Error;

/// Errors raised while preparing inputs or configuring a run.
///
/// Everything here aborts the run before allocation starts. Supply shortfalls are not errors,
/// see [`crate::model::order::ShortfallWarning`].
#[derive(Error, Debug)]
pub enum SimError {
    // ===== Validation =====
    #[error("{dataset} is empty")]
    EmptyDataset { dataset: String },

    #[error("{dataset} is missing required columns: {columns:?}")]
    MissingColumns {
        dataset: String,
        columns: Vec<String>,
    },

    #[error("{dataset} row {row}: invalid value {value:?} in column '{column}'")]
    InvalidValue {
        dataset: String,
        row: usize,
        column: String,
        value: String,
    },

    // ===== Reference lookups =====
    #[error("{dataset} row {row}: unknown month name {name:?}")]
    UnknownMonth {
        dataset: String,
        row: usize,
        name: String,
    },

    #[error("{dataset} row {row}: unknown apple variety {name:?}")]
    UnknownVariety {
        dataset: String,
        row: usize,
        name: String,
    },

    // ===== Pool consistency =====
    #[error("duplicate harvest lot id: {0}")]
    DuplicateLot(String),

    #[error("invalid simulation config: {0}")]
    InvalidConfig(String),

    // ===== I/O =====
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SimError {
    /// True for the missing-column and empty-dataset cases.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SimError::EmptyDataset { .. } | SimError::MissingColumns { .. }
        )
    }
}

pub type SimResult<T> = Result<T, SimError>;
