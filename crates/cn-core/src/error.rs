//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `CnError` as one variant
//! where they need to surface core failures.

use thiserror::Error;

use crate::DiseaseId;

/// The top-level error type for `cn-core`.
#[derive(Debug, Error)]
pub enum CnError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("{0} is not modeled by this run")]
    DiseaseOutOfRange(DiseaseId),
}

/// Shorthand result type for `cn-core`.
pub type CnResult<T> = Result<T, CnError>;
