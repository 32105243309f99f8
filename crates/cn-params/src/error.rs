use cn_core::{DiseaseId, GroupId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("network parameter configuration error: {0}")]
    Config(String),

    #[error("no network parameters configured for {0}")]
    UnknownDisease(DiseaseId),

    #[error("no transmission probability configured for {disease} in {group}")]
    UnknownGroup { disease: DiseaseId, group: GroupId },

    #[error("network parameter parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ParamsResult<T> = Result<T, ParamsError>;
