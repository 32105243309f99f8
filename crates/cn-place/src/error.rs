use cn_core::AgentId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlaceError {
    #[error("{agent} is already enrolled in {place:?}")]
    AlreadyEnrolled { agent: AgentId, place: String },

    #[error("{agent} is not enrolled in {place:?}")]
    NotEnrolled { agent: AgentId, place: String },
}

pub type PlaceResult<T> = Result<T, PlaceError>;
