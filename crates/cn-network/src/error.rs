use cn_place::PlaceKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("place {label:?} has kind {kind}, which is not a contact network")]
    NotANetwork { label: String, kind: PlaceKind },
}

pub type NetworkResult<T> = Result<T, NetworkError>;
