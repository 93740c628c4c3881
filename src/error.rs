use thiserror::Error;

pub type MarkerResult<T> = Result<T, MarkerError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkerError {
    #[error("unknown marker: `{0}`")]
    UnknownMarker(String),

    #[error("invalid marker config: {0}")]
    InvalidConfig(String),
}
