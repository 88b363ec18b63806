use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid patient id: {0}")]
    InvalidPatientId(String),

    #[error("unknown rating scale: {0}")]
    UnknownScale(String),
}
