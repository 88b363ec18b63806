use thiserror::Error;

#[derive(Debug, Error)]
pub enum SynthError {
    #[error("population size must be at least 1")]
    EmptyPopulation,

    #[error("no patient with id {0}")]
    UnknownPatient(String),
}
