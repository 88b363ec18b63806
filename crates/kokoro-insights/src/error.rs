use thiserror::Error;

#[derive(Debug, Error)]
pub enum InsightError {
    #[error("unknown outcome scenario: {0}")]
    UnknownScenario(String),

    #[error("unknown period: {0} (expected 3m, 6m, or all)")]
    UnknownPeriod(String),
}
