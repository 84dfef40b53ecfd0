use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("unknown locale: {0}")]
    UnknownLocale(String),
    #[error("unknown research: {0}")]
    UnknownResearch(String),
    #[error("assessment not present in this assessor: {0}")]
    UnknownAssessment(String),
    #[error("unknown assessor preset: {0}")]
    UnknownAssessor(String),
    #[error("invalid configuration in {name}: {source}")]
    InvalidConfig {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}
