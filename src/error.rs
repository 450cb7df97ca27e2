pub type ClampResult<T> = Result<T, ClampError>;

#[derive(thiserror::Error, Debug)]
pub enum ClampError {
    #[error("domain error: {0}")]
    Domain(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ClampError {
    pub fn domain(msg: impl Into<String>) -> Self {
        Self::Domain(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ClampError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}
