#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("malformed week identifier: {0}")]
    MalformedIdentifier(String),

    #[error("slot index {index} out of range for {len} slots")]
    OutOfRange { index: usize, len: usize },

    #[error("no plan stored for week {0}")]
    PlanNotFound(String),

    #[error("recipe catalog source has no entries")]
    CatalogEmpty,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("{0}")]
    Unknown(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value.to_string())
    }
}

impl From<bitcode::Error> for Error {
    fn from(value: bitcode::Error) -> Self {
        Self::Serialization(value.to_string())
    }
}
