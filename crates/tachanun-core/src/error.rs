use thiserror::Error;

#[derive(Debug, Error)]
pub enum TachanunError {
    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("date out of range: {0}")]
    DateOutOfRange(String),

    #[error("cannot list {requested} days; the limit is {max}")]
    TooManyDays { requested: u32, max: u32 },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, TachanunError>;
