use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("A zero time animation has no meaning")]
    DegenerateInterval,

    #[error("The timer must be started with play() first")]
    NotStarted,

    #[error("Timer.{0} is a readonly property")]
    ReadOnlyProperty(String),

    #[error("Unknown timer property: {0}")]
    UnknownProperty(String),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
