use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid weight on link {a} - {b}: {value}")]
    InvalidWeight { a: String, b: String, value: f64 },

    #[error("Link {a} - {b} references undeclared node: {missing}")]
    UnknownEndpoint { a: String, b: String, missing: String },
}
