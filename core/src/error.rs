use alloc::string::String;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Network(String),
    #[error("Server responded with status {0}")]
    Status(u16),
    #[error("Unexpected response: {0}")]
    DataShape(String),
}

pub type Result<T> = core::result::Result<T, FetchError>;
