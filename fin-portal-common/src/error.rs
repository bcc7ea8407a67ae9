use serde::{Deserialize, Serialize};
use thiserror::Error;

/// All possible error types that may occur within the portal crates
#[derive(Error, Debug)]
pub enum FpError {
    #[error("Username `{0}` cannot be mapped to a portal identity")]
    InvalidUsername(String),
    #[error("{0}")]
    ParseInt(#[from] std::num::ParseIntError),
    #[error("JSON error\n{0}")]
    Json(#[from] serde_json::Error),
}

/// Generic [Result][std::result::Result] type where the error is always [FpError]
pub type FpResult<T> = std::result::Result<T, FpError>;

/// Body of a rejected backend request. The `detail` message is surfaced to the
/// user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}
