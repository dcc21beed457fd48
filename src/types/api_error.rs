use super::de::null_as_default;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The error payload returned alongside any unsuccessful response.
///
/// ```json
/// {
///     "code": 21211,
///     "message": "Invalid 'To' Phone Number",
///     "more_info": "https://www.twilio.com/docs/errors/21211",
///     "status": 400
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// The API-specific error code.
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: i64,
    /// A human readable description of the failure.
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    /// A link to documentation about this error code.
    #[serde(default, deserialize_with = "null_as_default")]
    pub more_info: String,
    /// The HTTP status code, echoed back.
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: u16,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error {}: {}", self.code, self.message)?;
        if !self.more_info.is_empty() {
            write!(f, " ({})", self.more_info)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}
