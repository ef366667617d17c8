//! HTTP response handling

use crate::error::{ClientError, Result};

/// Status and body of a completed exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    /// Accept the response only when it is `200 OK` with a non-empty body.
    pub fn into_body(self) -> Result<String> {
        if self.status != 200 {
            log::warn!("Response returned status {}", self.status);
            return Err(ClientError::NonOkStatus(self.status));
        }
        if self.body.is_empty() {
            log::warn!("Response returned an empty body");
            return Err(ClientError::EmptyBody);
        }
        Ok(self.body)
    }
}
