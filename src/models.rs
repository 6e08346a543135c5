//! Shared API Models
//! Mission: Response shapes used across endpoint modules

use serde::Serialize;

/// Generic message response body
#[derive(Debug, Serialize)]
pub struct MsgResponse {
    pub msg: String,
}

impl MsgResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}
