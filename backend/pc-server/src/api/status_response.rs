use serde::Serialize;

/// `{"status": "success"}` acknowledgement for writes and deletes
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    pub fn success() -> Self {
        Self { status: "success" }
    }
}
