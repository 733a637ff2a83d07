use serde::Serialize;

/// Result of a privileged user deletion
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}
