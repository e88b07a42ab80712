//! Document upload policy configuration.

use serde::{Deserialize, Serialize};

/// Upload limits applied before any byte is forwarded to the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadsConfig {
    /// Maximum accepted file size in bytes.
    #[serde(default = "default_max_size")]
    pub max_size_bytes: u64,
    /// Accepted MIME types for uploaded documents.
    #[serde(default = "default_allowed_mime_types")]
    pub allowed_mime_types: Vec<String>,
}

impl Default for UploadsConfig {
    fn default() -> Self {
        Self {
            max_size_bytes: default_max_size(),
            allowed_mime_types: default_allowed_mime_types(),
        }
    }
}

impl UploadsConfig {
    /// Whether the given MIME type is accepted.
    pub fn accepts_mime(&self, mime: &str) -> bool {
        self.allowed_mime_types.iter().any(|m| m == mime)
    }
}

fn default_max_size() -> u64 {
    10 * 1024 * 1024
}

fn default_allowed_mime_types() -> Vec<String> {
    vec!["application/pdf".to_string()]
}
