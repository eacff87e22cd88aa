//! Upload validation configuration.

use serde::{Deserialize, Serialize};

/// Limits applied to every uploaded file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Maximum accepted file size in bytes (default 10 MB).
    #[serde(default = "default_max_file_size")]
    pub max_file_size_bytes: u64,
    /// Lower-case file extensions accepted for upload.
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_file_size_bytes: default_max_file_size(),
            allowed_extensions: default_allowed_extensions(),
        }
    }
}

impl UploadConfig {
    /// Whether `extension` (any case, without the dot) is on the allow-list.
    pub fn is_extension_allowed(&self, extension: &str) -> bool {
        self.allowed_extensions
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(extension))
    }
}

fn default_max_file_size() -> u64 {
    10_485_760 // 10 MB
}

fn default_allowed_extensions() -> Vec<String> {
    [
        "pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx", "txt", "csv", "jpg", "jpeg", "png",
        "gif",
    ]
    .iter()
    .map(|ext| ext.to_string())
    .collect()
}
