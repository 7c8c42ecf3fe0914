//! Application configuration.
//!
//! Centralized configuration for the fac2csv upload form.
//! The defaults below match what the conversion server accepts. A host page
//! may override any of them by embedding a JSON document:
//!
//! ```html
//! <script id="upload-config" type="application/json">
//!   { "maxFiles": 20, "uploadEndpoint": "/convert" }
//! </script>
//! ```

use serde::Deserialize;

use crate::error::AppResult;
use crate::selection::format_size;

/// Maximum size of a single file (in bytes).
///
/// 10 MB limit, inclusive.
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Maximum number of files in one upload.
pub const MAX_FILES: usize = 50;

/// Only invoices in XML form are accepted (matched case-insensitively).
pub const ACCEPTED_EXTENSION: &str = ".xml";

/// Lifetime of a notice before it is removed automatically (ms).
pub const NOTICE_TIMEOUT_MS: u32 = 5_000;

/// Form action receiving the multipart upload.
pub const UPLOAD_ENDPOINT: &str = "/upload";

/// Multipart field name carrying the files.
pub const FILE_FIELD_NAME: &str = "files";

/// DOM id of the optional JSON override.
pub const CONFIG_ELEMENT_ID: &str = "upload-config";

/// Limits enforced on the pending selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionLimits {
    /// Maximum number of entries kept after any mutation
    pub max_files: usize,
    /// Maximum accepted size per file, in bytes
    pub max_file_size: u64,
    /// Required file name suffix, compared in lowercase
    pub accepted_extension: String,
}

impl Default for SelectionLimits {
    fn default() -> Self {
        Self {
            max_files: MAX_FILES,
            max_file_size: MAX_FILE_SIZE,
            accepted_extension: ACCEPTED_EXTENSION.to_string(),
        }
    }
}

impl SelectionLimits {
    /// Size limit as shown to users: `"10MB"`, `"512KB"`.
    pub fn max_file_size_label(&self) -> String {
        format_size(self.max_file_size).replace(' ', "")
    }
}

/// Runtime configuration of the upload page.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UploadConfig {
    pub max_file_size: u64,
    pub max_files: usize,
    pub accepted_extension: String,
    pub notice_timeout_ms: u32,
    pub upload_endpoint: String,
    pub file_field_name: String,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_file_size: MAX_FILE_SIZE,
            max_files: MAX_FILES,
            accepted_extension: ACCEPTED_EXTENSION.to_string(),
            notice_timeout_ms: NOTICE_TIMEOUT_MS,
            upload_endpoint: UPLOAD_ENDPOINT.to_string(),
            file_field_name: FILE_FIELD_NAME.to_string(),
        }
    }
}

impl UploadConfig {
    /// Parse a JSON override. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load the configuration embedded in the page, falling back to defaults.
    pub fn load() -> Self {
        let embedded = gloo_utils::document()
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|element| element.text_content());

        let Some(json) = embedded else {
            log::debug!("No #{} element, using default configuration", CONFIG_ELEMENT_ID);
            return Self::default();
        };

        match Self::from_json(&json) {
            Ok(config) => {
                log::info!("⚙️ Loaded upload configuration: {:?}", config);
                config
            }
            Err(e) => {
                log::warn!("Ignoring invalid upload configuration: {}", e);
                Self::default()
            }
        }
    }

    /// Limits applied to the file selection.
    pub fn limits(&self) -> SelectionLimits {
        SelectionLimits {
            max_files: self.max_files,
            max_file_size: self.max_file_size,
            accepted_extension: self.accepted_extension.to_lowercase(),
        }
    }
}
