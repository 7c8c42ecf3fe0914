//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Render Types** - row descriptors for the file list
//! - **Notice Types** - transient messages shown above the form

// =============================================================================
// Render Types
// =============================================================================

/// One row of the selected-files list.
///
/// Produced by [`crate::FileSelection::rows`]; `index` is only valid until
/// the next mutation of the selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileRow {
    /// Position in the selection
    pub index: usize,
    /// File name as reported by the browser
    pub name: String,
    /// Human readable size, e.g. "1.5 KB"
    pub size_label: String,
}

// =============================================================================
// Notice Types
// =============================================================================

/// Notice severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
}

impl Severity {
    /// Bootstrap alert class.
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Info => "alert-info",
            Severity::Warning => "alert-warning",
        }
    }

    /// Bootstrap Icons glyph.
    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Info => "bi bi-info-circle",
            Severity::Warning => "bi bi-exclamation-triangle",
        }
    }
}

/// A dismissible message displayed at the top of the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}
