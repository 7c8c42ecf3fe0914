//! Error types for the upload form.
//!
//! - [`SelectionWarning`] - why a candidate file did not make it into the
//!   selection. Never fatal; its `Display` is the notice shown to the user.
//! - [`AppError`] - failures of the browser environment or configuration.

use thiserror::Error;

// =============================================================================
// Selection Warnings
// =============================================================================

/// A file excluded from the selection.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SelectionWarning {
    /// Name does not end with the accepted extension.
    #[error("Archivo ignorado: \"{name}\" (solo se permiten archivos {extension})")]
    UnsupportedExtension { name: String, extension: String },

    /// File larger than the per-file limit.
    #[error("Archivo ignorado: \"{name}\" (excede {limit})")]
    FileTooLarge { name: String, limit: String },

    /// Selection truncated to the maximum number of files.
    #[error("Máximo {max} archivos permitidos. Se han seleccionado los primeros {max}.")]
    CapacityExceeded { max: usize },
}

// =============================================================================
// Application Errors
// =============================================================================

/// Frontend application errors.
#[derive(Debug, Error)]
pub enum AppError {
    /// A browser API call failed.
    #[error("DOM error: {0}")]
    Dom(String),

    /// Embedded configuration could not be parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_messages() {
        let err = SelectionWarning::UnsupportedExtension {
            name: "factura.pdf".into(),
            extension: ".xml".into(),
        };
        assert_eq!(
            err.to_string(),
            "Archivo ignorado: \"factura.pdf\" (solo se permiten archivos .xml)"
        );

        let err = SelectionWarning::FileTooLarge { name: "big.xml".into(), limit: "10MB".into() };
        assert_eq!(err.to_string(), "Archivo ignorado: \"big.xml\" (excede 10MB)");

        let err = SelectionWarning::CapacityExceeded { max: 50 };
        assert_eq!(
            err.to_string(),
            "Máximo 50 archivos permitidos. Se han seleccionado los primeros 50."
        );
    }

    #[test]
    fn test_config_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: AppError = json_err.into();
        assert!(err.to_string().starts_with("Configuration error"));
    }
}
