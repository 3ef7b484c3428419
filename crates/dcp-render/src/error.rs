//! Error types for rendering

/// Errors while producing a rendered policy
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The DOCX package could not be written
    #[error("failed to package docx: {0}")]
    Package(String),

    /// IO error writing rendered output
    #[error("io error writing {path}: {source}")]
    Io {
        /// Destination path
        path: std::path::PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

impl RenderError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<std::path::PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
