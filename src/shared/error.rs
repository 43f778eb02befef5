use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to tell apart a clean walk, a walk where some
/// documents could not be merged, and outright failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Every document was merged
    Success = 0,
    /// At least one document was rejected or failed to load
    DocumentsNotMerged = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (config error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::DocumentsNotMerged => write!(f, "Documents Not Merged (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors.
///
/// Uses thiserror to derive Display and Error traits, keeping the
/// user-facing hints next to each variant.
#[derive(Debug, Error)]
pub enum GraphMergeError {
    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid viewport: {reason}\n\n💡 Hint: Width and height must be positive and larger than twice the margin")]
    InvalidViewport { reason: String },

    /// Validation error for builder patterns and argument checks
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

/// Coarse classification of a document load failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LoadFailureKind {
    NotFetchable,
    NotParseable,
    MalformedShape,
}

impl fmt::Display for LoadFailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadFailureKind::NotFetchable => write!(f, "not fetchable"),
            LoadFailureKind::NotParseable => write!(f, "not parseable"),
            LoadFailureKind::MalformedShape => write!(f, "malformed shape"),
        }
    }
}

/// Failure to turn a document source into an `SbomDocument`.
///
/// The graph is never touched when one of these is produced.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DocumentLoadError {
    #[error("Failed to fetch document: {document}\nDetails: {details}\n\n💡 Hint: Check that the path or URL exists and is reachable")]
    NotFetchable { document: String, details: String },

    #[error("Failed to parse document: {document}\nDetails: {details}\n\n💡 Hint: The document must be valid JSON")]
    NotParseable { document: String, details: String },

    #[error("Malformed document: {document}\nDetails: {details}\n\n💡 Hint: A CycloneDX document needs metadata.component and identifiable components")]
    MalformedShape { document: String, details: String },
}

impl DocumentLoadError {
    pub fn kind(&self) -> LoadFailureKind {
        match self {
            DocumentLoadError::NotFetchable { .. } => LoadFailureKind::NotFetchable,
            DocumentLoadError::NotParseable { .. } => LoadFailureKind::NotParseable,
            DocumentLoadError::MalformedShape { .. } => LoadFailureKind::MalformedShape,
        }
    }

    pub fn document(&self) -> &str {
        match self {
            DocumentLoadError::NotFetchable { document, .. }
            | DocumentLoadError::NotParseable { document, .. }
            | DocumentLoadError::MalformedShape { document, .. } => document,
        }
    }

    pub fn details(&self) -> &str {
        match self {
            DocumentLoadError::NotFetchable { details, .. }
            | DocumentLoadError::NotParseable { details, .. }
            | DocumentLoadError::MalformedShape { details, .. } => details,
        }
    }

    pub(crate) fn not_fetchable(document: impl Into<String>, details: impl fmt::Display) -> Self {
        DocumentLoadError::NotFetchable {
            document: document.into(),
            details: details.to_string(),
        }
    }

    pub(crate) fn not_parseable(document: impl Into<String>, details: impl fmt::Display) -> Self {
        DocumentLoadError::NotParseable {
            document: document.into(),
            details: details.to_string(),
        }
    }

    pub(crate) fn malformed(document: impl Into<String>, details: impl fmt::Display) -> Self {
        DocumentLoadError::MalformedShape {
            document: document.into(),
            details: details.to_string(),
        }
    }
}
