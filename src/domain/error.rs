use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for podsetup operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Pod name is invalid.
    #[error("Invalid pod name '{0}': must be non-empty and contain no path separators")]
    InvalidPodName(String),

    /// A file the run depends on is missing from the template tree.
    #[error("Template file not found: {}", .0.display())]
    MissingTemplateFile(PathBuf),

    /// A placeholder survived substitution with no mapped value.
    #[error("Unresolved placeholder {token} in {}", file.display())]
    UnresolvedPlaceholder { token: String, file: PathBuf },

    /// A merge marker expected in a manifest is absent.
    #[error("Merge marker {marker} not found in {}", file.display())]
    MissingMergeMarker { marker: String, file: PathBuf },

    /// Standard input ended while a prompt was still waiting for an answer.
    #[error("Unexpected end of input while waiting for an answer")]
    UnexpectedEof,

    /// The MainApp Podfile merge is not available for this configuration.
    #[error("Adding a {0} module to the MainApp Podfile is not supported")]
    MainAppUnsupported(String),

    /// `pod install` could not be run or exited non-zero. Reported to the
    /// operator; the scaffolding is already committed to disk.
    #[error("pod install failed in {dir}: {details}")]
    InstallFailed { dir: String, details: String },
}
