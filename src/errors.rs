use thiserror::Error;

/// Errors that can occur when resolving an output mode.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModeError {
    /// The supplied mode tag is not one of the recognized output modes.
    ///
    /// Raised at the parse boundary, before any configuration is resolved,
    /// so an unrecognized mode can never produce silently-wrong flags.
    #[error("invalid output mode '{mode}' (expected 'strict-seo', 'split-channels', or 'standards-header')")]
    InvalidMode {
        /// The tag that was supplied.
        mode: String,
    },
}

pub type Result<T> = std::result::Result<T, ModeError>;
