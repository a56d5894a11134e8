//! External verifier seam
//!
//! The verifier owns all tokenization and rule evaluation; the coordinator
//! only forwards document text and displays what comes back.

use crate::types::LintReport;

/// Stylesheet dialect the text should be verified as
///
/// Lets the verifier pick a dialect-specific ruleset. Any supported
/// extension other than `.less` is verified as plain CSS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Plain CSS
    Css,
    /// LESS
    Less,
}

impl Dialect {
    /// Derive the dialect from a dot-included file extension
    pub fn from_extension(extension: &str) -> Self {
        if extension.eq_ignore_ascii_case(".less") {
            Dialect::Less
        } else {
            Dialect::Css
        }
    }
}

/// Internal failure reported by a verifier
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct VerifierError {
    /// What went wrong, in the verifier's words
    pub message: String,
}

impl VerifierError {
    /// Create a new error with the given message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<VerifierError> for crate::types::LintviewError {
    fn from(e: VerifierError) -> Self {
        crate::types::LintviewError::Verifier(e.message)
    }
}

/// Analyzes stylesheet text and reports issues
///
/// Must be synchronous and bounded; a clean pass returns an empty report.
/// Failures are returned, never panicked: the coordinator renders an `Err`
/// as a single internal-failure row instead of crashing the host.
pub trait Verifier {
    /// Verify one document snapshot
    fn verify(&self, text: &str, dialect: Dialect) -> Result<LintReport, VerifierError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialect_from_extension() {
        assert_eq!(Dialect::from_extension(".css"), Dialect::Css);
        assert_eq!(Dialect::from_extension(".less"), Dialect::Less);
        assert_eq!(Dialect::from_extension(".LESS"), Dialect::Less);
        // Accepted-but-unknown extensions verify as plain CSS
        assert_eq!(Dialect::from_extension(".scss"), Dialect::Css);
    }

    #[test]
    fn test_verifier_error_display() {
        let err = VerifierError::new("stack exhausted");
        assert_eq!(err.to_string(), "stack exhausted");
    }
}
