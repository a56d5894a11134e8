//! Lint message and report types

use std::fmt;

/// Severity category attached to a lint message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Error level
    Error,
    /// Warning level
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// One issue reported by the verifier
///
/// Positions are 1-based, as reported by the verifier. Conversion to the
/// editor's 0-based coordinates happens at navigation time (see
/// [`crate::host::to_position`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintMessage {
    /// Line number (1-based) where the issue occurs
    pub line: usize,

    /// Column number (1-based) where the issue occurs
    pub col: usize,

    /// Human-readable description of the issue
    pub message: String,

    /// Severity category
    pub severity: Severity,
}

impl fmt::Display for LintMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: {} {}",
            self.line, self.col, self.severity, self.message
        )
    }
}

/// Ordered result of one verification pass over one document snapshot
///
/// Transient: every run over a document discards the previous report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintReport {
    /// Messages in the order the verifier produced them
    pub messages: Vec<LintMessage>,
}

impl LintReport {
    /// Create an empty (clean) report
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a report from a list of messages
    pub fn from_messages(messages: Vec<LintMessage>) -> Self {
        Self { messages }
    }

    /// Whether the pass produced no messages
    pub fn is_clean(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of error-level messages
    pub fn error_count(&self) -> usize {
        self.messages
            .iter()
            .filter(|m| m.severity == Severity::Error)
            .count()
    }

    /// Number of warning-level messages
    pub fn warning_count(&self) -> usize {
        self.messages
            .iter()
            .filter(|m| m.severity == Severity::Warning)
            .count()
    }
}

impl fmt::Display for LintReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.messages.iter().map(|m| m.to_string()).collect();
        write!(f, "{}", lines.join("\n"))
    }
}

impl IntoIterator for LintReport {
    type Item = LintMessage;
    type IntoIter = std::vec::IntoIter<LintMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.into_iter()
    }
}

impl<'a> IntoIterator for &'a LintReport {
    type Item = &'a LintMessage;
    type IntoIter = std::slice::Iter<'a, LintMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}
