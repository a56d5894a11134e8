//! # lintview
//!
//! An editor-side lint coordinator: runs an external CSS/LESS verifier over
//! the currently active document and renders the results into a host
//! editor's UI panel, with click-to-navigate from result rows to source
//! positions.
//!
//! The crate contains no linter of its own. Verification is delegated to an
//! opaque [`Verifier`]; the coordinator decides *when* to verify (document
//! activation and save, gated by an enabled flag and the supported
//! extension set) and *how* to display the outcome (results table vs.
//! all-clear indicator, never both).
//!
//! ## Features
//!
//! - **Trait seams** for every host subsystem: documents, editor control,
//!   preferences, events, and the two views
//! - **Persisted enabled flag** through the injected preference store
//! - **Deterministic subscriptions**: toggling never leaks or duplicates
//!   event observers
//! - **Configuration** via JSON, YAML, or TOML files
//! - **Failure containment**: a failing verifier becomes one result row,
//!   never a crash
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use lintview::{HostBindings, LintCoordinator, Settings};
//! use std::rc::Rc;
//!
//! let coordinator = LintCoordinator::attach(
//!     HostBindings {
//!         documents: Rc::clone(&documents),
//!         editor: Rc::clone(&editor),
//!         events: Rc::clone(&events),
//!         prefs: Rc::clone(&prefs),
//!         panel: Rc::clone(&panel),
//!         indicator: Rc::clone(&indicator),
//!     },
//!     Rc::new(MyVerifier),
//!     Settings::default(),
//! )?;
//!
//! // The host wires row clicks to navigation:
//! coordinator.select_row(0);
//! ```
//!
//! ## Configuration
//!
//! ```json
//! {
//!   "enabled": true,
//!   "extensions": [".css", ".less"]
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod coordinator;
pub mod helpers;
pub mod host;
pub mod panel;
pub mod types;
pub mod verify;

// Re-export main types and traits
pub use config::{ExtensionFilter, Settings};
pub use coordinator::{HostBindings, LintCoordinator, PREF_ENABLED};
pub use host::{
    Document, DocumentEvent, DocumentSource, EditorControl, EventHub, EventSource, JsonFileStore,
    MemoryStore, Position, PreferenceStore, SubscriptionId, to_position,
};
pub use panel::{ResultsPanel, ResultsTable, StatusIndicator, TableRow};
pub use types::{LintMessage, LintReport, LintviewError, Result, Severity};
pub use verify::{Dialect, Verifier, VerifierError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get the library version
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
