//! The lint coordinator
//!
//! Owns the enabled flag, reacts to document lifecycle events while
//! enabled, delegates verification to the injected [`Verifier`], and drives
//! the host's results panel, all-clear indicator, and editor cursor.

use serde_json::Value;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::config::{ExtensionFilter, Settings};
use crate::helpers::filename_extension;
use crate::host::{
    Document, DocumentEvent, DocumentSource, EditorControl, EventSource, PreferenceStore,
    SubscriptionId, to_position,
};
use crate::panel::{ResultsPanel, ResultsTable, StatusIndicator};
use crate::types::{LintMessage, LintReport, Result, Severity};
use crate::verify::{Dialect, Verifier};

/// Preference key holding the persisted enabled flag
pub const PREF_ENABLED: &str = "enabled";

/// Handles to the host subsystems the coordinator collaborates with
///
/// All handles are `Rc`: the coordinator shares them with the host and,
/// in tests, with the assertions inspecting stub state.
pub struct HostBindings {
    /// Source of the currently active document
    pub documents: Rc<dyn DocumentSource>,
    /// Control surface of the current editor
    pub editor: Rc<dyn EditorControl>,
    /// Document lifecycle event source
    pub events: Rc<dyn EventSource>,
    /// Preference storage scoped to this coordinator
    pub prefs: Rc<dyn PreferenceStore>,
    /// Results panel view
    pub panel: Rc<dyn ResultsPanel>,
    /// All-clear indicator view
    pub indicator: Rc<dyn StatusIndicator>,
}

/// Runs the verifier over the active document and renders the outcome
///
/// Two states, Enabled and Disabled, toggled only through
/// [`set_enabled`](Self::set_enabled); every transition re-evaluates
/// [`run`](Self::run) once. The initial state comes from the preference
/// store, falling back to [`Settings::enabled`].
pub struct LintCoordinator {
    weak_self: Weak<Self>,
    documents: Rc<dyn DocumentSource>,
    editor: Rc<dyn EditorControl>,
    events: Rc<dyn EventSource>,
    prefs: Rc<dyn PreferenceStore>,
    panel: Rc<dyn ResultsPanel>,
    indicator: Rc<dyn StatusIndicator>,
    verifier: Rc<dyn Verifier>,
    filter: ExtensionFilter,
    enabled: Cell<bool>,
    subscription: Cell<Option<SubscriptionId>>,
    table: RefCell<ResultsTable>,
}

impl LintCoordinator {
    /// Attach a coordinator to a host
    ///
    /// Resolves the persisted enabled flag (writing the resolved value back
    /// so a fresh installation ends up with a stored preference), wires the
    /// event subscription accordingly, and runs once.
    pub fn attach(
        host: HostBindings,
        verifier: Rc<dyn Verifier>,
        settings: Settings,
    ) -> Result<Rc<Self>> {
        let filter = ExtensionFilter::new(&settings.extensions)?;
        let enabled = match host.prefs.get_value(PREF_ENABLED) {
            Some(Value::Bool(value)) => value,
            _ => settings.enabled,
        };

        let coordinator = Rc::new_cyclic(|weak| Self {
            weak_self: weak.clone(),
            documents: host.documents,
            editor: host.editor,
            events: host.events,
            prefs: host.prefs,
            panel: host.panel,
            indicator: host.indicator,
            verifier,
            filter,
            enabled: Cell::new(enabled),
            subscription: Cell::new(None),
            table: RefCell::new(ResultsTable::default()),
        });

        coordinator.update_listeners();
        coordinator
            .prefs
            .set_value(PREF_ENABLED, Value::Bool(enabled));
        coordinator.run();

        Ok(coordinator)
    }

    /// Current enabled state, no side effects
    pub fn enabled(&self) -> bool {
        self.enabled.get()
    }

    /// Enable or disable linting
    ///
    /// A no-op when the value is unchanged. Otherwise updates the state,
    /// re-registers or tears down the event subscription, persists the new
    /// value, and runs once.
    pub fn set_enabled(&self, enabled: bool) {
        if self.enabled.get() != enabled {
            self.apply_enabled(enabled);
        }
    }

    fn apply_enabled(&self, enabled: bool) {
        self.enabled.set(enabled);
        self.update_listeners();
        self.prefs.set_value(PREF_ENABLED, Value::Bool(enabled));
        self.run();
    }

    /// Register or tear down the event subscription to match the state
    ///
    /// Idempotent: an existing subscription is reused, so repeated toggles
    /// never accumulate duplicates.
    fn update_listeners(&self) {
        if self.enabled.get() {
            if self.subscription.get().is_none() {
                let weak = self.weak_self.clone();
                let id = self.events.subscribe(Rc::new(move |event: &DocumentEvent| {
                    if let Some(coordinator) = weak.upgrade() {
                        coordinator.handle_event(event);
                    }
                }));
                self.subscription.set(Some(id));
            }
        } else if let Some(id) = self.subscription.take() {
            self.events.unsubscribe(id);
        }
    }

    fn handle_event(&self, event: &DocumentEvent) {
        match event {
            DocumentEvent::ActiveDocumentChanged => self.run(),
            DocumentEvent::DocumentSaved { path } => {
                let is_active = self
                    .documents
                    .current_document()
                    .is_some_and(|doc| doc.file_path() == *path);
                if is_active {
                    self.run();
                }
            }
        }
    }

    /// Run the verifier over the active document and render the outcome
    ///
    /// Absence of a document and an unsupported extension are normal
    /// control flow: the panel hides and the all-clear indicator shows.
    /// Panel and indicator visibility are mutually exclusive. Always ends
    /// by requesting an editor resize.
    pub fn run(&self) {
        let document = self.documents.current_document();
        let extension = document
            .as_ref()
            .map(|doc| filename_extension(&doc.file_path()).to_string())
            .unwrap_or_default();

        let report = match &document {
            Some(doc) if self.enabled.get() && self.filter.matches(&extension) => {
                Some(self.verify_document(doc.as_ref(), &extension))
            }
            _ => None,
        };

        match report {
            Some(report) if !report.is_clean() => {
                log::debug!(
                    "lint pass: {} error(s), {} warning(s)",
                    report.error_count(),
                    report.warning_count()
                );
                let table = ResultsTable::from_report(&report);
                self.panel.render(table.rows());
                self.panel.set_selected(None);
                *self.table.borrow_mut() = table;
                self.panel.show();
                self.indicator.hide();
            }
            _ => {
                self.table.borrow_mut().clear();
                self.panel.set_selected(None);
                self.panel.hide();
                self.indicator.show();
            }
        }

        self.editor.request_resize();
    }

    fn verify_document(&self, document: &dyn Document, extension: &str) -> LintReport {
        let dialect = Dialect::from_extension(extension);
        let text = document.text();

        match self.verifier.verify(&text, dialect) {
            Ok(report) => report,
            Err(e) => {
                log::warn!("verifier failed on {}: {e}", document.file_path());
                LintReport::from_messages(vec![LintMessage {
                    line: 1,
                    col: 1,
                    message: format!("internal lint failure: {e}"),
                    severity: Severity::Error,
                }])
            }
        }
    }

    /// Select a table row and navigate the editor to its message
    ///
    /// Deselects any previously selected row, pushes the selection to the
    /// panel, moves the cursor to the message position (converted to the
    /// editor's 0-based convention), and focuses the editor. Returns false
    /// for an out-of-range index, with no side effects.
    pub fn select_row(&self, index: usize) -> bool {
        let target = {
            let mut table = self.table.borrow_mut();
            table.select(index).map(|row| (row.line, row.col))
        };

        let Some((line, col)) = target else {
            return false;
        };

        self.panel.set_selected(Some(index));
        self.editor.set_cursor(to_position(line, col));
        self.editor.focus();
        true
    }
}

impl Drop for LintCoordinator {
    fn drop(&mut self) {
        if let Some(id) = self.subscription.take() {
            self.events.unsubscribe(id);
        }
    }
}
