//! Results table model and host view seams

use crate::types::{LintMessage, LintReport, Severity};

/// One row of the results table: line, column, message text, severity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// Line number (1-based), as reported
    pub line: usize,
    /// Column number (1-based), as reported
    pub col: usize,
    /// Message text
    pub message: String,
    /// Severity cell
    pub severity: Severity,
}

impl From<&LintMessage> for TableRow {
    fn from(message: &LintMessage) -> Self {
        Self {
            line: message.line,
            col: message.col,
            message: message.message.clone(),
            severity: message.severity,
        }
    }
}

/// Ordered table of lint results with a single-selection model
///
/// At most one row is selected; selecting a row deselects the previous one.
#[derive(Debug, Default)]
pub struct ResultsTable {
    rows: Vec<TableRow>,
    selected: Option<usize>,
}

impl ResultsTable {
    /// Build a table from a report, one row per message, order preserved
    pub fn from_report(report: &LintReport) -> Self {
        Self {
            rows: report.messages.iter().map(TableRow::from).collect(),
            selected: None,
        }
    }

    /// The table rows in display order
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Index of the selected row, if any
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Select a row by index, replacing any previous selection
    ///
    /// Returns the selected row, or `None` (selection unchanged) when the
    /// index is out of range.
    pub fn select(&mut self, index: usize) -> Option<&TableRow> {
        if index >= self.rows.len() {
            return None;
        }
        self.selected = Some(index);
        self.rows.get(index)
    }

    /// Drop all rows and the selection
    pub fn clear(&mut self) {
        self.rows.clear();
        self.selected = None;
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Host view rendering the results table
pub trait ResultsPanel {
    /// Replace the table contents with the given rows
    fn render(&self, rows: &[TableRow]);

    /// Make the panel visible
    fn show(&self);

    /// Hide the panel
    fn hide(&self);

    /// Reflect the selection state in the view
    fn set_selected(&self, index: Option<usize>);
}

/// Host view for the "all clear" state, shown when the panel is hidden
pub trait StatusIndicator {
    /// Make the indicator visible
    fn show(&self);

    /// Hide the indicator
    fn hide(&self);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn report() -> LintReport {
        LintReport::from_messages(vec![
            LintMessage {
                line: 3,
                col: 5,
                message: "bad token".to_string(),
                severity: Severity::Error,
            },
            LintMessage {
                line: 8,
                col: 1,
                message: "duplicate property".to_string(),
                severity: Severity::Warning,
            },
        ])
    }

    #[test]
    fn test_table_from_report() {
        let table = ResultsTable::from_report(&report());

        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.rows()[0].line, 3);
        assert_eq!(table.rows()[0].col, 5);
        assert_eq!(table.rows()[0].message, "bad token");
        assert_eq!(table.rows()[0].severity, Severity::Error);
        assert_eq!(table.selected(), None);
    }

    #[test]
    fn test_select_replaces_previous_selection() {
        let mut table = ResultsTable::from_report(&report());

        let row = table.select(0).cloned();
        assert_eq!(row.map(|r| r.line), Some(3));
        assert_eq!(table.selected(), Some(0));

        table.select(1);
        assert_eq!(table.selected(), Some(1));
    }

    #[test]
    fn test_select_out_of_range_leaves_selection() {
        let mut table = ResultsTable::from_report(&report());
        table.select(1);

        assert!(table.select(7).is_none());
        assert_eq!(table.selected(), Some(1));
    }

    #[test]
    fn test_clear() {
        let mut table = ResultsTable::from_report(&report());
        table.select(0);
        table.clear();

        assert!(table.is_empty());
        assert_eq!(table.selected(), None);
    }

    #[test]
    fn test_empty_table_select() {
        let mut table = ResultsTable::default();
        assert!(table.select(0).is_none());
        assert_eq!(table.selected(), None);
    }
}
