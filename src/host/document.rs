//! Document access seam

use std::rc::Rc;

/// One open document in the host editor
pub trait Document {
    /// Full text of the document snapshot
    fn text(&self) -> String;

    /// Full path of the backing file
    fn file_path(&self) -> String;
}

/// Source of the currently active document
pub trait DocumentSource {
    /// The active document, if any
    fn current_document(&self) -> Option<Rc<dyn Document>>;
}
