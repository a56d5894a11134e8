//! Editor control seam and coordinate conversion

/// A position in the editor's 0-based coordinate convention
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Line index (0-based)
    pub line: u32,
    /// Character index within the line (0-based)
    pub character: u32,
}

impl Position {
    /// Create a new position
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

/// Convert 1-based line/column (verifier convention) to a 0-based [`Position`]
pub fn to_position(line: usize, column: usize) -> Position {
    Position {
        line: (line.saturating_sub(1)) as u32,
        character: (column.saturating_sub(1)) as u32,
    }
}

/// Control surface of the host's current editor
pub trait EditorControl {
    /// Move the cursor to the given position
    fn set_cursor(&self, position: Position);

    /// Give the editor input focus
    fn focus(&self);

    /// Ask the host to re-layout the editor area
    ///
    /// Called after every run since showing or hiding the results panel
    /// changes the space available to the editor.
    fn request_resize(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_position() {
        assert_eq!(to_position(1, 1), Position::new(0, 0));
        assert_eq!(to_position(3, 5), Position::new(2, 4));
        assert_eq!(to_position(0, 0), Position::new(0, 0)); // Edge case
    }
}
