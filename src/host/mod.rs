//! Trait seams for the host editor's subsystems
//!
//! The coordinator never talks to a concrete editor. Embedders implement
//! these traits over their document, editor, preference, and event
//! subsystems; the crate ships small reference implementations where tests
//! and embedders commonly need one ([`EventHub`], [`MemoryStore`],
//! [`JsonFileStore`]).

mod document;
mod editor;
mod events;
mod prefs;

pub use document::*;
pub use editor::*;
pub use events::*;
pub use prefs::*;
