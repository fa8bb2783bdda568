//! File system access: listing the notes tree and searching it

mod finder;
mod fs;

pub use finder::{DEFAULT_EXTENSION, NoteFinder};
pub use fs::{DiskTree, FsError, MAX_SEARCH_DEPTH, MemoryTree, NoteTree, create_note_file};
