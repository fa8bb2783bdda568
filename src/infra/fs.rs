//! Listing and creating note files.

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// How many directory levels below the notes root are searched.
pub const MAX_SEARCH_DEPTH: usize = 5;

/// Errors during file system operations on notes.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("notes directory not found: {path}")]
    NotFound { path: PathBuf },

    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("failed to walk {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FsError {
    /// Creates an appropriate FsError from an io::Error.
    fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => FsError::NotFound { path: path.into() },
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied { path: path.into() },
            _ => FsError::Io {
                path: path.into(),
                source: error,
            },
        }
    }
}

/// A tree of files the note search can list.
///
/// Implemented for the real disk by [`DiskTree`] and in memory by
/// [`MemoryTree`].
pub trait NoteTree {
    /// Lists the files (never directories) under `root`, at most `max_depth`
    /// levels deep. Files directly inside `root` are at depth 1.
    ///
    /// Returned paths start with `root`.
    fn list_files(&self, root: &Path, max_depth: usize) -> Result<Vec<PathBuf>, FsError>;
}

impl<T: NoteTree + ?Sized> NoteTree for &T {
    fn list_files(&self, root: &Path, max_depth: usize) -> Result<Vec<PathBuf>, FsError> {
        (**self).list_files(root, max_depth)
    }
}

/// Lists files from the file system with `walkdir`.
///
/// Symlinked directories are not followed. A symlink to a file counts as a
/// file. Any unreadable entry fails the whole listing.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskTree;

impl NoteTree for DiskTree {
    fn list_files(&self, root: &Path, max_depth: usize) -> Result<Vec<PathBuf>, FsError> {
        if !root.exists() {
            return Err(FsError::NotFound {
                path: root.to_path_buf(),
            });
        }
        if !root.is_dir() {
            return Err(FsError::NotADirectory {
                path: root.to_path_buf(),
            });
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(root).min_depth(1).max_depth(max_depth) {
            let entry = entry.map_err(|e| FsError::Walk {
                path: root.to_path_buf(),
                source: e,
            })?;
            if entry.file_type().is_file()
                || (entry.path_is_symlink() && entry.path().is_file())
            {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }
}

/// An in-memory file tree, for tests and benchmarks.
#[derive(Debug, Clone, Default)]
pub struct MemoryTree {
    files: Vec<PathBuf>,
    failing: bool,
}

impl MemoryTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// A tree whose listing always fails, like an unreadable directory.
    pub fn failing() -> Self {
        Self {
            files: Vec::new(),
            failing: true,
        }
    }

    /// Adds a file. Parent directories are implied by the path.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.push(path.into());
        self
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>) {
        self.files.push(path.into());
    }
}

impl NoteTree for MemoryTree {
    fn list_files(&self, root: &Path, max_depth: usize) -> Result<Vec<PathBuf>, FsError> {
        if self.failing {
            return Err(FsError::PermissionDenied {
                path: root.to_path_buf(),
            });
        }

        Ok(self
            .files
            .iter()
            .filter(|path| {
                path.strip_prefix(root).is_ok_and(|rel| {
                    let depth = rel.components().count();
                    depth >= 1 && depth <= max_depth
                })
            })
            .cloned()
            .collect())
    }
}

/// Creates an empty note file, creating missing parent directories.
///
/// An existing file is left untouched. Returns true when a file was created.
pub fn create_note_file(path: &Path) -> Result<bool, FsError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| FsError::from_io(parent, e))?;
    }

    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(FsError::from_io(path, e)),
    }
}
