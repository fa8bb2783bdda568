//! Isolated test environment with temp directory.

use super::NotesCommand;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary notes directory.
///
/// Creates a temp directory that is automatically cleaned up on drop.
/// The home and config directories of spawned commands point inside it,
/// so a user's own config file never leaks into a test.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Path to the notes directory
    notes_dir: PathBuf,
    /// Path used as `HOME` and `XDG_CONFIG_HOME` for commands
    home_dir: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment with an empty notes directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let notes_dir = temp_dir.path().join("notes");
        let home_dir = temp_dir.path().join("home");
        std::fs::create_dir_all(&notes_dir).expect("Failed to create notes directory");
        std::fs::create_dir_all(&home_dir).expect("Failed to create home directory");
        Self {
            _temp_dir: temp_dir,
            notes_dir,
            home_dir,
        }
    }

    /// Returns the path to the notes directory.
    pub fn notes_dir(&self) -> &Path {
        &self.notes_dir
    }

    /// Returns the isolated home directory.
    pub fn home_dir(&self) -> &Path {
        &self.home_dir
    }

    /// Adds an empty note at a path relative to the notes directory.
    ///
    /// Missing parent directories are created. Returns the full path.
    pub fn add_note(&self, relative: &str) -> PathBuf {
        self.write_file(relative, "")
    }

    /// Writes a file relative to the notes directory and returns its path.
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.notes_dir.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Writes a config file outside the notes directory and returns its path.
    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.home_dir.join("config.toml");
        std::fs::write(&path, content).expect("Failed to write config");
        path
    }

    /// Creates a NotesCommand configured for this test environment.
    pub fn cmd(&self) -> NotesCommand {
        NotesCommand::new()
            .home(&self.home_dir)
            .dir(&self.notes_dir)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_creates_notes_directory() {
        let env = TestEnv::new();
        assert!(env.notes_dir().is_dir(), "notes directory should exist");
        assert!(env.home_dir().is_dir(), "home directory should exist");
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.notes_dir().to_path_buf()
        };
        assert!(
            !path.exists(),
            "temp directory should be cleaned up on drop"
        );
    }

    #[test]
    fn test_env_add_note_creates_nested_file() {
        let env = TestEnv::new();
        let path = env.add_note("work/todo.txt");

        assert!(path.is_file(), "note should be a file");
        assert!(path.starts_with(env.notes_dir()));
    }

    #[test]
    fn test_env_provides_command() {
        let env = TestEnv::new();
        let args = env.cmd().get_args().to_vec();
        assert_eq!(args[0], "--dir");
        assert_eq!(args[1], env.notes_dir().to_string_lossy());
    }
}
