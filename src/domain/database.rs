//! Database references a project can be associated with.
//!
//! Only local databases carry a filesystem presence (worktree, virtual
//! environment); remote databases expose their identity and nothing else.

use std::path::{Path, PathBuf};

/// A Python virtual environment rooted at a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualEnv {
    root: PathBuf,
}

impl VirtualEnv {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path to the interpreter inside the virtual environment.
    pub fn python(&self) -> PathBuf {
        #[cfg(unix)]
        return self.root.join("bin").join("python");
        #[cfg(windows)]
        return self.root.join("Scripts").join("python.exe");
    }
}

/// A database with a filesystem workspace on the current machine.
#[derive(Debug, Clone)]
pub struct LocalDatabase {
    name: String,
    version: String,
    worktree: String,
    venv: VirtualEnv,
}

impl LocalDatabase {
    pub fn new(name: String, version: String, worktree: String, venv: VirtualEnv) -> Self {
        Self { name, version, worktree, venv }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Identifier of the source worktree under the workbench worktrees root.
    pub fn worktree(&self) -> &str {
        &self.worktree
    }

    pub fn venv(&self) -> &VirtualEnv {
        &self.venv
    }
}

/// A database hosted elsewhere; no local filesystem presence.
#[derive(Debug, Clone)]
pub struct RemoteDatabase {
    name: String,
    url: Option<String>,
}

impl RemoteDatabase {
    pub fn new(name: String, url: Option<String>) -> Self {
        Self { name, url }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

/// A project's associated database.
#[derive(Debug, Clone)]
pub enum Database {
    Local(LocalDatabase),
    Remote(RemoteDatabase),
}

impl Database {
    pub fn name(&self) -> &str {
        match self {
            Database::Local(db) => db.name(),
            Database::Remote(db) => db.name(),
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self, Database::Local(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local() -> Database {
        Database::Local(LocalDatabase::new(
            "mydb".to_string(),
            "17.0".to_string(),
            "proj-src".to_string(),
            VirtualEnv::new(PathBuf::from("/tmp/proj/.venv")),
        ))
    }

    #[test]
    #[cfg(unix)]
    fn venv_python_lives_under_bin() {
        let venv = VirtualEnv::new(PathBuf::from("/tmp/proj/.venv"));
        assert_eq!(venv.python(), PathBuf::from("/tmp/proj/.venv/bin/python"));
    }

    #[test]
    fn local_database_exposes_identity() {
        let db = local();
        assert_eq!(db.name(), "mydb");
        assert!(db.is_local());
    }

    #[test]
    fn remote_database_is_not_local() {
        let db = Database::Remote(RemoteDatabase::new("staging".to_string(), None));
        assert_eq!(db.name(), "staging");
        assert!(!db.is_local());
    }
}
