//! Resolution of the host tool's own paths.

use std::env;
use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Environment override for the worktrees root directory.
pub const WORKTREES_ENV: &str = "CODEWS_WORKTREES";

#[cfg(unix)]
const PYTHON_CANDIDATES: &[&str] = &["python3", "python"];
#[cfg(windows)]
const PYTHON_CANDIDATES: &[&str] = &["python.exe", "python3.exe"];

/// The workbench's resolved paths: its executable, the worktrees root and a
/// development Python interpreter.
#[derive(Debug, Clone)]
pub struct Workbench {
    executable: PathBuf,
    worktrees_path: PathBuf,
    python: PathBuf,
}

impl Workbench {
    /// Resolve workbench paths from the current process environment.
    ///
    /// The worktrees root comes from `worktrees_override` when given, then
    /// the `CODEWS_WORKTREES` variable, then a default under `$HOME`.
    pub fn resolve(worktrees_override: Option<&Path>) -> Result<Self, AppError> {
        let executable = env::current_exe()?;
        let worktrees_path = match worktrees_override {
            Some(path) => path.to_path_buf(),
            None => match env::var_os(WORKTREES_ENV) {
                Some(value) => PathBuf::from(value),
                None => default_worktrees_path()?,
            },
        };

        Ok(Self { executable, worktrees_path, python: discover_python() })
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    pub fn worktrees_path(&self) -> &Path {
        &self.worktrees_path
    }

    /// Development interpreter used for tooling outside any database venv.
    pub fn python(&self) -> &Path {
        &self.python
    }

    /// The source tree for a database's worktree identifier.
    pub fn source_path(&self, worktree: &str) -> PathBuf {
        self.worktrees_path.join(worktree)
    }
}

fn default_worktrees_path() -> Result<PathBuf, AppError> {
    let home = env::var_os("HOME").ok_or_else(|| {
        AppError::config_error("HOME is not set; cannot locate the worktrees directory")
    })?;
    Ok(PathBuf::from(home).join(".local/share/codews/worktrees"))
}

/// Locate an interpreter: the active virtualenv first, then `PATH`.
fn discover_python() -> PathBuf {
    if let Some(venv) = env::var_os("VIRTUAL_ENV") {
        let root = PathBuf::from(venv);
        #[cfg(unix)]
        let candidate = root.join("bin").join("python");
        #[cfg(windows)]
        let candidate = root.join("Scripts").join("python.exe");
        if candidate.is_file() {
            return candidate;
        }
    }

    if let Some(paths) = env::var_os("PATH") {
        for dir in env::split_paths(&paths) {
            for name in PYTHON_CANDIDATES {
                let candidate = dir.join(name);
                if candidate.is_file() {
                    return candidate;
                }
            }
        }
    }

    PathBuf::from(PYTHON_CANDIDATES[0])
}
