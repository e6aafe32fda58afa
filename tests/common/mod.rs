//! Shared testing utilities for codews CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated project, worktrees root and venv.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    project_dir: PathBuf,
    worktrees_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("failed to create temp directory for tests");
        let project_dir = root.path().join("proj");
        let worktrees_dir = root.path().join("worktrees");
        fs::create_dir_all(&project_dir).expect("failed to create test project directory");
        fs::create_dir_all(&worktrees_dir).expect("failed to create test worktrees directory");

        Self { root, project_dir, worktrees_dir }
    }

    /// Path to the project directory used for CLI invocations.
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Path to the worktrees root referenced by the descriptor.
    pub fn worktrees_dir(&self) -> &Path {
        &self.worktrees_dir
    }

    /// Path to a source tree under the worktrees root.
    pub fn source_dir(&self, worktree: &str) -> PathBuf {
        self.worktrees_dir.join(worktree)
    }

    /// Write a descriptor for a local database and create its source tree
    /// and virtual environment.
    pub fn write_local_descriptor(&self, name: &str, version: &str, worktree: &str) {
        fs::create_dir_all(self.source_dir(worktree)).unwrap();
        fs::create_dir_all(self.project_dir.join(".venv/bin")).unwrap();
        fs::write(self.project_dir.join(".venv/bin/python"), "").unwrap();

        let content = format!(
            r#"[database]
name = "{name}"
version = "{version}"
worktree = "{worktree}"
venv = ".venv"

[workbench]
worktrees = "{worktrees}"
"#,
            worktrees = self.worktrees_dir.display(),
        );
        fs::write(self.project_dir.join(".codews.toml"), content).unwrap();
    }

    /// Write a descriptor for a remote database.
    pub fn write_remote_descriptor(&self, name: &str) {
        let content = format!(
            r#"[database]
name = "{name}"
kind = "remote"
url = "https://{name}.example.com"
"#
        );
        fs::write(self.project_dir.join(".codews.toml"), content).unwrap();
    }

    /// Create an addon module directory, optionally with a `static/src` folder.
    pub fn make_addon(&self, root: &Path, name: &str, with_assets: bool) {
        let module = root.join(name);
        if with_assets {
            fs::create_dir_all(module.join("static/src")).unwrap();
        } else {
            fs::create_dir_all(&module).unwrap();
        }
    }

    /// Build a command for invoking the compiled `codews` binary in the project.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("codews").expect("failed to locate codews binary");
        cmd.current_dir(&self.project_dir).env("HOME", self.root.path());
        cmd
    }

    /// Read a generated file relative to the project directory.
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.project_dir.join(relative))
            .unwrap_or_else(|_| panic!("failed to read {relative}"))
    }

    /// Check whether a path relative to the project directory exists.
    pub fn exists(&self, relative: &str) -> bool {
        self.project_dir.join(relative).exists()
    }
}
