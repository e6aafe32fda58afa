//! Path layout of the generated editor configuration.

use std::path::{Path, PathBuf};

/// The editor configuration directory under the project root.
pub const VSCODE_DIR: &str = ".vscode";

/// The debug-launch file name.
pub const LAUNCH_FILE: &str = "launch.json";

/// The task-runner file name.
pub const TASKS_FILE: &str = "tasks.json";

/// The import path-map file name, written at the project root.
pub const PATH_MAP_FILE: &str = "jsconfig.json";

/// Resolves the fixed locations of generated files for one project.
#[derive(Debug, Clone)]
pub struct EditorWorkspace {
    root: PathBuf,
}

impl EditorWorkspace {
    pub fn new(root: &Path) -> Self {
        Self { root: root.to_path_buf() }
    }

    /// Path to the `.vscode/` directory.
    pub fn config_dir(&self) -> PathBuf {
        self.root.join(VSCODE_DIR)
    }

    /// Path to the workspace file for the named database.
    pub fn workspace_file(&self, database_name: &str) -> PathBuf {
        self.config_dir().join(format!("{database_name}.code-workspace"))
    }

    /// Path to the launch file.
    pub fn launch_file(&self) -> PathBuf {
        self.config_dir().join(LAUNCH_FILE)
    }

    /// Path to the tasks file.
    pub fn tasks_file(&self) -> PathBuf {
        self.config_dir().join(TASKS_FILE)
    }

    /// Path to the import path-map file.
    pub fn path_map_file(&self) -> PathBuf {
        self.root.join(PATH_MAP_FILE)
    }
}
