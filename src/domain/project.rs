use std::path::{Path, PathBuf};

/// A project directory with a display name used for reporting.
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
    name: String,
}

impl Project {
    pub fn new(root: PathBuf, name: String) -> Self {
        Self { root, name }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
