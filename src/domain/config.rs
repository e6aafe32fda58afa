//! Project descriptor loading (`.codews.toml`).
//!
//! The descriptor stands in for the host tool's database registry: it names
//! the database associated with a project and, for local databases, the paths
//! needed to generate the editor configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::{AppError, Database, LocalDatabase, RemoteDatabase, VirtualEnv};

/// Descriptor file name, at the project root.
pub const DESCRIPTOR_FILE: &str = ".codews.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseKind {
    #[default]
    Local,
    Remote,
}

#[derive(Debug, Deserialize)]
pub struct DatabaseSection {
    pub name: String,
    #[serde(default)]
    pub kind: DatabaseKind,
    pub version: Option<String>,
    pub worktree: Option<String>,
    pub venv: Option<PathBuf>,
    pub url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WorkbenchSection {
    pub worktrees: Option<PathBuf>,
}

/// Parsed contents of `.codews.toml`.
#[derive(Debug, Deserialize)]
pub struct ProjectDescriptor {
    pub database: DatabaseSection,
    #[serde(default)]
    pub workbench: WorkbenchSection,
}

impl ProjectDescriptor {
    /// Build the database reference, resolving relative paths against the
    /// project root. A local database must carry version, worktree and venv.
    pub fn database(&self, project_root: &Path) -> Result<Database, AppError> {
        let section = &self.database;
        match section.kind {
            DatabaseKind::Remote => Ok(Database::Remote(RemoteDatabase::new(
                section.name.clone(),
                section.url.clone(),
            ))),
            DatabaseKind::Local => {
                let version = section
                    .version
                    .clone()
                    .ok_or_else(|| missing_field(&section.name, "version"))?;
                let worktree = section
                    .worktree
                    .clone()
                    .ok_or_else(|| missing_field(&section.name, "worktree"))?;
                let venv = section
                    .venv
                    .clone()
                    .ok_or_else(|| missing_field(&section.name, "venv"))?;
                let venv_root = if venv.is_absolute() { venv } else { project_root.join(venv) };
                Ok(Database::Local(LocalDatabase::new(
                    section.name.clone(),
                    version,
                    worktree,
                    VirtualEnv::new(venv_root),
                )))
            }
        }
    }

    /// Worktrees-root override, if the descriptor carries one.
    pub fn worktrees_override(&self) -> Option<&Path> {
        self.workbench.worktrees.as_deref()
    }
}

fn missing_field(database: &str, field: &str) -> AppError {
    AppError::config_error(format!(
        "Database '{database}' is marked local but the descriptor has no '{field}'"
    ))
}

/// Parse descriptor content.
pub fn parse_descriptor(content: &str) -> Result<ProjectDescriptor, AppError> {
    Ok(toml::from_str(content)?)
}

/// Load the descriptor from the project root.
pub fn load(project_root: &Path) -> Result<ProjectDescriptor, AppError> {
    let path = project_root.join(DESCRIPTOR_FILE);
    if !path.exists() {
        return Err(AppError::DescriptorMissing(path));
    }
    let content = fs::read_to_string(&path)?;
    parse_descriptor(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOCAL_DESCRIPTOR: &str = r#"
[database]
name = "mydb"
version = "17.0"
worktree = "proj-src"
venv = ".venv"

[workbench]
worktrees = "/srv/worktrees"
"#;

    #[test]
    fn parses_local_descriptor() {
        let descriptor = parse_descriptor(LOCAL_DESCRIPTOR).unwrap();
        assert_eq!(descriptor.database.name, "mydb");
        assert_eq!(descriptor.database.kind, DatabaseKind::Local);
        assert_eq!(descriptor.worktrees_override(), Some(Path::new("/srv/worktrees")));
    }

    #[test]
    fn kind_defaults_to_local() {
        let descriptor = parse_descriptor("[database]\nname = \"mydb\"\n").unwrap();
        assert_eq!(descriptor.database.kind, DatabaseKind::Local);
    }

    #[test]
    fn relative_venv_resolves_against_project_root() {
        let descriptor = parse_descriptor(LOCAL_DESCRIPTOR).unwrap();
        let database = descriptor.database(Path::new("/tmp/proj")).unwrap();
        match database {
            Database::Local(db) => {
                assert_eq!(db.venv().root(), Path::new("/tmp/proj/.venv"));
                assert_eq!(db.worktree(), "proj-src");
            }
            Database::Remote(_) => panic!("expected a local database"),
        }
    }

    #[test]
    fn local_descriptor_without_venv_is_rejected() {
        let descriptor = parse_descriptor(
            "[database]\nname = \"mydb\"\nversion = \"17.0\"\nworktree = \"proj-src\"\n",
        )
        .unwrap();
        let err = descriptor.database(Path::new("/tmp/proj")).unwrap_err();
        assert!(err.to_string().contains("venv"));
    }

    #[test]
    fn remote_descriptor_needs_only_a_name() {
        let descriptor = parse_descriptor(
            "[database]\nname = \"staging\"\nkind = \"remote\"\nurl = \"https://staging.example.com\"\n",
        )
        .unwrap();
        let database = descriptor.database(Path::new("/tmp/proj")).unwrap();
        assert!(!database.is_local());
        assert_eq!(database.name(), "staging");
    }

    #[test]
    fn malformed_descriptor_is_a_parse_error() {
        let err = parse_descriptor("[database\nname = ").unwrap_err();
        assert!(matches!(err, AppError::TomlParse(_)));
    }
}
