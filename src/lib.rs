//! codews: Generate VS Code workspace configuration for local development databases.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;

use adapters::git_identity;
use app::AppContext;
use app::commands::{configure, launch};
use domain::{Database, Project, config};
use services::{EmbeddedTemplateStore, FilesystemTemplateStore, Workbench};

pub use app::commands::configure::ConfigureOutcome;
pub use domain::AppError;

fn load_project(root: &Path) -> Result<(Project, Database), AppError> {
    let descriptor = config::load(root)?;
    let project = Project::new(root.to_path_buf(), git_identity::project_name(root));
    let database = descriptor.database(root)?;
    Ok((project, database))
}

/// Generate VS Code configuration for the project at `root`.
///
/// Reads the project descriptor, resolves workbench paths and writes the
/// workspace, launch, tasks and import path-map files. A project bound to a
/// non-local database is skipped without error.
///
/// `templates_dir` overrides the embedded template set.
pub fn configure(root: &Path, templates_dir: Option<&Path>) -> Result<ConfigureOutcome, AppError> {
    let descriptor = config::load(root)?;
    let project = Project::new(root.to_path_buf(), git_identity::project_name(root));
    let database = descriptor.database(root)?;
    let workbench = Workbench::resolve(descriptor.worktrees_override())?;

    match templates_dir {
        Some(dir) => {
            let ctx = AppContext::new(FilesystemTemplateStore::new(dir)?);
            configure::execute(&ctx, &project, &database, &workbench)
        }
        None => {
            let ctx = AppContext::new(EmbeddedTemplateStore::new()?);
            configure::execute(&ctx, &project, &database, &workbench)
        }
    }
}

/// Shell command that opens the generated workspace in the editor.
///
/// Fails with [`AppError::RemoteDatabase`] when the project's database is not
/// local.
pub fn launch_command(root: &Path) -> Result<String, AppError> {
    let (project, database) = load_project(root)?;
    launch::launch_command(&project, &database)
}
