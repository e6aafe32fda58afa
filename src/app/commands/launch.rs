//! Editor launch command for a configured project.

use crate::domain::{AppError, Database, EditorWorkspace, Project};

/// Editor executable used to open generated workspaces.
pub const EDITOR_EXECUTABLE: &str = "code";

/// Shell command that opens the project's workspace in the editor.
///
/// Only a local database has a workspace file to open; requesting the command
/// for a remote database is an error.
pub fn launch_command(project: &Project, database: &Database) -> Result<String, AppError> {
    match database {
        Database::Local(db) => {
            let workspace = EditorWorkspace::new(project.root());
            Ok(format!("{} {}", EDITOR_EXECUTABLE, workspace.workspace_file(db.name()).display()))
        }
        Database::Remote(remote) => {
            Err(AppError::RemoteDatabase { name: remote.name().to_string() })
        }
    }
}
