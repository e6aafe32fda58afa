//! Generate the editor configuration files for a project.

use std::fs;
use std::path::PathBuf;

use minijinja::context;

use crate::app::AppContext;
use crate::domain::{AppError, Database, EditorWorkspace, LocalDatabase, Project};
use crate::ports::TemplateStore;
use crate::services::{Workbench, module_scan};

pub const WORKSPACE_TEMPLATE: &str = "code-workspace.jinja";
pub const LAUNCH_TEMPLATE: &str = "launch.jinja";
pub const TASKS_TEMPLATE: &str = "tasks.jinja";
pub const PATH_MAP_TEMPLATE: &str = "jsconfig.jinja";

/// Result of a configure invocation.
#[derive(Debug)]
pub enum ConfigureOutcome {
    /// All configuration files were generated.
    Configured {
        project: String,
        workspace: PathBuf,
        launch: PathBuf,
        tasks: PathBuf,
        path_map: PathBuf,
    },
    /// The database is not local; nothing was written.
    Skipped { project: String, database: String },
}

/// Render and write the editor configuration.
///
/// A non-local database is a no-op success (`Skipped`). The four files are
/// written in order and independently; a failure partway through leaves
/// earlier files in place.
pub fn execute<T: TemplateStore>(
    ctx: &AppContext<T>,
    project: &Project,
    database: &Database,
    workbench: &Workbench,
) -> Result<ConfigureOutcome, AppError> {
    let db = match database {
        Database::Local(db) => db,
        Database::Remote(remote) => {
            return Ok(ConfigureOutcome::Skipped {
                project: project.name().to_string(),
                database: remote.name().to_string(),
            });
        }
    };

    let workspace = EditorWorkspace::new(project.root());
    fs::create_dir_all(workspace.config_dir())?;

    let workspace_path = write_workspace(ctx, project, db, workbench, &workspace)?;
    let launch_path = write_launch(ctx, &workspace)?;
    let tasks_path = write_tasks(ctx, db, &workspace)?;
    let path_map_path = write_path_map(ctx, project, db, workbench, &workspace)?;

    Ok(ConfigureOutcome::Configured {
        project: project.name().to_string(),
        workspace: workspace_path,
        launch: launch_path,
        tasks: tasks_path,
        path_map: path_map_path,
    })
}

fn write_workspace<T: TemplateStore>(
    ctx: &AppContext<T>,
    project: &Project,
    db: &LocalDatabase,
    workbench: &Workbench,
    workspace: &EditorWorkspace,
) -> Result<PathBuf, AppError> {
    let source_path = workbench.source_path(db.worktree());
    let addon_names = module_scan::addon_names(project.root())?;

    let rendered = ctx.templates().render(
        WORKSPACE_TEMPLATE,
        context! {
            DB_NAME => db.name(),
            SOURCE_PATH => source_path.display().to_string(),
            VENV_PYTHON => db.venv().python().display().to_string(),
            TOOL_PYTHON => workbench.python().display().to_string(),
            TOOL_EXE => workbench.executable().display().to_string(),
            ADDON_NAMES => addon_names.join(","),
        },
    )?;

    let path = workspace.workspace_file(db.name());
    fs::write(&path, rendered)?;
    Ok(path)
}

fn write_launch<T: TemplateStore>(
    ctx: &AppContext<T>,
    workspace: &EditorWorkspace,
) -> Result<PathBuf, AppError> {
    let rendered = ctx.templates().render(LAUNCH_TEMPLATE, context! {})?;
    let path = workspace.launch_file();
    fs::write(&path, rendered)?;
    Ok(path)
}

fn write_tasks<T: TemplateStore>(
    ctx: &AppContext<T>,
    db: &LocalDatabase,
    workspace: &EditorWorkspace,
) -> Result<PathBuf, AppError> {
    let rendered =
        ctx.templates().render(TASKS_TEMPLATE, context! { DB_VERSION => db.version() })?;
    let path = workspace.tasks_file();
    fs::write(&path, rendered)?;
    Ok(path)
}

fn write_path_map<T: TemplateStore>(
    ctx: &AppContext<T>,
    project: &Project,
    db: &LocalDatabase,
    workbench: &Workbench,
    workspace: &EditorWorkspace,
) -> Result<PathBuf, AppError> {
    let source_path = workbench.source_path(db.worktree());
    let roots = module_scan::candidate_addon_roots(&source_path, project.root());
    let path_map = module_scan::scan_addon_modules(&roots, &source_path)?;

    let rendered = ctx.templates().render(
        PATH_MAP_TEMPLATE,
        context! {
            PATH_MAP => path_map.to_pretty_json()?,
            SOURCE_PATH => source_path.display().to_string(),
        },
    )?;

    let path = workspace.path_map_file();
    fs::write(&path, rendered)?;
    Ok(path)
}
