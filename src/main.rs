use std::path::PathBuf;

use clap::{Parser, Subcommand};
use codews::{AppError, ConfigureOutcome};

#[derive(Parser)]
#[command(name = "codews")]
#[command(version)]
#[command(about = "Generate VS Code workspace configuration for local development databases", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render and write the editor configuration files for a project
    #[clap(visible_alias = "c")]
    Configure {
        /// Project directory (defaults to the current directory)
        path: Option<PathBuf>,
        /// Load templates from a directory instead of the embedded set
        #[arg(long)]
        templates_dir: Option<PathBuf>,
    },
    /// Print the command that opens the generated workspace
    Command {
        /// Project directory (defaults to the current directory)
        path: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Configure { path, templates_dir } => run_configure(path, templates_dir),
        Commands::Command { path } => run_command(path),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn project_root(path: Option<PathBuf>) -> Result<PathBuf, AppError> {
    match path {
        Some(path) => Ok(path),
        None => Ok(std::env::current_dir()?),
    }
}

fn run_configure(path: Option<PathBuf>, templates_dir: Option<PathBuf>) -> Result<(), AppError> {
    let root = project_root(path)?;

    match codews::configure(&root, templates_dir.as_deref())? {
        ConfigureOutcome::Configured { project, workspace, launch, tasks, path_map } => {
            println!("✅ Created VS Code config for project '{}'", project);
            println!("  • Workspace: {}", workspace.display());
            println!("  • Launch: {}", launch.display());
            println!("  • Tasks: {}", tasks.display());
            println!("ℹ️ Import path map: {}", path_map.display());
        }
        ConfigureOutcome::Skipped { project, database } => {
            println!(
                "⚠️ Database '{}' is not local for project '{}', skipping VS Code configuration",
                database, project
            );
        }
    }

    Ok(())
}

fn run_command(path: Option<PathBuf>) -> Result<(), AppError> {
    let root = project_root(path)?;
    println!("{}", codews::launch_command(&root)?);
    Ok(())
}
