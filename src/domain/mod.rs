pub mod config;
pub mod database;
pub mod error;
pub mod pathmap;
pub mod project;
pub mod workspace;

pub use config::{DESCRIPTOR_FILE, ProjectDescriptor};
pub use database::{Database, LocalDatabase, RemoteDatabase, VirtualEnv};
pub use error::AppError;
pub use pathmap::PathMap;
pub use project::Project;
pub use workspace::EditorWorkspace;
