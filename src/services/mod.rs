mod embedded_templates;
mod filesystem_templates;
pub mod module_scan;
mod template_env;
mod workbench;

pub use embedded_templates::EmbeddedTemplateStore;
pub use filesystem_templates::FilesystemTemplateStore;
pub use workbench::{WORKTREES_ENV, Workbench};
