use minijinja::Value;

use crate::domain::AppError;

/// Port for rendering named configuration templates.
pub trait TemplateStore {
    /// Render the named template with the given context.
    fn render(&self, name: &str, ctx: Value) -> Result<String, AppError>;
}
