use minijinja::{Environment, Value};

use crate::domain::AppError;

pub(crate) fn new_environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env
}

pub(crate) fn register_error(name: &str, err: &minijinja::Error) -> AppError {
    AppError::Template { name: name.to_string(), details: format!("failed to register: {err}") }
}

pub(crate) fn render_template(
    env: &Environment<'_>,
    name: &str,
    ctx: &Value,
) -> Result<String, AppError> {
    let template = env.get_template(name).map_err(|e| AppError::Template {
        name: name.to_string(),
        details: format!("failed to load: {e}"),
    })?;

    template.render(ctx).map_err(|e| AppError::Template {
        name: name.to_string(),
        details: format!("failed to render: {e}"),
    })
}
