//! Template store backed by assets embedded in the binary.

use include_dir::{Dir, include_dir};
use minijinja::{Environment, Value};

use crate::domain::AppError;
use crate::ports::TemplateStore;
use crate::services::template_env;

static TEMPLATE_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/templates");

pub struct EmbeddedTemplateStore {
    env: Environment<'static>,
}

impl EmbeddedTemplateStore {
    pub fn new() -> Result<Self, AppError> {
        let mut env = template_env::new_environment();

        for file in TEMPLATE_DIR.files() {
            if !file.path().extension().is_some_and(|ext| ext == "jinja") {
                continue;
            }
            let name = file.path().to_str().ok_or_else(|| {
                AppError::config_error("Embedded template has a non-UTF-8 name")
            })?;
            let source = file.contents_utf8().ok_or_else(|| {
                AppError::config_error(format!("Embedded template '{name}' is not UTF-8"))
            })?;
            env.add_template(name, source)
                .map_err(|e| template_env::register_error(name, &e))?;
        }

        Ok(Self { env })
    }
}

impl TemplateStore for EmbeddedTemplateStore {
    fn render(&self, name: &str, ctx: Value) -> Result<String, AppError> {
        template_env::render_template(&self.env, name, &ctx)
    }
}
