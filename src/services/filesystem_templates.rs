//! Template store backed by a directory on disk.
//!
//! Used when the caller overrides the embedded template set, e.g. to test
//! template changes without rebuilding the binary.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use minijinja::{Environment, Value};

use crate::domain::AppError;
use crate::ports::TemplateStore;
use crate::services::template_env;

pub struct FilesystemTemplateStore {
    env: Environment<'static>,
    sources: HashMap<String, String>,
}

impl FilesystemTemplateStore {
    /// Load every `*.jinja` file in `dir` as a template.
    pub fn new(dir: &Path) -> Result<Self, AppError> {
        let mut sources = HashMap::new();

        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() || !path.extension().is_some_and(|ext| ext == "jinja") {
                continue;
            }
            let name = entry.file_name().to_string_lossy().to_string();
            sources.insert(name, fs::read_to_string(&path)?);
        }

        Ok(Self { env: template_env::new_environment(), sources })
    }
}

impl TemplateStore for FilesystemTemplateStore {
    fn render(&self, name: &str, ctx: Value) -> Result<String, AppError> {
        let source = self.sources.get(name).ok_or_else(|| AppError::Template {
            name: name.to_string(),
            details: "failed to load: template not found".to_string(),
        })?;

        self.env.render_str(source, &ctx).map_err(|e| AppError::Template {
            name: name.to_string(),
            details: format!("failed to render: {e}"),
        })
    }
}
