//! Import alias map for the editor's language intelligence.
//!
//! Aliases map a module name to a one-element list of paths relative to the
//! project source root. The map is seeded with the framework's shipped type
//! packages; discovered modules overwrite a seed entry on name collision.

use std::collections::BTreeMap;

use crate::domain::AppError;

/// Shipped framework type packages, relative to the source root.
pub const TYPE_PACKAGE_ALIASES: &[(&str, &str)] = &[
    ("@platform/ui", "core/addons/web/static/lib/ui/ui.d.ts"),
    ("@platform/testkit", "core/addons/web/static/lib/testkit/testkit.d.ts"),
];

/// Ordered mapping from import alias to a one-element path list.
#[derive(Debug, Clone, Default)]
pub struct PathMap {
    entries: BTreeMap<String, Vec<String>>,
}

impl PathMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// A map pre-seeded with the shipped type-package aliases.
    pub fn with_type_packages() -> Self {
        let mut map = Self::new();
        for (alias, path) in TYPE_PACKAGE_ALIASES {
            map.insert(alias, path);
        }
        map
    }

    /// Insert an alias, replacing any previous entry with the same key.
    pub fn insert(&mut self, alias: &str, path: &str) {
        self.entries.insert(alias.to_string(), vec![path.to_string()]);
    }

    /// Insert a discovered addon module by name.
    ///
    /// `relative_path` is the module's `static/src` folder relative to the
    /// source root.
    pub fn insert_module(&mut self, name: &str, relative_path: &str) {
        self.insert(&format!("@{name}/*"), &format!("{relative_path}/*"));
    }

    pub fn contains(&self, alias: &str) -> bool {
        self.entries.contains_key(alias)
    }

    pub fn get(&self, alias: &str) -> Option<&[String]> {
        self.entries.get(alias).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pretty-printed JSON object, keys in sorted order.
    pub fn to_pretty_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }
}
