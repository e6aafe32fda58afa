//! Addon module discovery.
//!
//! Two scans feed the generated configuration: the import path map for the
//! editor's language intelligence, and the flat addon-name list substituted
//! into the workspace file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, PathMap};

/// Directories under the project root that are never addon modules.
const EXCLUDED_MODULE_DIRECTORIES: &[&str] = &["scripts", "tooling"];

/// The asset folder marking a directory as a frontend-bearing addon.
fn asset_dir(module: &Path) -> PathBuf {
    module.join("static").join("src")
}

/// Candidate roots searched for addon modules, in overwrite order.
pub fn candidate_addon_roots(source_root: &Path, project_root: &Path) -> Vec<PathBuf> {
    vec![
        source_root.join("addons"),
        source_root.join("core").join("addons"),
        source_root.join("enterprise"),
        project_root.to_path_buf(),
    ]
}

/// Build the import path map for the given candidate roots.
///
/// Seeds the shipped type-package aliases, then records every immediate
/// subdirectory holding a `static/src` folder as `@<name>/*`. Paths are
/// relative to `source_root`; a module outside it keeps its absolute path.
pub fn scan_addon_modules(roots: &[PathBuf], source_root: &Path) -> Result<PathMap, AppError> {
    let mut map = PathMap::with_type_packages();

    for root in roots {
        if !root.is_dir() {
            continue;
        }
        for entry in fs::read_dir(root)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            let assets = asset_dir(&path);
            if !assets.is_dir() {
                continue;
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            map.insert_module(name, &relative_to(&assets, source_root));
        }
    }

    Ok(map)
}

/// Names of the project's own addon directories, sorted.
///
/// Skips hidden directories and the fixed non-module set.
pub fn addon_names(project_root: &Path) -> Result<Vec<String>, AppError> {
    let mut names = Vec::new();

    for entry in fs::read_dir(project_root)? {
        let entry = entry?;
        if !entry.path().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if name.starts_with('.') || EXCLUDED_MODULE_DIRECTORIES.contains(&name.as_str()) {
            continue;
        }
        names.push(name);
    }

    names.sort();
    Ok(names)
}

fn relative_to(path: &Path, root: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) => rel.display().to_string(),
        Err(_) => path.display().to_string(),
    }
}
