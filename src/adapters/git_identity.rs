//! Project display name from version control.

use std::path::Path;

use git2::Repository;

/// Display name for the project rooted at `root`.
///
/// Prefers the `origin` remote's repository name, then the repository workdir
/// directory name, then the root directory name itself. Lookup failures fall
/// through to the next source; a name is always produced.
pub fn project_name(root: &Path) -> String {
    if let Ok(repo) = Repository::discover(root) {
        if let Ok(remote) = repo.find_remote("origin")
            && let Some(name) = remote.url().and_then(remote_basename)
        {
            return name;
        }
        if let Some(name) =
            repo.workdir().and_then(|workdir| workdir.file_name()).and_then(|n| n.to_str())
        {
            return name.to_string();
        }
    }

    root.file_name().and_then(|n| n.to_str()).unwrap_or("project").to_string()
}

/// Extract the repository name from a remote URL.
///
/// Supports SSH (`git@host:owner/repo.git`) and HTTPS
/// (`https://host/owner/repo.git`) forms.
fn remote_basename(url: &str) -> Option<String> {
    let trimmed = url.trim_end_matches('/').trim_end_matches(".git");
    let tail = trimmed.rsplit(['/', ':']).next()?;
    if tail.is_empty() { None } else { Some(tail.to_string()) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn remote_basename_ssh() {
        assert_eq!(remote_basename("git@github.com:owner/repo.git"), Some("repo".to_string()));
    }

    #[test]
    fn remote_basename_https() {
        assert_eq!(remote_basename("https://github.com/owner/repo.git"), Some("repo".to_string()));
    }

    #[test]
    fn remote_basename_trailing_slash() {
        assert_eq!(remote_basename("https://github.com/owner/repo/"), Some("repo".to_string()));
    }

    #[test]
    fn project_name_falls_back_to_directory_name() {
        let dir = TempDir::new().unwrap();
        let project = dir.path().join("billing-project");
        std::fs::create_dir_all(&project).unwrap();
        assert_eq!(project_name(&project), "billing-project");
    }
}
