use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::git::catalog::METADATA_DIR;

/// What `git init` writes into `description`; never reported as real content.
pub const DEFAULT_GIT_DESCRIPTION: &str =
    "Unnamed repository; edit this file 'description' to name the repository.\n";

pub fn get_repo_description(base_path: &Path, repo_key: &str) -> Result<Option<String>> {
    let repo_dir = base_path.join(repo_key);
    let candidates = [
        repo_dir.join("description"),
        repo_dir.join(METADATA_DIR).join("description"),
    ];

    let Some(path) = candidates.iter().find(|p| p.is_file()) else {
        return Ok(None);
    };

    let bytes = fs::read(path)?;
    let description = String::from_utf8_lossy(&bytes).to_string();
    if description == DEFAULT_GIT_DESCRIPTION {
        return Ok(None);
    }
    Ok(Some(description))
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::Repository;
    use tempfile::TempDir;

    #[test]
    fn test_placeholder_suppressed() {
        let base = TempDir::new().unwrap();
        let repo_dir = base.path().join("mirror.git");
        Repository::init_bare(&repo_dir).unwrap();
        fs::write(repo_dir.join("description"), DEFAULT_GIT_DESCRIPTION).unwrap();

        assert_eq!(get_repo_description(base.path(), "mirror.git").unwrap(), None);
    }

    #[test]
    fn test_literal_text_returned() {
        let base = TempDir::new().unwrap();
        let repo_dir = base.path().join("mirror.git");
        Repository::init_bare(&repo_dir).unwrap();
        // Near-miss of the placeholder is still real content
        let text = DEFAULT_GIT_DESCRIPTION.trim_end();
        fs::write(repo_dir.join("description"), text).unwrap();

        assert_eq!(
            get_repo_description(base.path(), "mirror.git").unwrap().as_deref(),
            Some(text)
        );
    }

    #[test]
    fn test_working_copy_metadata_dir() {
        let base = TempDir::new().unwrap();
        let repo_dir = base.path().join("checkout");
        Repository::init(&repo_dir).unwrap();
        fs::write(repo_dir.join(".git").join("description"), "Checked out\n").unwrap();

        assert_eq!(
            get_repo_description(base.path(), "checkout").unwrap().as_deref(),
            Some("Checked out\n")
        );
    }

    #[test]
    fn test_top_level_file_wins() {
        let base = TempDir::new().unwrap();
        let repo_dir = base.path().join("checkout");
        Repository::init(&repo_dir).unwrap();
        fs::write(repo_dir.join("description"), "top\n").unwrap();
        fs::write(repo_dir.join(".git").join("description"), "nested\n").unwrap();

        assert_eq!(
            get_repo_description(base.path(), "checkout").unwrap().as_deref(),
            Some("top\n")
        );
    }

    #[test]
    fn test_missing_file() {
        let base = TempDir::new().unwrap();
        fs::create_dir(base.path().join("empty.git")).unwrap();

        assert_eq!(get_repo_description(base.path(), "empty.git").unwrap(), None);
    }
}
