//! Repository discovery under the configured base directory.
//!
//! Only immediate children are considered. A child directory is a repository
//! when it is a bare mirror (`name.git`) or a working copy (contains `.git/`).

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::error::Result;

pub const BARE_SUFFIX: &str = ".git";
pub const METADATA_DIR: &str = ".git";

pub fn get_repo_names(base_path: &Path) -> Result<BTreeSet<String>> {
    let mut names = BTreeSet::new();

    for entry in fs::read_dir(base_path)? {
        let entry = entry?;
        let full_path = entry.path();
        if !full_path.is_dir() {
            continue;
        }

        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            tracing::debug!("Skipping non-UTF-8 directory name: {:?}", entry.file_name());
            continue;
        };

        let is_mirror = name.ends_with(BARE_SUFFIX);
        let is_working_copy = full_path.join(METADATA_DIR).is_dir();
        if is_mirror || is_working_copy {
            names.insert(name);
        }
    }

    Ok(names)
}
