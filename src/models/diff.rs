//! Commit diff DTOs.
//!
//! - `CommitDiff`: commit metadata plus every changed file
//! - `FileChange`: one file's status, line counts and patch text
//! - `DiffStats`: totals across the commit

use serde::{Deserialize, Serialize};

use super::AuthorInfo;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitDiff {
    pub sha: String,
    pub message: String,
    pub author: AuthorInfo,
    pub committer: AuthorInfo,
    pub parents: Vec<String>,
    pub stats: DiffStats,
    pub files: Vec<FileChange>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileChange {
    pub sha: String,
    pub filename: String,
    pub status: DiffStatus,
    pub additions: usize,
    pub deletions: usize,
    pub changes: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_filename: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DiffStatus {
    Added,
    Removed,
    Modified,
    Renamed,
    Copied,
    Changed,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DiffStats {
    pub additions: usize,
    pub deletions: usize,
    pub total: usize,
}
