//! Blame data transfer objects.
//!
//! Per-line attribution of a file at a commit, with the attributed commits
//! listed once each.

use serde::Serialize;
use std::collections::BTreeMap;

use super::CommitSummary;

#[derive(Debug, Serialize)]
pub struct BlameResponse {
    /// Path of the file
    pub path: String,
    /// Newest commit considered
    pub commit: String,
    /// One entry per line in the requested range
    pub lines: Vec<BlameLine>,
    /// Every commit referenced by `lines`, keyed by id
    pub commits: BTreeMap<String, CommitSummary>,
}

#[derive(Debug, Serialize)]
pub struct BlameLine {
    /// Line number in the file at the newest commit (1-indexed)
    pub line_number: usize,
    pub line: String,
    /// Commit that last changed this line
    pub commit: String,
    /// Path of the file in that commit, which differs after a move
    pub orig_path: Option<String>,
    pub orig_line_number: usize,
}
