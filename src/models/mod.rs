//! Data transfer objects (DTOs) for API responses.
//!
//! These structs are serialized to JSON in the GitHub API's shape.
//! - `contents`: ContentDescriptor, Contents (file or directory listing)
//! - `commit`: AuthorInfo, CommitSummary, ContributorInfo, BranchInfo
//! - `diff`: CommitDiff, FileChange, DiffStats
//! - `blame`: BlameResponse, BlameLine
//! - `repository`: RepositoryInfo

pub mod blame;
pub mod commit;
pub mod contents;
pub mod diff;
pub mod repository;

pub use blame::*;
pub use commit::*;
pub use contents::*;
pub use diff::*;
pub use repository::*;
