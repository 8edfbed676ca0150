//! Contents DTOs.
//!
//! - `ContentDescriptor`: one file or directory entry, with links
//! - `Contents`: a single descriptor (file) or a name-sorted listing (directory)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    File,
    #[serde(rename = "dir")]
    Directory,
    Symlink,
    Submodule,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentLinks {
    #[serde(rename = "self")]
    pub self_link: String,
    pub git: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentDescriptor {
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    pub sha: String,
    pub name: String,
    pub path: String,
    pub size: u64,
    pub url: String,
    pub git_url: String,
    #[serde(rename = "_links")]
    pub links: ContentLinks,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Contents {
    File(ContentDescriptor),
    Directory(Vec<ContentDescriptor>),
}
