//! Canonical URL construction for content descriptors.
//!
//! The HTTP layer owns routing; the query core only needs two link shapes:
//! - contents URL: `{base}/repos/{key}/contents/{path}?ref={ref}`
//! - git URL: `{base}/repos/{key}/git/{blobs|trees|commits}/{sha}`

use git2::Oid;

use crate::git::ObjectKind;

pub trait UrlBuilder: Send + Sync {
    fn contents_url(&self, repo_key: &str, path: &str, refspec: &str) -> String;
    fn git_url(&self, repo_key: &str, kind: ObjectKind, id: Oid) -> String;
    fn repo_url(&self, repo_key: &str) -> String;
}

#[derive(Debug, Clone)]
pub struct ApiUrls {
    base_url: String,
}

impl ApiUrls {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl UrlBuilder for ApiUrls {
    fn contents_url(&self, repo_key: &str, path: &str, refspec: &str) -> String {
        format!(
            "{}/repos/{}/contents/{}?ref={}",
            self.base_url,
            repo_key,
            path.trim_start_matches('/'),
            refspec
        )
    }

    fn git_url(&self, repo_key: &str, kind: ObjectKind, id: Oid) -> String {
        let collection = match kind {
            ObjectKind::Blob => "blobs",
            ObjectKind::Tree => "trees",
            ObjectKind::Commit => "commits",
        };
        format!("{}/repos/{}/git/{}/{}", self.base_url, repo_key, collection, id)
    }

    fn repo_url(&self, repo_key: &str) -> String {
        format!("{}/repos/{}", self.base_url, repo_key)
    }
}
