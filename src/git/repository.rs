use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};
use git2::{Commit, Repository, Signature};

use crate::config::Config;
use crate::context::AppContext;
use crate::error::{AppError, Result};
use crate::git::catalog::get_repo_names;
use crate::git::description::get_repo_description;
use crate::models::{AuthorInfo, CommitSummary, RepositoryInfo};

/// An opened repository, owned by the request that opened it.
pub struct GitRepository {
    pub repo: Repository,
    pub key: String,
}

impl GitRepository {
    /// Open a repository by its catalog key.
    ///
    /// Keys outside the catalog are rejected before touching the filesystem,
    /// so a key can never address anything but a direct child of the base.
    pub fn open(config: &Config, key: &str) -> Result<Self> {
        if !get_repo_names(&config.repo_base_path)?.contains(key) {
            return Err(AppError::RepoNotFound(key.to_string()));
        }

        let path = config.repo_base_path.join(key);
        let repo = Repository::open(&path).map_err(|e| {
            tracing::warn!("Failed to open {}: {}", path.display(), e);
            AppError::RepoNotFound(key.to_string())
        })?;
        tracing::debug!("Opened repository {} at {}", key, path.display());

        Ok(Self {
            repo,
            key: key.to_string(),
        })
    }

    pub fn info(&self, ctx: &AppContext) -> Result<RepositoryInfo> {
        repository_info(ctx, &self.key)
    }
}

pub fn repository_info(ctx: &AppContext, key: &str) -> Result<RepositoryInfo> {
    Ok(RepositoryInfo {
        name: key.to_string(),
        description: get_repo_description(&ctx.config.repo_base_path, key)?,
        url: ctx.urls.repo_url(key),
    })
}

pub fn signature_to_author(sig: &Signature) -> AuthorInfo {
    AuthorInfo {
        name: String::from_utf8_lossy(sig.name_bytes()).to_string(),
        email: String::from_utf8_lossy(sig.email_bytes()).to_string(),
        date: format_git_time(sig.when()),
    }
}

pub fn commit_to_summary(commit: &Commit) -> CommitSummary {
    CommitSummary {
        sha: commit.id().to_string(),
        message: String::from_utf8_lossy(commit.message_bytes()).to_string(),
        author: signature_to_author(&commit.author()),
        committer: signature_to_author(&commit.committer()),
        parents: commit.parent_ids().map(|id| id.to_string()).collect(),
    }
}

/// ISO-8601 in the signature's own offset, `Z` for UTC.
pub fn format_git_time(time: git2::Time) -> String {
    let Some(utc) = DateTime::<Utc>::from_timestamp(time.seconds(), 0) else {
        return String::new();
    };
    match FixedOffset::east_opt(time.offset_minutes() * 60) {
        Some(offset) => utc
            .with_timezone(&offset)
            .to_rfc3339_opts(SecondsFormat::Secs, true),
        None => utc.to_rfc3339_opts(SecondsFormat::Secs, true),
    }
}
