//! Refspec resolution.
//!
//! Precedence follows GitHub's API: a branch wins over a tag of the same
//! name, and a tag wins over an object id.

use git2::{BranchType, Commit, Reference, Repository};

use crate::error::{AppError, Result};
use crate::git::repository::{commit_to_summary, GitRepository};
use crate::models::BranchInfo;

pub const BRANCH_PREFIX: &str = "refs/heads/";
pub const TAG_PREFIX: &str = "refs/tags/";

pub fn get_commit_for_refspec<'repo>(repo: &'repo Repository, refspec: &str) -> Result<Commit<'repo>> {
    if let Some(branch) = lookup_ref(repo, &format!("{}{}", BRANCH_PREFIX, refspec)) {
        let target = branch
            .resolve()
            .ok()
            .and_then(|resolved| resolved.target())
            .ok_or_else(|| AppError::InvalidRef(format!("branch {} has no target", refspec)))?;
        return repo
            .find_commit(target)
            .map_err(|_| AppError::InvalidRef(format!("branch {} does not point to a commit", refspec)));
    }

    if let Some(tag) = lookup_ref(repo, &format!("{}{}", TAG_PREFIX, refspec)) {
        return tag
            .peel_to_commit()
            .map_err(|_| AppError::InvalidRef(format!("tag {} does not point to a commit", refspec)));
    }

    tracing::debug!("{} is neither a branch nor a tag, trying it as a commit id", refspec);
    lookup_commit(repo, refspec)
        .ok_or_else(|| AppError::RefNotFound(format!("no such branch, tag, or commit SHA: {}", refspec)))
}

pub fn get_branch<'repo>(repo: &'repo Repository, name: &str) -> Result<git2::Branch<'repo>> {
    repo.find_branch(name, BranchType::Local)
        .map_err(|_| AppError::RefNotFound(format!("branch not found: {}", name)))
}

fn lookup_ref<'repo>(repo: &'repo Repository, name: &str) -> Option<Reference<'repo>> {
    repo.find_reference(name).ok()
}

/// Full or abbreviated hex id; anything else is not an id at all.
fn lookup_commit<'repo>(repo: &'repo Repository, sha: &str) -> Option<Commit<'repo>> {
    if sha.is_empty() || sha.len() > 40 || !sha.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    repo.find_commit_by_prefix(sha).ok()
}

impl GitRepository {
    pub fn branch_info(&self, name: &str) -> Result<BranchInfo> {
        let branch = get_branch(&self.repo, name)?;
        let commit = branch.get().peel_to_commit()?;
        Ok(BranchInfo {
            name: name.to_string(),
            commit: commit_to_summary(&commit),
        })
    }
}
