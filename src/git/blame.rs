use git2::{Blame, BlameOptions, Blob, Commit, ErrorCode, ObjectType, Repository};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::path::Path;

use crate::error::{AppError, PathError, Result};
use crate::git::refs::get_commit_for_refspec;
use crate::git::repository::{commit_to_summary, GitRepository};
use crate::models::{BlameLine, BlameResponse};

/// Blame `file_path` as of `newest_commit`.
///
/// Same-commit move and copy tracking is always on. `min_line` is only handed
/// to the store when it differs from the default of 1.
pub fn get_blame<'repo>(
    repo: &'repo Repository,
    file_path: &str,
    newest_commit: &Commit<'repo>,
    oldest_refspec: Option<&str>,
    min_line: usize,
    max_line: Option<usize>,
) -> Result<Blame<'repo>> {
    blame_with_blob(repo, file_path, newest_commit, oldest_refspec, min_line, max_line)
        .map(|(blame, _)| blame)
}

/// Like `get_blame`, also handing back the blob the range was validated against.
fn blame_with_blob<'repo>(
    repo: &'repo Repository,
    file_path: &str,
    newest_commit: &Commit<'repo>,
    oldest_refspec: Option<&str>,
    min_line: usize,
    max_line: Option<usize>,
) -> Result<(Blame<'repo>, Blob<'repo>)> {
    let blob = blob_at(repo, newest_commit, file_path)?;
    validate_range(line_count(blob.content()), min_line, max_line)?;

    let mut opts = BlameOptions::new();
    opts.track_copies_same_commit_moves(true)
        .track_copies_same_commit_copies(true)
        .newest_commit(newest_commit.id());

    if let Some(oldest_refspec) = oldest_refspec {
        let oldest_commit = get_commit_for_refspec(repo, oldest_refspec)?;
        opts.oldest_commit(oldest_commit.id());
    }
    if min_line > 1 {
        opts.min_line(min_line);
    }
    if let Some(max_line) = max_line {
        opts.max_line(max_line);
    }

    let blame = repo
        .blame_file(Path::new(file_path.trim_start_matches('/')), Some(&mut opts))
        .map_err(|e| match e.code() {
            ErrorCode::NotFound => AppError::PathNotFound(file_path.to_string()),
            _ => AppError::Git(e),
        })?;
    Ok((blame, blob))
}

fn blob_at<'repo>(repo: &'repo Repository, commit: &Commit<'repo>, file_path: &str) -> Result<Blob<'repo>> {
    let tree = commit.tree()?;
    let entry = tree
        .get_path(Path::new(file_path.trim_start_matches('/')))
        .map_err(|_| AppError::PathNotFound(file_path.to_string()))?;

    if entry.kind() != Some(ObjectType::Blob) {
        return Err(PathError::NotAFile {
            path: file_path.to_string(),
        }
        .into());
    }
    Ok(repo.find_blob(entry.id())?)
}

fn line_count(content: &[u8]) -> usize {
    let newlines = content.iter().filter(|&&b| b == b'\n').count();
    match content.last() {
        None | Some(b'\n') => newlines,
        Some(_) => newlines + 1,
    }
}

fn validate_range(lines: usize, min_line: usize, max_line: Option<usize>) -> Result<()> {
    if min_line == 0 {
        return Err(AppError::InvalidRange("line numbers start at 1".to_string()));
    }
    if min_line > 1 && min_line > lines {
        return Err(AppError::InvalidRange(format!(
            "first line {} is past the end of the file ({} lines)",
            min_line, lines
        )));
    }
    if let Some(max_line) = max_line {
        if max_line < min_line {
            return Err(AppError::InvalidRange(format!(
                "last line {} is before first line {}",
                max_line, min_line
            )));
        }
        if max_line > lines {
            return Err(AppError::InvalidRange(format!(
                "last line {} is past the end of the file ({} lines)",
                max_line, lines
            )));
        }
    }
    Ok(())
}

impl GitRepository {
    pub fn blame(
        &self,
        refspec: &str,
        file_path: &str,
        oldest_refspec: Option<&str>,
        min_line: Option<usize>,
        max_line: Option<usize>,
    ) -> Result<BlameResponse> {
        let newest_commit = get_commit_for_refspec(&self.repo, refspec)?;
        let (blame, blob) = blame_with_blob(
            &self.repo,
            file_path,
            &newest_commit,
            oldest_refspec,
            min_line.unwrap_or(1),
            max_line,
        )?;

        let text = String::from_utf8_lossy(blob.content());
        let file_lines: Vec<&str> = text.lines().collect();

        let mut lines = Vec::new();
        let mut commits = BTreeMap::new();
        for hunk in blame.iter() {
            let commit_id = hunk.final_commit_id();
            if let Entry::Vacant(slot) = commits.entry(commit_id.to_string()) {
                let commit = self.repo.find_commit(commit_id)?;
                slot.insert(commit_to_summary(&commit));
            }
            let orig_path = hunk.path().map(|p| p.to_string_lossy().to_string());

            for offset in 0..hunk.lines_in_hunk() {
                let line_number = hunk.final_start_line() + offset;
                lines.push(BlameLine {
                    line_number,
                    line: file_lines.get(line_number - 1).unwrap_or(&"").to_string(),
                    commit: commit_id.to_string(),
                    orig_path: orig_path.clone(),
                    orig_line_number: hunk.orig_start_line() + offset,
                });
            }
        }

        tracing::debug!("Blame for {}: {} lines, {} commits", file_path, lines.len(), commits.len());

        Ok(BlameResponse {
            path: file_path.to_string(),
            commit: newest_commit.id().to_string(),
            lines,
            commits,
        })
    }
}
