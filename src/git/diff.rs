use git2::{Commit, Delta, Diff, DiffFindOptions, DiffOptions, Repository};

use crate::error::Result;
use crate::git::refs::get_commit_for_refspec;
use crate::git::repository::{signature_to_author, GitRepository};
use crate::models::{CommitDiff, DiffStats, DiffStatus, FileChange};

/// Changes introduced by `commit` relative to its first parent.
///
/// Root commits are diffed against the empty tree with the direction
/// reversed, so their files come out as additions. GitHub answers 404 here.
pub fn get_diff<'repo>(repo: &'repo Repository, commit: &Commit<'repo>) -> Result<Diff<'repo>> {
    let tree = commit.tree()?;

    if commit.parent_count() > 0 {
        let parent_tree = commit.parent(0)?.tree()?;
        let mut diff = repo.diff_tree_to_tree(Some(&parent_tree), Some(&tree), None)?;
        detect_similar(&mut diff)?;
        Ok(diff)
    } else {
        let mut opts = DiffOptions::new();
        opts.reverse(true);
        Ok(repo.diff_tree_to_tree(Some(&tree), None, Some(&mut opts))?)
    }
}

fn detect_similar(diff: &mut Diff<'_>) -> Result<()> {
    let mut find_opts = DiffFindOptions::new();
    find_opts.renames(true).copies(true);
    diff.find_similar(Some(&mut find_opts))?;
    Ok(())
}

/// Flatten a diff into per-file records with patch text and line counts.
pub fn diff_to_files(diff: &Diff) -> Result<(Vec<FileChange>, DiffStats)> {
    let mut files: Vec<FileChange> = Vec::new();
    let mut stats = DiffStats::default();

    for (delta_idx, delta) in diff.deltas().enumerate() {
        let status = match delta.status() {
            Delta::Added => DiffStatus::Added,
            Delta::Deleted => DiffStatus::Removed,
            Delta::Modified => DiffStatus::Modified,
            Delta::Renamed => DiffStatus::Renamed,
            Delta::Copied => DiffStatus::Copied,
            _ => DiffStatus::Changed,
        };

        let old_path = delta.old_file().path().map(|p| p.to_string_lossy().to_string());
        let new_path = delta.new_file().path().map(|p| p.to_string_lossy().to_string());
        let (filename, sha) = if status == DiffStatus::Removed {
            (old_path.clone(), delta.old_file().id())
        } else {
            (new_path, delta.new_file().id())
        };
        let previous_filename = match status {
            DiffStatus::Renamed | DiffStatus::Copied => old_path,
            _ => None,
        };

        let mut additions = 0;
        let mut deletions = 0;
        let mut patch_text = String::new();

        if let Some(patch) = git2::Patch::from_diff(diff, delta_idx)? {
            for hunk_idx in 0..patch.num_hunks() {
                let (hunk, _) = patch.hunk(hunk_idx)?;
                patch_text.push_str(&String::from_utf8_lossy(hunk.header()));

                for line_idx in 0..patch.num_lines_in_hunk(hunk_idx)? {
                    let line = patch.line_in_hunk(hunk_idx, line_idx)?;
                    let origin = line.origin();
                    match origin {
                        '+' => additions += 1,
                        '-' => deletions += 1,
                        _ => {}
                    }
                    // Context and change lines carry their marker; EOF notices do not
                    if matches!(origin, '+' | '-' | ' ') {
                        patch_text.push(origin);
                    }
                    patch_text.push_str(&String::from_utf8_lossy(line.content()));
                }
            }
        }

        stats.additions += additions;
        stats.deletions += deletions;

        files.push(FileChange {
            sha: sha.to_string(),
            filename: filename.unwrap_or_default(),
            status,
            additions,
            deletions,
            changes: additions + deletions,
            patch: if patch_text.is_empty() { None } else { Some(patch_text) },
            previous_filename,
        });
    }

    stats.total = stats.additions + stats.deletions;
    Ok((files, stats))
}

impl GitRepository {
    pub fn commit_diff(&self, refspec: &str) -> Result<CommitDiff> {
        let commit = get_commit_for_refspec(&self.repo, refspec)?;
        let diff = get_diff(&self.repo, &commit)?;
        let (files, stats) = diff_to_files(&diff)?;
        tracing::debug!("Diff for {}: {} files, {} lines", commit.id(), files.len(), stats.total);

        Ok(CommitDiff {
            sha: commit.id().to_string(),
            message: String::from_utf8_lossy(commit.message_bytes()).to_string(),
            author: signature_to_author(&commit.author()),
            committer: signature_to_author(&commit.committer()),
            parents: commit.parent_ids().map(|id| id.to_string()).collect(),
            stats,
            files,
        })
    }
}
