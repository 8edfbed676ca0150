//! Contents listing in the shape of GitHub's contents API.
//!
//! A tree at the requested path becomes a name-sorted list of one-level
//! descriptors; a blob becomes a single descriptor carrying its encoded
//! content. Listing never descends below the first level.
//!
//! `get_contents` only sees the object, so a symlink blob passed to it alone
//! is typed `file`; `GitRepository::contents` corrects this from the tree
//! entry so direct lookups agree with directory listings.

use git2::{ObjectType, Oid, Repository, Tree, TreeEntry};
use std::path::Path;

use crate::context::AppContext;
use crate::error::{AppError, Result};
use crate::git::object::{GitObject, ObjectKind};
use crate::git::path::get_object_from_path;
use crate::git::refs::get_commit_for_refspec;
use crate::git::repository::GitRepository;
use crate::models::{ContentDescriptor, ContentLinks, Contents, EntryType};

const SYMLINK_FILEMODE: i32 = 0o120000;

pub fn get_contents(
    ctx: &AppContext,
    repo_key: &str,
    repo: &Repository,
    refspec: &str,
    path: &str,
    object: &GitObject<'_>,
) -> Result<Contents> {
    match object {
        GitObject::Tree(tree) => {
            let mut entries = Vec::with_capacity(tree.len());
            for entry in tree.iter() {
                let name = String::from_utf8_lossy(entry.name_bytes()).to_string();
                let entry_path = join_path(path, &name);
                entries.push(describe_entry(ctx, repo_key, repo, refspec, &entry_path, &entry)?);
            }
            entries.sort_by(|a, b| a.name.cmp(&b.name));
            Ok(Contents::Directory(entries))
        }
        GitObject::Blob(blob) => {
            let mut descriptor = describe(
                ctx,
                repo_key,
                refspec,
                path,
                EntryType::File,
                ObjectKind::Blob,
                blob.id(),
                blob.size() as u64,
            );
            let encoded = ctx.encoder.encode(blob.content());
            descriptor.encoding = Some(encoded.encoding.to_string());
            descriptor.content = Some(encoded.content);
            Ok(Contents::File(descriptor))
        }
        GitObject::Commit(commit) => Ok(Contents::File(describe(
            ctx,
            repo_key,
            refspec,
            path,
            EntryType::Submodule,
            ObjectKind::Commit,
            commit.id(),
            0,
        ))),
    }
}

/// Descriptor for a tree entry, without content.
fn describe_entry(
    ctx: &AppContext,
    repo_key: &str,
    repo: &Repository,
    refspec: &str,
    path: &str,
    entry: &TreeEntry<'_>,
) -> Result<ContentDescriptor> {
    let (entry_type, kind, size) = match entry.kind() {
        Some(ObjectType::Tree) => (EntryType::Directory, ObjectKind::Tree, 0),
        Some(ObjectType::Blob) => {
            let size = repo.find_blob(entry.id())?.size() as u64;
            if entry.filemode() == SYMLINK_FILEMODE {
                (EntryType::Symlink, ObjectKind::Blob, size)
            } else {
                (EntryType::File, ObjectKind::Blob, size)
            }
        }
        // Gitlink: the commit lives in another repository, so it is not looked up
        Some(ObjectType::Commit) => (EntryType::Submodule, ObjectKind::Commit, 0),
        other => {
            return Err(AppError::Internal(format!(
                "unexpected tree entry kind {:?} at {}",
                other, path
            )));
        }
    };

    Ok(describe(ctx, repo_key, refspec, path, entry_type, kind, entry.id(), size))
}

#[allow(clippy::too_many_arguments)]
fn describe(
    ctx: &AppContext,
    repo_key: &str,
    refspec: &str,
    path: &str,
    entry_type: EntryType,
    kind: ObjectKind,
    id: Oid,
    size: u64,
) -> ContentDescriptor {
    let url = ctx.urls.contents_url(repo_key, path, refspec);
    let git_url = ctx.urls.git_url(repo_key, kind, id);

    ContentDescriptor {
        entry_type,
        sha: id.to_string(),
        name: basename(path).to_string(),
        path: path.to_string(),
        size,
        links: ContentLinks {
            self_link: url.clone(),
            git: git_url.clone(),
        },
        url,
        git_url,
        encoding: None,
        content: None,
    }
}

fn join_path(base: &str, name: &str) -> String {
    if base.is_empty() {
        name.to_string()
    } else if base.ends_with('/') {
        format!("{}{}", base, name)
    } else {
        format!("{}/{}", base, name)
    }
}

fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

impl GitRepository {
    pub fn contents(&self, ctx: &AppContext, refspec: &str, path: &str) -> Result<Contents> {
        let commit = get_commit_for_refspec(&self.repo, refspec)?;
        let tree = commit.tree()?;
        let object = get_object_from_path(&self.repo, &tree, path)?;
        let mut contents = get_contents(ctx, &self.key, &self.repo, refspec, path, &object)?;

        // A bare blob has no filemode; the tree entry that named it does
        if let Contents::File(descriptor) = &mut contents {
            if descriptor.entry_type == EntryType::File && is_symlink(&tree, path) {
                descriptor.entry_type = EntryType::Symlink;
            }
        }
        Ok(contents)
    }
}

fn is_symlink(tree: &Tree<'_>, path: &str) -> bool {
    tree.get_path(Path::new(path.trim_matches('/')))
        .map(|entry| entry.filemode() == SYMLINK_FILEMODE)
        .unwrap_or(false)
}
