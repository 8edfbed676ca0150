use std::fmt;

use git2::{Blob, Commit, Object, ObjectType, Oid, Tree};

use crate::error::{AppError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Blob,
    Tree,
    Commit,
}

/// An object reached through a tree: the only kinds a path can address.
pub enum GitObject<'repo> {
    Blob(Blob<'repo>),
    Tree(Tree<'repo>),
    Commit(Commit<'repo>),
}

impl<'repo> GitObject<'repo> {
    pub fn from_object(object: Object<'repo>) -> Result<Self> {
        let id = object.id();
        let peeled = match object.kind() {
            Some(ObjectType::Blob) => object.into_blob().map(GitObject::Blob),
            Some(ObjectType::Tree) => object.into_tree().map(GitObject::Tree),
            Some(ObjectType::Commit) => object.into_commit().map(GitObject::Commit),
            _ => return Err(AppError::Internal(format!("unsupported object type for {}", id))),
        };
        peeled.map_err(|_| AppError::Internal(format!("object {} changed type while peeling", id)))
    }

    pub fn kind(&self) -> ObjectKind {
        match self {
            GitObject::Blob(_) => ObjectKind::Blob,
            GitObject::Tree(_) => ObjectKind::Tree,
            GitObject::Commit(_) => ObjectKind::Commit,
        }
    }

    pub fn id(&self) -> Oid {
        match self {
            GitObject::Blob(blob) => blob.id(),
            GitObject::Tree(tree) => tree.id(),
            GitObject::Commit(commit) => commit.id(),
        }
    }

    pub fn as_blob(&self) -> Option<&Blob<'repo>> {
        match self {
            GitObject::Blob(blob) => Some(blob),
            _ => None,
        }
    }
}

impl fmt::Debug for GitObject<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self.kind(), self.id())
    }
}
