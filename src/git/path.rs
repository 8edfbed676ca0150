use git2::{Repository, Tree};

use crate::error::{PathError, Result};
use crate::git::object::GitObject;
use crate::git::refs::get_commit_for_refspec;
use crate::git::repository::GitRepository;

/// Walk `path` from `tree`, one `/`-separated segment at a time.
///
/// A trailing slash addresses the directory itself, and so does a path of
/// exactly `/`. Anything but a tree in the middle of the path is an error.
pub fn get_object_from_path<'repo>(
    repo: &'repo Repository,
    tree: &Tree<'repo>,
    path: &str,
) -> Result<GitObject<'repo>> {
    let path = if path == "/" { "" } else { path };
    let segments: Vec<&str> = path.split('/').collect();
    let last = segments.len() - 1;

    let mut current = GitObject::Tree(tree.clone());
    for (i, segment) in segments.iter().enumerate() {
        let GitObject::Tree(ctree) = &current else {
            return Err(PathError::NonTree {
                segment: segment.to_string(),
            }
            .into());
        };
        if segment.is_empty() && i == last {
            continue;
        }

        let no_such_object = || PathError::NoSuchObject {
            segment: segment.to_string(),
        };
        let object = {
            let entry = ctree.get_name(segment).ok_or_else(no_such_object)?;
            // Gitlinks name commits from another repository; they are absent here
            entry.to_object(repo).map_err(|_| no_such_object())?
        };
        current = GitObject::from_object(object)?;
    }

    Ok(current)
}

pub fn get_raw_file_content(repo: &Repository, tree: &Tree, path: &str) -> Result<Vec<u8>> {
    match get_object_from_path(repo, tree, path)? {
        GitObject::Blob(blob) => Ok(blob.content().to_vec()),
        _ => Err(PathError::NotAFile {
            path: path.to_string(),
        }
        .into()),
    }
}

impl GitRepository {
    pub fn raw_file_content(&self, refspec: &str, path: &str) -> Result<Vec<u8>> {
        let commit = get_commit_for_refspec(&self.repo, refspec)?;
        let tree = commit.tree()?;
        get_raw_file_content(&self.repo, &tree, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::git::ObjectKind;
    use crate::git::fixtures::TestRepo;

    fn root_tree(t: &TestRepo) -> Tree<'_> {
        t.repo.head().unwrap().peel_to_commit().unwrap().tree().unwrap()
    }

    fn setup() -> TestRepo {
        let t = TestRepo::new();
        t.commit(
            &[
                ("README.md", "hello\n"),
                ("dir/inner.txt", "inner\n"),
                ("dir/sub/deep.txt", "deep\n"),
            ],
            "initial",
        );
        t
    }

    #[test]
    fn test_empty_and_slash_return_root() {
        let t = setup();
        let tree = root_tree(&t);

        for path in ["", "/"] {
            let object = get_object_from_path(&t.repo, &tree, path).unwrap();
            assert_eq!(object.id(), tree.id(), "path {:?}", path);
        }
    }

    #[test]
    fn test_trailing_slash_addresses_directory() {
        let t = setup();
        let tree = root_tree(&t);

        let with_slash = get_object_from_path(&t.repo, &tree, "dir/").unwrap();
        let without = get_object_from_path(&t.repo, &tree, "dir").unwrap();
        assert_eq!(with_slash.kind(), ObjectKind::Tree);
        assert_eq!(with_slash.id(), without.id());
    }

    #[test]
    fn test_nested_blob() {
        let t = setup();
        let tree = root_tree(&t);

        let object = get_object_from_path(&t.repo, &tree, "dir/sub/deep.txt").unwrap();
        assert_eq!(object.as_blob().unwrap().content(), b"deep\n");
    }

    #[test]
    fn test_traversal_through_blob() {
        let t = setup();
        let tree = root_tree(&t);

        let err = get_object_from_path(&t.repo, &tree, "README.md/x").unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidPath(PathError::NonTree { ref segment }) if segment == "x"
        ));

        // A trailing slash after a file is still a traversal through a non-tree
        let err = get_object_from_path(&t.repo, &tree, "README.md/").unwrap_err();
        assert!(matches!(err, AppError::InvalidPath(PathError::NonTree { .. })));
    }

    #[test]
    fn test_missing_entry() {
        let t = setup();
        let tree = root_tree(&t);

        let err = get_object_from_path(&t.repo, &tree, "dir/nope.txt").unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidPath(PathError::NoSuchObject { ref segment }) if segment == "nope.txt"
        ));
        assert!(matches!(
            get_object_from_path(&t.repo, &tree, "dir//inner.txt"),
            Err(AppError::InvalidPath(PathError::NoSuchObject { .. }))
        ));
    }

    #[test]
    fn test_raw_content() {
        let t = setup();
        let tree = root_tree(&t);

        assert_eq!(get_raw_file_content(&t.repo, &tree, "dir/inner.txt").unwrap(), b"inner\n");
        assert!(matches!(
            get_raw_file_content(&t.repo, &tree, "dir"),
            Err(AppError::InvalidPath(PathError::NotAFile { .. }))
        ));
    }
}
