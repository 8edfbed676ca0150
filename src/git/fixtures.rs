//! Throwaway repositories for unit tests.

use git2::build::TreeUpdateBuilder;
use git2::{FileMode, Oid, Repository, RepositoryInitOptions, Signature, Time};
use tempfile::TempDir;

pub struct TestRepo {
    pub dir: TempDir,
    pub repo: Repository,
    clock: std::cell::Cell<i64>,
}

impl TestRepo {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let mut opts = RepositoryInitOptions::new();
        opts.initial_head("master");
        let repo = Repository::init_opts(dir.path(), &opts).unwrap();
        Self {
            dir,
            repo,
            clock: std::cell::Cell::new(1_700_000_000),
        }
    }

    pub fn commit(&self, files: &[(&str, &str)], message: &str) -> Oid {
        let writes: Vec<(&str, &[u8])> = files.iter().map(|(p, c)| (*p, c.as_bytes())).collect();
        self.commit_as("Test Author", "author@example.com", &writes, &[], message)
    }

    pub fn commit_changes(&self, writes: &[(&str, &[u8])], removes: &[&str], message: &str) -> Oid {
        self.commit_as("Test Author", "author@example.com", writes, removes, message)
    }

    pub fn commit_as(
        &self,
        name: &str,
        email: &str,
        writes: &[(&str, &[u8])],
        removes: &[&str],
        message: &str,
    ) -> Oid {
        let repo = &self.repo;
        let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let base_tree = match &parent {
            Some(commit) => commit.tree().unwrap(),
            None => {
                let empty = repo.treebuilder(None).unwrap().write().unwrap();
                repo.find_tree(empty).unwrap()
            }
        };

        let mut update = TreeUpdateBuilder::new();
        for (path, content) in writes {
            let blob = repo.blob(content).unwrap();
            update.upsert(*path, blob, FileMode::Blob);
        }
        for path in removes {
            update.remove(*path);
        }
        let tree_id = update.create_updated(repo, &base_tree).unwrap();
        let tree = repo.find_tree(tree_id).unwrap();

        let seconds = self.clock.get() + 60;
        self.clock.set(seconds);
        let sig = Signature::new(name, email, &Time::new(seconds, 0)).unwrap();

        let parents: Vec<&git2::Commit> = parent.iter().collect();
        repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .unwrap()
    }
}
