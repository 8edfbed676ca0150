use git2::{Repository, Revwalk, Sort};
use std::collections::HashMap;

use crate::error::{AppError, Result};
use crate::git::repository::{signature_to_author, GitRepository};
use crate::models::{AuthorInfo, ContributorInfo};

/// Lazy walk over the authors of every commit reachable from HEAD.
///
/// The walk is unsorted: callers get each reachable commit's author exactly
/// once, in whatever order the store yields them. Call `get_authors` again to
/// restart.
pub struct AuthorWalk<'repo> {
    repo: &'repo Repository,
    revwalk: Revwalk<'repo>,
}

impl Iterator for AuthorWalk<'_> {
    type Item = Result<AuthorInfo>;

    fn next(&mut self) -> Option<Self::Item> {
        let oid = match self.revwalk.next()? {
            Ok(oid) => oid,
            Err(e) => return Some(Err(e.into())),
        };
        Some(
            self.repo
                .find_commit(oid)
                .map(|commit| signature_to_author(&commit.author()))
                .map_err(AppError::from),
        )
    }
}

pub fn get_authors(repo: &Repository) -> Result<AuthorWalk<'_>> {
    let mut revwalk = repo.revwalk()?;
    revwalk.set_sorting(Sort::NONE)?;
    revwalk
        .push_head()
        .map_err(|_| AppError::RefNotFound("HEAD does not point to a commit".to_string()))?;

    Ok(AuthorWalk { repo, revwalk })
}

/// Authors grouped by email, most commits first.
pub fn get_contributors(repo: &Repository) -> Result<Vec<ContributorInfo>> {
    let mut contributor_map: HashMap<String, (String, usize)> = HashMap::new();

    for author in get_authors(repo)? {
        let author = author?;
        contributor_map
            .entry(author.email)
            .and_modify(|(_, count)| *count += 1)
            .or_insert((author.name, 1));
    }

    let mut contributors: Vec<ContributorInfo> = contributor_map
        .into_iter()
        .map(|(email, (name, count))| ContributorInfo {
            name,
            email,
            contributions: count,
        })
        .collect();

    contributors.sort_by(|a, b| {
        b.contributions
            .cmp(&a.contributions)
            .then_with(|| a.email.cmp(&b.email))
    });

    Ok(contributors)
}

impl GitRepository {
    pub fn contributors(&self) -> Result<Vec<ContributorInfo>> {
        get_contributors(&self.repo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::fixtures::TestRepo;
    use git2::Signature;

    #[test]
    fn test_every_commit_author_once() {
        let t = TestRepo::new();
        t.commit_as("Ada", "ada@example.com", &[("a.txt", b"1\n")], &[], "one");
        t.commit_as("Grace", "grace@example.com", &[("a.txt", b"2\n")], &[], "two");
        t.commit_as("Ada", "ada@example.com", &[("a.txt", b"3\n")], &[], "three");

        let mut names: Vec<String> = get_authors(&t.repo)
            .unwrap()
            .map(|a| a.unwrap().name)
            .collect();
        names.sort();
        assert_eq!(names, vec!["Ada", "Ada", "Grace"]);
    }

    #[test]
    fn test_merge_parents_walked_once() {
        let t = TestRepo::new();
        let base = t.commit(&[("a.txt", "base\n")], "base");
        let main_tip = t.commit_as("Main", "main@example.com", &[("a.txt", b"main\n")], &[], "main");

        // Side branch off base, then merge it into master by hand
        let repo = &t.repo;
        let base_commit = repo.find_commit(base).unwrap();
        let sig = Signature::now("Side", "side@example.com").unwrap();
        let side_tip = repo
            .commit(None, &sig, &sig, "side", &base_commit.tree().unwrap(), &[&base_commit])
            .unwrap();
        let main_commit = repo.find_commit(main_tip).unwrap();
        let side_commit = repo.find_commit(side_tip).unwrap();
        repo.commit(
            Some("HEAD"),
            &sig,
            &sig,
            "merge",
            &main_commit.tree().unwrap(),
            &[&main_commit, &side_commit],
        )
        .unwrap();

        let authors: Vec<AuthorInfo> = get_authors(repo).unwrap().map(|a| a.unwrap()).collect();
        assert_eq!(authors.len(), 4);
    }

    #[test]
    fn test_walk_restarts() {
        let t = TestRepo::new();
        t.commit(&[("a.txt", "1\n")], "one");
        t.commit(&[("a.txt", "2\n")], "two");

        assert_eq!(get_authors(&t.repo).unwrap().count(), 2);
        assert_eq!(get_authors(&t.repo).unwrap().count(), 2);
    }

    #[test]
    fn test_empty_repository() {
        let t = TestRepo::new();
        assert!(matches!(get_authors(&t.repo), Err(AppError::RefNotFound(_))));
    }

    #[test]
    fn test_contributors_ranked() {
        let t = TestRepo::new();
        t.commit_as("Grace", "grace@example.com", &[("a.txt", b"1\n")], &[], "one");
        t.commit_as("Ada", "ada@example.com", &[("a.txt", b"2\n")], &[], "two");
        t.commit_as("Grace", "grace@example.com", &[("a.txt", b"3\n")], &[], "three");
        t.commit_as("Linus", "linus@example.com", &[("a.txt", b"4\n")], &[], "four");

        let contributors = get_contributors(&t.repo).unwrap();
        let ranked: Vec<(&str, usize)> = contributors
            .iter()
            .map(|c| (c.email.as_str(), c.contributions))
            .collect();
        assert_eq!(
            ranked,
            vec![
                ("grace@example.com", 2),
                ("ada@example.com", 1),
                ("linus@example.com", 1),
            ]
        );
    }
}
