use crate::error::Result;
use crate::git::{CommitCounter, TagLister};
use git2::Repository as Git2Repo;
use std::path::Path;

/// Wrapper around git2::Repository implementing the collaborator traits
///
/// A repository that could not be discovered is kept as its error, which
/// both collaborator calls return. The resolver then falls back instead of
/// the whole run failing.
pub struct Git2Repository {
    repo: std::result::Result<Git2Repo, git2::Error>,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo: Ok(repo) })
    }

    /// Discover a git repository, deferring any failure to the collaborator calls
    pub fn discover<P: AsRef<Path>>(path: P) -> Self {
        Git2Repository {
            repo: Git2Repo::discover(path),
        }
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo: Ok(repo) }
    }

    fn repo(&self) -> Result<&Git2Repo> {
        match &self.repo {
            Ok(repo) => Ok(repo),
            Err(e) => Err(git2::Error::new(e.code(), e.class(), e.message()).into()),
        }
    }
}

impl TagLister for Git2Repository {
    fn list_tags(&self, prefix: &str) -> Result<String> {
        let pattern = format!("{}*", prefix);
        let tags = self.repo()?.tag_names(Some(pattern.as_str()))?;

        Ok(tags.iter().flatten().collect::<Vec<_>>().join("\n"))
    }
}

impl CommitCounter for Git2Repository {
    fn count_commits(&self, since: Option<&str>) -> Result<String> {
        let repo = self.repo()?;
        let mut revwalk = repo.revwalk()?;
        revwalk.push_head()?;

        if let Some(tag_name) = since {
            // Annotated tags point at a tag object; hide the commit behind it.
            let commit = repo
                .find_reference(&format!("refs/tags/{}", tag_name))?
                .peel_to_commit()?;
            revwalk.hide(commit.id())?;
        }

        let mut count: u64 = 0;
        for oid in revwalk {
            oid?;
            count += 1;
        }

        Ok(count.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn commit(repo: &Git2Repo, message: &str) -> git2::Oid {
        let sig = git2::Signature::now("Test User", "test@example.com").unwrap();
        let tree_id = repo.index().unwrap().write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();
        repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .unwrap()
    }

    #[test]
    fn test_list_tags_filters_by_prefix() {
        let dir = TempDir::new().unwrap();
        let repo = Git2Repo::init(dir.path()).unwrap();
        let oid = commit(&repo, "initial");
        {
            let object = repo.find_object(oid, None).unwrap();
            repo.tag_lightweight("v1.0.0", &object, false).unwrap();
            repo.tag_lightweight("rel2.0.0", &object, false).unwrap();
        }

        let git = Git2Repository::from_git2(repo);
        let raw = git.list_tags("v").unwrap();
        assert_eq!(raw, "v1.0.0");
    }

    #[test]
    fn test_count_commits_since_annotated_tag() {
        let dir = TempDir::new().unwrap();
        let repo = Git2Repo::init(dir.path()).unwrap();
        let first = commit(&repo, "initial");
        {
            let sig = git2::Signature::now("Test User", "test@example.com").unwrap();
            let object = repo.find_object(first, None).unwrap();
            repo.tag("v1.0.0", &object, &sig, "release 1.0.0", false)
                .unwrap();
        }
        commit(&repo, "second");
        commit(&repo, "third");

        let git = Git2Repository::from_git2(repo);
        assert_eq!(git.count_commits(Some("v1.0.0")).unwrap(), "2");
        assert_eq!(git.count_commits(None).unwrap(), "3");
    }

    #[test]
    fn test_count_commits_unknown_tag_fails() {
        let dir = TempDir::new().unwrap();
        let repo = Git2Repo::init(dir.path()).unwrap();
        commit(&repo, "initial");

        let git = Git2Repository::from_git2(repo);
        assert!(git.count_commits(Some("v9.9.9")).is_err());
    }

    #[test]
    fn test_count_commits_without_head_fails() {
        let dir = TempDir::new().unwrap();
        let repo = Git2Repo::init(dir.path()).unwrap();

        let git = Git2Repository::from_git2(repo);
        assert!(git.count_commits(None).is_err());
        assert_eq!(git.list_tags("v").unwrap(), "");
    }

    #[test]
    fn test_discover_outside_repository_defers_error() {
        let dir = TempDir::new().unwrap();
        let ceiling = dir.path().parent().unwrap().to_path_buf();
        let missing = dir.path().join("not-a-repo");
        std::fs::create_dir(&missing).unwrap();

        // Only meaningful when no enclosing repository exists above the temp dir
        if Git2Repo::discover(&ceiling).is_ok() {
            return;
        }

        let git = Git2Repository::discover(&missing);
        assert!(git.list_tags("v").is_err());
        assert!(git.count_commits(None).is_err());
    }

    #[test]
    fn test_discover_inside_repository() {
        let dir = TempDir::new().unwrap();
        {
            let repo = Git2Repo::init(dir.path()).unwrap();
            commit(&repo, "initial");
        }

        let git = Git2Repository::discover(dir.path());
        assert_eq!(git.count_commits(None).unwrap(), "1");
    }
}
