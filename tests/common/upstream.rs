use assert_fs::TempDir;
use derive_new::new;
use fake::Fake;
use fake::faker::lorem::en::Words;
use git2::{Oid, Repository, RepositoryInitOptions, Signature, Time};
use rstest::fixture;
use std::collections::BTreeMap;
use std::path::Path;
use walkdir::WalkDir;

pub const DEFAULT_BRANCH: &str = "master";
pub const TRACKED_BRANCH: &str = "stable/rocky";

/// Local stand-in for the remote repository.
///
/// History on `master`: `first` -> `second` -> `third`.
/// `stable/rocky` points at `second`.
#[derive(Debug, new)]
pub struct Upstream {
    pub dir: TempDir,
    pub first: Oid,
    pub second: Oid,
    pub third: Oid,
}

impl Upstream {
    pub fn url(&self) -> String {
        format!("file://{}", self.dir.path().display())
    }
}

#[fixture]
pub fn upstream() -> Upstream {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut opts = RepositoryInitOptions::new();
    opts.initial_head(DEFAULT_BRANCH);
    let repo = Repository::init_opts(dir.path(), &opts).expect("Failed to init upstream");

    let notes = Words(5..10).fake::<Vec<String>>().join(" ");
    let first = commit_files(
        &repo,
        &[("1.txt", "one"), ("a/2.txt", "two"), ("notes.txt", notes.as_str())],
        &[],
        "Initial commit\n\nSeed files for checkout tests\n",
    );
    let second = commit_files(
        &repo,
        &[("1.txt", "one, revised"), ("a/b/3.txt", "three")],
        &[],
        "Second commit",
    );
    let third = commit_files(&repo, &[("4.txt", "four")], &["a/2.txt"], "Third commit");

    let second_commit = repo.find_commit(second).expect("second commit exists");
    repo.branch(TRACKED_BRANCH, &second_commit, false)
        .expect("Failed to create tracked branch");
    drop(second_commit);
    drop(repo);

    Upstream::new(dir, first, second, third)
}

/// Writes `files`, deletes `removed` and commits the result on HEAD.
pub fn commit_files(
    repo: &Repository,
    files: &[(&str, &str)],
    removed: &[&str],
    message: &str,
) -> Oid {
    let workdir = repo.workdir().expect("non-bare repository");
    let mut index = repo.index().expect("index");

    for (path, content) in files {
        let full_path = workdir.join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directory");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        index.add_path(Path::new(path)).expect("Failed to stage file");
    }
    for path in removed {
        std::fs::remove_file(workdir.join(path)).expect("Failed to delete file");
        index.remove_path(Path::new(path)).expect("Failed to unstage file");
    }
    index.write().expect("Failed to write index");

    let tree_oid = index.write_tree().expect("Failed to write tree");
    let tree = repo.find_tree(tree_oid).expect("tree exists");
    let signature = Signature::new(
        "fake_user",
        "fake_email@email.com",
        &Time::new(1_672_574_400, 120),
    )
    .expect("valid signature");

    let parent = repo.head().ok().and_then(|head| head.peel_to_commit().ok());
    let parents = parent.iter().collect::<Vec<_>>();

    repo.commit(
        Some("HEAD"),
        &signature,
        &signature,
        message,
        &tree,
        &parents,
    )
    .expect("Failed to commit")
}

/// File contents of the tree of `commit`, keyed by path relative to the root.
pub fn tree_snapshot(repo_path: &Path, commit: Oid) -> BTreeMap<String, String> {
    let repo = Repository::open(repo_path).expect("Failed to open repository");
    let tree = repo
        .find_commit(commit)
        .and_then(|commit| commit.tree())
        .expect("commit tree exists");

    let mut snapshot = BTreeMap::new();
    tree.walk(git2::TreeWalkMode::PreOrder, |root, entry| {
        if entry.kind() == Some(git2::ObjectType::Blob) {
            let blob = repo.find_blob(entry.id()).expect("blob exists");
            let name = entry.name().expect("utf-8 entry name");
            snapshot.insert(
                format!("{root}{name}"),
                String::from_utf8_lossy(blob.content()).to_string(),
            );
        }
        git2::TreeWalkResult::Ok
    })
    .expect("Failed to walk tree");

    snapshot
}

/// File contents of a working directory, `.git` excluded.
pub fn workdir_snapshot(workdir: &Path) -> BTreeMap<String, String> {
    WalkDir::new(workdir)
        .into_iter()
        .filter_entry(|entry| entry.file_name() != ".git")
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            let relative = entry
                .path()
                .strip_prefix(workdir)
                .expect("entry below workdir")
                .to_string_lossy()
                .replace('\\', "/");
            let content = std::fs::read_to_string(entry.path()).expect("readable file");
            (relative, content)
        })
        .collect()
}

/// Single directory created below `base_dir`, if any.
pub fn only_clone_dir(base_dir: &Path) -> Option<std::path::PathBuf> {
    let mut entries = std::fs::read_dir(base_dir)
        .ok()?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .collect::<Vec<_>>();

    match entries.len() {
        1 => entries.pop(),
        _ => None,
    }
}
