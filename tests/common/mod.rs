use std::path::{Path, PathBuf};
use std::process::Command;

#[allow(dead_code)]
pub fn run(repo: &Path, args: &[&str]) {
  let status = Command::new("git").args(args).current_dir(repo).status().unwrap();
  assert!(status.success(), "git {:?} failed", args);
}

#[allow(dead_code)]
pub fn git_stdout(repo: &Path, args: &[&str]) -> String {
  let out = Command::new("git").args(args).current_dir(repo).output().unwrap();
  assert!(out.status.success(), "git {:?} failed", args);
  String::from_utf8_lossy(&out.stdout).trim().to_string()
}

/// Build a repository with an `origin` pointing at GitHub and a
/// remote-tracking ref marking HEAD as pushed, without any network access.
#[allow(dead_code)]
pub fn fixture_repo() -> tempfile::TempDir {
  let dir = tempfile::TempDir::new().unwrap();

  // init repo
  run(dir.path(), &["init", "-q", "-b", "main"]);
  run(dir.path(), &["config", "user.name", "Fixture Bot"]);
  run(dir.path(), &["config", "user.email", "fixture@example.com"]);
  run(dir.path(), &["config", "commit.gpgsign", "false"]);
  run(dir.path(), &["remote", "add", "origin", "git@github.com:acme/widgets.git"]);

  std::fs::write(dir.path().join("README.md"), "# widgets\n").unwrap();
  std::fs::create_dir_all(dir.path().join("docs")).unwrap();
  std::fs::write(dir.path().join("docs/guide.md"), "guide\n").unwrap();

  run(dir.path(), &["add", "."]);
  run(dir.path(), &["commit", "-q", "-m", "initial import"]);

  // Mark everything as known upstream.
  run(dir.path(), &["update-ref", "refs/remotes/origin/main", "HEAD"]);

  dir
}

/// Add a commit the remote has never seen.
#[allow(dead_code)]
pub fn add_local_commit(repo: &Path, name: &str) {
  std::fs::write(repo.join(name), format!("{}\n", name)).unwrap();
  run(repo, &["add", "."]);
  run(repo, &["commit", "-q", "-m", &format!("local: {}", name)]);
}

/// The 10-character abbreviated revision for a selector, matching what the
/// resolver asks git for.
#[allow(dead_code)]
pub fn short_rev(repo: &Path, selector: &str) -> String {
  git_stdout(
    repo,
    &["rev-list", "--abbrev-commit", "--abbrev=10", "--max-count=1", selector],
  )
}

/// The fixture root as git reports it (symlinks resolved), so path
/// expectations line up with what the binary computes.
#[allow(dead_code)]
pub fn repo_root(dir: &tempfile::TempDir) -> PathBuf {
  dir.path().canonicalize().unwrap()
}
