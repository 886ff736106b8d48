use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::util::run_git;

/// The only hosting service we know how to compose URLs for.
const HOST: &str = "github.com";

/// Answers the three per-repository questions behind every link: where the
/// working tree starts, which revision a remote already has, and where the
/// repository lives on the web.
///
/// Each answer is cached for the lifetime of the resolver, so a batch of
/// files in one repository triggers at most one git invocation per question.
/// The working-tree cache keys on the queried directory; the revision and
/// base URL caches key on the resolved root, so distinct subdirectories of
/// one repository share entries.
pub struct GitResolver {
  worktree_cache: HashMap<PathBuf, PathBuf>,
  rev_cache: HashMap<PathBuf, String>,
  base_url_cache: HashMap<PathBuf, String>,
}

impl GitResolver {
  pub fn new() -> Self {
    GitResolver {
      worktree_cache: HashMap::new(),
      rev_cache: HashMap::new(),
      base_url_cache: HashMap::new(),
    }
  }

  /// Resolve the working-tree root for a directory.
  ///
  /// `rev-parse --absolute-git-dir` locates the repository; when the config
  /// defines an explicit `core.worktree` (submodules, bare-with-worktree
  /// setups) that path is resolved relative to the git dir, otherwise the
  /// root is the git dir's parent.
  pub fn worktree(&mut self, dir: &Path) -> Result<PathBuf> {
    if let Some(root) = self.worktree_cache.get(dir) {
      return Ok(root.clone());
    }

    let git_dir = match run_git(dir, &["rev-parse".into(), "--absolute-git-dir".into()]) {
      Ok(out) => PathBuf::from(out.trim()),
      Err(Error::GitCommand { .. }) => {
        return Err(Error::NotARepository { path: dir.to_path_buf() })
      }
      Err(e) => return Err(e),
    };

    let configured = run_git(dir, &["config".into(), "--get".into(), "core.worktree".into()])
      .map(|out| out.trim().to_string())
      .unwrap_or_default();

    let root = if configured.is_empty() {
      git_dir.parent().unwrap_or(&git_dir).to_path_buf()
    } else {
      // core.worktree is relative to the directory holding the git config
      crate::util::canonicalize_lossy(git_dir.join(configured))
    };

    self.worktree_cache.insert(dir.to_path_buf(), root.clone());
    Ok(root)
  }

  /// Find the most recent revision reachable from HEAD that a remote also
  /// has, abbreviated to 10 hex characters.
  ///
  /// Lists the commits on HEAD that no remote-tracking ref reaches; the
  /// parent of the oldest such commit is the anchor. When that list is
  /// empty, HEAD is already upstream and anchors itself.
  pub fn upstream_revision(&mut self, root: &Path) -> Result<String> {
    if let Some(rev) = self.rev_cache.get(root) {
      return Ok(rev.clone());
    }

    let local_only = run_git(
      root,
      &["log".into(), "HEAD".into(), "--oneline".into(), "--not".into(), "--remotes".into()],
    )?;

    let oldest = local_only.lines().map(str::trim).filter(|l| !l.is_empty()).last();
    let selector = match oldest {
      // "<rev> <subject>"
      Some(line) => format!("{}~1", line.split_whitespace().next().unwrap_or(line)),
      None => "HEAD".to_string(),
    };

    let out = run_git(
      root,
      &[
        "rev-list".into(),
        "--abbrev-commit".into(),
        "--abbrev=10".into(),
        "--max-count=1".into(),
        selector,
      ],
    )
    .map_err(|e| match e {
      Error::GitCommand { .. } => Error::NoUpstreamCommon,
      other => other,
    })?;

    let rev = out.trim().to_string();
    if rev.is_empty() {
      return Err(Error::NoUpstreamCommon);
    }

    self.rev_cache.insert(root.to_path_buf(), rev.clone());
    Ok(rev)
  }

  /// Derive the web base URL from the `origin` remote.
  pub fn base_url(&mut self, root: &Path) -> Result<String> {
    if let Some(url) = self.base_url_cache.get(root) {
      return Ok(url.clone());
    }

    let origin = run_git(
      root,
      &["config".into(), "--get".into(), "remote.origin.url".into()],
    )?;

    let url = remote_base_url(origin.trim())?;
    self.base_url_cache.insert(root.to_path_buf(), url.clone());
    Ok(url)
  }
}

/// Classify a remote URL and rewrite it as an https browse base.
///
/// Accepts the two shapes GitHub hands out: SSH (`git@github.com:org/repo`)
/// and HTTPS (`https://github.com/org/repo`), with or without a trailing
/// `.git`. Anything on another host, or in another shape, is rejected.
pub fn remote_base_url(origin: &str) -> Result<String> {
  let origin = origin.strip_suffix(".git").unwrap_or(origin);

  if !origin.contains(HOST) {
    return Err(Error::UnsupportedRemoteHost { origin: origin.to_string() });
  }

  let marker = format!("{HOST}/");

  let repo = if let Some(rest) = origin.strip_prefix("git@") {
    match rest.split_once(':') {
      Some((_, path)) if !path.is_empty() => path,
      _ => return Err(Error::MalformedRemoteUrl { origin: origin.to_string() }),
    }
  } else if origin.starts_with("https") {
    match origin.split_once(marker.as_str()) {
      Some((_, path)) if !path.is_empty() => path,
      _ => return Err(Error::MalformedRemoteUrl { origin: origin.to_string() }),
    }
  } else {
    return Err(Error::MalformedRemoteUrl { origin: origin.to_string() });
  };

  Ok(format!("https://{}/{}", HOST, repo.trim_matches('/')))
}
