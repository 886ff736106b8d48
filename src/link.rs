use std::path::Path;

use crate::refspec::FileRef;

/// Which view of the file the composed URL opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkMode {
  Tree,
  Blame,
}

impl LinkMode {
  pub fn segment(self) -> &'static str {
    match self {
      LinkMode::Tree => "tree",
      LinkMode::Blame => "blame",
    }
  }
}

/// Compose the final browse URL: base, mode segment, revision, then the file
/// path relative to the working-tree root, plus an optional line fragment.
///
/// No validation that the path exists at that revision; the link is only as
/// good as the upstream anchor.
pub fn compose(
  base_url: &str,
  mode: LinkMode,
  rev: &str,
  abs_file: &Path,
  worktree_root: &Path,
  fref: &FileRef,
) -> String {
  let rel = abs_file.strip_prefix(worktree_root).unwrap_or(abs_file);

  let mut url = format!(
    "{}/{}/{}/{}",
    base_url.trim_end_matches('/'),
    mode.segment(),
    rev,
    rel.display()
  );

  match (fref.start, fref.end) {
    (Some(start), Some(end)) => url.push_str(&format!("#L{start}-L{end}")),
    (Some(start), None) => url.push_str(&format!("#L{start}")),
    _ => {}
  }

  url
}
