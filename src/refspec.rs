// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Split raw input tokens into a file path and an optional line anchor
// role: parsing/model
// inputs: One token of loosely formatted text (plain path, path:line, grep-style match line)
// outputs: FileRef with path and optional start/end lines
// invariants:
// - end is only set when start is set
// - a numeric component of 0 counts as "no anchor"
// - a malformed numeric component fails the token, never the process
// errors: InvalidLineSuffix carries the offending token
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};

/// A parsed input token: a filesystem path plus an optional line anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRef {
  pub path: String,
  pub start: Option<u32>,
  pub end: Option<u32>,
}

impl FileRef {
  fn plain(path: &str) -> Self {
    FileRef { path: path.to_string(), start: None, end: None }
  }
}

// The primary pattern assumes no colons appear in the filepath itself. This is
// to support output from `rg` and other grep-like utilities with shapes like
// "path/file:1: string that was matched": the first colon-number group wins
// and trailing match text is ignored.
static SUFFIX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(:[0-9\-]+){1,2}").unwrap());

// The fallback pattern only matches at the very end of the token, so paths
// containing colons survive. Opt-in via --colon-filenames.
static ANCHORED_SUFFIX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(:[0-9\-]+)+$").unwrap());

/// Split a token that MAY carry a start line, end line, and/or column number.
///
/// The goal is to match a start and an optional end line. A column number is
/// parsed but ignored, to support streaming results from grep-like tools.
///
/// Examples:
///   path/to/file.txt:1
///   path/to/file.txt:1-5
///   path/to/file.txt:1:2
pub fn parse(token: &str, colon_filenames: bool) -> Result<FileRef> {
  let re = if colon_filenames { &ANCHORED_SUFFIX_RE } else { &SUFFIX_RE };

  let Some(m) = re.find(token) else {
    return Ok(FileRef::plain(token));
  };

  let path = token[..m.start()].to_string();
  let suffix = m.as_str().trim_start_matches(':');

  let number = |s: &str| -> Result<Option<u32>> {
    let n: u32 = s.parse().map_err(|_| Error::InvalidLineSuffix { token: token.to_string() })?;
    Ok((n > 0).then_some(n))
  };

  // Suffix is either "1", "1-5", or "1:2".
  if let Some((line, _column)) = suffix.split_once(':') {
    return Ok(FileRef { path, start: number(line)?, end: None });
  }

  if let Some((start, end)) = suffix.split_once('-') {
    let start = number(start)?;
    // A zeroed start clears the whole anchor; end never stands alone.
    let end = number(end)?.filter(|_| start.is_some());
    return Ok(FileRef { path, start, end });
  }

  Ok(FileRef { path, start: number(suffix)?, end: None })
}

#[cfg(test)]
mod tests {
  use super::*;

  fn ok(token: &str, colon_filenames: bool) -> FileRef {
    parse(token, colon_filenames).unwrap()
  }

  #[test]
  fn plain_path_has_no_anchor() {
    let r = ok("path/to/file.txt", false);
    assert_eq!(r.path, "path/to/file.txt");
    assert_eq!(r.start, None);
    assert_eq!(r.end, None);
  }

  #[test]
  fn single_line_suffix() {
    let r = ok("path/to/file.txt:1", false);
    assert_eq!(r.path, "path/to/file.txt");
    assert_eq!(r.start, Some(1));
    assert_eq!(r.end, None);
  }

  #[test]
  fn line_range_suffix() {
    let r = ok("path/to/file.txt:1-100", false);
    assert_eq!(r.path, "path/to/file.txt");
    assert_eq!(r.start, Some(1));
    assert_eq!(r.end, Some(100));
  }

  #[test]
  fn column_number_is_discarded() {
    let r = ok("path/to/file.txt:1:20", false);
    assert_eq!(r.path, "path/to/file.txt");
    assert_eq!(r.start, Some(1));
    assert_eq!(r.end, None);
  }

  #[test]
  fn grep_match_text_is_ignored() {
    let r = ok("foo/bar/baz/qux.go:3:import (", false);
    assert_eq!(r.path, "foo/bar/baz/qux.go");
    assert_eq!(r.start, Some(3));
    assert_eq!(r.end, None);
  }

  #[test]
  fn colon_filenames_anchor_suffix_to_token_end() {
    let r = ok("path/to/t:123/file.txt:1:20", true);
    assert_eq!(r.path, "path/to/t:123/file.txt");
    assert_eq!(r.start, Some(1));
    assert_eq!(r.end, None);
  }

  #[test]
  fn default_mode_splits_on_first_colon_group() {
    // Known trade-off: without --colon-filenames, a colon-containing path is
    // split at the first numeric group.
    let r = ok("path/to/t:123/file.txt:1:20", false);
    assert_eq!(r.path, "path/to/t");
  }

  #[test]
  fn zero_counts_as_no_anchor() {
    let r = ok("file.txt:0", false);
    assert_eq!(r.path, "file.txt");
    assert_eq!(r.start, None);
  }

  #[test]
  fn zero_start_clears_the_whole_anchor() {
    let r = ok("file.txt:0-5", false);
    assert_eq!(r.path, "file.txt");
    assert_eq!(r.start, None);
    assert_eq!(r.end, None);
  }

  #[test]
  fn zero_start_range_still_validates_the_end() {
    let err = parse("file.txt:0-x", false).unwrap_err();
    assert!(matches!(err, Error::InvalidLineSuffix { .. }));
  }

  #[test]
  fn malformed_range_is_a_token_error() {
    let err = parse("file.txt:1-2-3", false).unwrap_err();
    assert!(matches!(err, Error::InvalidLineSuffix { .. }));
  }

  #[test]
  fn open_ended_range_is_a_token_error() {
    let err = parse("file.txt:5-", false).unwrap_err();
    assert!(matches!(err, Error::InvalidLineSuffix { .. }));
  }
}
