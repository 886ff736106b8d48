// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Orchestrate per-token resolution: gather input, resolve each token, report outcomes
// role: processing/orchestrator
// inputs: EffectiveConfig; positional args or piped stdin lines
// outputs: One URL per resolved token on stdout; one diagnostic per failure on stderr
// side_effects: Reads stdin when piped; spawns git via GitResolver
// invariants:
// - one GitResolver per invocation; caches never outlive the batch
// - failures are per-token; the batch always runs to completion
// - stdout carries only URLs, stderr only diagnostics
// - stdin is consulted only when it is a named pipe; null/file redirections keep the argument list
// errors: Collected per token; the bool result signals "at least one success"
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::io::Read;
use std::path::Path;

use colored::Colorize;

use crate::cli::EffectiveConfig;
use crate::error::Result;
use crate::gitio::GitResolver;
use crate::link;
use crate::refspec;
use crate::util;

/// Whether stdin is a named pipe, i.e. the process sits on the right side of
/// a shell `|`. Redirections from regular files or the null device are not
/// pipes, so positional arguments keep working under CI and scripts.
#[cfg(unix)]
fn stdin_is_pipe() -> bool {
  use std::os::fd::AsFd;
  use std::os::unix::fs::FileTypeExt;

  let Ok(fd) = std::io::stdin().as_fd().try_clone_to_owned() else {
    return false;
  };
  std::fs::File::from(fd)
    .metadata()
    .map(|m| m.file_type().is_fifo())
    .unwrap_or(false)
}

#[cfg(not(unix))]
fn stdin_is_pipe() -> bool {
  use std::io::IsTerminal;
  !std::io::stdin().is_terminal()
}

/// Collect the tokens to resolve: positional arguments, or the lines piped
/// into stdin. Pipe detection is independent of the argument count, and a
/// pipe that carries tokens wins over the arguments.
pub fn gather_tokens(files: &[String]) -> Vec<String> {
  if !stdin_is_pipe() {
    return files.to_vec();
  }

  let mut buf = String::new();
  if let Err(err) = std::io::stdin().read_to_string(&mut buf) {
    eprintln!("{}", format!("reading stdin: {}", err).yellow());
    return files.to_vec();
  }

  let tokens: Vec<String> = buf
    .lines()
    .map(str::trim)
    .filter(|l| !l.is_empty())
    .map(|l| l.to_string())
    .collect();

  // An empty pipe carries no instructions; keep the argument list.
  if tokens.is_empty() {
    return files.to_vec();
  }

  tokens
}

/// Resolve every token in order, printing URLs to stdout and per-token
/// diagnostics to stderr. Returns whether at least one token resolved.
// TODO: concurrency? Resolving across distinct repos is independent, but the
// first git queries of a new repo currently block the whole line.
pub fn process_tokens(cfg: &EffectiveConfig, tokens: &[String]) -> bool {
  let mut resolver = GitResolver::new();
  let mut success = false;

  for token in tokens {
    match resolve_token(cfg, &mut resolver, token) {
      Ok(url) => {
        println!("{}", url);
        success = true;
      }
      Err(err) => {
        eprintln!("{}", format!("{}: {}", token, err).yellow());
      }
    }
  }

  success
}

fn resolve_token(cfg: &EffectiveConfig, resolver: &mut GitResolver, token: &str) -> Result<String> {
  let fref = refspec::parse(token, cfg.colon_filenames)?;

  let abs_file = util::canonicalize_lossy(&fref.path);
  let file_dir = abs_file.parent().unwrap_or(Path::new("/"));

  let root = resolver.worktree(file_dir)?;
  let rev = resolver.upstream_revision(&root)?;
  let base_url = resolver.base_url(&root)?;

  Ok(link::compose(&base_url, cfg.mode, &rev, &abs_file, &root, &fref))
}
