// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Utilities for path absolutization, git subprocess invocation, and man page rendering
// role: utilities/helpers
// inputs: Paths; git argument vectors; clap CommandFactory
// outputs: Absolute paths, captured git stdout, man page text
// side_effects: run_git invokes subprocesses
// invariants:
// - canonicalize_lossy always returns an absolute path when a cwd is available
// - run_git never mixes stdout into error text; stderr is captured into the error
// errors: run_git surfaces command + stderr; spawn failures carry the io cause
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::path::{Path, PathBuf};
use std::process::Command;

use clap::CommandFactory;

use crate::error::{Error, Result};

pub fn canonicalize_lossy<P: AsRef<Path>>(p: P) -> PathBuf {
  let p = p.as_ref();
  match std::fs::canonicalize(p) {
    Ok(x) => x,
    Err(_) => match std::env::current_dir() {
      Ok(cwd) => cwd.join(p),
      Err(_) => PathBuf::from(p),
    },
  }
}

pub fn run_git(cwd: &Path, args: &[String]) -> Result<String> {
  let out = Command::new("git")
    .args(args)
    .current_dir(cwd)
    .output()
    .map_err(|e| Error::GitSpawn { args: args.to_vec(), source: e })?;

  if out.status.success() {
    Ok(String::from_utf8_lossy(&out.stdout).to_string())
  } else {
    Err(Error::GitCommand {
      args: args.to_vec(),
      stderr: String::from_utf8_lossy(&out.stderr).trim().to_string(),
    })
  }
}

/// Render a section-1 man page for a clap `CommandFactory` implementor.
/// Returns the troff content as a UTF-8 string.
pub fn render_man_page<T: CommandFactory>() -> anyhow::Result<String> {
  let cmd = T::command();
  let man = clap_mangen::Man::new(cmd);
  let mut buf: Vec<u8> = Vec::new();

  man.render(&mut buf)?;

  Ok(String::from_utf8_lossy(&buf).to_string())
}
