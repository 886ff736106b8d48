use std::path::PathBuf;

/// Failures the resolver can hit for a single input token. Every variant is
/// recoverable at the batch boundary: the token is reported and skipped.
#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("not a git repository: {}", path.display())]
  NotARepository { path: PathBuf },

  #[error("no revision in common with a remote (is anything pushed?)")]
  NoUpstreamCommon,

  #[error("origin doesn't look like github.com: {origin}")]
  UnsupportedRemoteHost { origin: String },

  #[error("origin doesn't look like SSH or HTTPS: {origin}")]
  MalformedRemoteUrl { origin: String },

  #[error("invalid line suffix on `{token}`")]
  InvalidLineSuffix { token: String },

  #[error("spawning git {args:?}: {source}")]
  GitSpawn {
    args: Vec<String>,
    source: std::io::Error,
  },

  #[error("git {args:?} failed: {stderr}")]
  GitCommand { args: Vec<String>, stderr: String },
}

pub type Result<T> = std::result::Result<T, Error>;
