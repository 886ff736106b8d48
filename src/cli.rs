use anyhow::Result;
use clap::Parser;

use crate::link::LinkMode;

#[derive(Parser, Debug)]
#[command(
    name = "codelink",
    version,
    about = "Craft direct GitHub URLs to files in local working trees",
    long_about = "\
codelink crafts direct URLs to source on GitHub.

For every file given, it compares local revisions to those in origin. The most
recent common revision is used for the direct link, so links stay valid even
when HEAD carries unpushed commits. Line numbers and ranges are supported by
appending \":start[-end]\" to the filepath.

Files in trees that are not git repositories are skipped.",
    after_help = "\
Examples:
  codelink Makefile
  codelink Makefile:5-10
  codelink repo1/Makefile repo2/cmd/my-tool.go repo3/README.md:25-30

  rg 'search term' -n | codelink"
)]
pub struct Cli {
  /// Files to link, each optionally suffixed with :start[-end]
  pub files: Vec<String>,

  /// Use this if you have filenames or directories with ':' in them -
  /// otherwise parsing will fail
  #[arg(long)]
  pub colon_filenames: bool,

  /// Use this to return direct links to blame view
  #[arg(long)]
  pub blame: bool,

  /// Emit a troff man page to stdout (internal; for packaging)
  #[arg(long, hide = true)]
  pub gen_man: bool,
}

#[derive(Debug)]
pub struct EffectiveConfig {
  pub files: Vec<String>,
  pub colon_filenames: bool,
  pub mode: LinkMode,
}

pub fn normalize(cli: Cli) -> Result<EffectiveConfig> {
  let mode = if cli.blame { LinkMode::Blame } else { LinkMode::Tree };

  Ok(EffectiveConfig {
    files: cli.files,
    colon_filenames: cli.colon_filenames,
    mode,
  })
}
