use anyhow::Result;
use clap::{CommandFactory, Parser};

mod batch;
mod cli;
mod error;
mod gitio;
mod link;
mod refspec;
mod util;

use crate::cli::{normalize, Cli};

fn main() -> Result<()> {
  let cli = Cli::parse();

  if cli.gen_man {
    let page = util::render_man_page::<Cli>()?;
    print!("{}", page);
    return Ok(());
  }

  // Phase 1: normalize CLI
  let cfg = normalize(cli)?;

  // Phase 2: collect tokens (positional args, or stdin when piped)
  let tokens = batch::gather_tokens(&cfg.files);

  if tokens.is_empty() {
    Cli::command().print_help()?;
    return Ok(());
  }

  // Phase 3: resolve tokens one at a time; failures are per-token
  if !batch::process_tokens(&cfg, &tokens) {
    std::process::exit(1);
  }

  Ok(())
}
