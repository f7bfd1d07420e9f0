//! # lice
//!
//! A tool that automates license header comment blocks across C source
//! trees.

use std::process;

use clap::CommandFactory;

use lice::cli::{self, Cli};

fn main() {
  let args = Cli::parse_args();

  if let Err(e) = cli::run(args) {
    // Fatal tier: error plus usage on stderr, non-zero exit. Per-file
    // problems never reach here.
    eprintln!("Error: {e:#}");
    eprintln!();
    eprintln!("{}", Cli::command().render_usage());
    eprintln!("\nFor more information, try '--help'.");
    process::exit(1);
  }
}
