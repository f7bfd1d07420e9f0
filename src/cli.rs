//! # CLI Module
//!
//! Command-line surface and top-level run wiring. Argument parsing uses
//! clap; anything that fails before file processing begins is the fatal
//! error tier and propagates out of [`run`] for `main` to report.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use clap::builder::styling::{AnsiColor, Color, Style, Styles};
use tracing::debug;

use crate::exclude::ExcludePatterns;
use crate::header::GoldenHeader;
use crate::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use crate::output::{
  CategorizedReports, print_added_files, print_all_files_ok, print_blank_line, print_skipped_files, print_summary,
  print_updated_files,
};
use crate::processor::Processor;
use crate::report::ProcessingSummary;

const CUSTOM_STYLES: Styles = Styles::styled()
  .header(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .usage(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))).bold())
  .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
  .error(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold())
  .valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
  .invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))));

/// Top-level CLI arguments
#[derive(Parser, Debug)]
#[command(
  name = "lice",
  version,
  about = "Automate source code license headers",
  styles = CUSTOM_STYLES,
  after_help = "Examples:
  # Apply the license to the current directory
  lice -f HEADER.txt

  # Apply to 'src' and 'include', excluding 'vendor' and 'build'
  lice -f HEADER.txt -e vendor -e build src include
",
  help_template = "{before-help}{name} v{version}
{about-section}
{usage-heading} {usage}

{all-args}{after-help}
"
)]
pub struct Cli {
  /// Directories or files to process. Directories are processed
  /// recursively. Defaults to the current directory.
  #[arg(required = false)]
  pub paths: Vec<String>,

  /// Path to the license header file
  #[arg(long = "file", short = 'f', value_name = "PATH")]
  pub license_file: Option<PathBuf>,

  /// Exclude files or directories whose path contains this component
  /// (repeatable)
  #[arg(long = "exclude", short = 'e', value_name = "PATTERN")]
  pub exclude: Vec<String>,

  /// Increase verbosity (-v shows per-entry decisions and timing, -vv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,
}

impl Cli {
  /// Parse CLI arguments and return the Cli struct
  pub fn parse_args() -> Self {
    Self::parse()
  }
}

/// Runs the full apply pass for the parsed arguments.
///
/// Everything that returns `Err` from here is fatal: `main` prints the error
/// with the usage text and exits non-zero. Per-file problems never surface
/// here; they are logged as warnings and folded into the summary, and the
/// run still succeeds.
pub fn run(args: Cli) -> Result<()> {
  init_tracing(args.quiet, args.verbose);

  // Set the output mode for the info_log!/verbose_log! macros and lists
  if args.verbose > 0 {
    set_verbose();
  } else if args.quiet {
    set_quiet();
  }
  args.colors.apply();

  let license_file = args
    .license_file
    .as_deref()
    .ok_or_else(|| anyhow::anyhow!("Missing required argument: -f/--file <PATH>"))?;

  // The golden header is built once and shared read-only by every file.
  let golden_header = GoldenHeader::load(license_file)?;

  let targets = if args.paths.is_empty() {
    vec![".".to_string()]
  } else {
    args.paths
  };
  debug!("Processing {} target(s) with {} exclusion pattern(s)", targets.len(), args.exclude.len());

  let mut processor = Processor::new(golden_header, ExcludePatterns::new(args.exclude));

  let start_time = Instant::now();
  processor.process(&targets);
  let elapsed = start_time.elapsed();

  let reports = processor.into_reports();
  let summary = ProcessingSummary::from_reports(&reports, elapsed);
  let categorized = CategorizedReports::from_reports(&reports);

  print_blank_line();

  if categorized.is_all_ok() {
    print_all_files_ok();
  } else {
    if !categorized.added.is_empty() {
      print_added_files(&categorized.added);
    }
    if !categorized.updated.is_empty() {
      if !categorized.added.is_empty() {
        print_blank_line();
      }
      print_updated_files(&categorized.updated);
    }
    print_skipped_files(&categorized.skipped);
  }

  print_blank_line();
  print_summary(&summary);

  Ok(())
}
