//! # lice
//!
//! A tool that automates source code license headers by scanning directory
//! trees and stamping every C source file with a block-comment header.
//!
//! `lice` reads a plain-text license file, formats it once as a `/* ... */`
//! block comment (the "golden header"), and then for every `.c`/`.h` file
//! under the given paths either confirms the header is already current,
//! replaces a stale leading block comment, or prepends the header when none
//! exists. Files are modified in place; a file that already starts with the
//! golden header is never rewritten, so repeated runs are no-ops.
//!
//! ## Features
//!
//! * Recursively scan directories and apply headers to `.c`/`.h` files
//! * Replace an outdated leading block comment instead of stacking headers
//! * Exclusion patterns matched against whole path components
//! * Per-file failures are warnings; the run continues with the next file
//!
//! ## Usage as a Library
//!
//! This crate can be used as a library in your Rust projects:
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use lice::exclude::ExcludePatterns;
//! use lice::header::GoldenHeader;
//! use lice::processor::Processor;
//!
//! fn main() -> anyhow::Result<()> {
//!     // Build the golden header once from the raw license text
//!     let header = GoldenHeader::load(Path::new("HEADER.txt"))?;
//!
//!     // Skip anything under a "vendor" path component
//!     let excludes = ExcludePatterns::new(vec!["vendor".to_string()]);
//!
//!     let mut processor = Processor::new(header, excludes);
//!     processor.process(&["src".to_string(), "include".to_string()]);
//!
//!     for report in processor.reports() {
//!         println!("{}: {:?}", report.path.display(), report.action);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`processor`] - Traversal driver and per-file header state machine
//! * [`header`] - Golden header loading and block-comment formatting
//! * [`exclude`] - Path-component exclusion matching
//! * [`logging`] - Logging utilities for verbose output
//!
//! [`processor`]: crate::processor
//! [`header`]: crate::header
//! [`exclude`]: crate::exclude
//! [`logging`]: crate::logging

pub mod cli;
pub mod exclude;
pub mod header;
pub mod logging;
pub mod output;
pub mod processor;
pub mod report;
