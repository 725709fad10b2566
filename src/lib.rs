//! # asciitable
//!
//! Read selected columns of whitespace-delimited ASCII tables into `f64`
//! vectors, and write float rows back out as aligned, commented tables.
//!
//! ## Table format
//!
//! - One row per `\n`-terminated line
//! - Tokens separated by a single delimiter byte (default: space)
//! - Everything after the comment byte (default: `#`) is ignored
//! - Blank and comment-only lines are skipped
//!
//! ## Quick Start
//!
//! ```no_run
//! use asciitable::{read_table, HeaderState, ReadTableOptions, TableWriter};
//!
//! // Columns 0 and 2 of every data line
//! let cols = read_table("input.txt", &[0, 2], &ReadTableOptions::default()).unwrap();
//!
//! let mut table = TableWriter::new(["x", "z"]);
//! table.add_columns(&cols).unwrap();
//! table.write(HeaderState::Keep, "output.txt").unwrap();
//! ```
//!
//! ## Compression
//!
//! Both reader and writer pick a compression method from the file extension:
//! `.zst`/`.zip` for Zstd and `.gz` for Deflate.

pub mod archive;
pub mod error;
pub mod table_reader;
pub mod table_writer;
pub mod text;

pub use error::{Result, TableError};
#[cfg(feature = "parallel")]
pub use table_reader::read_tables_parallel;
pub use table_reader::{read_table, ReadTableOptions, TableReader};
pub use table_writer::{HeaderState, TableWriter};
