//! Column extraction from whitespace-delimited ASCII tables
//!
//! The whole source is loaded into memory once. Lines and tokens are borrowed
//! views into that buffer, so the only allocations per read are the output
//! columns, the line slots and one token scratch buffer reused for every line.

use crate::archive;
use crate::error::{Result, TableError};
use crate::text::{comment_boundary, count_separators, split_in_place};
use log::{debug, trace};
use std::path::Path;

/// Delimiter and comment configuration for reading a table
///
/// # Examples
///
/// ```
/// use asciitable::ReadTableOptions;
///
/// let csv_like = ReadTableOptions {
///     delimiter: b',',
///     ..ReadTableOptions::default()
/// };
/// assert_eq!(csv_like.comment, b'#');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReadTableOptions {
    /// Byte separating tokens on a line
    pub delimiter: u8,
    /// Byte introducing a comment that runs to the end of the line
    pub comment: u8,
}

impl Default for ReadTableOptions {
    fn default() -> Self {
        ReadTableOptions {
            delimiter: b' ',
            comment: b'#',
        }
    }
}

/// Reader for ASCII tables of floating-point columns
///
/// Holds the entire source text. Columns are extracted by token position
/// with [`TableReader::read_columns`], which may be called any number of times.
///
/// # Examples
///
/// ```no_run
/// use asciitable::TableReader;
///
/// let reader = TableReader::open("halos.txt").unwrap();
/// let cols = reader.read_columns(&[0, 2]).unwrap();
/// println!("first column: {:?}", cols[0]);
/// ```
///
/// # Custom delimiter
///
/// ```
/// use asciitable::TableReader;
///
/// let reader = TableReader::from_bytes("1,2\n3,4\n").delimiter(b',');
/// assert_eq!(reader.read_columns(&[1]).unwrap(), vec![vec![2.0, 4.0]]);
/// ```
pub struct TableReader {
    source: Vec<u8>,
    options: ReadTableOptions,
}

impl TableReader {
    /// Load a table file - auto-detects compression from file extension
    ///
    /// # File Extensions
    /// - `.zst`, `.zip` → Zstd archive
    /// - `.gz` → Deflate archive
    /// - anything else → plain text
    ///
    /// Archives are expected to hold the table as a single entry; the first
    /// `.txt` or `.dat` entry is used, falling back to the first entry.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();

        let source = if archive::compression_for(path_ref).is_some() {
            archive::read(path_ref)?
        } else {
            std::fs::read(path_ref)?
        };

        debug!("loaded {} bytes from {}", source.len(), path_ref.display());
        Ok(Self::from_bytes(source))
    }

    /// Use an in-memory buffer as the table source
    pub fn from_bytes(data: impl Into<Vec<u8>>) -> Self {
        TableReader {
            source: data.into(),
            options: ReadTableOptions::default(),
        }
    }

    /// Set custom delimiter (builder pattern)
    pub fn delimiter(mut self, delim: u8) -> Self {
        self.options.delimiter = delim;
        self
    }

    /// Set custom comment character (builder pattern)
    pub fn comment(mut self, comment: u8) -> Self {
        self.options.comment = comment;
        self
    }

    /// Replace both delimiter and comment character (builder pattern)
    pub fn options(mut self, options: ReadTableOptions) -> Self {
        self.options = options;
        self
    }

    /// Extract the requested token positions as float columns
    ///
    /// The result holds one vector per entry of `columns`, in request order,
    /// each with one value per data line. Blank and comment-only lines are
    /// skipped. Any other line must have at least `max(columns) + 1` tokens,
    /// and every requested token must parse as an `f64`; otherwise the whole
    /// read fails with the offending physical line number (0-based).
    ///
    /// A final line without a terminating newline is not read.
    pub fn read_columns(&self, columns: &[usize]) -> Result<Vec<Vec<f64>>> {
        let mut lines: Vec<&[u8]> = vec![&[][..]; count_separators(&self.source, b'\n')];
        let n = split_in_place(&self.source, b'\n', &mut lines);
        lines.truncate(n);

        let longest = lines.iter().map(|line| line.len()).max().unwrap_or(0);
        let mut parser = LineParser::new(columns, &self.options, longest)?;
        let mut out: Vec<Vec<f64>> = columns.iter().map(|_| vec![0.0; lines.len()]).collect();
        let mut rows = 0;

        for &line in &lines {
            match parser.parse_line(line, rows, &mut out) {
                Ok(true) => rows += 1,
                Ok(false) => {}
                Err(fault) => return Err(fault.at_line(self.physical_line(line))),
            }
        }

        for col in &mut out {
            col.truncate(rows);
        }

        debug!(
            "read {} rows x {} columns from {} lines",
            rows,
            columns.len(),
            lines.len()
        );
        Ok(out)
    }

    /// Physical line number of a line view borrowed from `source`
    fn physical_line(&self, line: &[u8]) -> usize {
        let offset = line.as_ptr() as usize - self.source.as_ptr() as usize;
        count_separators(&self.source[..offset], b'\n')
    }
}

/// Read the requested columns of a table file
///
/// Convenience wrapper around [`TableReader::open`] and
/// [`TableReader::read_columns`].
///
/// # Examples
///
/// ```no_run
/// use asciitable::{read_table, ReadTableOptions};
///
/// let cols = read_table("halos.txt", &[2, 0], &ReadTableOptions::default()).unwrap();
/// assert_eq!(cols.len(), 2);
/// ```
pub fn read_table<P: AsRef<Path>>(
    path: P,
    columns: &[usize],
    options: &ReadTableOptions,
) -> Result<Vec<Vec<f64>>> {
    TableReader::open(path)?
        .options(*options)
        .read_columns(columns)
}

/// Read the same columns from several files in parallel
///
/// Each file is read independently; results are returned in input order.
#[cfg(feature = "parallel")]
pub fn read_tables_parallel<P: AsRef<Path> + Sync>(
    paths: &[P],
    columns: &[usize],
    options: &ReadTableOptions,
) -> Vec<Result<Vec<Vec<f64>>>> {
    use rayon::prelude::*;

    paths
        .par_iter()
        .map(|path| read_table(path, columns, options))
        .collect()
}

/// Why a single line was rejected, before its line number is known
#[derive(Debug, PartialEq)]
enum LineFault {
    ColumnCount { found: usize, expected: usize },
    InvalidNumber(String),
}

impl LineFault {
    fn at_line(self, line: usize) -> TableError {
        match self {
            LineFault::ColumnCount { found, expected } => TableError::ColumnCount {
                line,
                found,
                expected,
            },
            LineFault::InvalidNumber(token) => TableError::InvalidNumber { line, token },
        }
    }
}

/// Per-line tokenizer and value parser
///
/// `tokens` is reused for every line; its slots are overwritten on each call.
/// It holds `expected` slots, or fewer when no line of the source is long
/// enough to contain that many tokens.
struct LineParser<'a, 'c> {
    columns: &'c [usize],
    tokens: Vec<&'a [u8]>,
    expected: usize,
    delimiter: u8,
    comment: u8,
}

impl<'a, 'c> LineParser<'a, 'c> {
    /// `longest_line` bounds the token count of any line: `len / 2 + 1`.
    fn new(
        columns: &'c [usize],
        options: &ReadTableOptions,
        longest_line: usize,
    ) -> Result<Self> {
        let max_column = columns.iter().copied().max().unwrap_or(0);
        let expected = max_column
            .checked_add(1)
            .ok_or(TableError::ColumnOutOfRange { column: max_column })?;
        let slots = expected.min(longest_line / 2 + 1);

        Ok(LineParser {
            columns,
            tokens: vec![&[][..]; slots],
            expected,
            delimiter: options.delimiter,
            comment: options.comment,
        })
    }

    /// Parse one line into row `row` of `out`
    ///
    /// Returns `Ok(false)` for lines with no tokens.
    fn parse_line(
        &mut self,
        line: &'a [u8],
        row: usize,
        out: &mut [Vec<f64>],
    ) -> std::result::Result<bool, LineFault> {
        let data = &line[..comment_boundary(line, self.comment)];
        let found = split_in_place(data, self.delimiter, &mut self.tokens);

        if found == 0 {
            trace!("skipping line without data");
            return Ok(false);
        }

        if found < self.expected {
            return Err(LineFault::ColumnCount {
                found,
                expected: self.expected,
            });
        }

        for (col, &idx) in self.columns.iter().enumerate() {
            out[col][row] = parse_token(self.tokens[idx])?;
        }

        Ok(true)
    }
}

fn parse_token(token: &[u8]) -> std::result::Result<f64, LineFault> {
    std::str::from_utf8(token)
        .ok()
        .and_then(|text| text.parse::<f64>().ok())
        .ok_or_else(|| LineFault::InvalidNumber(String::from_utf8_lossy(token).into_owned()))
}
