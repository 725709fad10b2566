//! Aligned, commented ASCII table writing with compression support

use crate::archive;
use crate::error::{Result, TableError};
use crate::text::format_g;
use log::debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Narrowest column width, wide enough for `%.8g` output
const MIN_COL_WIDTH: usize = 13;

const SED_HINT: &str =
    "(use the command \"$ sed -e '/^#/d' -e 's/#.*$//' <filename>\" to remove comments)";

/// Whether the header block is emitted by [`TableWriter::write`] and friends
///
/// Dropping the header is useful when appending several tables to one log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderState {
    /// Emit the header block before the rows
    Keep,
    /// Emit rows only
    Remove,
}

/// Builder for ASCII tables of floats
///
/// Rows are formatted as they are added and kept in memory until the table
/// is written. Every column has the same width: the longest column name, but
/// at least 13 characters. Values are printed with `width - 5` significant
/// digits.
///
/// # Examples
///
/// ```no_run
/// use asciitable::{HeaderState, TableWriter};
///
/// let mut table = TableWriter::new(["x", "y"]);
/// table.set_header("generated by a test run");
/// table.add_row(&[1.0, 2.0]).unwrap();
/// table.inline_comment("first point");
/// table.write(HeaderState::Keep, "points.txt").unwrap();
/// ```
pub struct TableWriter {
    col_width: usize,
    cols: usize,

    user_header: String,
    col_names: String,

    rows: Vec<String>,
}

impl TableWriter {
    /// Create a table with the given column names
    pub fn new<I, S>(col_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<String> = col_names
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .collect();

        let col_width = names
            .iter()
            .map(|name| name.len())
            .fold(MIN_COL_WIDTH, usize::max);

        let col_names = names
            .iter()
            .map(|name| format!("{:>width$}", name, width = col_width))
            .collect::<Vec<_>>()
            .join(" ");

        TableWriter {
            col_width,
            cols: names.len(),
            user_header: String::new(),
            col_names,
            rows: Vec::new(),
        }
    }

    /// Set lines placed between the sed hint and the column names
    ///
    /// Each line is written as a `#` comment.
    pub fn set_header(&mut self, header: &str) {
        self.user_header = format!("{}\n", header);
    }

    /// Add a row of values, one per column
    pub fn add_row(&mut self, values: &[f64]) -> Result<()> {
        if values.len() != self.cols {
            return Err(TableError::InvalidState(format!(
                "Row has {} values, but the table has {} columns",
                values.len(),
                self.cols
            )));
        }

        let precision = self.col_width - 5;
        let cells: Vec<String> = values
            .iter()
            .map(|&v| format_g(v, self.col_width, precision))
            .collect();

        self.rows.push(format!("  {}", cells.join(" ")));
        Ok(())
    }

    /// Add one row per index of column-major data
    ///
    /// Accepts the shape returned by [`crate::TableReader::read_columns`].
    pub fn add_columns(&mut self, columns: &[Vec<f64>]) -> Result<()> {
        if columns.len() != self.cols {
            return Err(TableError::InvalidState(format!(
                "Got {} columns, but the table has {}",
                columns.len(),
                self.cols
            )));
        }

        let len = columns.first().map_or(0, Vec::len);
        if columns.iter().any(|col| col.len() != len) {
            return Err(TableError::InvalidState(
                "Columns have different lengths".to_string(),
            ));
        }

        let mut row = vec![0.0; self.cols];
        for i in 0..len {
            for (slot, col) in row.iter_mut().zip(columns) {
                *slot = col[i];
            }
            self.add_row(&row)?;
        }
        Ok(())
    }

    /// Add `text` as comment rows, one `#` line per line of text
    pub fn comment(&mut self, text: &str) {
        self.rows.extend(to_comments(text));
    }

    /// Append `text` as a comment at the end of the last row
    ///
    /// Further lines of `text` become comment rows after it. With no rows yet
    /// this behaves like [`TableWriter::comment`].
    pub fn inline_comment(&mut self, text: &str) {
        let mut comments = to_comments(text).into_iter();

        match self.rows.last_mut() {
            Some(last) => last.push(' '),
            None => self.rows.push(String::new()),
        }

        if let (Some(last), Some(first)) = (self.rows.last_mut(), comments.next()) {
            last.push_str(&first);
        }
        self.rows.extend(comments);
    }

    /// Header block: sed hint, user header and column names, all commented
    pub fn header(&self) -> String {
        let text = format!("{}\n{}{}", SED_HINT, self.user_header, self.col_names);
        to_comments(&text).join("\n")
    }

    /// Number of rows added so far (comment rows included)
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width of every column in characters
    pub fn col_width(&self) -> usize {
        self.col_width
    }

    /// Full table text, newline-terminated
    pub fn render(&self, header: HeaderState) -> String {
        let mut out = String::new();
        if header == HeaderState::Keep {
            out.push_str(&self.header());
            out.push('\n');
        }
        for row in &self.rows {
            out.push_str(row);
            out.push('\n');
        }
        out
    }

    /// Print the table to stdout
    pub fn print(&self, header: HeaderState) {
        print!("{}", self.render(header));
    }

    /// Write the table to `path` - auto-detects compression from file extension
    ///
    /// # File Extensions
    /// - `.zst` or `.zip` → Zstd compression (level 3)
    /// - `.gz` → Deflate compression (level 6)
    /// - anything else → plain text
    ///
    /// The file is created or truncated.
    pub fn write<P: AsRef<Path>>(&self, header: HeaderState, path: P) -> Result<()> {
        let path_ref = path.as_ref();
        let text = self.render(header);

        if let Some((method, level)) = archive::compression_for(path_ref) {
            archive::write(path_ref, method, level, text.as_bytes())?;
        } else {
            let file = File::create(path_ref).map_err(|e| {
                TableError::WriteError(format!("Failed to create table file: {}", e))
            })?;
            let mut writer = BufWriter::new(file);
            writer
                .write_all(text.as_bytes())
                .map_err(|e| TableError::WriteError(format!("Failed to write to file: {}", e)))?;
            writer
                .flush()
                .map_err(|e| TableError::WriteError(format!("Failed to flush file: {}", e)))?;
        }

        debug!("wrote {} rows to {}", self.rows.len(), path_ref.display());
        Ok(())
    }
}

fn to_comments(text: &str) -> Vec<String> {
    text.split('\n').map(|line| format!("# {}", line)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_width() {
        assert_eq!(TableWriter::new(["x"]).col_width(), 13);
        assert_eq!(
            TableWriter::new(["x", "a_very_long_column_name"]).col_width(),
            23
        );
    }

    #[test]
    fn test_row_format() -> Result<()> {
        let mut table = TableWriter::new(["x", "y"]);
        table.add_row(&[1.5, -2.0])?;
        assert_eq!(
            table.render(HeaderState::Remove),
            format!("  {:>13} {:>13}\n", "1.5", "-2")
        );
        Ok(())
    }

    #[test]
    fn test_row_width_mismatch() {
        let mut table = TableWriter::new(["x", "y"]);
        let err = table.add_row(&[1.0]).unwrap_err();
        assert!(matches!(err, TableError::InvalidState(_)));
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn test_header() {
        let mut table = TableWriter::new(["x"]);
        table.set_header("run 7\nseed 42");
        let expected = format!(
            "# {}\n# run 7\n# seed 42\n# {:>13}",
            SED_HINT, "x"
        );
        assert_eq!(table.header(), expected);
    }

    #[test]
    fn test_header_without_user_lines() {
        let table = TableWriter::new(["x"]);
        assert_eq!(table.header(), format!("# {}\n# {:>13}", SED_HINT, "x"));
    }

    #[test]
    fn test_comments() -> Result<()> {
        let mut table = TableWriter::new(["x"]);
        table.comment("first\nsecond");
        table.add_row(&[1.0])?;
        table.inline_comment("note\nmore");

        let rendered = table.render(HeaderState::Remove);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "# first");
        assert_eq!(lines[1], "# second");
        assert_eq!(lines[2], format!("  {:>13} # note", "1"));
        assert_eq!(lines[3], "# more");
        Ok(())
    }

    #[test]
    fn test_inline_comment_on_empty_table() {
        let mut table = TableWriter::new(["x"]);
        table.inline_comment("alone");
        assert_eq!(table.render(HeaderState::Remove), "# alone\n");
    }

    #[test]
    fn test_add_columns() -> Result<()> {
        let mut table = TableWriter::new(["a", "b"]);
        table.add_columns(&[vec![1.0, 2.0], vec![3.0, 4.0]])?;
        assert_eq!(table.row_count(), 2);

        let err = table
            .add_columns(&[vec![1.0], vec![3.0, 4.0]])
            .unwrap_err();
        assert!(matches!(err, TableError::InvalidState(_)));
        Ok(())
    }
}
