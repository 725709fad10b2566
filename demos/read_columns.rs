//! Read two columns of a table and write them back out
//!
//! Run with: cargo run --example read_columns -- input.txt [output.txt]

use asciitable::{read_table, HeaderState, ReadTableOptions, Result, TableWriter};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let input = args.get(1).map(String::as_str).unwrap_or("table.txt");

    let cols = read_table(input, &[0, 2], &ReadTableOptions::default())?;
    println!("1st column: {:.2?}", cols[0]);
    println!("3rd column: {:.2?}", cols[1]);

    let mut table = TableWriter::new(["col0", "col2"]);
    table.set_header(&format!("columns 0 and 2 of {}", input));
    table.add_columns(&cols)?;

    match args.get(2) {
        Some(output) => {
            table.write(HeaderState::Keep, output)?;
            println!("Wrote {} rows to {}", table.row_count(), output);
        }
        None => table.print(HeaderState::Keep),
    }

    Ok(())
}
