//! Table formatting utilities

use prettytable::{Cell, Row, Table};

/// Create a table with bold headers and no separators between rows
pub fn create_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_format(*prettytable::format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
    table.set_titles(Row::new(
        headers
            .iter()
            .map(|h| Cell::new(h).style_spec("b"))
            .collect(),
    ));
    table
}

/// Add a row to a table. Cells that hold a number are right aligned.
pub fn add_table_row<I>(table: &mut Table, cells: I)
where
    I: IntoIterator<Item = String>,
{
    let row_cells = cells
        .into_iter()
        .map(|s| {
            if !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()) {
                Cell::new(&s).style_spec("r")
            } else {
                Cell::new(&s)
            }
        })
        .collect();
    table.add_row(Row::new(row_cells));
}
