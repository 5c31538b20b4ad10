//! CSV reading and writing at the edges of both pipelines.
//!
//! Input is read whole, header included, as raw rows. Output follows the
//! quote-all-non-numeric convention downstream consumers expect: text cells
//! are always quoted, integer cells never are, rows end in `\r\n`.
//!
//! The `csv` crate decides quoting by looking at cell contents, which would
//! leave a text ID such as `02` bare, so rendering is done here from the
//! typed [`Cell`]s instead.

use crate::error::{Result, WrangleError};
use crate::schema::{Cell, RawRow, ToCells};
use log::debug;
use std::io::{BufWriter, Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;

const BYTE_ORDER_MARK: char = '\u{feff}';
const LINE_TERMINATOR: &str = "\r\n";

pub fn read_table(path: &Path) -> Result<Vec<RawRow>> {
    if !path.exists() {
        return Err(WrangleError::FileNotFound(path.to_path_buf()));
    }

    let file = std::fs::File::open(path)?;
    let rows = read_table_from(file)?;
    debug!("Read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Reads every record, header included, without requiring equal widths.
pub fn read_table_from<R: Read>(reader: R) -> Result<Vec<RawRow>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect::<RawRow>());
    }

    if let Some(first) = rows.first_mut().and_then(|row| row.first_mut()) {
        if first.starts_with(BYTE_ORDER_MARK) {
            *first = first.trim_start_matches(BYTE_ORDER_MARK).to_string();
        }
    }

    Ok(rows)
}

fn render_cell(cell: &Cell) -> String {
    match cell {
        Cell::Integer(value) => value.to_string(),
        Cell::Text(text) => format!("\"{}\"", text.replace('"', "\"\"")),
    }
}

pub fn render_row(cells: &[Cell]) -> String {
    let mut line = cells.iter().map(render_cell).collect::<Vec<_>>().join(",");
    line.push_str(LINE_TERMINATOR);
    line
}

pub fn write_rows_to<W: Write>(writer: W, rows: &[Vec<Cell>]) -> Result<()> {
    let mut writer = BufWriter::new(writer);
    for row in rows {
        writer.write_all(render_row(row).as_bytes())?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes `table` to `path` all-or-nothing.
///
/// Rows go to a temporary file next to `path`, which replaces `path` only
/// once every row is written. On error an existing file at `path` is left
/// as it was.
pub fn write_table<T: ToCells>(path: &Path, table: &T) -> Result<usize> {
    let rows = table.to_cells();

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(dir)?;
    write_rows_to(staged.as_file_mut(), &rows)?;
    staged.as_file().sync_all()?;
    staged.persist(path).map_err(|err| err.error)?;

    debug!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(rows.len())
}
