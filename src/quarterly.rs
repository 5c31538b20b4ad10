use crate::error::{Result, WrangleError};
use crate::ministry::split_at_row;
use crate::schema::{
    NormalizedQuarterRow, QuarterTable, RawRow, MINISTRY_ID_LABEL, REPORT_DATE_LABEL,
};
use crate::utils::parse_integer_cell;
use log::debug;

/// Fields a raw ministry row must carry: composite ministry, other, agency
/// and cumulative amount.
pub const MINISTRY_ROW_FIELDS: usize = 4;
const AMOUNT_COLUMN: usize = 3;

/// Rebuilds a raw quarterly report into [`QuarterTable`] form.
///
/// The header gets an ID label in front and a report date label at the end,
/// whatever its cells say. Each data row has its ministry field split into
/// ID and name, the amount parsed as an integer, and `report_date` appended.
pub fn normalize(rows: &[RawRow], report_date: &str) -> Result<QuarterTable> {
    let Some((header, data)) = rows.split_first() else {
        return Ok(QuarterTable::default());
    };

    let mut new_header = Vec::with_capacity(header.len() + 2);
    new_header.push(MINISTRY_ID_LABEL.to_string());
    new_header.extend(header.iter().cloned());
    new_header.push(REPORT_DATE_LABEL.to_string());

    let normalized = data
        .iter()
        .enumerate()
        .map(|(offset, row)| normalize_row(row, offset + 1, report_date))
        .collect::<Result<Vec<_>>>()?;

    debug!(
        "Normalized {} quarterly rows stamped '{}'",
        normalized.len(),
        report_date
    );

    Ok(QuarterTable {
        header: Some(new_header),
        rows: normalized,
    })
}

fn normalize_row(row: &RawRow, row_idx: usize, report_date: &str) -> Result<NormalizedQuarterRow> {
    if row.len() < MINISTRY_ROW_FIELDS {
        return Err(WrangleError::MalformedRow {
            row: row_idx,
            expected: MINISTRY_ROW_FIELDS,
            found: row.len(),
        });
    }

    let (ministry_id, ministry_name) = split_at_row(&row[0], row_idx)?;
    let amount =
        parse_integer_cell(&row[AMOUNT_COLUMN]).ok_or_else(|| WrangleError::InvalidAmount {
            row: row_idx,
            column: AMOUNT_COLUMN,
            value: row[AMOUNT_COLUMN].clone(),
        })?;

    Ok(NormalizedQuarterRow {
        ministry_id,
        ministry_name,
        other: row[1].clone(),
        agency: row[2].clone(),
        amount,
        report_date: report_date.to_string(),
    })
}
