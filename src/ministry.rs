use crate::error::{Result, WrangleError};

/// Width of the ministry ID prefix, in characters.
pub const MINISTRY_ID_WIDTH: usize = 2;

/// Splits a composite field such as `"02 Mennta- og menningarmálaráðuneyti"`
/// into its ID (`"02"`) and trimmed name.
///
/// The ID is whatever the first two characters are. Nothing checks that
/// they are digits; published data already relies on this.
pub fn split_ministry_name(field: &str) -> Result<(String, String)> {
    split_at_row(field, 0)
}

/// Like [`split_ministry_name`] but reports `row` in the error.
pub(crate) fn split_at_row(field: &str, row: usize) -> Result<(String, String)> {
    if field.chars().count() < MINISTRY_ID_WIDTH {
        return Err(WrangleError::FieldTooShort {
            row,
            field: field.to_string(),
        });
    }

    let boundary = field
        .char_indices()
        .nth(MINISTRY_ID_WIDTH)
        .map(|(idx, _)| idx)
        .unwrap_or(field.len());
    let (id, name) = field.split_at(boundary);
    Ok((id.to_string(), name.trim().to_string()))
}
