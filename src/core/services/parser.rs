//! Line parser for `git for-each-ref` output
//!
//! Parses the combined raw-date format
//! `"<unix-seconds> <zone-offset> <object-id> <full-ref-path>"`. Exactly one
//! of committer date and tagger date is emitted per ref, so the first column
//! is always the authoritative seconds value; the zone offset in column 2 is
//! not needed once the seconds are in column 1 and is ignored.

use chrono::{DateTime, Utc};

use crate::core::error::RefListError;
use crate::core::models::RefRecord;

/// Parse one 4-column ref line into a [`RefRecord`]
///
/// The split is bounded at 4 parts so spaces inside the ref path stay in
/// the fourth column.
///
/// # Errors
///
/// [`RefListError::MalformedRefLine`] if the line has fewer than 4 columns
/// or the first column is not a valid unix timestamp.
pub fn parse_line(line: &str) -> Result<RefRecord, RefListError> {
    let mut columns = line.splitn(4, ' ');

    let seconds = columns
        .next()
        .filter(|c| !c.is_empty())
        .ok_or_else(|| RefListError::malformed(line, "expected 4 columns"))?;
    let _zone_offset = columns
        .next()
        .ok_or_else(|| RefListError::malformed(line, "expected 4 columns"))?;
    let object_id = columns
        .next()
        .ok_or_else(|| RefListError::malformed(line, "expected 4 columns"))?;
    let full_path = columns
        .next()
        .ok_or_else(|| RefListError::malformed(line, "expected 4 columns"))?;

    let timestamp = parse_unix_seconds(seconds)
        .ok_or_else(|| RefListError::malformed(line, format!("invalid timestamp {seconds:?}")))?;

    Ok(RefRecord::new(timestamp, object_id, full_path))
}

/// Parse a whole batch of ref lines
///
/// An empty batch is valid and yields an empty vec. A single bad line fails
/// the whole batch: silently skipping it would present a misleading ref
/// list downstream.
///
/// # Errors
///
/// [`RefListError::MalformedRefLine`] on the first bad line.
pub fn parse_lines<'a, I>(lines: I) -> Result<Vec<RefRecord>, RefListError>
where
    I: IntoIterator<Item = &'a str>,
{
    let records = lines
        .into_iter()
        .map(parse_line)
        .collect::<Result<Vec<_>, _>>()?;
    log::debug!("parsed {} ref line(s)", records.len());
    Ok(records)
}

/// Decode a decimal unix-seconds string into an instant
fn parse_unix_seconds(s: &str) -> Option<DateTime<Utc>> {
    let seconds = s.parse::<i64>().ok()?;
    DateTime::from_timestamp(seconds, 0)
}
