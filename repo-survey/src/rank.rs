//! Ordering of enriched records for the report.

use crate::record::RepositoryRecord;
use chrono::{DateTime, NaiveDateTime, Utc};
use thiserror::Error;

/// Errors that can occur while ranking.
#[derive(Debug, Error)]
pub enum RankError {
    /// A record's last commit date is empty or not an ISO-8601 timestamp.
    #[error("Invalid last commit date '{value}' for '{repository}'")]
    InvalidCommitDate { repository: String, value: String },
}

/// Parses an ISO-8601 timestamp. Values without an offset are taken as UTC.
fn parse_commit_date(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Some(date.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Sorts records newest commit first, then by stars, and keeps the first `limit`.
///
/// Records that compare equal on both keys keep their input order.
///
/// # Errors
///
/// Returns [`RankError::InvalidCommitDate`] if any record's date cannot be
/// parsed, including repositories with no commits. Nothing is returned in
/// that case.
pub fn rank_records(
    records: Vec<RepositoryRecord>,
    limit: usize,
) -> Result<Vec<RepositoryRecord>, RankError> {
    let mut keyed = records
        .into_iter()
        .map(|record| match parse_commit_date(&record.last_commit) {
            Some(date) => Ok((date, record)),
            None => Err(RankError::InvalidCommitDate {
                repository: record.name.clone(),
                value: record.last_commit.clone(),
            }),
        })
        .collect::<Result<Vec<_>, _>>()?;

    keyed.sort_by(|(a_date, a), (b_date, b)| b_date.cmp(a_date).then(b.stars.cmp(&a.stars)));
    keyed.truncate(limit);

    Ok(keyed.into_iter().map(|(_, record)| record).collect())
}
