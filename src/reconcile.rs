//! Turns cumulative year-to-date ministry amounts into per-period amounts.
//!
//! Quarterly reports carry running totals since the start of the fiscal
//! year. Subtracting the previous report's total for the same
//! (ministry name, agency) line isolates what was spent in the quarter.

use crate::error::{Result, WrangleError};
use crate::schema::{MinistryKey, NormalizedQuarterRow, QuarterTable};
use log::{debug, warn};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileSummary {
    /// Current rows that found a previous-period amount.
    pub matched: usize,
    /// Current rows with no previous line, kept at their cumulative amount.
    pub unmatched: usize,
    /// Previous rows whose key was overwritten by a later duplicate.
    pub duplicate_previous_keys: usize,
}

/// Position of the amount in a normalized quarterly row.
const AMOUNT_COLUMN: usize = 4;

pub struct PeriodReconciler {
    previous_amounts: HashMap<MinistryKey, i64>,
    duplicate_previous_keys: usize,
}

impl PeriodReconciler {
    /// Indexes the previous period's data rows. A key seen twice keeps the
    /// later amount.
    pub fn new(previous: &QuarterTable) -> Self {
        let mut previous_amounts = HashMap::with_capacity(previous.rows.len());
        let mut duplicate_previous_keys = 0;

        for row in &previous.rows {
            if previous_amounts.insert(row.key(), row.amount).is_some() {
                duplicate_previous_keys += 1;
            }
        }

        if duplicate_previous_keys > 0 {
            warn!(
                "Previous period has {} duplicate ministry/agency keys; later rows win",
                duplicate_previous_keys
            );
        }

        Self {
            previous_amounts,
            duplicate_previous_keys,
        }
    }

    pub fn previous_amount(&self, key: &MinistryKey) -> Option<i64> {
        self.previous_amounts.get(key).copied()
    }

    /// Returns a new table; `current` is left untouched. A difference that
    /// does not fit in an `i64` fails the whole run.
    pub fn apply(&self, current: &QuarterTable) -> Result<(QuarterTable, ReconcileSummary)> {
        let mut summary = ReconcileSummary {
            duplicate_previous_keys: self.duplicate_previous_keys,
            ..Default::default()
        };

        let rows = current
            .rows
            .iter()
            .enumerate()
            .map(|(offset, row)| -> Result<NormalizedQuarterRow> {
                let previous = match self.previous_amount(&row.key()) {
                    Some(amount) => {
                        summary.matched += 1;
                        amount
                    }
                    None => {
                        summary.unmatched += 1;
                        0
                    }
                };

                let amount = row.amount.checked_sub(previous).ok_or_else(|| {
                    WrangleError::InvalidAmount {
                        row: offset + 1,
                        column: AMOUNT_COLUMN,
                        value: format!("{} - {}", row.amount, previous),
                    }
                })?;

                Ok(NormalizedQuarterRow {
                    amount,
                    ..row.clone()
                })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            "Reconciled {} rows: {} matched, {} without a previous period",
            current.rows.len(),
            summary.matched,
            summary.unmatched
        );

        Ok((
            QuarterTable {
                header: current.header.clone(),
                rows,
            },
            summary,
        ))
    }
}

pub fn reconcile(current: &QuarterTable, previous: &QuarterTable) -> Result<QuarterTable> {
    reconcile_with_summary(current, previous).map(|(table, _)| table)
}

pub fn reconcile_with_summary(
    current: &QuarterTable,
    previous: &QuarterTable,
) -> Result<(QuarterTable, ReconcileSummary)> {
    PeriodReconciler::new(previous).apply(current)
}
