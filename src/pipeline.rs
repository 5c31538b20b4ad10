use crate::config::{QuarterlyConfig, SpreadConfig};
use crate::error::Result;
use crate::quarterly::normalize;
use crate::reconcile::{reconcile_with_summary, ReconcileSummary};
use crate::schema::PREVIOUS_PERIOD_PLACEHOLDER;
use crate::spreader::CategorySpreader;
use crate::table_io::{read_table, write_table};
use log::info;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Rows read from the input file, header included.
    pub rows_read: usize,
    /// Rows written to the output file, header included.
    pub rows_written: usize,
    /// Set when a previous period was subtracted.
    pub reconciliation: Option<ReconcileSummary>,
}

/// Runs the category spreader from input file to output file.
pub fn run_category_spread(config: &SpreadConfig) -> Result<RunReport> {
    config.validate()?;

    info!(
        "Spreading {} for year {} under '{}'",
        config.input.display(),
        config.year,
        config.category_label
    );

    let rows = read_table(&config.input)?;
    let table = CategorySpreader::default().spread(&rows, config.year, &config.category_label)?;
    let rows_written = write_table(&config.output, &table)?;

    info!(
        "Wrote {} long-format rows to {}",
        rows_written,
        config.output.display()
    );

    Ok(RunReport {
        rows_read: rows.len(),
        rows_written,
        reconciliation: None,
    })
}

/// Runs the quarterly normalizer, reconciling against the previous period
/// when one is configured.
pub fn run_quarterly(config: &QuarterlyConfig) -> Result<RunReport> {
    config.validate()?;

    info!(
        "Normalizing {} with report date '{}'",
        config.input.display(),
        config.report_date
    );

    let rows = read_table(&config.input)?;
    let mut table = normalize(&rows, &config.report_date)?;
    let mut reconciliation = None;

    if let Some(previous_path) = &config.previous {
        info!("Subtracting previous period from {}", previous_path.display());

        let previous_rows = read_table(previous_path)?;
        let previous = normalize(&previous_rows, PREVIOUS_PERIOD_PLACEHOLDER)?;
        let (reconciled, summary) = reconcile_with_summary(&table, &previous)?;

        info!(
            "Reconciled {} rows ({} matched a previous line, {} did not)",
            reconciled.rows.len(),
            summary.matched,
            summary.unmatched
        );

        table = reconciled;
        reconciliation = Some(summary);
    }

    let rows_written = write_table(&config.output, &table)?;
    info!("Wrote {} rows to {}", rows_written, config.output.display());

    Ok(RunReport {
        rows_read: rows.len(),
        rows_written,
        reconciliation,
    })
}
