use crate::error::{Result, WrangleError};
use crate::schema::DEFAULT_CATEGORY_LABEL;
use clap::Parser;
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT: &str = "output.csv";

/// Spread a category × month table into one row per category and month.
#[derive(Debug, Clone, Parser)]
#[command(name = "spread-categories", version)]
pub struct SpreadConfig {
    /// Wide CSV with month names in the header and a totals row at the end
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,

    /// Where to write the long-format CSV
    #[arg(short = 'o', long = "output", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Year the months belong to
    #[arg(short = 'y', long = "year")]
    pub year: i32,

    /// Label for the first output column
    #[arg(short = 'c', long = "category", default_value = DEFAULT_CATEGORY_LABEL)]
    pub category_label: String,
}

impl SpreadConfig {
    pub fn validate(&self) -> Result<()> {
        require_path(&self.input, "-i <input-file>")?;
        require_path(&self.output, "-o <output-file>")?;
        Ok(())
    }
}

/// Split ministry IDs out of a quarterly report, stamp the report date and
/// optionally subtract the previous quarter's cumulative amounts.
#[derive(Debug, Clone, Parser)]
#[command(name = "wrangle-quarterly", version)]
pub struct QuarterlyConfig {
    /// Quarterly ministry expenditure CSV
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,

    /// Where to write the normalized CSV
    #[arg(short = 'o', long = "output", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Report date copied verbatim into every row
    #[arg(short = 'd', long = "date")]
    pub report_date: String,

    /// Previous quarter's raw report, in the same layout as the input
    #[arg(short = 'p', long = "previous")]
    pub previous: Option<PathBuf>,
}

impl QuarterlyConfig {
    pub fn validate(&self) -> Result<()> {
        require_path(&self.input, "-i <input-file>")?;
        require_path(&self.output, "-o <output-file>")?;
        if self.report_date.is_empty() {
            return Err(WrangleError::MissingRequiredArgument(
                "-d <report-date>".to_string(),
            ));
        }
        if let Some(previous) = &self.previous {
            require_path(previous, "-p <previous-file>")?;
        }
        Ok(())
    }
}

fn require_path(path: &Path, flag: &str) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(WrangleError::MissingRequiredArgument(flag.to_string()));
    }
    Ok(())
}
