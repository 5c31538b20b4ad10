use anyhow::{Context, Result};
use clap::Parser;
use gov_report_wrangler::{run_quarterly, QuarterlyConfig};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = QuarterlyConfig::parse();
    let report = run_quarterly(&config).with_context(|| {
        format!(
            "failed to wrangle {} into {}",
            config.input.display(),
            config.output.display()
        )
    })?;

    if let Some(summary) = report.reconciliation {
        if summary.unmatched > 0 {
            log::warn!(
                "{} rows had no previous-period line and keep their cumulative amount",
                summary.unmatched
            );
        }
    }

    Ok(())
}
