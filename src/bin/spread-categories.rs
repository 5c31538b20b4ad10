use anyhow::{Context, Result};
use clap::Parser;
use gov_report_wrangler::{run_category_spread, SpreadConfig};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SpreadConfig::parse();
    run_category_spread(&config).with_context(|| {
        format!(
            "failed to spread {} into {}",
            config.input.display(),
            config.output.display()
        )
    })?;

    Ok(())
}
