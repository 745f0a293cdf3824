use anyhow::Context;

use museo_app::{AppConfig, run_day};
use museo_core::{SystemClock, TicketSequence};

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("reading museo configuration")?;
    museo_observability::init(config.log_format);

    tracing::info!(?config, "configuration loaded");

    let report = run_day(&config, TicketSequence::global(), &SystemClock)?;
    print!("{}", report.render(config.output)?);

    Ok(())
}
