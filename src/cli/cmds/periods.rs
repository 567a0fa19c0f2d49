use crate::base;
use crate::cli;

/// List selectable periods
#[derive(clap::Parser)]
pub struct Periods {
    #[arg(
        help = cli::sharedopts::INTERVAL_HELP,
        long_help = cli::sharedopts::INTERVAL_HELP_LONG,
    )]
    interval: Option<base::Interval>,
}

impl Periods {
    pub fn run(&self, ws: base::Workingset) -> anyhow::Result<cli::Output> {
        let ws = cli::util::narrow(ws, self.interval)?;
        let options = base::drilldown::period_options(&ws);
        Ok(cli::Output::Str(cli::util::format_options(&options)))
    }
}
