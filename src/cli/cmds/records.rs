use crate::base;
use crate::cli;

/// Print eligible records as JSON lines, in source order
#[derive(clap::Parser)]
pub struct Records {
    #[arg(
        help = cli::sharedopts::INTERVAL_HELP,
        long_help = cli::sharedopts::INTERVAL_HELP_LONG,
    )]
    interval: Option<base::Interval>,
}

impl Records {
    pub fn run(&self, ws: base::Workingset) -> anyhow::Result<cli::Output> {
        let ws = cli::util::narrow(ws, self.interval)?;
        Ok(if ws.is_empty() {
            cli::Output::Str("No transactions.".to_string())
        } else {
            cli::Output::Str(ws.to_string())
        })
    }
}
