use crate::base;
use crate::cli;

/// View drilled-down expenses, most recent first
#[derive(clap::Parser)]
pub struct View {
    #[arg(
        help = cli::sharedopts::INTERVAL_HELP,
        long_help = cli::sharedopts::INTERVAL_HELP_LONG,
    )]
    interval: Option<base::Interval>,

    #[command(flatten)]
    selection_opts: cli::sharedopts::SelectionOpts,
}

impl View {
    pub fn run(&self, ws: base::Workingset, config: &base::Config) -> anyhow::Result<cli::Output> {
        let ws = cli::util::narrow(ws, self.interval)?;
        let mut session = base::Session::new(ws);
        let views = self.selection_opts.apply(&mut session);
        Ok(cli::Output::TreeForView(base::tree::forview::Config {
            charset: base::Charset::from_config(config),
            rows: views.rows,
        }))
    }
}
