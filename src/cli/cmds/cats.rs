use crate::base;
use crate::cli;

/// List selectable major categories
///
/// Only categories with at least one expense in the selected period are
/// listed.
#[derive(clap::Parser)]
pub struct Cats {
    #[arg(
        short,
        long,
        help = cli::sharedopts::INTERVAL_HELP,
        long_help = cli::sharedopts::INTERVAL_HELP_LONG,
    )]
    interval: Option<base::Interval>,

    /// Period whose categories to list [default: all periods]
    #[arg(short, long, value_name = "PERIOD")]
    period: Option<String>,

    /// Wildcard patterns to match categories of interest
    ///
    /// If multiple patterns are provided, include categories that match any
    /// pattern. The "all" entry is always listed.
    #[arg(value_name = "PATTERN", default_value = "*")]
    patterns: Vec<String>,
}

impl Cats {
    pub fn run(&self, ws: base::Workingset) -> anyhow::Result<cli::Output> {
        let ws = cli::util::narrow(ws, self.interval)?;
        let mut session = base::Session::new(ws);
        let views = session.set_period(self.period.clone());
        let patterns = self
            .patterns
            .iter()
            .map(|s| wildmatch::WildMatch::new(s))
            .collect::<Vec<_>>();
        let options = views
            .category_options
            .into_iter()
            .filter(|o| match o.as_only() {
                Some(s) => patterns.iter().any(|p| p.matches(s)),
                None => true,
            })
            .collect::<Vec<_>>();
        Ok(cli::Output::Str(cli::util::format_options(&options)))
    }
}
