use crate::base;
use crate::cli;

/// Plot income and expense over time
#[derive(clap::Parser)]
pub struct Plot {
    #[arg(
        help = cli::sharedopts::INTERVAL_HELP,
        long_help = cli::sharedopts::INTERVAL_HELP_LONG,
    )]
    interval: Option<base::Interval>,

    #[command(flatten)]
    units: Units,

    /// Chart width in columns [default: terminal width]
    #[arg(short, long, value_name = "COLUMNS")]
    width: Option<usize>,
}

#[derive(clap::Args)]
#[group(required = false, multiple = false)]
struct Units {
    /// Aggregate data by day
    #[arg(short)]
    d: bool,

    /// Aggregate data by month
    #[arg(short)]
    m: bool,

    /// Aggregate data by year
    #[arg(short)]
    y: bool,
}

impl Units {
    /// Falls back to a unit suited to the length of `bounds`.
    fn resolve(&self, bounds: base::Interval) -> base::Datepart {
        if self.y {
            base::Datepart::Year
        } else if self.m {
            base::Datepart::Month
        } else if self.d {
            base::Datepart::Day
        } else {
            base::Datepart::for_span(bounds)
        }
    }
}

impl Plot {
    pub fn run(self, ws: base::Workingset, config: &base::Config) -> anyhow::Result<cli::Output> {
        // The chart covers the requested range as far as the data reaches,
        // even where the narrowed records start later or end earlier.
        let bounds = ws
            .spanned_interval()
            .intersection(self.interval.unwrap_or(base::Interval::MAX));
        let ws = cli::util::narrow(ws, self.interval)?;
        let unit = self.units.resolve(bounds);
        Ok(cli::Output::Barchart(base::barchart::Config {
            charset: base::Charset::from_config(config),
            unit,
            term_width: self.width.unwrap_or_else(cli::util::term_width),
            buckets: base::time_series(ws.iter(), bounds, unit),
        }))
    }
}
