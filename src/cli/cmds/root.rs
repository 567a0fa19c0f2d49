use anyhow::Context;

use crate::base;
use crate::cli;

/// Household ledger drill-down
#[derive(clap::Parser)]
#[command(color = clap::ColorChoice::Never)]
pub struct Root {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    Init(cli::cmds::init::Init),
    Sum(cli::cmds::sum::Sum),
    View(cli::cmds::view::View),
    Plot(cli::cmds::plot::Plot),
    Periods(cli::cmds::periods::Periods),
    Cats(cli::cmds::cats::Cats),
    Records(cli::cmds::records::Records),
}

impl Root {
    pub fn run(self, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        if let Commands::Init(cmd) = self.command {
            return cmd.run(fs);
        }

        if !fs.is_repo() {
            anyhow::bail!("not a repository")
        }
        let config = fs
            .read::<base::Config>()
            .with_context(|| format!("failed to read '{}'", fs.path::<base::Config>().display()))?;
        let raws = fs.read_source(&config).with_context(|| {
            format!("failed to read '{}'", fs.source_path(&config).display())
        })?;
        let ws = base::ingest(raws, config.schema()).working_set;

        match self.command {
            Commands::Init(_) => unreachable!(),
            Commands::Sum(cmd) => cmd.run(ws, &config),
            Commands::View(cmd) => cmd.run(ws, &config),
            Commands::Plot(cmd) => cmd.run(ws, &config),
            Commands::Periods(cmd) => cmd.run(ws),
            Commands::Cats(cmd) => cmd.run(ws),
            Commands::Records(cmd) => cmd.run(ws),
        }
    }
}
