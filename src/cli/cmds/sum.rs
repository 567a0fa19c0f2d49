use anyhow::Context;

use crate::base;
use crate::cli;

/// View income, expense and balance with expense breakdowns
#[derive(clap::Parser)]
pub struct Sum {
    #[arg(
        help = cli::sharedopts::INTERVAL_HELP,
        long_help = cli::sharedopts::INTERVAL_HELP_LONG,
    )]
    interval: Option<base::Interval>,

    #[command(flatten)]
    selection_opts: cli::sharedopts::SelectionOpts,

    /// Print every derived view as a single JSON object
    ///
    /// Includes the detail rows and both option lists in addition to the
    /// totals and breakdowns.
    #[arg(long)]
    json: bool,
}

impl Sum {
    pub fn run(&self, ws: base::Workingset, config: &base::Config) -> anyhow::Result<cli::Output> {
        let ws = cli::util::narrow(ws, self.interval)?;
        let mut session = base::Session::new(ws);
        let views = self.selection_opts.apply(&mut session);
        if self.json {
            let s = serde_json::to_string(&views).context("failed to serialize views")?;
            return Ok(cli::Output::Str(s));
        }
        Ok(cli::Output::TreeForSum(
            base::tree::forsum::Config::from_views(base::Charset::from_config(config), &views),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(v: &[(&str, i64)]) -> base::Series {
        base::Series {
            labels: v.iter().map(|&(l, _)| l.to_string()).collect(),
            values: v.iter().map(|&(_, a)| a).collect(),
        }
    }

    fn want(
        (income, expense): (i64, i64),
        pie: &[(&str, i64)],
        bar: &[(&str, i64)],
    ) -> cli::testing::ResultMatcher<'static> {
        cli::testing::ResultMatcher::OkExact(cli::Output::TreeForSum(
            base::tree::forsum::Config {
                charset: base::Charset::default(),
                summary: base::Summary {
                    income: base::Amount(income),
                    expense: base::Amount(expense),
                    balance: base::Amount(income - expense),
                },
                pie: series(pie),
                bar: series(bar),
            },
        ))
    }

    cli::testing::generate_testcases![
        (
            no_records,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "sum"],
                    res: want((0, 0), &[], &[]),
                }],
                initial_state: cli::testing::StrState::new()
                    .with_config("{}")
                    .with_data("計算対象,日付,内容,金額（円）,期間,大項目,中項目,振替\n"),
            }
        ),
        (
            all_periods,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "sum"],
                    res: want(
                        (1000, 1350),
                        &[("Home", 800), ("Food", 550)],
                        &[("Rent", 800), ("Lunch", 400), ("Coffee", 150)],
                    ),
                }],
                initial_state: cli::testing::StrState::new()
                    .with_config("{}")
                    .with_data(cli::testing::DATA),
            }
        ),
        (
            period_and_category,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "sum", "-p", "P1", "-c", "Food"],
                    res: want(
                        (1000, 1300),
                        &[("Home", 800), ("Food", 500)],
                        &[("Lunch", 400), ("Coffee", 100)],
                    ),
                }],
                initial_state: cli::testing::StrState::new()
                    .with_config("{}")
                    .with_data(cli::testing::DATA),
            }
        ),
        (
            category_not_in_period,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "sum", "--period", "P2", "--category", "Home"],
                    res: want((0, 50), &[("Food", 50)], &[("Coffee", 50)]),
                }],
                initial_state: cli::testing::StrState::new()
                    .with_config("{}")
                    .with_data(cli::testing::DATA),
            }
        ),
        (
            unknown_period,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "sum", "-p", "P9", "-c", "Food"],
                    res: want(
                        (1000, 1350),
                        &[("Home", 800), ("Food", 550)],
                        &[("Lunch", 400), ("Coffee", 150)],
                    ),
                }],
                initial_state: cli::testing::StrState::new()
                    .with_config("{}")
                    .with_data(cli::testing::DATA),
            }
        ),
        (
            interval,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "sum", "2024-01-06:2024-01-31"],
                    res: want(
                        (1000, 900),
                        &[("Home", 800), ("Food", 100)],
                        &[("Rent", 800), ("Coffee", 100)],
                    ),
                }],
                initial_state: cli::testing::StrState::new()
                    .with_config("{}")
                    .with_data(cli::testing::DATA),
            }
        ),
        (
            empty_interval,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "sum", "2024-02-01:2024-01-01"],
                    res: cli::testing::ResultMatcher::ErrGlob(
                        "start date must not be after end date"
                    ),
                }],
                initial_state: cli::testing::StrState::new()
                    .with_config("{}")
                    .with_data(cli::testing::DATA),
            }
        ),
        (
            json,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "sum", "-p", "P2", "--json"],
                    res: cli::testing::ResultMatcher::OkExact(cli::Output::Str(
                        concat!(
                            r#"{"selection":{"period":"P2","majorCategory":null},"#,
                            r#""summary":{"income":0,"expense":50,"balance":-50},"#,
                            r#""pie":{"labels":["Food"],"values":[50]},"#,
                            r#""bar":{"labels":["Coffee"],"values":[50]},"#,
                            r#""rows":[{"date":"2024-02-03","description":"Tea","amount":50,"subCategory":"Coffee"}],"#,
                            r#""periodOptions":[null,"P1","P2"],"#,
                            r#""categoryOptions":[null,"Food"]}"#,
                        )
                        .to_string()
                    )),
                }],
                initial_state: cli::testing::StrState::new()
                    .with_config("{}")
                    .with_data(cli::testing::DATA),
            }
        ),
    ];
}
