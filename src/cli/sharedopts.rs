use crate::base;

pub const INTERVAL_HELP: &str = "Date range of interest";
pub const INTERVAL_HELP_LONG: &str = "Date range of interest

Must be in the format 'A:B'. Each of 'A' or 'B' is a date (yyyy-mm-dd or yyyy/mm/dd). 'A' and 'B' are both optional, defaulting to 0000-01-01 and 9999-12-31 respectively. Both ends are inclusive.

A single date 'A' is shorthand for 'A:A'.";

#[derive(clap::Args)]
pub struct SelectionOpts {
    /// Period to drill into
    ///
    /// Must match a period label exactly. Unknown periods fall back to all
    /// periods.
    #[arg(short, long, value_name = "PERIOD")]
    pub period: Option<String>,

    /// Major category to drill into
    ///
    /// Must match a major category label exactly. A category with no expenses
    /// in the selected period falls back to all categories.
    #[arg(short = 'c', long = "category", value_name = "CATEGORY")]
    pub major_category: Option<String>,
}

impl SelectionOpts {
    /// Selects the period, then the major category, returning the resulting
    /// views.
    pub fn apply(&self, session: &mut base::Session) -> base::Views {
        session.set_period(self.period.clone());
        session.set_major_category(self.major_category.clone())
    }
}
