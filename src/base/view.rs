//! Plain data payloads handed to renderers.

use crate::base;

/// Parallel label/value sequences, index-aligned.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct Series {
    pub labels: Vec<String>,
    pub values: Vec<i64>,
}

impl Series {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, base::Amount)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied().map(base::Amount))
    }
}

/// Keeps the order of `groups`.
pub fn to_series(groups: &[(&str, base::Amount)]) -> Series {
    let (labels, values) = groups
        .iter()
        .map(|&(label, amount)| (label.to_string(), amount.0))
        .unzip();
    Series { labels, values }
}

/// One line of the transaction listing. `amount` is the absolute amount.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailRow {
    pub date: base::Date,
    pub description: String,
    pub amount: base::Amount,
    pub sub_category: String,
}

impl From<&base::Record> for DetailRow {
    fn from(r: &base::Record) -> Self {
        Self {
            date: r.date(),
            description: r.description().to_string(),
            amount: r.amount().abs(),
            sub_category: r.sub_category().to_string(),
        }
    }
}

/// Most recent first. Records sharing a date keep their relative order.
pub fn to_detail_rows<'a>(records: impl IntoIterator<Item = &'a base::Record>) -> Vec<DetailRow> {
    let mut v = records.into_iter().collect::<Vec<_>>();
    v.sort_by(|a, b| b.date().cmp(&a.date()));
    v.into_iter().map(DetailRow::from).collect()
}

/// Everything derived from one selection state.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Views {
    pub selection: base::DrillDownState,
    pub summary: base::Summary,
    /// Expenses per major category within the selected period.
    pub pie: Series,
    /// Expenses per sub-category within the selected period and major
    /// category.
    pub bar: Series,
    pub rows: Vec<DetailRow>,
    pub period_options: Vec<base::Scope>,
    pub category_options: Vec<base::Scope>,
}
