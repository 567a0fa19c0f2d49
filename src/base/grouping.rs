use crate::base;

/// Record attribute to partition expenses on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::Display, strum::VariantNames,
)]
#[strum(ascii_case_insensitive, serialize_all = "kebab-case")]
pub enum Dimension {
    Period,
    MajorCategory,
    SubCategory,
}

impl Dimension {
    pub fn key(self, r: &base::Record) -> &str {
        match self {
            Dimension::Period => r.period(),
            Dimension::MajorCategory => r.major_category(),
            Dimension::SubCategory => r.sub_category(),
        }
    }
}

pub fn group_sum<'a>(
    records: impl IntoIterator<Item = &'a base::Record>,
    dimension: Dimension,
) -> Vec<(&'a str, base::Amount)> {
    group_sum_by(records, |r| dimension.key(r))
}

/// Sums expense magnitudes per `selector(record)`, ignoring non-expense
/// records, sorted by descending total. Equal totals keep the order in which
/// their keys first appear in `records`.
pub fn group_sum_by<'a, F>(
    records: impl IntoIterator<Item = &'a base::Record>,
    selector: F,
) -> Vec<(&'a str, base::Amount)>
where
    F: Fn(&'a base::Record) -> &'a str,
{
    let agg = records
        .into_iter()
        .filter(|r| r.is_expense())
        .map(|r| (selector(r), r.amount().abs()))
        .collect::<base::Aggregate<&str, base::Amount>>();
    let mut v = agg.into_entries();
    v.sort_by(|(_, a1), (_, a2)| a2.cmp(a1));
    v
}
