use crate::base;

/// Calendar unit used to bucket dates.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
    strum::EnumString,
    strum::Display,
    strum::AsRefStr,
    strum::IntoStaticStr,
    strum::VariantNames,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Datepart {
    Year,
    Month,
    Day,
}

impl Datepart {
    pub const MAX_DAYS_FOR_DAY: i64 = 90;
    pub const MAX_DAYS_FOR_MONTH: i64 = 365 * 2;

    /// Picks the bucket unit for a chart spanning `interval`: days for spans of
    /// up to 90 days, months for up to two years, years beyond that.
    pub fn for_span(interval: base::Interval) -> Self {
        let days = interval.span_days();
        if days <= Self::MAX_DAYS_FOR_DAY {
            Datepart::Day
        } else if days <= Self::MAX_DAYS_FOR_MONTH {
            Datepart::Month
        } else {
            Datepart::Year
        }
    }
}
