//! Stable, side-effect-free narrowing of record sets. Every filter preserves the
//! relative order of the records it keeps.

use crate::base;

/// A selection on one axis: either everything, or one exact value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Scope {
    #[default]
    All,
    Only(String),
}

impl Scope {
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Scope::All => true,
            Scope::Only(s) => s == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Scope::All)
    }

    pub fn as_only(&self) -> Option<&str> {
        match self {
            Scope::All => None,
            Scope::Only(s) => Some(s),
        }
    }
}

impl From<Option<String>> for Scope {
    fn from(value: Option<String>) -> Self {
        value.map_or(Scope::All, Scope::Only)
    }
}

impl From<&str> for Scope {
    fn from(value: &str) -> Self {
        Scope::Only(value.to_string())
    }
}

pub fn by_period<'a>(
    records: impl IntoIterator<Item = &'a base::Record>,
    period: &Scope,
) -> Vec<&'a base::Record> {
    records
        .into_iter()
        .filter(|r| period.matches(r.period()))
        .collect()
}

pub fn by_major_category<'a>(
    records: impl IntoIterator<Item = &'a base::Record>,
    category: &Scope,
) -> Vec<&'a base::Record> {
    records
        .into_iter()
        .filter(|r| category.matches(r.major_category()))
        .collect()
}

/// Keeps records with a negative amount.
pub fn expenses<'a>(
    records: impl IntoIterator<Item = &'a base::Record>,
) -> Vec<&'a base::Record> {
    records.into_iter().filter(|r| r.is_expense()).collect()
}

pub fn by_interval<'a>(
    records: impl IntoIterator<Item = &'a base::Record>,
    interval: base::Interval,
) -> Vec<&'a base::Record> {
    records
        .into_iter()
        .filter(|r| interval.contains(r.date()))
        .collect()
}
