use crate::base;

/// The eligible, type-coerced records of a session, in ingestion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Workingset(Vec<base::Record>);

impl Workingset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &base::Record> {
        self.0.iter()
    }

    /// Earliest to latest record date, or [`base::Interval::EMPTY`] if there
    /// are no records.
    pub fn spanned_interval(&self) -> base::Interval {
        let start = self.0.iter().map(base::Record::date).min();
        let end = self.0.iter().map(base::Record::date).max();
        match (start, end) {
            (Some(start), Some(end)) => base::Interval { start, end },
            _ => base::Interval::EMPTY,
        }
    }

    /// Returns a new working set holding only records dated within `interval`.
    pub fn within(&self, interval: base::Interval) -> Self {
        base::filter::by_interval(self.iter(), interval)
            .into_iter()
            .collect()
    }

    /// Distinct periods in order of first appearance.
    pub fn periods(&self) -> Vec<&str> {
        base::util::distinct(self.iter().map(base::Record::period))
    }
}

impl IntoIterator for Workingset {
    type Item = base::Record;
    type IntoIter = std::vec::IntoIter<base::Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<base::Record> for Workingset {
    fn from_iter<T: IntoIterator<Item = base::Record>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a base::Record> for Workingset {
    fn from_iter<T: IntoIterator<Item = &'a base::Record>>(iter: T) -> Self {
        iter.into_iter().cloned().collect()
    }
}

impl std::fmt::Display for Workingset {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for r in self.iter() {
            writeln!(f, "{}", r)?;
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid record at line {line}")]
pub struct ParseError {
    line: usize,
    source: serde_json::Error,
}

impl std::str::FromStr for Workingset {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, x)| !x.is_empty())
            .map(|(i, x)| {
                x.parse::<base::Record>().map_err(|e| ParseError {
                    line: i + 1,
                    source: e,
                })
            })
            .collect::<Result<Self, _>>()
    }
}

impl TryFrom<&str> for Workingset {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
