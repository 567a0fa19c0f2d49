use crate::base;

/// Interval defined by the inclusive bound of two dates. If `start` is greater
/// than `end`, the interval is considered empty. All empty intervals are
/// equivalent.
#[derive(Debug, Clone, Copy, Eq)]
pub struct Interval {
    pub start: base::Date,
    pub end: base::Date,
}

impl PartialEq for Interval {
    fn eq(&self, other: &Self) -> bool {
        self.is_empty() && other.is_empty() || self.start == other.start && self.end == other.end
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self::MAX
    }
}

impl Interval {
    /// The largest possible interval.
    pub const MAX: Self = Self {
        start: base::Date::MIN,
        end: base::Date::MAX,
    };

    pub const EMPTY: Self = Self {
        start: base::Date::MAX,
        end: base::Date::MIN,
    };

    pub fn is_empty(self) -> bool {
        self.start > self.end
    }

    pub fn contains(self, dt: base::Date) -> bool {
        self.start <= dt && dt <= self.end
    }

    pub fn intersection(self, other: Self) -> Self {
        Self {
            start: self.start.max(other.start),
            end: self.end.min(other.end),
        }
    }

    /// Number of days between `start` and `end`. Zero for empty intervals.
    pub fn span_days(self) -> i64 {
        self.start.days_until(self.end).max(0)
    }

    /// Returns an iterator over subintervals.
    ///
    /// Subintervals try to span the beginning to the end of calendar
    /// years/months. For example, iterating by year over \[2000-04-15,
    /// 2003-08-10] will yield \[2000-04-15, 2000-12-31], \[2001-01-01,
    /// 2001-12-31], etc.
    pub fn iter(self, part: base::Datepart) -> impl Iterator<Item = Self> {
        let first = match self.is_empty() {
            true => None,
            false => Some(Self {
                start: self.start,
                end: self.start.last_of(part).min(self.end),
            }),
        };
        std::iter::successors(first, move |prev| {
            let start = prev.start.start_of_next(part)?;
            let end = start.last_of(part).min(self.end);
            (start <= end).then_some(Self { start, end })
        })
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Date(#[from] base::date::ParseError),
    #[error("invalid left side")]
    Left(#[source] base::date::ParseError),
    #[error("invalid right side")]
    Right(#[source] base::date::ParseError),
}

impl std::str::FromStr for Interval {
    type Err = ParseError;

    /// Accepts `A:B` where either side may be omitted, or a single date `A`
    /// meaning `A:A`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = match s.split_once(':') {
            Some((left, right)) => (
                if left.trim().is_empty() {
                    base::Date::MIN
                } else {
                    left.parse::<base::Date>().map_err(Self::Err::Left)?
                },
                if right.trim().is_empty() {
                    base::Date::MAX
                } else {
                    right.parse::<base::Date>().map_err(Self::Err::Right)?
                },
            ),
            None => {
                let dt = s.parse::<base::Date>()?;
                (dt, dt)
            }
        };
        Ok(Self { start, end })
    }
}

impl TryFrom<&str> for Interval {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
