use crate::base;

/// A date type without time or timezone information. Values are guaranteed to
/// be between `0000-01-01` and `9999-12-31`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "&str", into = "String")]
pub struct Date(time::Date);

impl Date {
    /// 0000-01-01
    pub const MIN: Self = Self(time::macros::date!(0000 - 01 - 01));

    /// 9999-12-31
    pub const MAX: Self = Self(time::macros::date!(9999 - 12 - 31));

    const DISPLAY_FORMAT: &[time::format_description::BorrowedFormatItem<'static>] =
        time::macros::format_description!("[year]-[month]-[day]");

    const PARSE_FORMATS: &[&[time::format_description::BorrowedFormatItem<'static>]] = &[
        time::macros::format_description!("[year]-[month padding:none]-[day padding:none]"),
        time::macros::format_description!("[year]/[month padding:none]/[day padding:none]"),
    ];

    pub fn year(self) -> u32 {
        self.0.year() as u32
    }

    pub fn month(self) -> u32 {
        u8::from(self.0.month()) as u32
    }

    pub fn day(self) -> u32 {
        self.0.day() as u32
    }

    fn new(inner: time::Date) -> Option<Self> {
        let dt = Self(inner);
        if dt >= Self::MIN && dt <= Self::MAX {
            Some(dt)
        } else {
            None
        }
    }

    pub fn from_ymd(year: u32, month: u32, day: u32) -> Option<Self> {
        let month = time::Month::try_from(u8::try_from(month).ok()?).ok()?;
        let day = u8::try_from(day).ok()?;
        time::Date::from_calendar_date(i32::try_from(year).ok()?, month, day)
            .ok()
            .and_then(Self::new)
    }

    pub fn first_of(self, part: base::Datepart) -> Self {
        match part {
            base::Datepart::Day => self,
            base::Datepart::Year => Self::from_ymd(self.year(), 1, 1)
                .expect("first day of a valid year should be a valid date"),
            base::Datepart::Month => Self::from_ymd(self.year(), self.month(), 1)
                .expect("first day of a valid month should be a valid date"),
        }
    }

    pub fn last_of(self, part: base::Datepart) -> Self {
        match part {
            base::Datepart::Day => self,
            base::Datepart::Year => Self::from_ymd(self.year(), 12, 31)
                .expect("final day of a valid year should be a valid date"),
            base::Datepart::Month => Self::from_ymd(
                self.year(),
                self.month(),
                self.0.month().length(self.0.year()) as u32,
            )
            .expect("final day of month should be computed correctly"),
        }
    }

    /// Returns the first day of the day/month/year following the one containing
    /// this date, or `None` if that is past `9999-12-31`.
    pub fn start_of_next(self, part: base::Datepart) -> Option<Self> {
        self.last_of(part).0.next_day().and_then(Self::new)
    }

    pub fn format(
        self,
        fmt: &[time::format_description::BorrowedFormatItem<'_>],
    ) -> Result<String, time::error::Format> {
        self.0.format(fmt)
    }

    /// Number of days from `self` to `other`. Negative if `other` is earlier.
    pub fn days_until(self, other: Self) -> i64 {
        (other.0 - self.0).whole_days()
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = self
            .0
            .format(Self::DISPLAY_FORMAT)
            .map_err(|_| std::fmt::Error)?;
        f.write_str(&s)
    }
}

impl From<Date> for String {
    fn from(value: Date) -> Self {
        value.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("input is empty")]
    Empty,
    #[error("'{0}' is not a date in the format yyyy-mm-dd or yyyy/mm/dd")]
    BadFormat(String),
    #[error("date is before 0000-01-01 or after 9999-12-31")]
    OutOfRange,
}

impl std::str::FromStr for Date {
    type Err = ParseError;

    /// Parses a string to a date. Inputs must be in one of the formats
    /// `yyyy-mm-dd` or `yyyy/mm/dd`, where month and day may omit their
    /// leading zero.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Self::Err::Empty);
        }
        let inner = Self::PARSE_FORMATS
            .iter()
            .find_map(|fmt| time::Date::parse(s, *fmt).ok())
            .ok_or_else(|| Self::Err::BadFormat(s.to_string()))?;
        Self::new(inner).ok_or(Self::Err::OutOfRange)
    }
}

impl TryFrom<&str> for Date {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
