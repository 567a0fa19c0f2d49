use crate::base;

/// Signed quantity in the currency's minor unit. Positive is income, negative
/// is expense.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    derive_more::From,
    derive_more::Into,
    derive_more::Neg,
    derive_more::Sum,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::Sub,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct Amount(pub i64);

impl Amount {
    pub const ZERO: Self = Self(0);

    /// Largest magnitude accepted when parsing. Sums over millions of records
    /// at this bound still fit in an `i64`.
    pub const MAX: Self = Self(999_999_999_999);

    pub const fn abs(self) -> Self {
        Self(self.0.saturating_abs())
    }

    pub const fn is_expense(self) -> bool {
        self.0 < 0
    }

    /// Returns `amount.to_string().len()` without actually building a string.
    pub fn charlen(self) -> usize {
        let mut len = base::util::count_digits(self.0.unsigned_abs());
        len += (len - 1) / 3; // commas
        if self.0 < 0 {
            len += 2; // parentheses
        }
        len
    }

    /// Returns `amount.charlen()` assuming a non-negative quantity has a
    /// trailing space in its string representation, so that right-aligning
    /// lines up the last digit regardless of sign.
    pub fn charlen_for_alignment(self) -> usize {
        self.charlen() + (self >= Self(0)) as usize
    }
}

impl std::fmt::Display for Amount {
    /// Formats with thousands separators. Negative quantities are wrapped in
    /// parentheses.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut n = self.0.unsigned_abs();
        let mut bytes = Vec::<u8>::new();
        let mut i = 0;
        loop {
            if i > 0 && i % 3 == 0 {
                bytes.push(b',');
            }
            bytes.push(b'0' + (n % 10) as u8);
            n /= 10;
            i += 1;
            if n == 0 {
                break;
            }
        }
        bytes.reverse();
        if self.0 < 0 {
            bytes.insert(0, b'(');
            bytes.push(b')');
        }
        let s = std::str::from_utf8(&bytes).expect("all chars should be ascii");
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("input is empty")]
    Empty,
    #[error("'{0}' is not an integer amount")]
    NotNumeric(String),
    #[error("'{0}' exceeds the maximum magnitude of {max}", max = Amount::MAX)]
    OutOfRange(String),
}

impl std::str::FromStr for Amount {
    type Err = ParseError;

    /// Parses a plain signed integer, ignoring surrounding whitespace.
    /// Thousands separators and decimal points are rejected, and so are
    /// magnitudes above [`Amount::MAX`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseError::Empty);
        }
        let n = s.parse::<i64>().map_err(|e| match e.kind() {
            std::num::IntErrorKind::PosOverflow | std::num::IntErrorKind::NegOverflow => {
                ParseError::OutOfRange(s.to_string())
            }
            _ => ParseError::NotNumeric(s.to_string()),
        })?;
        if n.unsigned_abs() > Self::MAX.0.unsigned_abs() {
            return Err(ParseError::OutOfRange(s.to_string()));
        }
        Ok(Self(n))
    }
}

impl TryFrom<&str> for Amount {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
