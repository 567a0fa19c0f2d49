use crate::base;

/// A record as handed over by the ingestion source: field name to raw text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord(std::collections::HashMap<String, String>);

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), value.into());
    }

    fn require(&self, field: &str) -> Result<&str, MalformedRecordError> {
        self.get(field)
            .ok_or_else(|| MalformedRecordError::MissingField(field.to_string()))
    }
}

impl<K, V> FromIterator<(K, V)> for RawRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Names of the raw fields the core reads.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Columns {
    pub accountable: String,
    pub transfer: String,
    pub amount: String,
    pub date: String,
    pub period: String,
    pub major_category: String,
    pub sub_category: String,
    pub description: String,
}

impl Default for Columns {
    /// Headers of the household ledger CSV export.
    fn default() -> Self {
        Self {
            accountable: "計算対象".into(),
            transfer: "振替".into(),
            amount: "金額（円）".into(),
            date: "日付".into(),
            period: "期間".into(),
            major_category: "大項目".into(),
            sub_category: "中項目".into(),
            description: "内容".into(),
        }
    }
}

/// Two-valued flag as encoded by the ingestion source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    On,
    Off,
}

/// The raw encodings of [`Flag`]. Raw values are compared by exact string
/// equality; anything else decodes to no flag at all.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Sentinels {
    pub true_value: String,
    pub false_value: String,
}

impl Default for Sentinels {
    fn default() -> Self {
        Self {
            true_value: "1".into(),
            false_value: "0".into(),
        }
    }
}

impl Sentinels {
    pub fn decode(&self, raw: &str) -> Option<Flag> {
        if raw == self.true_value {
            Some(Flag::On)
        } else if raw == self.false_value {
            Some(Flag::Off)
        } else {
            None
        }
    }
}

/// Everything needed to turn a [`RawRecord`] into a [`base::Record`].
#[derive(Debug, Clone, Copy)]
pub struct Schema<'a> {
    pub columns: &'a Columns,
    pub sentinels: &'a Sentinels,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedRecordError {
    #[error("missing field '{0}'")]
    MissingField(String),
    #[error("invalid amount: {0}")]
    Amount(base::amount::ParseError),
    #[error("invalid date: {0}")]
    Date(base::date::ParseError),
}

impl Schema<'_> {
    fn flag(&self, raw: &RawRecord, field: &str) -> Option<Flag> {
        raw.get(field).and_then(|s| self.sentinels.decode(s))
    }

    /// True iff the record counts toward totals and is not an internal
    /// transfer.
    pub fn is_eligible(&self, raw: &RawRecord) -> bool {
        self.flag(raw, &self.columns.accountable) == Some(Flag::On)
            && self.flag(raw, &self.columns.transfer) == Some(Flag::Off)
    }

    pub fn parse_amount(&self, raw: &RawRecord) -> Result<base::Amount, MalformedRecordError> {
        raw.require(&self.columns.amount)?
            .parse()
            .map_err(MalformedRecordError::Amount)
    }

    pub fn parse_date(&self, raw: &RawRecord) -> Result<base::Date, MalformedRecordError> {
        raw.require(&self.columns.date)?
            .parse()
            .map_err(MalformedRecordError::Date)
    }

    /// Coerces `raw` into a record. Does not check eligibility. A missing
    /// description is treated as empty; every other field is required.
    pub fn to_record(&self, raw: &RawRecord) -> Result<base::Record, MalformedRecordError> {
        let date = self.parse_date(raw)?;
        let amount = self.parse_amount(raw)?;
        let period = raw.require(&self.columns.period)?;
        let major = raw.require(&self.columns.major_category)?;
        let sub = raw.require(&self.columns.sub_category)?;
        let description = raw.get(&self.columns.description).unwrap_or_default();
        Ok(base::Record::new(
            date,
            period.to_string(),
            major.to_string(),
            sub.to_string(),
            amount,
            description.to_string(),
        ))
    }
}
