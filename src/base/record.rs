use crate::base;

/// An eligible transaction. Immutable once ingested.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Record {
    #[serde(rename = "d")]
    date: base::Date,
    #[serde(rename = "p")]
    period: String,
    #[serde(rename = "m")]
    major_category: String,
    #[serde(rename = "s")]
    sub_category: String,
    #[serde(rename = "a")]
    amount: base::Amount,
    #[serde(rename = "n", skip_serializing_if = "String::is_empty", default)]
    description: String,
}

impl Record {
    pub fn new(
        date: base::Date,
        period: String,
        major_category: String,
        sub_category: String,
        amount: base::Amount,
        description: String,
    ) -> Self {
        Self {
            date,
            period,
            major_category,
            sub_category,
            amount,
            description,
        }
    }

    pub fn date(&self) -> base::Date {
        self.date
    }

    pub fn period(&self) -> &str {
        &self.period
    }

    pub fn major_category(&self) -> &str {
        &self.major_category
    }

    pub fn sub_category(&self) -> &str {
        &self.sub_category
    }

    pub fn amount(&self) -> base::Amount {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_expense(&self) -> bool {
        self.amount.is_expense()
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
        f.write_str(&s)
    }
}

impl std::str::FromStr for Record {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}
