use crate::base;

/// Application config.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Config {
    /// CSV file holding the raw records, relative to the repository.
    pub data_file: String,
    pub columns: base::Columns,
    pub flags: base::Sentinels,
    pub use_colored_output: bool,
    pub use_unicode_symbols: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: "mf_all_data.csv".into(),
            columns: base::Columns::default(),
            flags: base::Sentinels::default(),
            use_colored_output: false,
            use_unicode_symbols: false,
        }
    }
}

impl Config {
    pub fn schema(&self) -> base::Schema<'_> {
        base::Schema {
            columns: &self.columns,
            sentinels: &self.flags,
        }
    }
}

impl std::fmt::Display for Config {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string_pretty(self).map_err(|_| std::fmt::Error)?;
        writeln!(f, "{}", s)
    }
}

impl std::str::FromStr for Config {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl TryFrom<&str> for Config {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
