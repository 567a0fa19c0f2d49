use crate::base;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    pub dash: char,
    pub tree_sideways_t: &'static str,
    pub tree_corner: &'static str,
    pub tree_pipe_gap: &'static str,
    pub tree_space: &'static str,
    pub chart_bar_income: char,
    pub chart_bar_expense: char,
    pub color: bool,
}

impl Default for Charset {
    /// Only ASCII characters. No color.
    fn default() -> Self {
        Self {
            dash: '-',
            tree_sideways_t: "|-- ",
            tree_corner: "`-- ",
            tree_pipe_gap: "|   ",
            tree_space: "    ",
            chart_bar_income: '+',
            chart_bar_expense: '-',
            color: false,
        }
    }
}

impl Charset {
    pub fn from_config(config: &base::Config) -> Self {
        let mut charset = Self::default();
        if config.use_unicode_symbols {
            charset = charset.with_unicode();
        }
        if config.use_colored_output {
            charset = charset.with_color();
        }
        charset
    }

    pub fn with_unicode(self) -> Self {
        Self {
            dash: '\u{2500}',
            tree_sideways_t: "\u{251c}\u{2500}\u{2500} ",
            tree_corner: "\u{2514}\u{2500}\u{2500} ",
            tree_pipe_gap: "\u{2502}   ",
            tree_space: "    ",
            chart_bar_income: '\u{2588}',
            chart_bar_expense: '\u{2588}',
            ..self
        }
    }

    pub fn with_color(self) -> Self {
        Self {
            color: true,
            ..self
        }
    }
}
