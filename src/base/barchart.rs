use crate::base;

/// Income and expense bars per time-series bucket.
pub struct Barchart {
    charset: base::Charset,
    unit: base::Datepart,
    buckets: Vec<base::Bucket>,
    has_income: bool,
    has_expense: bool,
    label_charlen: usize,
    max_abs_val: base::Amount,
    max_barlen: usize,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub charset: base::Charset,
    pub unit: base::Datepart,
    pub term_width: usize,
    pub buckets: Vec<base::Bucket>,
}

impl Config {
    /// Returns true if no bucket has any income or expense.
    pub fn is_empty(&self) -> bool {
        self.buckets
            .iter()
            .all(|b| b.income == base::Amount::ZERO && b.expense == base::Amount::ZERO)
    }

    pub fn to_barchart(&self) -> Barchart {
        let label_charlen = match self.unit {
            base::Datepart::Year => 4,  // yyyy
            base::Datepart::Month => 8, // yyyy mmm
            base::Datepart::Day => 10,  // yyyy-mm-dd
        };
        let max_income = self.buckets.iter().map(|b| b.income).max().unwrap_or_default();
        let max_expense = self.buckets.iter().map(|b| b.expense).max().unwrap_or_default();
        let max_abs_val = max_income.max(max_expense);
        // Sized for the widest negative label even when the largest value is
        // income, so the chart may come out up to two characters narrower
        // than `term_width`.
        let max_barlen = self.term_width.max(base::util::MIN_TERM_WIDTH)
            - label_charlen
            - base::util::BOUNDING_SPACES_COUNT
            - 1 // vertical divider just before bar
            - (-max_abs_val).charlen();

        Barchart {
            charset: self.charset.clone(),
            unit: self.unit,
            buckets: self.buckets.clone(),
            has_income: max_income > base::Amount::ZERO,
            has_expense: max_expense > base::Amount::ZERO,
            label_charlen,
            max_abs_val,
            max_barlen,
        }
    }
}

impl Barchart {
    fn label(&self, dt: base::Date) -> Result<String, std::fmt::Error> {
        let fmt = match self.unit {
            base::Datepart::Year => time::macros::format_description!("[year]"),
            base::Datepart::Month => time::macros::format_description!("[year] [month repr:short]"),
            base::Datepart::Day => time::macros::format_description!("[year]-[month]-[day]"),
        };
        dt.format(fmt).map_err(|_| std::fmt::Error)
    }

    fn barlen(&self, val: base::Amount) -> usize {
        let x = (val.abs().0 as f64) / (self.max_abs_val.0 as f64) * (self.max_barlen as f64);
        self.max_barlen.min(x.round() as usize)
    }

    fn draw_bar(
        &self,
        w: &mut impl std::fmt::Write,
        val: base::Amount,
        bar: char,
        color: colored::Color,
    ) -> std::fmt::Result {
        let barlen = self.barlen(val);
        if barlen > 0 {
            let mut bars = bar.to_string().repeat(barlen);
            if self.charset.color {
                bars = colored::Colorize::color(bars.as_str(), color).to_string();
            }
            w.write_str(&bars)?;
            w.write_char(' ')?;
        }
        writeln!(w, "{}", val)
    }

    fn draw(&self, w: &mut impl std::fmt::Write, bucket: &base::Bucket) -> std::fmt::Result {
        write!(w, "{} |", self.label(bucket.start)?)?;
        if self.has_income {
            self.draw_bar(
                w,
                bucket.income,
                self.charset.chart_bar_income,
                colored::Color::Green,
            )?;
            if !self.has_expense {
                return Ok(());
            }
            for _ in 0..(self.label_charlen) {
                w.write_char(' ')?;
            }
            w.write_str(" |")?;
        }
        self.draw_bar(
            w,
            -bucket.expense,
            self.charset.chart_bar_expense,
            colored::Color::Red,
        )
    }
}

impl std::fmt::Display for Barchart {
    /// Writes a terminating newline. Writes nothing if every bucket is empty.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.has_income && !self.has_expense {
            return Ok(());
        }
        for bucket in self.buckets.iter() {
            self.draw(f, bucket)?;
        }
        Ok(())
    }
}
