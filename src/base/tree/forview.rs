use crate::base;

/// Detail rows nested under year, month and day nodes. Rows are numbered from
/// 1 in the order given.
#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub charset: base::Charset,
    pub rows: Vec<base::DetailRow>,
}

impl Config {
    pub fn to_tree(&self) -> base::Tree<'_> {
        let alignment_charlen = self.get_alignment_charlen();
        let mut root = base::tree::Node::default();
        for (i, row) in self.rows.iter().enumerate() {
            let year = base::tree::last_child_with(&mut root, &row.date.year().to_string());
            let month = base::tree::last_child_with(year, month_str(row.date.month()));
            let day = base::tree::last_child_with(month, day_str(row.date.day()));
            let data = self.leaf_data(row, i, alignment_charlen);
            day.children.push(base::tree::Node::new(data.into()));
        }
        base::Tree {
            charset: &self.charset,
            root,
        }
    }

    fn get_alignment_charlen(&self) -> usize {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                base::util::count_digits((i + 1) as u64)
                    + base::util::BOUNDING_SPACES_COUNT
                    + base::util::MIN_DASHES_COUNT
                    + row.amount.charlen()
            })
            .max()
            .unwrap_or_default()
    }

    /// Formats as `{n} -- {amount} {sub_category}`, followed by
    /// `: {description}` when there is one.
    fn leaf_data(&self, row: &base::DetailRow, i: usize, alignment_charlen: usize) -> String {
        let n = i + 1;
        let dash_count = alignment_charlen
            - base::util::count_digits(n as u64)
            - base::util::BOUNDING_SPACES_COUNT
            - row.amount.charlen();
        let mut s = String::new();
        s.push_str(&n.to_string());
        s.push(' ');
        for _ in 0..dash_count {
            s.push(self.charset.dash)
        }
        s.push(' ');
        s.push_str(&row.amount.to_string());
        s.push(' ');
        s.push_str(&row.sub_category);
        if !row.description.is_empty() {
            s.push_str(": ");
            s.push_str(&row.description);
        }
        s
    }
}

fn month_str(month: u32) -> &'static str {
    #[rustfmt::skip]
    const STRS: &[&str] = &[
        "",
        "Jan", "Feb", "Mar", "Apr", "May", "Jun",
        "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    STRS[month as usize]
}

fn day_str(day: u32) -> &'static str {
    #[rustfmt::skip]
    const STRS: &[&str] = &[
        "",
        "1st", "2nd", "3rd", "4th", "5th", "6th", "7th", "8th", "9th", "10th",
        "11th", "12th", "13th", "14th", "15th", "16th", "17th", "18th", "19th", "20th",
        "21st", "22nd", "23rd", "24th", "25th", "26th", "27th", "28th", "29th", "30th",
        "31st",
    ];
    STRS[day as usize]
}
