use crate::base;

/// Totals for the selected period followed by the two expense breakdowns.
#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub charset: base::Charset,
    pub summary: base::Summary,
    pub pie: base::Series,
    pub bar: base::Series,
}

impl Config {
    const SUMMARY: &str = "Summary";
    const INCOME: &str = "Income";
    const EXPENSE: &str = "Expense";
    const BALANCE: &str = "Balance";
    const BY_CATEGORY: &str = "By category";
    const BY_SUB_CATEGORY: &str = "By sub-category";

    pub fn from_views(charset: base::Charset, views: &base::Views) -> Self {
        Self {
            charset,
            summary: views.summary,
            pie: views.pie.clone(),
            bar: views.bar.clone(),
        }
    }

    pub fn to_tree(&self) -> base::Tree<'_> {
        let totv = vec![
            (Self::INCOME, self.summary.income),
            (Self::EXPENSE, self.summary.expense),
            (Self::BALANCE, self.summary.balance),
        ];
        let piev = self.pie.iter().collect::<Vec<_>>();
        let barv = self.bar.iter().collect::<Vec<_>>();

        fn char_count((label, amount): (&str, base::Amount)) -> usize {
            label.chars().count()
                + base::util::BOUNDING_SPACES_COUNT
                + base::util::MIN_DASHES_COUNT
                + amount.charlen_for_alignment()
        }
        let alignment_charlen = [totv.as_slice(), piev.as_slice(), barv.as_slice()]
            .iter()
            .copied()
            .flatten()
            .copied()
            .map(char_count)
            .max()
            .unwrap_or_default();

        let mut root = base::tree::Node::default();
        self.add_vec_to_tree(&mut root, totv, Self::SUMMARY, alignment_charlen);
        self.add_vec_to_tree(&mut root, piev, Self::BY_CATEGORY, alignment_charlen);
        self.add_vec_to_tree(&mut root, barv, Self::BY_SUB_CATEGORY, alignment_charlen);
        base::Tree {
            charset: &self.charset,
            root,
        }
    }

    fn leaf_data(&self, label: &str, amount: base::Amount, alignment_charlen: usize) -> String {
        let dash_count = alignment_charlen
            - label.chars().count()
            - base::util::BOUNDING_SPACES_COUNT
            - amount.charlen_for_alignment();
        let mut s = String::with_capacity(alignment_charlen);
        s.push_str(label);
        s.push(' ');
        for _ in 0..dash_count {
            s.push(self.charset.dash)
        }
        s.push(' ');
        s.push_str(&amount.to_string());
        s
    }

    fn add_vec_to_tree(
        &self,
        root: &mut base::tree::Node,
        v: Vec<(&str, base::Amount)>,
        name: &'static str,
        alignment_charlen: usize,
    ) {
        if v.is_empty() {
            return;
        }
        root.children.push(base::tree::Node::new(name.into()));
        let node = root
            .children
            .last_mut()
            .expect("a node should have just been added");
        for (label, amount) in v {
            let data = self.leaf_data(label, amount, alignment_charlen);
            node.children.push(base::tree::Node::new(data.into()))
        }
    }
}
