use crate::base;

/// Period-scoped totals. `expense` is reported as a non-negative quantity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct Summary {
    pub income: base::Amount,
    pub expense: base::Amount,
    pub balance: base::Amount,
}

/// Sums positive amounts into `income` and the magnitudes of negative amounts
/// into `expense`. Zero amounts count toward neither.
pub fn summarize<'a>(records: impl IntoIterator<Item = &'a base::Record>) -> Summary {
    let mut income = base::Amount::ZERO;
    let mut expense = base::Amount::ZERO;
    for r in records {
        match r.amount().cmp(&base::Amount::ZERO) {
            std::cmp::Ordering::Greater => income += r.amount(),
            std::cmp::Ordering::Less => expense += r.amount().abs(),
            _ => {}
        }
    }
    Summary {
        income,
        expense,
        balance: income - expense,
    }
}
