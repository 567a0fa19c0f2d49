use crate::base;

/// Income and expense totals over one calendar bucket. Both are non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Bucket {
    pub start: base::Date,
    pub income: base::Amount,
    pub expense: base::Amount,
}

/// Buckets `records` by `unit` across `bounds`. Every bucket overlapping
/// `bounds` is emitted, including empty ones; the first bucket starts at
/// `bounds.start` even if that is mid-month or mid-year. Records dated outside
/// `bounds` are ignored.
pub fn time_series<'a>(
    records: impl IntoIterator<Item = &'a base::Record>,
    bounds: base::Interval,
    unit: base::Datepart,
) -> Vec<Bucket> {
    let mut pos = base::Aggregate::<base::Date, base::Amount>::default();
    let mut neg = base::Aggregate::<base::Date, base::Amount>::default();
    for r in records {
        if !bounds.contains(r.date()) {
            continue;
        }
        let key = r.date().first_of(unit).max(bounds.start);
        match r.amount().cmp(&base::Amount::ZERO) {
            std::cmp::Ordering::Greater => pos.add(key, r.amount()),
            std::cmp::Ordering::Less => neg.add(key, r.amount().abs()),
            _ => {}
        }
    }
    bounds
        .iter(unit)
        .map(|interval| Bucket {
            start: interval.start,
            income: pos.get(interval.start).unwrap_or_default(),
            expense: neg.get(interval.start).unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::fixture;
    use rstest::rstest;

    #[fixture]
    fn ws() -> base::Workingset {
        r#"
            {"d":"2024-01-25","p":"P1","m":"Income","s":"Salary","a":1000}
            {"d":"2024-01-05","p":"P1","m":"Food","s":"Lunch","a":-400}
            {"d":"2024-03-06","p":"P2","m":"Food","s":"Coffee","a":-100}
            {"d":"2024-03-07","p":"P2","m":"Food","s":"Refund","a":0}
            {"d":"2025-02-01","p":"P3","m":"Home","s":"Rent","a":-800}
        "#
        .parse()
        .unwrap()
    }

    fn triples(buckets: &[Bucket]) -> Vec<(String, i64, i64)> {
        buckets
            .iter()
            .map(|b| (b.start.to_string(), b.income.0, b.expense.0))
            .collect()
    }

    #[rstest]
    fn test_monthly(ws: base::Workingset) {
        let got = time_series(
            ws.iter(),
            "2024-01-01:2024-03-31".parse().unwrap(),
            base::Datepart::Month,
        );
        assert_eq!(
            triples(&got),
            vec![
                ("2024-01-01".to_string(), 1000, 400),
                ("2024-02-01".to_string(), 0, 0),
                ("2024-03-01".to_string(), 0, 100),
            ]
        );
    }

    #[rstest]
    fn test_yearly_partial_first_bucket(ws: base::Workingset) {
        let got = time_series(
            ws.iter(),
            "2024-01-10:2025-12-31".parse().unwrap(),
            base::Datepart::Year,
        );
        assert_eq!(
            triples(&got),
            vec![
                ("2024-01-10".to_string(), 1000, 100),
                ("2025-01-01".to_string(), 0, 800),
            ]
        );
    }

    #[rstest]
    fn test_daily(ws: base::Workingset) {
        let got = time_series(
            ws.iter(),
            "2024-03-05:2024-03-07".parse().unwrap(),
            base::Datepart::Day,
        );
        assert_eq!(
            triples(&got),
            vec![
                ("2024-03-05".to_string(), 0, 0),
                ("2024-03-06".to_string(), 0, 100),
                ("2024-03-07".to_string(), 0, 0),
            ]
        );
    }

    #[rstest]
    fn test_empty_bounds(ws: base::Workingset) {
        assert!(time_series(ws.iter(), base::Interval::EMPTY, base::Datepart::Day).is_empty());
    }
}
