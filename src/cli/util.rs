use crate::base;

/// Label printed for [`base::Scope::All`] in option listings.
pub const ALL_LABEL: &str = "(all)";

/// Returns the records of `ws` dated within `interval`. Defaults to
/// everything.
pub fn narrow(ws: base::Workingset, interval: Option<base::Interval>) -> anyhow::Result<base::Workingset> {
    match interval {
        None => Ok(ws),
        Some(interval) if interval.is_empty() => {
            anyhow::bail!("start date must not be after end date")
        }
        Some(interval) => Ok(ws.within(interval)),
    }
}

/// One option per line, with "all" rendered as [`ALL_LABEL`].
pub fn format_options(options: &[base::Scope]) -> String {
    options
        .iter()
        .map(|o| o.as_only().unwrap_or(ALL_LABEL))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn term_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0)
        .unwrap_or_default() as usize
}

#[cfg(test)]
mod tests {
    use rstest::fixture;
    use rstest::rstest;

    use super::*;

    #[fixture]
    fn ws() -> base::Workingset {
        r#"
            {"d":"2024-01-05","p":"P1","m":"Food","s":"Lunch","a":-400}
            {"d":"2024-02-03","p":"P2","m":"Food","s":"Coffee","a":-50}
            {"d":"2024-01-25","p":"P1","m":"Income","s":"Salary","a":1000}
        "#
        .parse()
        .unwrap()
    }

    #[rstest]
    #[case(None, self::ws())]
    #[case(Some(base::Interval::MAX), self::ws())]
    #[case(
        Some("2024-01-10:2024-12-31".parse().unwrap()),
        r#"
            {"d":"2024-02-03","p":"P2","m":"Food","s":"Coffee","a":-50}
            {"d":"2024-01-25","p":"P1","m":"Income","s":"Salary","a":1000}
        "#
    )]
    #[case(Some("2024/1/5".parse().unwrap()), r#"{"d":"2024-01-05","p":"P1","m":"Food","s":"Lunch","a":-400}"#)]
    fn test_narrow(
        ws: base::Workingset,
        #[case] interval: Option<base::Interval>,
        #[case] want: base::Workingset,
    ) {
        assert_eq!(narrow(ws, interval).unwrap(), want);
    }

    #[rstest]
    fn test_narrow_empty_interval(ws: base::Workingset) {
        let err = narrow(ws, Some("2024-02-01:2024-01-01".parse().unwrap())).unwrap_err();
        assert_eq!(err.to_string(), "start date must not be after end date");
    }

    #[test]
    fn test_format_options() {
        assert_eq!(format_options(&[]), "");
        assert_eq!(
            format_options(&[base::Scope::All, "P1".into(), "P2".into()]),
            "(all)\nP1\nP2"
        );
    }
}
