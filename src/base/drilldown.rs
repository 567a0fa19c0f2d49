//! Two-axis selection, period then major category, over a working set.
//!
//! [`DrillDownState`] is a plain value; its transitions are pure functions of
//! the previous state and the working set. [`Session`] owns the working set
//! together with the current state and is the only place where either changes.
//! Every derived view is recomputed from scratch on request.

use crate::base;

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrillDownState {
    pub period: base::Scope,
    pub major_category: base::Scope,
}

/// "All periods" followed by each period in `ws`, in order of first
/// appearance.
pub fn period_options(ws: &base::Workingset) -> Vec<base::Scope> {
    std::iter::once(base::Scope::All)
        .chain(ws.periods().into_iter().map(base::Scope::from))
        .collect()
}

/// "All categories" followed by each major category that has at least one
/// expense within `period`, in order of first appearance.
pub fn major_category_options(ws: &base::Workingset, period: &base::Scope) -> Vec<base::Scope> {
    let expenses = base::filter::expenses(base::filter::by_period(ws.iter(), period));
    std::iter::once(base::Scope::All)
        .chain(
            base::util::distinct(expenses.iter().map(|r| r.major_category()))
                .into_iter()
                .map(base::Scope::from),
        )
        .collect()
}

/// Returns `wanted` if it is one of `options`, otherwise [`base::Scope::All`].
fn coerce(wanted: base::Scope, options: &[base::Scope], axis: &str) -> base::Scope {
    if options.contains(&wanted) {
        wanted
    } else {
        tracing::debug!(?wanted, axis, "selection not available, using all");
        base::Scope::All
    }
}

impl DrillDownState {
    /// Selects `period`, then drops the major category selection if the new
    /// period has no expenses under it.
    pub fn with_period(self, ws: &base::Workingset, period: base::Scope) -> Self {
        let period = coerce(period, &period_options(ws), "period");
        let major_category = coerce(
            self.major_category,
            &major_category_options(ws, &period),
            "major category",
        );
        Self {
            period,
            major_category,
        }
    }

    /// Selects `major_category` within the current period. Causes no other
    /// changes.
    pub fn with_major_category(self, ws: &base::Workingset, major_category: base::Scope) -> Self {
        let major_category = coerce(
            major_category,
            &major_category_options(ws, &self.period),
            "major category",
        );
        Self {
            major_category,
            ..self
        }
    }

    /// Records in the selected period, all categories.
    pub fn period_scope<'a>(&self, ws: &'a base::Workingset) -> Vec<&'a base::Record> {
        base::filter::by_period(ws.iter(), &self.period)
    }

    /// Expense records in the selected period and major category.
    pub fn drill_down<'a>(&self, ws: &'a base::Workingset) -> Vec<&'a base::Record> {
        let expenses = base::filter::expenses(self.period_scope(ws));
        base::filter::by_major_category(expenses, &self.major_category)
    }

    pub fn views(&self, ws: &base::Workingset) -> base::Views {
        let period_scope = self.period_scope(ws);
        let drill_down = base::filter::by_major_category(
            base::filter::expenses(period_scope.iter().copied()),
            &self.major_category,
        );
        let pie = base::grouping::group_sum(
            period_scope.iter().copied(),
            base::Dimension::MajorCategory,
        );
        let bar = base::grouping::group_sum(drill_down.iter().copied(), base::Dimension::SubCategory);
        base::Views {
            selection: self.clone(),
            summary: base::summarize(period_scope.iter().copied()),
            pie: base::view::to_series(&pie),
            bar: base::view::to_series(&bar),
            rows: base::view::to_detail_rows(drill_down),
            period_options: period_options(ws),
            category_options: major_category_options(ws, &self.period),
        }
    }
}

/// A working set and the selection over it.
#[derive(Debug, Clone, Default)]
pub struct Session {
    ws: base::Workingset,
    state: DrillDownState,
}

impl Session {
    pub fn new(ws: base::Workingset) -> Self {
        Self {
            ws,
            state: DrillDownState::default(),
        }
    }

    pub fn working_set(&self) -> &base::Workingset {
        &self.ws
    }

    pub fn state(&self) -> &DrillDownState {
        &self.state
    }

    /// Replaces the working set and resets both selections to "all".
    pub fn ingest(&mut self, ws: base::Workingset) -> base::Views {
        self.ws = ws;
        self.state = DrillDownState::default();
        self.views()
    }

    pub fn set_period(&mut self, period: impl Into<base::Scope>) -> base::Views {
        let state = std::mem::take(&mut self.state);
        self.state = state.with_period(&self.ws, period.into());
        tracing::debug!(state = ?self.state, "period changed");
        self.views()
    }

    pub fn set_major_category(&mut self, major_category: impl Into<base::Scope>) -> base::Views {
        let state = std::mem::take(&mut self.state);
        self.state = state.with_major_category(&self.ws, major_category.into());
        tracing::debug!(state = ?self.state, "major category changed");
        self.views()
    }

    pub fn views(&self) -> base::Views {
        self.state.views(&self.ws)
    }

    /// See [`DrillDownState::drill_down`].
    pub fn drill_down(&self) -> Vec<&base::Record> {
        self.state.drill_down(&self.ws)
    }
}
