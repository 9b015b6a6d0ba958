use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::quantity::currency::Euros;

/// The first period in which the cumulative inflows recover the investment.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Payback {
    /// 1-based period index.
    Within(usize),

    NotWithinHorizon,
}

impl Payback {
    #[must_use]
    pub const fn period(self) -> Option<usize> {
        match self {
            Self::Within(period) => Some(period),
            Self::NotWithinHorizon => None,
        }
    }
}

impl Display for Payback {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Within(period) => write!(f, "{period}"),
            Self::NotWithinHorizon => write!(f, "not within the horizon"),
        }
    }
}

/// Running totals of `[-investment, flows…]`, one longer than `flows`.
pub fn compute_cumulative_series(investment: Euros, flows: &[Euros]) -> Vec<Euros> {
    let mut total = -investment;
    let mut series = Vec::with_capacity(flows.len() + 1);
    series.push(total);
    for flow in flows {
        total += *flow;
        series.push(total);
    }
    series
}

/// First period whose cumulative total is non-negative: reaching the investment exactly counts.
///
/// The totals are the very values of [`compute_cumulative_series`], so the payback always
/// agrees with the chart crossing.
pub fn compute_payback_period(investment: Euros, flows: &[Euros]) -> Payback {
    compute_cumulative_series(investment, flows)
        .into_iter()
        .skip(1)
        .position(|total| total >= Euros::ZERO)
        .map_or(Payback::NotWithinHorizon, |index| Payback::Within(index + 1))
}
