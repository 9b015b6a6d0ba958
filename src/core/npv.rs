use std::iter::once;

use itertools::Itertools;

use crate::quantity::currency::Euros;

/// Present value of a single cash flow received `period` periods from now.
#[allow(clippy::cast_precision_loss)]
pub fn discount(rate: f64, period: usize, flow: Euros) -> Euros {
    flow / (1.0 + rate).powf(period as f64)
}

/// Net present value of `flows`, where `flows[0]` is the (negative) outlay at period zero.
///
/// `rate` is the per-period fraction. A rate of `-1` is outside the domain.
pub fn compute_npv(rate: f64, flows: &[Euros]) -> Euros {
    flows.iter().enumerate().map(|(period, flow)| discount(rate, period, *flow)).sum()
}

/// Prepends the investment outlay to the period cash flows.
pub fn with_outlay(investment: Euros, flows: &[Euros]) -> Vec<Euros> {
    once(-investment).chain(flows.iter().copied()).collect_vec()
}
