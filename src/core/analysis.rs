use bon::Builder;
use serde::Serialize;

use crate::{
    core::{
        cashflow::{Payback, compute_cumulative_series, compute_payback_period},
        chart::CumulativeChart,
        npv::{compute_npv, with_outlay},
        period::AnalysisPeriod,
        savings::{MonthlySavings, SavingsInput},
        sensitivity::{SensitivityBand, SensitivityResult, compute_sensitivity},
    },
    prelude::*,
    quantity::{currency::Euros, percent::Percent},
};

/// End-to-end analysis run. It keeps no state: build a new one whenever an input changes.
#[derive(Builder)]
#[builder(finish_fn(vis = ""))]
pub struct Analysis {
    savings: SavingsInput,
    investment: Euros,
    discount_rate: Percent,
    period: AnalysisPeriod,

    /// Period cash flows, without the investment.
    cash_flows: Vec<Euros>,

    sensitivity_band: Option<SensitivityBand>,
}

impl<S: analysis_builder::IsComplete> AnalysisBuilder<S> {
    pub fn run(self) -> AnalysisReport {
        self.build().run()
    }
}

impl Analysis {
    #[instrument(skip_all, fields(period = %self.period, horizon = self.cash_flows.len()))]
    fn run(self) -> AnalysisReport {
        let savings = self.savings.monthly();
        let npv = compute_npv(
            self.period.periodic_rate(self.discount_rate),
            &with_outlay(self.investment, &self.cash_flows),
        );
        let result = AnalysisResult {
            investment: self.investment,
            discount_rate: self.discount_rate,
            npv,
            cumulative_series: compute_cumulative_series(self.investment, &self.cash_flows),
            payback_period: compute_payback_period(self.investment, &self.cash_flows),
        };
        let sensitivity = compute_sensitivity(
            self.discount_rate,
            self.sensitivity_band,
            &self.cash_flows,
            self.investment,
            self.period,
        );
        debug!(npv = %result.npv, payback_period = %result.payback_period, "analysed");
        AnalysisReport {
            period: self.period,
            savings,
            cash_flows: self.cash_flows,
            result,
            sensitivity,
        }
    }
}

#[must_use]
#[derive(Clone, Debug, Serialize)]
pub struct AnalysisResult {
    pub investment: Euros,
    pub discount_rate: Percent,

    /// Net present value, including the investment at period zero.
    pub npv: Euros,

    /// `-investment` followed by the running totals, one per period.
    pub cumulative_series: Vec<Euros>,

    pub payback_period: Payback,
}

#[must_use]
#[derive(Clone, Debug, Serialize)]
pub struct AnalysisReport {
    pub period: AnalysisPeriod,
    pub savings: MonthlySavings,
    pub cash_flows: Vec<Euros>,
    pub result: AnalysisResult,
    pub sensitivity: SensitivityResult,
}

impl AnalysisReport {
    pub fn chart(&self) -> CumulativeChart<'_> {
        CumulativeChart::new(&self.result.cumulative_series)
    }
}
