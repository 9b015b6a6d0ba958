//! Report letter and JSON export of a completed analysis.

use std::{fs, path::Path};

use serde::Serialize;

use crate::{
    core::{analysis::AnalysisReport, cashflow::Payback, chart::CumulativeChart},
    prelude::*,
    quantity::currency::Euros,
    scenario::Service,
};

#[derive(Serialize)]
struct JsonReport<'a> {
    service: Service,

    #[serde(flatten)]
    report: &'a AnalysisReport,

    chart: JsonChart<'a>,
}

#[derive(Serialize)]
struct JsonChart<'a> {
    crossing: Option<usize>,
    negative_phase: &'a [Euros],
    positive_phase: &'a [Euros],
}

impl<'a> From<CumulativeChart<'a>> for JsonChart<'a> {
    fn from(chart: CumulativeChart<'a>) -> Self {
        Self {
            crossing: chart.crossing(),
            negative_phase: chart.negative_phase(),
            positive_phase: chart.positive_phase(),
        }
    }
}

pub fn to_json(service: Service, report: &AnalysisReport) -> Result<String> {
    let json = JsonReport { service, report, chart: report.chart().into() };
    serde_json::to_string_pretty(&json).context("failed to serialize the report")
}

#[must_use]
pub fn render_letter(service: Service, report: &AnalysisReport) -> String {
    let result = &report.result;
    let horizon = report.cash_flows.len();
    let payback = match result.payback_period {
        Payback::Within(period) => format!("{period} {}", report.period.unit(period)),
        Payback::NotWithinHorizon => result.payback_period.to_string(),
    };

    let sensitivity = &report.sensitivity;
    format!(
        "Cost-saving analysis for the {service}\n\
         \n\
         This analysis estimates the savings and the net present value of introducing the \
         {service}, based on the parameters provided.\n\
         \n\
         Key figures:\n\
         - Net present value (NPV): {npv}\n\
         - Payback period: {payback}\n\
         - Investment: {investment}\n\
         - Savings per month: {savings} ({time_saved} saved)\n\
         - Discount rate: {rate} ({period} analysis over {horizon} {unit})\n\
         - NPV at {low_rate}: {npv_at_low}; at {high_rate}: {npv_at_high}\n\
         \n\
         The figures account for both the investment and the discounted future cash flows.\n",
        npv = result.npv,
        investment = result.investment,
        savings = report.savings.amount,
        time_saved = report.savings.time_saved,
        rate = result.discount_rate,
        period = report.period.to_string().to_lowercase(),
        unit = report.period.unit(horizon),
        low_rate = sensitivity.low_rate,
        npv_at_low = sensitivity.npv_at_low,
        high_rate = sensitivity.high_rate,
        npv_at_high = sensitivity.npv_at_high,
    )
}

pub fn write_letter(path: &Path, service: Service, report: &AnalysisReport) -> Result {
    fs::write(path, render_letter(service, report))
        .with_context(|| format!("failed to write the report to `{}`", path.display()))
}
