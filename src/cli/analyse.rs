use clap::Parser;

use crate::{
    cli::{output::OutputArgs, savings::SavingsArgs},
    core::{period::AnalysisPeriod, sensitivity::SensitivityBand},
    prelude::*,
    quantity::{currency::Euros, percent::Percent},
    scenario::{Scenario, Service},
};

#[derive(Parser)]
pub struct AnalyseArgs {
    #[clap(long, default_value = "assistant", env = "SERVICE")]
    pub service: Service,

    #[clap(flatten)]
    pub savings: SavingsArgs,

    /// Initial investment, in euros.
    #[clap(long, default_value = "2000", env = "INVESTMENT")]
    pub investment: Euros,

    /// Annual discount rate, in percent.
    #[clap(long = "discount-rate", default_value = "5", env = "DISCOUNT_RATE")]
    pub discount_rate: Percent,

    #[clap(long, default_value = "annual", env = "ANALYSIS_PERIOD")]
    pub period: AnalysisPeriod,

    /// Number of periods: 1–50 years or 1–600 months.
    ///
    /// Defaults to the number of cash flows when those are given, otherwise to 5 years or 6 months.
    #[clap(long, env = "HORIZON")]
    pub horizon: Option<usize>,

    /// Cash flow of each period, in euros. By default, every period yields the savings.
    #[clap(long = "cash-flows", env = "CASH_FLOWS", value_delimiter = ',', num_args = 1..)]
    pub cash_flows: Option<Vec<Euros>>,

    /// Lower discount rate for the sensitivity analysis, defaults to the discount rate minus 2%.
    #[clap(long = "sensitivity-low", env = "SENSITIVITY_LOW")]
    pub sensitivity_low: Option<Percent>,

    /// Upper discount rate for the sensitivity analysis, defaults to the discount rate plus 2%.
    #[clap(long = "sensitivity-high", env = "SENSITIVITY_HIGH")]
    pub sensitivity_high: Option<Percent>,

    #[clap(flatten)]
    pub output: OutputArgs,
}

impl AnalyseArgs {
    fn sensitivity(&self) -> Option<SensitivityBand> {
        if self.sensitivity_low.is_none() && self.sensitivity_high.is_none() {
            return None;
        }
        let default = SensitivityBand::around(self.discount_rate);
        Some(SensitivityBand {
            low: self.sensitivity_low.unwrap_or(default.low),
            high: self.sensitivity_high.unwrap_or(default.high),
        })
    }

    pub fn scenario(&self) -> Scenario {
        Scenario::builder()
            .service(self.service)
            .savings(self.savings.into())
            .investment(self.investment)
            .discount_rate(self.discount_rate)
            .period(self.period)
            .maybe_horizon(self.horizon)
            .maybe_cash_flows(self.cash_flows.clone())
            .maybe_sensitivity(self.sensitivity())
            .build()
    }
}

#[instrument(skip_all)]
pub fn analyse(args: &AnalyseArgs) -> Result {
    let scenario = args.scenario();
    let report = scenario.analyse()?;
    args.output.emit(scenario.service, &report)
}
