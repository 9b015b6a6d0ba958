use std::{
    fmt::{Display, Formatter},
    fs,
    path::Path,
};

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::{
    core::{
        analysis::{Analysis, AnalysisReport},
        period::AnalysisPeriod,
        savings::SavingsInput,
        sensitivity::SensitivityBand,
    },
    prelude::*,
    quantity::{currency::Euros, percent::Percent},
};

#[derive(
    Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Service {
    /// A single AI assistant.
    #[default]
    Assistant,

    /// A team of AI assistants.
    Team,
}

impl Display for Service {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Assistant => write!(f, "AI assistant"),
            Self::Team => write!(f, "team of AI assistants"),
        }
    }
}

/// Complete set of analysis inputs, as entered by the user.
#[must_use]
#[derive(Clone, Debug, Serialize, Deserialize, Builder)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    #[builder(default)]
    #[serde(default)]
    pub service: Service,

    #[builder(default)]
    #[serde(default)]
    pub savings: SavingsInput,

    pub investment: Euros,

    /// Annual discount rate.
    pub discount_rate: Percent,

    #[builder(default)]
    #[serde(default)]
    pub period: AnalysisPeriod,

    /// Number of periods, defaults to the number of cash flows or to the period's default.
    pub horizon: Option<usize>,

    /// Explicit cash flows, one per period. By default, every period yields the savings.
    pub cash_flows: Option<Vec<Euros>>,

    pub sensitivity: Option<SensitivityBand>,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse `{}`", path.display()))
    }

    #[must_use]
    pub fn horizon(&self) -> usize {
        self.horizon
            .or_else(|| self.cash_flows.as_ref().map(Vec::len))
            .unwrap_or_else(|| self.period.default_horizon())
    }

    pub fn cash_flows(&self) -> Vec<Euros> {
        self.cash_flows.clone().unwrap_or_else(|| {
            vec![self.period.default_cash_flow(&self.savings.monthly()); self.horizon()]
        })
    }

    /// Reject everything the analysis engine is not defined for.
    pub fn validate(&self) -> Result {
        validate_savings(&self.savings)?;
        ensure_non_negative("investment", self.investment.0)?;
        ensure!(
            self.discount_rate.is_finite()
                && (Percent::ZERO..=Percent::HUNDRED).contains(&self.discount_rate),
            "discount rate must be within 0–100%, got {}",
            self.discount_rate,
        );

        let horizon = self.horizon();
        let max_horizon = self.period.max_horizon();
        ensure!(
            (1..=max_horizon).contains(&horizon),
            "horizon must be within 1–{max_horizon} {}, got {horizon}",
            self.period.unit(max_horizon),
        );
        if let Some(cash_flows) = &self.cash_flows {
            ensure!(
                cash_flows.len() == horizon,
                "expected {horizon} cash flows, got {}",
                cash_flows.len(),
            );
            for (index, cash_flow) in cash_flows.iter().enumerate() {
                ensure_non_negative(&format!("cash flow #{}", index + 1), cash_flow.0)?;
            }
        }

        if let Some(band) = self.sensitivity {
            ensure!(
                band.low.is_finite() && band.high.is_finite(),
                "sensitivity band must be finite, got {}…{}",
                band.low,
                band.high,
            );
            let band = SensitivityBand::new(band.low, band.high);
            ensure!(
                band.low <= band.high,
                "sensitivity band is inverted after clamping: {} > {}",
                band.low,
                band.high,
            );
        }

        Ok(())
    }

    #[instrument(skip_all, fields(service = %self.service, period = %self.period))]
    pub fn analyse(&self) -> Result<AnalysisReport> {
        self.validate()?;
        let report = Analysis::builder()
            .savings(self.savings)
            .investment(self.investment)
            .discount_rate(self.discount_rate)
            .period(self.period)
            .cash_flows(self.cash_flows())
            .maybe_sensitivity_band(self.sensitivity)
            .run();
        info!(
            npv = %report.result.npv,
            payback_period = %report.result.payback_period,
            "completed",
        );
        Ok(report)
    }
}

pub fn validate_savings(savings: &SavingsInput) -> Result {
    ensure_non_negative("hourly wage", savings.hourly_wage.0)?;
    ensure_non_negative("time saved per day", savings.time_saved_per_day.0)?;
    ensure_non_negative("working days per month", savings.working_days_per_month.0)?;
    Ok(())
}

fn ensure_non_negative(name: &str, value: f64) -> Result {
    ensure!(value.is_finite() && value >= 0.0, "{name} must be a non-negative number, got {value}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{core::cashflow::Payback, quantity::time::Days};

    fn scenario() -> Scenario {
        Scenario::builder().investment(Euros(2000.0)).discount_rate(Percent(5.0)).build()
    }

    #[test]
    fn test_defaults() {
        let scenario = scenario();
        scenario.validate().unwrap();
        assert_eq!(scenario.horizon(), 5);
        assert_eq!(scenario.cash_flows(), vec![Euros(4800.0); 5]);
    }

    #[test]
    fn test_horizon_from_cash_flows() {
        let scenario = Scenario { cash_flows: Some(vec![Euros(1.0); 3]), ..scenario() };
        assert_eq!(scenario.horizon(), 3);
        scenario.validate().unwrap();
    }

    #[test]
    fn test_monthly_default_cash_flows() {
        let scenario = Scenario { period: AnalysisPeriod::Monthly, ..scenario() };
        assert_eq!(scenario.cash_flows(), vec![Euros(400.0); 6]);
    }

    #[test]
    fn test_rejects_negative_investment() {
        let scenario = Scenario { investment: Euros(-1.0), ..scenario() };
        assert!(scenario.validate().unwrap_err().to_string().contains("investment"));
    }

    #[test]
    fn test_rejects_out_of_range_discount_rate() {
        assert!(Scenario { discount_rate: Percent(100.5), ..scenario() }.validate().is_err());
        assert!(Scenario { discount_rate: Percent(-0.1), ..scenario() }.validate().is_err());
        assert!(Scenario { discount_rate: Percent(f64::NAN), ..scenario() }.validate().is_err());
        Scenario { discount_rate: Percent(100.0), ..scenario() }.validate().unwrap();
    }

    #[test]
    fn test_rejects_out_of_range_horizon() {
        assert!(Scenario { horizon: Some(0), ..scenario() }.validate().is_err());
        assert!(Scenario { horizon: Some(51), ..scenario() }.validate().is_err());
        let monthly =
            Scenario { period: AnalysisPeriod::Monthly, horizon: Some(600), ..scenario() };
        monthly.validate().unwrap();
    }

    #[test]
    fn test_rejects_mismatched_cash_flows() {
        let scenario =
            Scenario { horizon: Some(4), cash_flows: Some(vec![Euros(1.0); 3]), ..scenario() };
        assert!(scenario.validate().is_err());
    }

    #[test]
    fn test_rejects_negative_cash_flow() {
        let scenario =
            Scenario { cash_flows: Some(vec![Euros(1.0), Euros(-1.0)]), ..scenario() };
        assert!(scenario.validate().unwrap_err().to_string().contains("cash flow #2"));
    }

    #[test]
    fn test_rejects_negative_savings() {
        let savings =
            SavingsInput { working_days_per_month: Days(-1.0), ..SavingsInput::default() };
        assert!(Scenario { savings, ..scenario() }.validate().is_err());
    }

    #[test]
    fn test_rejects_inverted_band() {
        let band = SensitivityBand { low: Percent(7.0), high: Percent(3.0) };
        assert!(Scenario { sensitivity: Some(band), ..scenario() }.validate().is_err());

        // Both ends are clamped to 20% and the band collapses.
        let band = SensitivityBand { low: Percent(30.0), high: Percent(25.0) };
        Scenario { sensitivity: Some(band), ..scenario() }.validate().unwrap();
    }

    #[test]
    fn test_load_annual_scenario() {
        let scenario: Scenario =
            toml::from_str(include_str!("../scenarios/assistant.toml")).unwrap();
        assert_eq!(scenario.service, Service::Assistant);
        let report = scenario.analyse().unwrap();
        assert_abs_diff_eq!(report.result.npv.0, 11071.59, epsilon = 0.005);
        assert_eq!(report.result.payback_period, Payback::Within(1));
        assert_eq!(report.sensitivity.low_rate, Percent(3.0));
    }

    #[test]
    fn test_load_monthly_scenario() {
        let scenario: Scenario =
            toml::from_str(include_str!("../scenarios/team-monthly.toml")).unwrap();
        assert_eq!(scenario.service, Service::Team);
        assert_eq!(scenario.period, AnalysisPeriod::Monthly);
        let report = scenario.analyse().unwrap();
        assert_eq!(report.cash_flows.len(), 24);
        assert_abs_diff_eq!(report.savings.amount.0, 35.0 * 2.5 * 21.0);
        assert_eq!(report.result.payback_period, Payback::Within(7));
    }

    #[test]
    fn test_rejects_unknown_fields() {
        let result = toml::from_str::<Scenario>(
            "investment = 1.0\ndiscount_rate = 1.0\ndiscount = 2.0\n",
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let error = Scenario::load(Path::new("does/not/exist.toml")).unwrap_err();
        assert!(error.to_string().contains("does/not/exist.toml"));
    }
}
