use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{
    core::savings::MonthlySavings,
    quantity::{currency::Euros, percent::Percent},
};

/// Granularity of the cash flows and of the discounting.
#[derive(
    Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisPeriod {
    /// One cash flow per year, discounted by the annual rate.
    #[default]
    Annual,

    /// One cash flow per month, discounted by a flat twelfth of the annual rate.
    Monthly,
}

impl AnalysisPeriod {
    /// Turns a discount rate percentage into the per-period fraction.
    ///
    /// The monthly rate is a flat slice of the annual percentage, not its compounding
    /// equivalent.
    #[must_use]
    pub const fn rate_divisor(self) -> f64 {
        match self {
            Self::Annual => 100.0,
            Self::Monthly => 1200.0,
        }
    }

    #[must_use]
    pub const fn periodic_rate(self, rate: Percent) -> f64 {
        rate.0 / self.rate_divisor()
    }

    #[must_use]
    pub const fn max_horizon(self) -> usize {
        match self {
            Self::Annual => 50,
            Self::Monthly => 600,
        }
    }

    #[must_use]
    pub const fn default_horizon(self) -> usize {
        match self {
            Self::Annual => 5,
            Self::Monthly => 6,
        }
    }

    /// Cash flow of a single period when nothing else is known than the monthly savings.
    pub fn default_cash_flow(self, savings: &MonthlySavings) -> Euros {
        match self {
            Self::Annual => savings.amount * 12.0,
            Self::Monthly => savings.amount,
        }
    }

    /// Unit label for `count` periods.
    #[must_use]
    pub const fn unit(self, count: usize) -> &'static str {
        match (self, count) {
            (Self::Annual, 1) => "year",
            (Self::Annual, _) => "years",
            (Self::Monthly, 1) => "month",
            (Self::Monthly, _) => "months",
        }
    }
}

impl Display for AnalysisPeriod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Annual => write!(f, "Annual"),
            Self::Monthly => write!(f, "Monthly"),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::quantity::time::Hours;

    #[test]
    fn test_periodic_rate() {
        assert_abs_diff_eq!(AnalysisPeriod::Annual.periodic_rate(Percent(5.0)), 0.05);
        assert_abs_diff_eq!(AnalysisPeriod::Monthly.periodic_rate(Percent(6.0)), 0.005);
    }

    #[test]
    fn test_default_cash_flow() {
        let savings = MonthlySavings { time_saved: Hours(20.0), amount: Euros(400.0) };
        assert_eq!(AnalysisPeriod::Annual.default_cash_flow(&savings), Euros(4800.0));
        assert_eq!(AnalysisPeriod::Monthly.default_cash_flow(&savings), Euros(400.0));
    }

    #[test]
    fn test_unit() {
        assert_eq!(AnalysisPeriod::Annual.unit(1), "year");
        assert_eq!(AnalysisPeriod::Annual.unit(3), "years");
        assert_eq!(AnalysisPeriod::Monthly.unit(1), "month");
        assert_eq!(AnalysisPeriod::Monthly.unit(0), "months");
    }

    #[test]
    fn test_deserialize() {
        #[derive(Deserialize)]
        struct Wrapper {
            period: AnalysisPeriod,
        }
        let wrapper: Wrapper = toml::from_str(r#"period = "monthly""#).unwrap();
        assert_eq!(wrapper.period, AnalysisPeriod::Monthly);
    }
}
