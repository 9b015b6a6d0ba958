use serde::{Deserialize, Serialize};

use crate::quantity::{
    currency::{Euros, EurosPerHour},
    time::{Days, Hours, HoursPerDay},
};

#[must_use]
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SavingsInput {
    pub hourly_wage: EurosPerHour,
    pub time_saved_per_day: HoursPerDay,
    pub working_days_per_month: Days,
}

impl Default for SavingsInput {
    fn default() -> Self {
        Self {
            hourly_wage: EurosPerHour(20.0),
            time_saved_per_day: HoursPerDay(1.0),
            working_days_per_month: Days(20.0),
        }
    }
}

impl SavingsInput {
    pub fn monthly(self) -> MonthlySavings {
        compute_monthly_savings(
            self.hourly_wage,
            self.time_saved_per_day,
            self.working_days_per_month,
        )
    }
}

#[must_use]
#[derive(Copy, Clone, Debug, Serialize)]
pub struct MonthlySavings {
    pub time_saved: Hours,
    pub amount: Euros,
}

/// Negative inputs are not special-cased: the caller validates them away.
pub fn compute_monthly_savings(
    hourly_wage: EurosPerHour,
    time_saved_per_day: HoursPerDay,
    working_days_per_month: Days,
) -> MonthlySavings {
    let time_saved = time_saved_per_day * working_days_per_month;
    MonthlySavings { time_saved, amount: time_saved * hourly_wage }
}
