use clap::Parser;

use crate::{
    core::savings::SavingsInput,
    prelude::*,
    quantity::{
        currency::EurosPerHour,
        time::{Days, HoursPerDay},
    },
    scenario::validate_savings,
    tables::build_savings_table,
};

#[derive(Copy, Clone, Parser)]
pub struct SavingsArgs {
    /// Hourly wage of the people whose time is saved, in euros.
    #[clap(long = "hourly-wage", default_value = "20", env = "HOURLY_WAGE")]
    pub hourly_wage: EurosPerHour,

    /// Working time saved per day, in hours.
    #[clap(long = "time-saved-per-day", default_value = "1", env = "TIME_SAVED_PER_DAY")]
    pub time_saved_per_day: HoursPerDay,

    #[clap(
        long = "working-days-per-month",
        default_value = "20",
        env = "WORKING_DAYS_PER_MONTH"
    )]
    pub working_days_per_month: Days,
}

impl From<SavingsArgs> for SavingsInput {
    fn from(args: SavingsArgs) -> Self {
        Self {
            hourly_wage: args.hourly_wage,
            time_saved_per_day: args.time_saved_per_day,
            working_days_per_month: args.working_days_per_month,
        }
    }
}

#[instrument(skip_all)]
pub fn savings(args: SavingsArgs) -> Result {
    let input = SavingsInput::from(args);
    validate_savings(&input)?;
    let savings = input.monthly();
    info!(time_saved = %savings.time_saved, amount = %savings.amount, "estimated");
    println!("{}", build_savings_table(&savings));
    Ok(())
}
