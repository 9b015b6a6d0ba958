use std::fmt::{Display, Formatter};

use comfy_table::{Cell, CellAlignment, Color, Table, modifiers, presets};
use serde::{Deserialize, Serialize};

use crate::{
    core::{
        npv::{compute_npv, with_outlay},
        period::AnalysisPeriod,
    },
    quantity::{currency::Euros, percent::Percent},
};

/// Pair of alternative discount rates, each kept within `0..=20%`.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SensitivityBand {
    pub low: Percent,
    pub high: Percent,
}

impl SensitivityBand {
    pub const MAX_RATE: Percent = Percent(20.0);
    pub const DEFAULT_SPREAD: Percent = Percent(2.0);

    pub fn new(low: Percent, high: Percent) -> Self {
        Self { low: Self::clamp(low), high: Self::clamp(high) }
    }

    /// Default band: the base rate plus and minus [`Self::DEFAULT_SPREAD`].
    pub fn around(base_rate: Percent) -> Self {
        Self::new(base_rate - Self::DEFAULT_SPREAD, base_rate + Self::DEFAULT_SPREAD)
    }

    fn clamp(rate: Percent) -> Percent {
        rate.clamp(Percent::ZERO, Self::MAX_RATE)
    }
}

#[must_use]
#[derive(Copy, Clone, Debug, Serialize)]
pub struct SensitivityResult {
    pub low_rate: Percent,
    pub high_rate: Percent,
    pub npv_at_low: Euros,
    pub npv_at_high: Euros,
}

/// Recompute the NPV at both ends of the band, scaling the rates the same way as the base NPV.
///
/// Without an explicit band, the default one around `base_rate` is used.
pub fn compute_sensitivity(
    base_rate: Percent,
    band: Option<SensitivityBand>,
    flows: &[Euros],
    investment: Euros,
    period: AnalysisPeriod,
) -> SensitivityResult {
    let band = band.map_or_else(
        || SensitivityBand::around(base_rate),
        |band| SensitivityBand::new(band.low, band.high),
    );
    let flows = with_outlay(investment, flows);
    SensitivityResult {
        low_rate: band.low,
        high_rate: band.high,
        npv_at_low: compute_npv(period.periodic_rate(band.low), &flows),
        npv_at_high: compute_npv(period.periodic_rate(band.high), &flows),
    }
}

impl Display for SensitivityResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut table = Table::new();
        table
            .load_preset(presets::UTF8_FULL_CONDENSED)
            .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
            .enforce_styling()
            .set_header(vec!["Discount rate", "NPV"]);
        for (rate, npv) in [(self.low_rate, self.npv_at_low), (self.high_rate, self.npv_at_high)] {
            table.add_row(vec![
                Cell::new(rate).set_alignment(CellAlignment::Right),
                Cell::new(npv).set_alignment(CellAlignment::Right).fg(if npv.is_negative() {
                    Color::Red
                } else {
                    Color::Green
                }),
            ]);
        }
        write!(f, "{table}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLOWS: [Euros; 3] = [Euros(4800.0), Euros(4800.0), Euros(4800.0)];

    #[test]
    fn test_band_around_base_rate() {
        assert_eq!(
            SensitivityBand::around(Percent(5.0)),
            SensitivityBand { low: Percent(3.0), high: Percent(7.0) },
        );
    }

    #[test]
    fn test_band_is_clamped() {
        assert_eq!(
            SensitivityBand::around(Percent(1.0)),
            SensitivityBand { low: Percent::ZERO, high: Percent(3.0) },
        );
        assert_eq!(
            SensitivityBand::new(Percent(19.0), Percent(45.0)),
            SensitivityBand { low: Percent(19.0), high: Percent(20.0) },
        );
    }

    #[test]
    fn test_npv_ordering_around_base() {
        let investment = Euros(2000.0);
        let base = compute_npv(0.05, &with_outlay(investment, &FLOWS));
        let result = compute_sensitivity(
            Percent(5.0),
            Some(SensitivityBand::new(Percent(3.0), Percent(7.0))),
            &FLOWS,
            investment,
            AnalysisPeriod::Annual,
        );
        assert!(result.npv_at_low > base);
        assert!(base > result.npv_at_high);
    }

    #[test]
    fn test_default_band_matches_explicit() {
        let implicit =
            compute_sensitivity(Percent(5.0), None, &FLOWS, Euros(2000.0), AnalysisPeriod::Monthly);
        let explicit = compute_sensitivity(
            Percent(5.0),
            Some(SensitivityBand::new(Percent(3.0), Percent(7.0))),
            &FLOWS,
            Euros(2000.0),
            AnalysisPeriod::Monthly,
        );
        assert_eq!(implicit.npv_at_low, explicit.npv_at_low);
        assert_eq!(implicit.npv_at_high, explicit.npv_at_high);
    }

    #[test]
    fn test_monthly_scaling() {
        let result = compute_sensitivity(
            Percent(5.0),
            Some(SensitivityBand::new(Percent(12.0), Percent(12.0))),
            &FLOWS,
            Euros(2000.0),
            AnalysisPeriod::Monthly,
        );
        let expected = compute_npv(0.01, &with_outlay(Euros(2000.0), &FLOWS));
        assert_eq!(result.npv_at_low, expected);
    }
}
