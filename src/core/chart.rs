use comfy_table::Color;

use crate::quantity::currency::Euros;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Phase {
    /// The investment is not recovered yet.
    Negative,

    /// From the first non-negative cumulative value on.
    Positive,
}

impl Phase {
    pub const fn color(self) -> Color {
        match self {
            Self::Negative => Color::Red,
            Self::Positive => Color::Green,
        }
    }
}

/// Two-phase view of a cumulative cash-flow series, split at the first non-negative value.
///
/// The crossing point belongs to both phases so that a rendered line stays continuous.
#[must_use]
#[derive(Copy, Clone, Debug)]
pub struct CumulativeChart<'a> {
    series: &'a [Euros],
    crossing: Option<usize>,
}

impl<'a> CumulativeChart<'a> {
    pub fn new(series: &'a [Euros]) -> Self {
        let crossing = series.iter().position(|total| *total >= Euros::ZERO);
        Self { series, crossing }
    }

    #[must_use]
    pub const fn crossing(&self) -> Option<usize> {
        self.crossing
    }

    #[must_use]
    pub fn negative_phase(&self) -> &'a [Euros] {
        let series = self.series;
        match self.crossing {
            Some(crossing) => &series[..=crossing],
            None => series,
        }
    }

    #[must_use]
    pub fn positive_phase(&self) -> &'a [Euros] {
        let series = self.series;
        match self.crossing {
            Some(crossing) => &series[crossing..],
            None => &[],
        }
    }

    /// Phase of the point at `index`.
    #[must_use]
    pub fn phase_at(&self, index: usize) -> Phase {
        match self.crossing {
            Some(crossing) if index >= crossing => Phase::Positive,
            _ => Phase::Negative,
        }
    }

    pub fn points(&self) -> impl Iterator<Item = (usize, Euros, Phase)> + '_ {
        self.series
            .iter()
            .enumerate()
            .map(move |(index, total)| (index, *total, self.phase_at(index)))
    }
}
