//! Favorability ordering and rank assignment.

use std::cmp::Ordering;

use crate::model::{CityStats, RankedCityStats};

/// Sort key of a city: warmer first, then more dry hours.
///
/// A missing value is lower than every present value, so cities without
/// data rank last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Favorability {
    pub average_temp: Option<i64>,
    pub no_rain: Option<u32>,
}

impl Favorability {
    #[must_use]
    pub fn new(average_temp: Option<i64>, no_rain: Option<u32>) -> Self {
        Self {
            average_temp,
            no_rain,
        }
    }
}

impl Ord for Favorability {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_missing_lowest(self.average_temp, other.average_temp)
            .then_with(|| cmp_missing_lowest(self.no_rain, other.no_rain))
    }
}

impl PartialOrd for Favorability {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn cmp_missing_lowest<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

impl CityStats {
    #[must_use]
    pub fn favorability(&self) -> Favorability {
        Favorability::new(self.average_temp, self.no_rain)
    }
}

impl RankedCityStats {
    #[must_use]
    pub fn favorability(&self) -> Favorability {
        self.stats.favorability()
    }
}

/// Sort cities by descending favorability and number them from 1.
///
/// The sort is stable: equally favorable cities keep their input order.
#[must_use]
pub fn rank(mut items: Vec<CityStats>) -> Vec<RankedCityStats> {
    items.sort_by(|a, b| b.favorability().cmp(&a.favorability()));
    items
        .into_iter()
        .zip(1u32..)
        .map(|(stats, rating)| RankedCityStats { stats, rating })
        .collect()
}
