//! Best-city analysis over a ranked list.

use crate::model::RankedCityStats;
use crate::rating::Favorability;

/// The top-rated cities that share the rank-1 favorability.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BestCities {
    /// City names in rank order.
    pub cities: Vec<String>,
    /// Favorability shared by all of them, `None` for an empty ranking.
    pub favorability: Option<Favorability>,
}

impl BestCities {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

/// Pick the rank-1 city and every city directly after it with the same
/// (temperature, dry hours) pair.
///
/// Entries are visited by ascending rating; the scan stops at the first
/// city that differs, so only contiguous ties are included.
#[must_use]
pub fn best_cities(ranked: &[RankedCityStats]) -> BestCities {
    let mut by_rating: Vec<&RankedCityStats> = ranked.iter().collect();
    by_rating.sort_by_key(|entry| entry.rating);

    let Some((best, rest)) = by_rating.split_first() else {
        return BestCities::default();
    };
    let favorability = best.favorability();

    let cities = std::iter::once(*best)
        .chain(
            rest.iter()
                .copied()
                .take_while(|entry| entry.favorability() == favorability),
        )
        .map(|entry| entry.city().to_string())
        .collect();

    BestCities {
        cities,
        favorability: Some(favorability),
    }
}
