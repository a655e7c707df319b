//! CLI output formatting.

use forecast_core::analysis::BestCities;
use forecast_core::rating::Favorability;

/// Prefix of the report line.
pub const REPORT_PREFIX: &str = "Most favorable city(ies) for a trip:";

/// Format the single report line.
#[must_use]
pub fn format_report(best: &BestCities) -> String {
    if best.is_empty() {
        return format!("{REPORT_PREFIX} no data");
    }
    format!("{REPORT_PREFIX} {}", best.cities.join(", "))
}

/// Format the shared statistics of the best cities, e.g. `avg 25°, 3 dry hours`.
#[must_use]
pub fn format_favorability(favorability: &Favorability) -> String {
    let temp = favorability
        .average_temp
        .map_or_else(|| "n/a".to_string(), |t| format!("{t}°"));
    let dry = favorability
        .no_rain
        .map_or_else(|| "n/a".to_string(), |n| n.to_string());
    format!("avg {temp}, {dry} dry hours")
}
