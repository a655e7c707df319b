//! Fixed configuration of the forecast job: city list, daytime window and
//! the conditions that count as "no rain".

use std::ops::RangeInclusive;

/// Hours of the day (inclusive) that contribute to temperature and rain statistics.
pub const DAYTIME_HOURS: RangeInclusive<i64> = 9..=19;

/// Conditions counted as a dry hour.
pub const CLEAR_CONDITIONS: [&str; 4] = ["clear", "partly-cloud", "cloudy", "overcast"];

/// Cities processed by a run, in submission order.
///
/// Each identifier names a provider document; the human-readable city name
/// comes from the document itself.
pub const CITIES: [&str; 15] = [
    "MOSCOW",
    "PARIS",
    "LONDON",
    "BERLIN",
    "BEIJING",
    "KAZAN",
    "SPETERSBURG",
    "VOLGOGRAD",
    "NOVOSIBIRSK",
    "KALININGRAD",
    "ABUDHABI",
    "WARSZAWA",
    "BUCHAREST",
    "ROMA",
    "CAIRO",
];

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: u8 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: u8 = 1;
    /// A forecast could not be fetched.
    pub const ERROR_FETCH: u8 = 2;
    /// A forecast was malformed and the run was configured to abort.
    pub const ERROR_PARSE: u8 = 3;
    /// The ranking could not be persisted.
    pub const ERROR_PERSIST: u8 = 4;
    /// Invalid configuration.
    pub const ERROR_CONFIG: u8 = 5;
}
