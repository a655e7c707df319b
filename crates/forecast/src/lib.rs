//! Forecast library — application logic for the city ranking job.

pub mod app;
pub mod config;
pub mod errors;
