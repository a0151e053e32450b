pub mod config;
pub mod currencies;
