//! Encours (assets under management) aggregation module.
//!
//! This module turns the raw client list and the five holding tables into
//! the dashboard views: repartition by category, per-client breakdown, and
//! the monthly series by acquisition date.

mod encours_calculator;
mod encours_model;
mod encours_service;
mod encours_traits;

pub use encours_calculator::*;
pub use encours_model::*;
pub use encours_service::*;
pub use encours_traits::*;

#[cfg(test)]
mod encours_calculator_tests;
