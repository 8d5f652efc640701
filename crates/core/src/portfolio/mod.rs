//! Portfolio views computed over client holdings.

pub mod encours;
