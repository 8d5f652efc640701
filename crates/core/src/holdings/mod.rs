//! Holdings module - domain models and repository traits.

mod holdings_model;
mod holdings_traits;

pub use holdings_model::{Holding, HoldingKind};
pub use holdings_traits::HoldingRepositoryTrait;
