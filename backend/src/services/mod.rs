//! Business logic services
//!
//! Services translate between persistence results and API-facing
//! representations, enforcing not-found and already-exists semantics.

pub mod food;
pub mod profile;

pub use food::FoodService;
pub use profile::ProfileService;

/// Drop blank values from an update payload
///
/// PATCH semantics treat an empty string the same as an absent field,
/// so an update can never clear a field to empty.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
