//! Database repositories
//!
//! Provides data access layer for database operations.

pub mod food;
pub mod profile;
pub mod query;

pub use food::{CreateFood, FoodRecord, FoodRepository, UpdateFood};
pub use profile::{CreateProfile, ProfileRecord, ProfileRepository, UpdateProfile};
pub use query::{ListParams, SortDirection, SortField};
