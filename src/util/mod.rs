//! A set of utility structs and functions used throughout the catalog.

pub mod price_ids;
pub mod time;
