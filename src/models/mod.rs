//! Models are the data types the catalog is built from. Apart from the native
//! SDK stand-ins in `sdk`, everything here is immutable once constructed.

#[macro_use]
mod lib;

pub mod currency_id;
pub mod color;
pub mod unit;
pub mod sdk;
pub mod metadata;
pub mod currency;
