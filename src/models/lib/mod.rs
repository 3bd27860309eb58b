#[macro_use]
pub mod id;
