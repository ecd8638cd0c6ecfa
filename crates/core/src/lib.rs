//! Domain types shared by the storefront API and its data layer.

pub mod errors;
pub mod models;
