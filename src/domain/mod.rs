// Domain models (storefront entities)
// Pure Rust, no framework dependencies
pub mod models;
