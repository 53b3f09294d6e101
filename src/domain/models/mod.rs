pub mod catalog;
pub mod product;

pub use catalog::Catalog;
pub use product::{Price, Product, ProductId};
