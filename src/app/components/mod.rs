pub mod card;
pub mod common;
pub mod product_card;

pub use card::{Card, CardBody, CardImage, CardTitle};
pub use common::{EmptyState, ErrorMessage};
pub use product_card::ProductCard;
