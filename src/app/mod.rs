pub mod components;
pub mod navigation;
pub mod pages;

pub use pages::routes::App;
