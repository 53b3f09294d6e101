use serde::Deserialize;

use super::product::Product;
use crate::shared::errors::{AppError, Result};
use crate::shared::logging::{log_catalog_error, log_catalog_loaded};

const DEMO_CATALOG: &str = include_str!("../../../assets/catalog.json");

/// Ordered list of products shown on the home page
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Parse a JSON array of product records
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        Ok(catalog)
    }

    /// Catalog bundled with the app. Falls back to an empty catalog when the
    /// embedded JSON does not parse.
    pub fn demo() -> Self {
        match Self::from_json(DEMO_CATALOG) {
            Ok(catalog) => {
                log_catalog_loaded("demo", catalog.len());
                catalog
            }
            Err(e) => {
                log_catalog_error("demo", &e.to_string());
                Self::default()
            }
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn require(&self, id: &str) -> Result<&Product> {
        self.get(id).ok_or_else(|| AppError::ProductNotFound(id.to_string()))
    }
}
