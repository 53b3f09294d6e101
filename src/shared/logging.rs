//! Structured logging helpers for the storefront
//!
//! Host-side events only: the product card itself never logs.
//! Every event carries an `operation` field so logs can be filtered per concern.

/// Operation tag attached to every storefront log event
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    Startup,
    Config,
    CatalogLoad,
    ProductLookup,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::Startup => "startup",
            LogOperation::Config => "config",
            LogOperation::CatalogLoad => "catalog_load",
            LogOperation::ProductLookup => "product_lookup",
        }
    }
}

/// Log application start
pub fn log_startup(platform: &str) {
    tracing::info!(
        operation = LogOperation::Startup.as_str(),
        platform = platform,
        "Starting storefront"
    );
}

/// Log the navigation strategy selected for this build
pub fn log_navigation_mode(mode: &str) {
    tracing::info!(
        operation = LogOperation::Config.as_str(),
        navigation = mode,
        "Navigation mode selected"
    );
}

/// Log an unusable configuration value and the fallback applied
pub fn log_config_fallback(raw: &str, fallback: &str, error: &str) {
    tracing::warn!(
        operation = LogOperation::Config.as_str(),
        raw_value = raw,
        fallback = fallback,
        error = error,
        "Invalid configuration value, using fallback"
    );
}

/// Log catalog load success
pub fn log_catalog_loaded(source: &str, count: usize) {
    tracing::info!(
        operation = LogOperation::CatalogLoad.as_str(),
        source = source,
        product_count = count,
        "Catalog loaded"
    );
}

/// Log catalog load failure
pub fn log_catalog_error(source: &str, error: &str) {
    tracing::error!(
        operation = LogOperation::CatalogLoad.as_str(),
        source = source,
        error = error,
        "Failed to load catalog, continuing with an empty one"
    );
}

/// Log a detail page request for an unknown product
pub fn log_product_not_found(id: &str) {
    tracing::warn!(
        operation = LogOperation::ProductLookup.as_str(),
        product_id = id,
        "Product not found"
    );
}
