//! Storefront - Main Entry Point
//!
//! Serves the Dioxus app (server feature) or launches it on the client.

use storefront_product_card::app::App;

// Server entry point - NO #[tokio::main], dioxus::serve() creates its own runtime
#[cfg(feature = "server")]
fn main() {
    use storefront_product_card::shared::logging::log_startup;

    // Initialize tracing BEFORE dioxus::serve
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    log_startup("server");

    dioxus::serve(|| async move { Ok(dioxus::server::router(App)) });
}

// Client entry point (browser or native) - no server feature
#[cfg(not(feature = "server"))]
fn main() {
    dioxus::launch(App);
}
