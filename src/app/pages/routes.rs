use dioxus::document;
use dioxus::prelude::*;

use crate::app::components::{EmptyState, ErrorMessage, ProductCard};
use crate::app::navigation::{use_navigation_mode, NavLink};
use crate::config::AppConfig;
use crate::domain::models::{Catalog, ProductId};
use crate::shared::logging::log_product_not_found;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    // Product listing
    #[route("/")]
    Home {},

    // Product detail page, target of every product card
    #[route("/product/:id")]
    ProductDetail { id: ProductId },

    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    let config = use_hook(AppConfig::load);
    let catalog = use_hook(Catalog::demo);

    rsx! {
        Storefront { config, catalog }
    }
}

/// Provides the navigation mode and catalog to every page, then mounts the router
#[component]
pub fn Storefront(config: AppConfig, catalog: Catalog) -> Element {
    use_context_provider(move || config.navigation);
    use_context_provider(move || catalog);

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Layout() -> Element {
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    let home = use_navigation_mode().home_target();

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        div { class: "c-layout",
            nav { class: "c-navbar",
                NavLink {
                    target: home,
                    class: "c-navbar__logo".to_string(),
                    "🛒 Storefront"
                }
            }
            main { class: "c-layout__main",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Home() -> Element {
    let catalog = use_context::<Catalog>();

    if catalog.is_empty() {
        return rsx! {
            EmptyState {
                title: "No products yet".to_string(),
                description: "Products added to the catalog will show up here.".to_string(),
            }
        };
    }

    rsx! {
        h1 { "Latest Products" }
        div { class: "c-product-grid",
            for product in catalog.products().iter() {
                ProductCard { key: "{product.id}", product: product.clone() }
            }
        }
    }
}

#[component]
fn ProductDetail(id: ProductId) -> Element {
    let catalog = use_context::<Catalog>();
    let back = use_navigation_mode().home_target();

    let content = match catalog.require(id.as_str()) {
        Ok(product) => {
            let price_label = product.price_label();
            rsx! {
                div { class: "c-product-detail",
                    img {
                        class: "c-product-detail__image",
                        src: "{product.img}",
                        alt: "{product.name}",
                    }
                    div {
                        h2 { "{product.name}" }
                        h3 { class: "c-product-card__price", "{price_label}" }
                    }
                }
            }
        }
        Err(e) => {
            log_product_not_found(id.as_str());
            rsx! {
                ErrorMessage { message: e.to_string() }
            }
        }
    };

    rsx! {
        NavLink {
            target: back,
            class: "c-product-detail__back".to_string(),
            "← Go back"
        }
        {content}
    }
}

#[component]
fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        ErrorMessage { message: format!("Page not found: /{path}") }
    }
}
