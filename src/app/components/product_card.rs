//! Product card - image, title and price linking to the product detail page

use dioxus::prelude::*;

use crate::app::components::card::{Card, CardBody, CardImage, CardTitle};
use crate::app::navigation::{use_navigation_mode, NavLink};
use crate::domain::models::Product;

/// Card for one product of a listing.
///
/// Pure view: no state, no side effects. The image and the title link to
/// `/product/{id}` through a single target resolved from the ambient
/// navigation mode, so both links always agree.
#[component]
pub fn ProductCard(product: Product) -> Element {
    let target = use_navigation_mode().product_target(&product);
    let price_label = product.price_label();

    rsx! {
        Card {
            rounded: true,
            spaced: true,
            class: "c-product-card".to_string(),
            NavLink {
                target: target.clone(),
                class: "c-product-card__link".to_string(),
                CardImage { src: product.img.clone(), alt: product.name.clone() }
            }
            CardBody {
                NavLink {
                    target,
                    class: "c-product-card__link".to_string(),
                    CardTitle {
                        strong { "{product.name}" }
                    }
                }
                h3 { class: "c-product-card__price", "{price_label}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::navigation::NavigationMode;
    use crate::app::pages::routes::{Storefront, StorefrontProps};
    use crate::config::AppConfig;
    use crate::domain::models::{Catalog, Price};

    const MODES: [NavigationMode; 2] = [NavigationMode::FullReload, NavigationMode::InApp];

    #[component]
    fn CardHarness(mode: NavigationMode, product: Product) -> Element {
        use_context_provider(|| mode);
        rsx! {
            ProductCard { product }
        }
    }

    /// Standalone card with plain document links
    fn render(product: Product) -> String {
        let mut dom = VirtualDom::new_with_props(
            CardHarness,
            CardHarnessProps {
                mode: NavigationMode::FullReload,
                product,
            },
        );
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    /// Card listed on the home page under a mounted router, so router links resolve
    fn build_dom(mode: NavigationMode, product: Product) -> VirtualDom {
        let props = StorefrontProps::builder()
            .config(AppConfig { navigation: mode })
            .catalog(Catalog::new(vec![product]))
            .build();
        let mut dom = VirtualDom::new_with_props(Storefront, props);
        dom.rebuild_in_place();
        dom
    }

    fn widget() -> Product {
        Product::new("1", "Widget", 9.99, "http://x/im.png")
    }

    #[test]
    fn test_renders_name_price_and_image() {
        let html = render(widget());
        assert!(html.contains("<strong>Widget</strong>"));
        assert!(html.contains("$9.99"));
        assert!(html.contains(r#"src="http://x/im.png""#));
    }

    #[test]
    fn test_image_and_title_share_the_detail_path() {
        let html = render(Product::new("abc123", "Widget", 9.99, "http://x/im.png"));
        assert_eq!(html.matches(r#"href="/product/abc123""#).count(), 2);
        assert_eq!(html.matches("href=").count(), 2);
    }

    #[test]
    fn test_escapes_id_in_document_links() {
        let html = render(Product::new("a b", "Widget", 9.99, "http://x/im.png"));
        assert_eq!(html.matches(r#"href="/product/a%20b""#).count(), 2);
    }

    #[test]
    fn test_render_is_idempotent() {
        for mode in MODES {
            let first = dioxus_ssr::render(&build_dom(mode, widget()));
            let second = dioxus_ssr::render(&build_dom(mode, widget()));
            assert!(first.contains("<strong>Widget</strong>"), "{mode}");
            assert_eq!(first, second, "{mode}");
        }
    }

    #[test]
    fn test_missing_price_renders_bare_currency_symbol() {
        let product = Product {
            id: "9".to_string(),
            name: "Mystery".to_string(),
            price: None,
            img: String::new(),
        };
        let html = render(product);
        assert!(html.contains(r#"<h3 class="c-product-card__price">$</h3>"#));
    }

    #[test]
    fn test_empty_record_still_renders() {
        let html = render(Product::default());
        assert!(html.contains("c-product-card"));
        assert_eq!(html.matches(r#"href="/product/""#).count(), 2);
    }

    #[test]
    fn test_text_price_is_shown_verbatim() {
        let mut product = widget();
        product.price = Some(Price::Text("1,000.00".to_string()));
        assert!(render(product).contains("$1,000.00"));
    }

    #[test]
    fn test_no_residue_between_renders() {
        for mode in MODES {
            let first = Product::new("a", "Alpha", 1.5, "http://x/alpha.png");
            let second = Product::new("b", "Beta", 2.0, "http://x/beta.png");

            // Same renderer so cached templates are reused across both renders
            let mut renderer = dioxus_ssr::Renderer::new();
            let first_html = renderer.render(&build_dom(mode, first));
            let second_html = renderer.render(&build_dom(mode, second));

            assert!(first_html.contains("alpha.png"), "{mode}");
            assert!(first_html.contains(r#"href="/product/a""#), "{mode}");
            assert!(second_html.contains("beta.png"), "{mode}");
            assert!(second_html.contains("$2"), "{mode}");
            assert_eq!(second_html.matches(r#"href="/product/b""#).count(), 2, "{mode}");
            assert!(!second_html.contains("alpha.png"), "{mode}");
            assert!(!second_html.contains("Alpha"), "{mode}");
            assert!(!second_html.contains(r#"href="/product/a""#), "{mode}");
        }
    }
}
