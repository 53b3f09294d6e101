//! Navigation strategy injected into the product card.
//!
//! A build picks one [`NavigationMode`] and provides it as context from the
//! app root. Components resolve a [`NavTarget`] from it and render that target
//! with [`NavLink`], so every clickable region of a card uses the same strategy.

use dioxus::prelude::*;
use std::fmt;
use std::str::FromStr;

use crate::app::pages::routes::Route;
use crate::domain::models::Product;
use crate::shared::errors::AppError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NavigationMode {
    /// Plain hyperlink, activation reloads the whole document
    FullReload,
    /// Router link, activation swaps the view and keeps in-memory state
    #[default]
    InApp,
}

impl NavigationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavigationMode::FullReload => "full-reload",
            NavigationMode::InApp => "in-app",
        }
    }

    /// Target of a product's detail page
    pub fn product_target(self, product: &Product) -> NavTarget {
        match self {
            NavigationMode::FullReload => NavTarget::Document(product.detail_path()),
            NavigationMode::InApp => NavTarget::Router(Route::ProductDetail {
                id: product.product_id(),
            }),
        }
    }

    pub fn home_target(self) -> NavTarget {
        match self {
            NavigationMode::FullReload => NavTarget::Document("/".to_string()),
            NavigationMode::InApp => NavTarget::Router(Route::Home {}),
        }
    }
}

impl fmt::Display for NavigationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NavigationMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full-reload" | "document" => Ok(NavigationMode::FullReload),
            "in-app" | "router" => Ok(NavigationMode::InApp),
            _ => Err(AppError::InvalidNavigationMode(s.to_string())),
        }
    }
}

/// Resolved destination of a clickable region
#[derive(Debug, Clone, PartialEq)]
pub enum NavTarget {
    Document(String),
    Router(Route),
}

impl NavTarget {
    pub fn path(&self) -> String {
        match self {
            NavTarget::Document(href) => href.clone(),
            NavTarget::Router(route) => route.to_string(),
        }
    }

    pub fn mode(&self) -> NavigationMode {
        match self {
            NavTarget::Document(_) => NavigationMode::FullReload,
            NavTarget::Router(_) => NavigationMode::InApp,
        }
    }
}

/// Navigation mode provided by the app root, `InApp` when none was provided
pub fn use_navigation_mode() -> NavigationMode {
    try_use_context::<NavigationMode>().unwrap_or_default()
}

#[component]
pub fn NavLink(
    target: NavTarget,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let class = class.unwrap_or_default();

    match target {
        NavTarget::Document(href) => rsx! {
            a { class: "{class}", href: "{href}", {children} }
        },
        NavTarget::Router(route) => rsx! {
            Link { class, to: route, {children} }
        },
    }
}
