use dioxus::prelude::*;

/// Card container (BEM: c-card)
#[component]
pub fn Card(
    rounded: Option<bool>,
    spaced: Option<bool>,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let rounded_class = if rounded.unwrap_or(false) { "c-card--rounded" } else { "" };
    let spaced_class = if spaced.unwrap_or(false) { "c-card--spaced" } else { "" };
    let extra_class = class.unwrap_or_default();

    rsx! {
        div {
            class: "c-card {rounded_class} {spaced_class} {extra_class}",
            {children}
        }
    }
}

#[component]
pub fn CardImage(src: String, #[props(default)] alt: String) -> Element {
    rsx! {
        img { class: "c-card__img-top", src: "{src}", alt: "{alt}" }
    }
}

#[component]
pub fn CardBody(children: Element) -> Element {
    rsx! {
        div { class: "c-card__body", {children} }
    }
}

#[component]
pub fn CardTitle(children: Element) -> Element {
    rsx! {
        div { class: "c-card__title", {children} }
    }
}
