// The client-side Dioxus application logic.

use dioxus::prelude::*;
use web_time::Instant;

pub mod compat;
mod components;
mod session;
mod tap_gate;

use api::product::{self, Product, ProductKind};
use components::chat_modal::ChatModal;
use components::order_modal::OrderModal;
use components::pico::{Button, Card, Container, Grid};
use tap_gate::TapGate;

const STOREFRONT_CSS: &str = r#"
    * { box-sizing: border-box; }

    html, body {
        margin: 0;
        padding: 0;
        background-color: #0b0e14;
        color: #c8d3e0;
        font-family: 'Courier New', ui-monospace, monospace;
    }

    .masthead h1 {
        letter-spacing: 0.35em;
        color: #3ddc97;
        cursor: default;
        user-select: none;
        margin-bottom: 0;
    }
    .masthead .tagline {
        color: #5b6b7f;
        margin-top: 0.25rem;
    }

    article {
        background-color: #11161f;
        border: 1px solid #1d2735;
        border-radius: 6px;
    }
    article .price {
        color: #f9bc60;
        margin-bottom: 0.5rem;
    }
    article .pitch {
        color: #8a99ab;
        font-size: 0.9rem;
    }

    dialog {
        background: transparent;
    }
    dialog article {
        max-width: 34rem;
        width: 100%;
    }

    .vault h2 {
        color: #f9bc60;
        letter-spacing: 0.2em;
    }

    footer.site small { color: #39465a; }
"#;

#[allow(non_snake_case)]
pub fn App() -> Element {
    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        style {
            "{STOREFRONT_CSS}"
        }
        Storefront {}
    }
}

/// One listing in the grid.
#[component]
fn ProductCard(product: &'static Product, on_select: EventHandler<&'static Product>) -> Element {
    rsx! {
        Card {
            h3 {
                style: "color: {product.accent};",
                "{product.title}"
            }
            p { class: "price", "{product.price_label}" }
            p { class: "pitch", "{product.pitch}" }
            footer {
                Button {
                    on_click: move |_| on_select.call(product),
                    "Open listing"
                }
            }
        }
    }
}

/// The page-level shell: the catalog grid plus the single active modal.
/// Opening a listing while another is open replaces it, so at most one
/// modal session exists at a time.
#[component]
fn Storefront() -> Element {
    let mut active_product = use_signal::<Option<&'static Product>>(|| None);
    let mut gate = use_signal(TapGate::default);

    use_hook(|| {
        spawn(async move { api::analytics::record("page_view").await });
    });

    rsx! {
        Container {
            header {
                class: "masthead",
                h1 {
                    // Triple-tap inside the window unlocks the vault.
                    onclick: move |_| {
                        gate.write().tap_at(Instant::now());
                    },
                    "NIGHT MARKET"
                }
                p { class: "tagline", "quiet tools for loud times" }
            }

            Grid {
                for listing in product::storefront() {
                    ProductCard {
                        key: "{listing.id}",
                        product: listing,
                        on_select: move |listing| active_product.set(Some(listing)),
                    }
                }
            }

            if gate.read().unlocked() {
                section {
                    class: "vault",
                    h2 { "THE VAULT" }
                    Grid {
                        for listing in product::vault() {
                            ProductCard {
                                key: "{listing.id}",
                                product: listing,
                                on_select: move |listing| active_product.set(Some(listing)),
                            }
                        }
                    }
                }
            }

            footer {
                class: "site",
                small { "all sales final. fulfilment is manual. be patient." }
            }
        }

        if let Some(listing) = active_product() {
            match listing.kind {
                ProductKind::Order => rsx! {
                    OrderModal {
                        key: "{listing.id}",
                        product: listing,
                        on_close: move |_| active_product.set(None),
                    }
                },
                ProductKind::Chat => rsx! {
                    ChatModal {
                        key: "{listing.id}",
                        product: listing,
                        on_close: move |_| active_product.set(None),
                    }
                },
            }
        }
    }
}
