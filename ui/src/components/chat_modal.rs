//=============================================================================
// File: src/components/chat_modal.rs
//=============================================================================
//! The live-operator chat window. Unlike the order modal there is no
//! session to protect, so closing is always allowed; a reply that lands
//! after close is cancelled along with the component's tasks.

use std::rc::Rc;

use api::analytics;
use api::chat::{send_message, HttpChatTransport};
use api::product::Product;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::compat::BodyScrollLock;
use crate::components::pico::{Button, ButtonType, CloseButton, Input, NoTitleModal};

#[derive(Clone, PartialEq)]
struct ChatLine {
    from_operator: bool,
    text: String,
}

#[component]
pub fn ChatModal(product: &'static Product, on_close: EventHandler<()>) -> Element {
    let mut lines = use_signal(Vec::<ChatLine>::new);
    let mut input_text = use_signal(String::new);
    let mut pending = use_signal(|| false);
    let transport = use_hook(HttpChatTransport::default);

    let _scroll_lock = use_hook(|| Rc::new(BodyScrollLock::acquire()));

    use_hook(|| {
        let event = format!("modal_open:{}", product.id);
        spawn(async move { analytics::record(&event).await });
    });

    let send = move |_| {
        let text = input_text.peek().trim().to_owned();
        if text.is_empty() || *pending.peek() {
            return;
        }
        lines.write().push(ChatLine {
            from_operator: false,
            text: text.clone(),
        });
        input_text.set(String::new());
        pending.set(true);
        let transport = transport.clone();
        spawn(async move {
            let reply = match send_message(&transport, product.endpoint, &text).await {
                Ok(reply) => reply,
                Err(err) => {
                    tracing::warn!("operator exchange failed: {err}");
                    "Connection to the desk dropped. Say that again.".to_owned()
                }
            };
            lines.write().push(ChatLine {
                from_operator: true,
                text: reply,
            });
            pending.set(false);
        });
    };

    rsx! {
        NoTitleModal {
            on_close: move |_| on_close.call(()),
            div {
                style: "border-top: 4px solid {product.accent}; padding-top: 0.75rem;",

                div {
                    style: "display: flex; justify-content: space-between; align-items: baseline;",
                    h3 {
                        style: "color: {product.accent}; margin-bottom: 0.25rem;",
                        "{product.title}"
                    }
                    CloseButton {
                        on_click: move |_| on_close.call(()),
                    }
                }
                p { "{product.pitch}" }

                div {
                    style: "max-height: 14rem; overflow-y: auto; display: flex; flex-direction: column; gap: 0.5rem; margin-bottom: 1rem;",
                    for (i, line) in lines.read().iter().enumerate() {
                        p {
                            key: "{i}",
                            style: if line.from_operator {
                                "margin: 0; color: {product.accent};"
                            } else {
                                "margin: 0; text-align: right;"
                            },
                            "{line.text}"
                        }
                    }
                    if pending() {
                        p {
                            style: "margin: 0; color: var(--pico-muted-color);",
                            "operator is typing..."
                        }
                    }
                }

                div {
                    style: "display: flex; gap: 0.5rem; align-items: flex-end;",
                    div {
                        style: "flex-grow: 1;",
                        Input {
                            name: "message",
                            placeholder: "what do you need?".to_string(),
                            value: "{input_text}",
                            disabled: pending(),
                            on_input: move |evt: FormEvent| input_text.set(evt.value()),
                        }
                    }
                    Button {
                        button_type: ButtonType::Secondary,
                        disabled: pending() || input_text.read().trim().is_empty(),
                        busy: pending(),
                        on_click: send,
                        "Send"
                    }
                }
            }
        }
    }
}
