//=============================================================================
// File: src/components/order_modal.rs
//=============================================================================
//! The one order modal. Every listing used to carry its own near-identical
//! copy of this flow; the differences now arrive as `Product` configuration.

use std::rc::Rc;

use api::analytics;
use api::network::Network;
use api::product::Product;
use api::submit::{submit_order, WebhookSink};
use dioxus::prelude::*;

use crate::compat::{self, BodyScrollLock};
use crate::components::pico::{
    Button, ButtonType, CloseButton, CopyButton, Input, NoTitleModal, TextArea,
};
use crate::session::{ModalSession, SUCCESS_CLOSE_DELAY};

#[component]
pub fn OrderModal(product: &'static Product, on_close: EventHandler<()>) -> Element {
    let mut session = use_signal(|| {
        let mut session = ModalSession::default();
        session.open();
        session
    });
    let mut show_failure = use_signal(|| false);
    let sink = use_hook(WebhookSink::default);

    // Scroll stays locked for exactly as long as this modal is mounted; the
    // guard's Drop releases it on every close path.
    let _scroll_lock = use_hook(|| Rc::new(BodyScrollLock::acquire()));

    use_hook(|| {
        let event = format!("modal_open:{}", product.id);
        spawn(async move { analytics::record(&event).await });
    });

    let state = session.read().state();
    let submitting = state.is_submitting();
    let submittable = session.read().draft.is_submittable(product.notes_required);
    let selected_network = session.read().draft.network;

    // Shared by the backdrop, Escape, the close button and Cancel. The
    // session refuses the request while a submission is in flight.
    let mut try_close = move || {
        if session.write().request_close() {
            on_close.call(());
        }
    };

    let on_submit = move |_| {
        // A second press while a request is outstanding is a no-op.
        if !session.write().begin_submit() {
            return;
        }
        show_failure.set(false);
        let sink = sink.clone();
        // The task dies with the component, so tearing the modal down
        // mid-flight cancels the request instead of leaking it.
        spawn(async move {
            let draft = session.peek().draft.clone();
            match submit_order(&sink, product, &draft).await {
                Ok(()) => {
                    session.write().submit_succeeded();
                    compat::sleep(SUCCESS_CLOSE_DELAY).await;
                    session.write().close_timer_elapsed();
                    if session.peek().state().is_closed() {
                        on_close.call(());
                    }
                }
                Err(_) => {
                    // Already logged by the submitter. The draft is intact;
                    // the buyer fixes whatever went wrong and retries.
                    session.write().submit_failed();
                    show_failure.set(true);
                }
            }
        });
    };

    rsx! {
        NoTitleModal {
            on_close: move |_| try_close(),
            div {
                style: "border-top: 4px solid {product.accent}; padding-top: 0.75rem;",

                div {
                    style: "display: flex; justify-content: space-between; align-items: baseline;",
                    h3 {
                        style: "color: {product.accent}; margin-bottom: 0.25rem;",
                        "{product.title}"
                    }
                    CloseButton {
                        on_click: move |_| try_close(),
                    }
                }

                if state.is_success() {
                    div {
                        style: "text-align: center; padding: 2rem 1rem;",
                        h4 { "Order received" }
                        p { "The desk has your details. This window closes itself." }
                    }
                } else {
                    p {
                        style: "margin-bottom: 0.25rem;",
                        strong { "{product.price_label}" }
                    }
                    p { "{product.pitch}" }

                    label { "Payment network" }
                    div {
                        style: "display: flex; gap: 0.5rem; margin-bottom: 1rem;",
                        for network in Network::ALL {
                            Button {
                                button_type: ButtonType::Secondary,
                                outline: selected_network != network,
                                disabled: submitting,
                                on_click: move |_| session.write().draft.network = network,
                                "{network.display_name()}"
                            }
                        }
                    }

                    div {
                        style: "display: flex; align-items: center; gap: 0.5rem; margin-bottom: 1rem;",
                        code {
                            style: "word-break: break-all; flex-grow: 1;",
                            "{selected_network.receiving_address()}"
                        }
                        CopyButton {
                            text_to_copy: selected_network.receiving_address().to_string(),
                        }
                    }

                    Input {
                        label: "Contact".to_string(),
                        name: "contact",
                        placeholder: "@telegram or email".to_string(),
                        value: "{session.read().draft.contact}",
                        disabled: submitting,
                        on_input: move |evt: FormEvent| session.write().draft.contact = evt.value(),
                    }
                    TextArea {
                        label: if product.notes_required {
                            "Order notes".to_string()
                        } else {
                            "Order notes (optional)".to_string()
                        },
                        name: "notes",
                        placeholder: "delivery details, quantities, anything the desk should know".to_string(),
                        value: "{session.read().draft.notes}",
                        disabled: submitting,
                        on_input: move |evt: FormEvent| session.write().draft.notes = evt.value(),
                    }
                    Input {
                        label: "Transaction ID".to_string(),
                        name: "transaction_id",
                        placeholder: "paste the transfer id after you pay".to_string(),
                        value: "{session.read().draft.transaction_id}",
                        disabled: submitting,
                        on_input: move |evt: FormEvent| {
                            session.write().draft.transaction_id = evt.value()
                        },
                    }

                    if show_failure() {
                        p {
                            style: "color: var(--pico-color-red-500);",
                            "Submission failed. Check your connection and try again."
                        }
                    }

                    footer {
                        style: "display: flex; justify-content: flex-end; gap: 0.5rem; margin-top: 1rem;",
                        Button {
                            button_type: ButtonType::Secondary,
                            outline: true,
                            disabled: submitting,
                            on_click: move |_| try_close(),
                            "Cancel"
                        }
                        Button {
                            disabled: submitting || !submittable,
                            busy: submitting,
                            on_click: on_submit,
                            if submitting { "Transmitting..." } else { "Submit order" }
                        }
                    }
                }
            }
        }
    }
}
