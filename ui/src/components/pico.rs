//! A set of reusable, lifetime-free Dioxus components for the Pico.css framework.
//! To use, ensure you have pico.min.css linked in your main application.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::html::input_data::keyboard_types::Key;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::compat;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered container for your content.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

/// A responsive grid layout.
#[component]
pub fn Grid(children: Element) -> Element {
    rsx! { div { class: "grid", {children} } }
}

/// A card for grouping related content.
/// Wraps content in an `<article>` element.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(PartialEq, Clone, Default)]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
    Contrast,
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    button_type: ButtonType,
    #[props(default = false)]
    outline: bool,
    #[props(default = false)]
    disabled: bool,
    /// Shows Pico's busy spinner while an async action runs.
    #[props(default = false)]
    busy: bool,
}

/// A versatile button component.
pub fn Button(props: ButtonProps) -> Element {
    let class_str = match (&props.button_type, props.outline) {
        (ButtonType::Primary, false) => "",
        (ButtonType::Primary, true) => "outline",
        (ButtonType::Secondary, false) => "secondary",
        (ButtonType::Secondary, true) => "secondary outline",
        (ButtonType::Contrast, false) => "contrast",
        (ButtonType::Contrast, true) => "contrast outline",
    };
    rsx! {
        button {
            class: "{class_str}",
            disabled: props.disabled,
            "aria-busy": if props.busy { "true" } else { "false" },
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

/// The small "×" used in modal headers and dismissible rows.
#[component]
pub fn CloseButton(on_click: EventHandler<MouseEvent>) -> Element {
    rsx! {
        a {
            href: "#",
            "aria-label": "Close",
            class: "close",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                on_click.call(evt);
            },
            "\u{00d7}"
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct InputProps {
    /// Omit for a bare, unlabeled field.
    #[props(optional)]
    label: Option<String>,
    name: String,
    #[props(default = "text".to_string())]
    input_type: String,
    #[props(optional)]
    placeholder: Option<String>,
    #[props(default = String::new())]
    value: String,
    #[props(default = false)]
    disabled: bool,
    #[props(optional)]
    on_input: Option<EventHandler<FormEvent>>,
}

/// A controlled form input field, wrapped in a `<label>` when one is given.
pub fn Input(props: InputProps) -> Element {
    let label = props.label.clone().unwrap_or_default();
    let field = rsx! {
        input {
            r#type: "{props.input_type}",
            name: "{props.name}",
            placeholder: "{props.placeholder.as_deref().unwrap_or(\"\")}",
            value: "{props.value}",
            disabled: props.disabled,
            oninput: move |evt| {
                if let Some(handler) = &props.on_input {
                    handler.call(evt);
                }
            },
        }
    };
    if label.is_empty() {
        field
    } else {
        rsx! {
            label {
                "{label}",
                {field}
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct TextAreaProps {
    label: String,
    name: String,
    #[props(optional)]
    placeholder: Option<String>,
    #[props(default = String::new())]
    value: String,
    #[props(default = 3)]
    rows: u32,
    #[props(default = false)]
    disabled: bool,
    #[props(optional)]
    on_input: Option<EventHandler<FormEvent>>,
}

/// A labeled, controlled multi-line text field.
pub fn TextArea(props: TextAreaProps) -> Element {
    rsx! {
        label {
            "{props.label}",
            textarea {
                name: "{props.name}",
                placeholder: "{props.placeholder.as_deref().unwrap_or(\"\")}",
                rows: "{props.rows}",
                value: "{props.value}",
                disabled: props.disabled,
                oninput: move |evt| {
                    if let Some(handler) = &props.on_input {
                        handler.call(evt);
                    }
                },
            }
        }
    }
}

/// Copies its text to the clipboard and shows a transient confirmation for
/// a couple of seconds. Clipboard failures are logged and swallowed; the
/// only user-visible signal is the missing confirmation.
#[component]
pub fn CopyButton(text_to_copy: String) -> Element {
    let mut copied = use_signal(|| false);

    rsx! {
        Button {
            button_type: ButtonType::Secondary,
            outline: true,
            on_click: move |_| {
                let text = text_to_copy.clone();
                spawn(async move {
                    if compat::clipboard_set(text).await {
                        copied.set(true);
                        compat::sleep(std::time::Duration::from_secs(2)).await;
                        copied.set(false);
                    } else {
                        tracing::warn!("clipboard write failed");
                    }
                });
            },
            if copied() { "Copied!" } else { "Copy" }
        }
    }
}

//=============================================================================
// Modal Components
//=============================================================================

// A modal with no title bar that asks to close on backdrop click or Escape.
// The owner decides whether the request is honored, which is how close gets
// blocked while an order is in flight.
#[derive(Props, PartialEq, Clone)]
pub struct NoTitleModalProps {
    on_close: EventHandler<()>,
    children: Element,
}

pub fn NoTitleModal(props: NoTitleModalProps) -> Element {
    rsx! {
        dialog {
            open: true,
            // focus this element as soon as it is rendered into the DOM.
            autofocus: true,
            // Ask to close when the dialog's backdrop is clicked.
            onclick: move |_| props.on_close.call(()),
            // Listen for keyboard events to close on "Escape".
            onkeydown: move |evt| {
                if evt.key() == Key::Escape {
                    props.on_close.call(());
                }
            },
            // The <article> tag holds the content and stops the click
            // from propagating to the backdrop and closing the modal.
            article {
                onclick: |evt| evt.stop_propagation(),
                {props.children}
            }
        }
    }
}
