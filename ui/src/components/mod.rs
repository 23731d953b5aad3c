//! The components module contains all shared components for our app.
//! Components are the building blocks of dioxus apps.

pub mod chat_modal;
pub mod order_modal;
pub mod pico;
