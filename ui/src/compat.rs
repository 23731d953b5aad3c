// Platform shims: timers, clipboard, and the body-scroll lock. Web builds
// go through the browser APIs, native builds through tokio and the desktop
// clipboard.

// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use std::time::Duration;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::Window;

    pub async fn sleep(duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }

    pub async fn clipboard_set(text: String) -> bool {
        match web_sys::window().map(|win: Window| win.navigator().clipboard()) {
            Some(clipboard) => {
                let promise = clipboard.write_text(&text);
                JsFuture::from(promise).await.is_ok()
            }
            _ => false,
        }
    }

    /// Holds `overflow: hidden` on `<body>` while a modal is up. Dropping
    /// the guard restores scrolling, whichever close path ran.
    pub struct BodyScrollLock;

    impl BodyScrollLock {
        pub fn acquire() -> Self {
            if let Some(body) = document_body() {
                let _ = body.style().set_property("overflow", "hidden");
            }
            Self
        }
    }

    impl Drop for BodyScrollLock {
        fn drop(&mut self) {
            if let Some(body) = document_body() {
                let _ = body.style().remove_property("overflow");
            }
        }
    }

    fn document_body() -> Option<web_sys::HtmlElement> {
        web_sys::window()?.document()?.body()
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use dioxus_clipboard::prelude::*;
    use std::time::Duration;

    pub async fn sleep(duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    pub async fn clipboard_set(text: String) -> bool {
        let mut clipboard = use_clipboard();
        clipboard.set(text).is_ok()
    }

    /// Desktop windows have no document scroll to lock; the guard exists so
    /// callers stay platform-agnostic.
    pub struct BodyScrollLock;

    impl BodyScrollLock {
        pub fn acquire() -> Self {
            Self
        }
    }
}
