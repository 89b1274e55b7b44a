//! # industryhub-ui
//!
//! Leptos + WASM frontend for IndustryHub: the embeddable ERP chat widget,
//! its zero-touch integration bootstrap, and the industry picker home page.
//!
//! The same crate builds for the server (`ssr`, rendering the picker) and for
//! the browser (`hydrate`, hydrating the picker and booting the widget on
//! third-party ERP pages).

pub mod app;
pub mod bootstrap;
pub mod components;
pub mod config;
#[cfg(feature = "hydrate")]
pub mod interop;
pub mod net;
pub mod pages;
pub mod state;
pub mod styles;
pub mod util;
pub mod widget;

#[cfg(feature = "hydrate")]
mod exports {
    use wasm_bindgen::prelude::*;

    fn init_logging() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
    }

    /// Hydrate the server-rendered industry picker.
    #[wasm_bindgen]
    pub fn hydrate() {
        init_logging();
        leptos::mount::hydrate_body(crate::app::App);
    }

    /// Integration loader entry point. `own_src` is the loader's URL.
    #[wasm_bindgen]
    pub fn boot_widget(own_src: Option<String>) {
        init_logging();
        crate::bootstrap::boot(own_src);
    }

    /// Run widget initialization now, for hosts that set `autoInit: false`.
    #[wasm_bindgen]
    pub fn init_erp_chat_widget() {
        init_logging();
        let Some(window) = web_sys::window() else {
            return;
        };
        let raw = js_sys::Reflect::get(&window, &JsValue::from_str(crate::bootstrap::GLOBAL_OVERRIDES))
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .and_then(|v| js_sys::JSON::stringify(&v).ok())
            .and_then(|s| s.as_string());
        let config = crate::bootstrap::resolve_config(raw.as_deref());
        let own_src = crate::util::script::integration_script_src();
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::bootstrap::initialize(config, own_src).await {
                leptos::logging::error!("{e}");
            }
        });
    }

    /// Called by `chat-widget.js` once the widget bundle is loaded.
    #[wasm_bindgen]
    pub fn register_widget() {
        init_logging();
        crate::bootstrap::register_widget_class();
    }
}
