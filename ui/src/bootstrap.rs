//! Zero-touch installer for the chat widget on ERP host pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! The integration loader calls [`boot`] once per page load. Bootstrap reads
//! the host's `window.ERP_CHAT_CONFIG`, adapts the configuration to the
//! detected ERP family and to fixed-position UI already in the corner, makes
//! sure the widget bundle is present and constructs exactly one widget.
//!
//! DESIGN
//! ======
//! - Configuration planning ([`resolve_config`], [`plan`]) is pure and runs
//!   natively in tests; only DOM probing and listener wiring is browser-only.
//! - Listeners capture the widget's [`WidgetContext`] rather than looking the
//!   instance up through window globals.
//! - The window globals that remain (`erpChatWidget`, `erpChatWidgetReady`,
//!   `ERPChatConfig`) are the interop surface for other host scripts.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is logged and ends bootstrap; the host page keeps running.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use std::cell::Cell;

use crate::config::{ConfigOverrides, WidgetConfig};
use crate::util::conflicts::resolve_position;
use crate::util::host::{HostFamily, adapt_config, detect_host};
use crate::util::script::ScriptError;
use crate::widget::WidgetError;

pub const GLOBAL_OVERRIDES: &str = "ERP_CHAT_CONFIG";
pub const GLOBAL_INSTANCE: &str = "erpChatWidget";
pub const GLOBAL_READY: &str = "erpChatWidgetReady";
pub const GLOBAL_RESOLVED_CONFIG: &str = "ERPChatConfig";
pub const WIDGET_CLASS_MARKER: &str = "ERPChatWidget";
pub const READY_EVENT: &str = "erpChatWidgetReady";

/// Delay after DOM ready so host scripts can finish their own setup.
pub const AUTO_INIT_DELAY_MS: u32 = 100;

/// Errors that abort bootstrap.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("ERP Chat Widget already initialized")]
    AlreadyInitialized,
    #[error("Failed to load ERP Chat Widget script: {0}")]
    Script(#[from] ScriptError),
    #[error("Failed to initialize ERP Chat Widget: {0}")]
    Widget(#[from] WidgetError),
}

thread_local! {
    static INITIALIZING: Cell<bool> = const { Cell::new(false) };
}

/// Exclusive claim on widget initialization, released on drop.
#[derive(Debug)]
pub struct InitGuard(());

impl InitGuard {
    /// Claim the slot, or `None` while another initialization is in flight.
    pub fn acquire() -> Option<Self> {
        if INITIALIZING.with(|busy| busy.replace(true)) { None } else { Some(Self(())) }
    }
}

impl Drop for InitGuard {
    fn drop(&mut self) {
        INITIALIZING.with(|busy| busy.set(false));
    }
}

/// Merge the host's override JSON over the defaults.
///
/// Invalid fields are logged and skipped; the valid ones still apply. A value
/// that is not an object at all is logged and ignored.
pub fn resolve_config(overrides_json: Option<&str>) -> WidgetConfig {
    let Some(raw) = overrides_json else {
        return WidgetConfig::default();
    };
    let (overrides, rejected) = match ConfigOverrides::from_json(raw) {
        Ok(decoded) => decoded,
        Err(e) => {
            leptos::logging::warn!("ERP Chat: ignoring {GLOBAL_OVERRIDES}: {e}");
            return WidgetConfig::default();
        }
    };
    for e in &rejected {
        leptos::logging::warn!("ERP Chat: ignoring {GLOBAL_OVERRIDES} field {e}");
    }
    WidgetConfig::from_overrides(overrides).unwrap_or_else(|e| {
        leptos::logging::warn!("ERP Chat: ignoring {GLOBAL_OVERRIDES}: {e}");
        WidgetConfig::default()
    })
}

/// Adapt `config` to the host page.
///
/// Applies the detected family's theme and z-index tier, then resolves the
/// dock position from the number of corner conflicts.
pub fn plan(mut config: WidgetConfig, markup: &str, conflicts: usize) -> (WidgetConfig, HostFamily) {
    let family = detect_host(markup);
    leptos::logging::log!("ERP Chat: Detected system type: {}", family.as_str());
    adapt_config(&mut config, family);
    config.position = resolve_position(conflicts, &config);
    (config, family)
}

#[cfg(feature = "hydrate")]
pub use browser::{boot, initialize, register_widget_class};

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use js_sys::Reflect;
    use leptos::prelude::*;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};

    use super::*;
    use crate::interop::JsChatWidget;
    use crate::util::conflicts::{is_adjusted, scan_conflicts};
    use crate::util::script::{integration_script_src, load_script, widget_script_url};
    use crate::util::storage::BrowserStore;
    use crate::widget::{ChatWidgetHandle, WIDGET_ROOT_ID, WidgetContext};

    fn global(window: &web_sys::Window, key: &str) -> JsValue {
        Reflect::get(window, &JsValue::from_str(key)).unwrap_or(JsValue::UNDEFINED)
    }

    fn set_global(window: &web_sys::Window, key: &str, value: &JsValue) {
        if Reflect::set(window, &JsValue::from_str(key), value).is_err() {
            leptos::logging::warn!("ERP Chat: could not publish window.{key}");
        }
    }

    fn to_js(config: &WidgetConfig) -> JsValue {
        serde_json::to_string(config)
            .ok()
            .and_then(|raw| js_sys::JSON::parse(&raw).ok())
            .unwrap_or(JsValue::NULL)
    }

    fn read_overrides(window: &web_sys::Window) -> Option<String> {
        let value = global(window, GLOBAL_OVERRIDES);
        if value.is_undefined() || value.is_null() {
            return None;
        }
        js_sys::JSON::stringify(&value).ok().and_then(|s| s.as_string())
    }

    /// Mark the widget bundle as loaded.
    pub fn register_widget_class() {
        if let Some(window) = web_sys::window() {
            set_global(&window, WIDGET_CLASS_MARKER, &JsValue::TRUE);
        }
    }

    /// Entry point for the integration loader.
    ///
    /// `own_src` is the loader's URL, used to locate the sibling widget
    /// script. Publishes the resolved config as `window.ERPChatConfig` and,
    /// unless `autoInit` is off, schedules initialization after DOM ready.
    pub fn boot(own_src: Option<String>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let config = resolve_config(read_overrides(&window).as_deref());
        set_global(&window, GLOBAL_RESOLVED_CONFIG, &to_js(&config));

        if !global(&window, GLOBAL_INSTANCE).is_undefined() {
            leptos::logging::log!("{}", BootstrapError::AlreadyInitialized);
            return;
        }
        if !config.auto_init {
            return;
        }

        let own_src = own_src.or_else(integration_script_src);
        let start = move || {
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(AUTO_INIT_DELAY_MS).await;
                if let Err(e) = initialize(config, own_src).await {
                    leptos::logging::error!("{e}");
                }
            });
        };

        let Some(document) = window.document() else {
            return;
        };
        if document.ready_state() == "loading" {
            let on_ready = Closure::once(start);
            let _ = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref());
            on_ready.forget();
        } else {
            start();
        }
    }

    /// Detect, adapt, load and construct.
    ///
    /// # Errors
    ///
    /// Returns [`BootstrapError`] when a widget already exists, the widget
    /// script fails to load, or construction fails.
    pub async fn initialize(base: WidgetConfig, own_src: Option<String>) -> Result<(), BootstrapError> {
        let Some(window) = web_sys::window() else {
            return Ok(());
        };
        let Some(document) = window.document() else {
            return Ok(());
        };
        if !global(&window, GLOBAL_INSTANCE).is_undefined() {
            return Err(BootstrapError::AlreadyInitialized);
        }
        // Held across the script-load await so overlapping boots cannot both construct.
        let Some(_guard) = InitGuard::acquire() else {
            return Err(BootstrapError::AlreadyInitialized);
        };

        let embedded = window.top().ok().flatten().is_some_and(|top| !js_sys::Object::is(&top, &window));
        leptos::logging::log!("ERP Chat: embedded in frame: {embedded}");

        let markup = document.document_element().map(|el| el.outer_html()).unwrap_or_default();
        let (config, _family) = plan(base.clone(), &markup, scan_conflicts(WIDGET_ROOT_ID));
        set_global(&window, GLOBAL_RESOLVED_CONFIG, &to_js(&config));

        if global(&window, WIDGET_CLASS_MARKER).is_undefined() {
            let src = widget_script_url(own_src.as_deref());
            load_script(&src).await?;
        }

        let handle = ChatWidgetHandle::new(config.clone())?;
        let ctx = handle.context();
        ctx.adjusted.set(is_adjusted(&base, config.position));
        let widget = JsChatWidget::new(handle);
        let widget_js = JsValue::from(widget);
        set_global(&window, GLOBAL_INSTANCE, &widget_js);

        install_listeners(&window, &document, ctx, base);

        set_global(&window, GLOBAL_READY, &JsValue::TRUE);
        dispatch_ready(&document, &widget_js, &config);
        leptos::logging::log!("ERP Chat Widget initialized successfully");
        Ok(())
    }

    fn dispatch_ready(document: &web_sys::Document, widget: &JsValue, config: &WidgetConfig) {
        let detail = js_sys::Object::new();
        let _ = Reflect::set(&detail, &JsValue::from_str("widget"), widget);
        let _ = Reflect::set(&detail, &JsValue::from_str("config"), &to_js(config));
        let init = web_sys::CustomEventInit::new();
        init.set_detail(&detail);
        match web_sys::CustomEvent::new_with_event_init_dict(READY_EVENT, &init) {
            Ok(event) => {
                let _ = document.dispatch_event(&event);
            }
            Err(e) => leptos::logging::warn!("ERP Chat: could not create {READY_EVENT} event: {e:?}"),
        }
    }

    /// SPA navigation, resize and visibility listeners. Installed once and
    /// kept for the page lifetime.
    fn install_listeners(window: &web_sys::Window, document: &web_sys::Document, ctx: WidgetContext, base: WidgetConfig) {
        if let Some(body) = document.body() {
            let current_url = Rc::new(RefCell::new(window.location().href().unwrap_or_default()));
            let persist = base.persist_across_pages;
            let on_mutation = Closure::<dyn FnMut()>::new(move || {
                let Some(href) = web_sys::window().and_then(|w| w.location().href().ok()) else {
                    return;
                };
                let mut current = current_url.borrow_mut();
                if *current != href {
                    *current = href;
                    if persist && ctx.session.try_with_untracked(|_| ()).is_some() {
                        leptos::logging::log!("ERP Chat: Page navigation detected, maintaining widget state");
                    }
                }
            });
            match web_sys::MutationObserver::new(on_mutation.as_ref().unchecked_ref()) {
                Ok(observer) => {
                    let init = web_sys::MutationObserverInit::new();
                    init.set_child_list(true);
                    init.set_subtree(true);
                    let _ = observer.observe_with_options(&body, &init);
                }
                Err(e) => leptos::logging::warn!("ERP Chat: mutation observer unavailable: {e:?}"),
            }
            on_mutation.forget();
        }

        let on_resize = Closure::<dyn FnMut()>::new(move || {
            if !base.avoid_conflicts {
                return;
            }
            let next = resolve_position(scan_conflicts(WIDGET_ROOT_ID), &base);
            if ctx.position.try_get_untracked().is_some_and(|current| current != next) {
                ctx.position.set(next);
                ctx.adjusted.set(is_adjusted(&base, next));
            }
        });
        let _ = window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
        on_resize.forget();

        let on_visibility = Closure::<dyn FnMut()>::new(move || {
            let hidden = web_sys::window()
                .and_then(|w| w.document())
                .is_some_and(|d| d.visibility_state() == web_sys::VisibilityState::Hidden);
            if hidden {
                ctx.session.try_with_untracked(|s| s.save_state(&BrowserStore));
            }
        });
        let _ = document.add_event_listener_with_callback("visibilitychange", on_visibility.as_ref().unchecked_ref());
        on_visibility.forget();
    }
}
