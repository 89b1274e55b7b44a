//! Sibling script discovery and dynamic loading.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hosts include only the integration script. When the widget bundle is not
//! yet present, the bootstrap loads `chat-widget.js` from the directory the
//! integration script was served from and waits for it before constructing.

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

pub const INTEGRATION_SCRIPT: &str = "erp-chat-integration.js";
pub const WIDGET_SCRIPT: &str = "chat-widget.js";

/// URL of the widget script next to the integration script at `own_src`.
///
/// Falls back to the bare relative file name when the integration script's
/// URL is unknown.
pub fn widget_script_url(own_src: Option<&str>) -> String {
    match own_src {
        Some(src) if !src.is_empty() => src.replace(INTEGRATION_SCRIPT, WIDGET_SCRIPT),
        _ => WIDGET_SCRIPT.to_owned(),
    }
}

/// Errors raised while loading a script element.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    #[error("no document available")]
    NoDocument,
    #[error("failed to load script: {0}")]
    LoadFailed(String),
}

/// `src` of the first `<script>` whose URL names the integration script.
#[cfg(feature = "hydrate")]
pub fn integration_script_src() -> Option<String> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()?.document()?;
    let scripts = document.query_selector_all("script[src]").ok()?;
    (0..scripts.length())
        .filter_map(|i| scripts.item(i))
        .filter_map(|n| n.dyn_into::<web_sys::HtmlScriptElement>().ok())
        .map(|s| s.src())
        .find(|src| src.contains(INTEGRATION_SCRIPT))
}

#[cfg(not(feature = "hydrate"))]
pub fn integration_script_src() -> Option<String> {
    None
}

/// Append a module `<script src>` to `<head>` and resolve once it loads.
///
/// # Errors
///
/// Returns [`ScriptError::LoadFailed`] when the browser fires `error`.
#[cfg(feature = "hydrate")]
pub async fn load_script(src: &str) -> Result<(), ScriptError> {
    use futures::channel::oneshot;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let document = web_sys::window().and_then(|w| w.document()).ok_or(ScriptError::NoDocument)?;
    let head = document.head().ok_or(ScriptError::NoDocument)?;
    let script = document
        .create_element("script")
        .map_err(|e| ScriptError::LoadFailed(format!("{e:?}")))?
        .dyn_into::<web_sys::HtmlScriptElement>()
        .map_err(|_| ScriptError::LoadFailed(src.to_owned()))?;

    let (tx, rx) = oneshot::channel::<bool>();
    let tx = std::rc::Rc::new(std::cell::RefCell::new(Some(tx)));
    let on_load = {
        let tx = tx.clone();
        Closure::<dyn FnMut()>::new(move || {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(true);
            }
        })
    };
    let on_error = Closure::<dyn FnMut()>::new(move || {
        if let Some(tx) = tx.borrow_mut().take() {
            let _ = tx.send(false);
        }
    });
    script.set_onload(Some(on_load.as_ref().unchecked_ref()));
    script.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    script.set_type("module");
    script.set_src(src);
    head.append_child(&script).map_err(|e| ScriptError::LoadFailed(format!("{e:?}")))?;

    let loaded = rx.await.unwrap_or(false);
    script.set_onload(None);
    script.set_onerror(None);
    drop((on_load, on_error));

    if loaded { Ok(()) } else { Err(ScriptError::LoadFailed(src.to_owned())) }
}
