//! JavaScript-facing handle published as `window.erpChatWidget`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::widget::ChatWidgetHandle;

/// Widget controls exposed to host scripts.
#[wasm_bindgen(js_name = ErpChatWidgetHandle)]
pub struct JsChatWidget {
    inner: Rc<RefCell<Option<ChatWidgetHandle>>>,
}

impl JsChatWidget {
    pub fn new(handle: ChatWidgetHandle) -> Self {
        Self { inner: Rc::new(RefCell::new(Some(handle))) }
    }

    fn with(&self, f: impl FnOnce(&ChatWidgetHandle)) {
        match self.inner.borrow().as_ref() {
            Some(handle) => f(handle),
            None => leptos::logging::warn!("ERP Chat: widget has been destroyed"),
        }
    }
}

#[wasm_bindgen(js_class = ErpChatWidgetHandle)]
impl JsChatWidget {
    pub fn open(&self) {
        self.with(ChatWidgetHandle::open);
    }

    pub fn close(&self) {
        self.with(ChatWidgetHandle::close);
    }

    pub fn toggle(&self) {
        self.with(|h| {
            h.toggle();
        });
    }

    #[wasm_bindgen(js_name = saveState)]
    pub fn save_state(&self) {
        self.with(ChatWidgetHandle::save_state);
    }

    #[wasm_bindgen(getter, js_name = isOpen)]
    pub fn is_open(&self) -> bool {
        self.inner.borrow().as_ref().is_some_and(ChatWidgetHandle::is_open)
    }

    #[wasm_bindgen(getter, js_name = chatId)]
    pub fn chat_id(&self) -> Option<String> {
        self.inner.borrow().as_ref().map(ChatWidgetHandle::chat_id)
    }

    /// Unmount the widget. Later calls are no-ops.
    pub fn destroy(&self) {
        let taken = self.inner.borrow_mut().take();
        if let Some(mut handle) = taken {
            handle.destroy();
        }
        if let Some(window) = web_sys::window() {
            let _ = js_sys::Reflect::delete_property(&window, &JsValue::from_str(crate::bootstrap::GLOBAL_INSTANCE));
            let _ = js_sys::Reflect::set(
                &window,
                &JsValue::from_str(crate::bootstrap::GLOBAL_READY),
                &JsValue::FALSE,
            );
        }
    }
}
