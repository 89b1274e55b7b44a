//! Chat widget instance: construction, public controls and teardown.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`ChatWidgetHandle`] is what the integration bootstrap (or any embedding
//! code) holds. It owns the reactive state the [`ChatWidget`] component
//! renders, and in the browser it owns the mounted view as well.
//!
//! DESIGN
//! ======
//! The handle carries an explicit [`WidgetContext`] instead of relying on
//! window globals. Only `position` changes after construction; the rest of
//! the configuration is frozen in a `StoredValue`.

#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

use leptos::prelude::*;

use crate::components::chat_widget::ChatWidget;
use crate::config::{Position, Theme, WidgetConfig};
use crate::state::chat::ChatSession;
use crate::styles::{THEME_CSS, THEME_STYLE_ID, WIDGET_CSS, WIDGET_STYLE_ID, ensure_style, remove_style};
use crate::util::clock::new_chat_id;
use crate::util::storage::BrowserStore;

/// Element id of the widget root.
pub const WIDGET_ROOT_ID: &str = "erp-chat-widget";

/// Errors raised while constructing a widget.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WidgetError {
    #[error("no document body to mount into")]
    NoBody,
    #[error("failed to create widget host element: {0}")]
    Host(String),
}

/// Reactive state shared between the handle and the rendered component.
#[derive(Clone, Copy)]
pub struct WidgetContext {
    pub config: StoredValue<WidgetConfig>,
    pub session: RwSignal<ChatSession>,
    pub position: RwSignal<Position>,
    /// Set while conflict avoidance keeps the widget off its configured corner.
    pub adjusted: RwSignal<bool>,
}

impl WidgetContext {
    /// Build state for `config`, restoring any persisted conversation.
    pub fn new(config: WidgetConfig) -> Self {
        let session = ChatSession::restore(&BrowserStore, config.minimized, new_chat_id());
        let position = config.position;
        Self {
            config: StoredValue::new(config),
            session: RwSignal::new(session),
            position: RwSignal::new(position),
            adjusted: RwSignal::new(false),
        }
    }
}

/// Class list of the widget root.
pub fn root_class(position: Position, theme: Theme, is_open: bool, adjusted: bool) -> String {
    let state = if is_open { "open" } else { "minimized" };
    let mut class = format!("erp-chat-widget {} {} {state}", position.class_name(), theme.class_name());
    if adjusted {
        class.push_str(" erp-adjusted");
    }
    class
}

/// A constructed widget.
pub struct ChatWidgetHandle {
    ctx: WidgetContext,
    owner: Owner,
    #[cfg(feature = "hydrate")]
    mounted: Option<Mounted>,
}

#[cfg(feature = "hydrate")]
struct Mounted {
    host: web_sys::Element,
    _view: Box<dyn std::any::Any>,
}

impl ChatWidgetHandle {
    /// Construct the widget, inject its stylesheets and mount it into
    /// `document.body`.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError`] when the document has no body or the host
    /// element cannot be created. A failure after the host element was
    /// attached leaves that element in place.
    pub fn new(config: WidgetConfig) -> Result<Self, WidgetError> {
        let owner = Owner::new();
        let ctx = owner.with(|| WidgetContext::new(config));

        ensure_style(WIDGET_STYLE_ID, WIDGET_CSS);
        ensure_style(THEME_STYLE_ID, THEME_CSS);

        #[cfg(feature = "hydrate")]
        {
            let mounted = owner.with(|| mount(ctx))?;
            Ok(Self { ctx, owner, mounted: Some(mounted) })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Ok(Self { ctx, owner })
        }
    }

    pub fn context(&self) -> WidgetContext {
        self.ctx
    }

    pub fn config(&self) -> WidgetConfig {
        self.ctx.config.get_value()
    }

    pub fn is_open(&self) -> bool {
        self.ctx.session.with_untracked(|s| s.is_open)
    }

    pub fn chat_id(&self) -> String {
        self.ctx.session.with_untracked(|s| s.chat_id.clone())
    }

    pub fn position(&self) -> Position {
        self.ctx.position.get_untracked()
    }

    /// Move the widget to another corner.
    pub fn set_position(&self, position: Position) {
        if self.position() != position {
            self.ctx.position.set(position);
        }
    }

    pub fn open(&self) {
        self.ctx.session.update(|s| s.open(&BrowserStore));
    }

    pub fn close(&self) {
        self.ctx.session.update(|s| s.close(&BrowserStore));
    }

    pub fn toggle(&self) -> bool {
        self.ctx.session.try_update(|s| s.toggle(&BrowserStore)).unwrap_or(false)
    }

    /// Persist `{isOpen, currentChatId}` now.
    pub fn save_state(&self) {
        self.ctx.session.with_untracked(|s| s.save_state(&BrowserStore));
    }

    /// Unmount the widget and remove the shared stylesheet.
    pub fn destroy(&mut self) {
        #[cfg(feature = "hydrate")]
        if let Some(Mounted { host, _view }) = self.mounted.take() {
            drop(_view);
            host.remove();
        }
        remove_style(WIDGET_STYLE_ID);
        self.owner.cleanup();
    }
}

#[cfg(feature = "hydrate")]
fn mount(ctx: WidgetContext) -> Result<Mounted, WidgetError> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window().and_then(|w| w.document()).ok_or(WidgetError::NoBody)?;
    let body = document.body().ok_or(WidgetError::NoBody)?;
    let host = document.create_element("div").map_err(|e| WidgetError::Host(format!("{e:?}")))?;
    host.set_id("erp-chat-widget-host");
    body.append_child(&host).map_err(|e| WidgetError::Host(format!("{e:?}")))?;
    let parent = host.clone().dyn_into::<web_sys::HtmlElement>().map_err(|_| WidgetError::Host("not an HtmlElement".to_owned()))?;
    let view = leptos::mount::mount_to(parent, move || view! { <ChatWidget ctx=ctx/> });
    Ok(Mounted { host, _view: Box::new(view) })
}
