//! Detection of fixed-position host UI in the widget's corner.
//!
//! SYSTEM CONTEXT
//! ==============
//! ERP pages often pin help buttons or toasts to the bottom-right corner. The
//! bootstrap scans computed styles on load and on every resize, and moves the
//! widget to the bottom-left corner while such an element exists.

#[cfg(test)]
#[path = "conflicts_test.rs"]
mod conflicts_test;

use crate::config::{Position, WidgetConfig};

/// Distance from the viewport's bottom-right corner that counts as occupied.
pub const CORNER_MARGIN_PX: f64 = 100.0;

/// Bounding box of a fixed element, in viewport pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub right: f64,
    pub bottom: f64,
}

/// Viewport dimensions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Whether `rect` reaches into the bottom-right corner window.
pub fn occupies_bottom_right(rect: Rect, viewport: Viewport) -> bool {
    rect.right > viewport.width - CORNER_MARGIN_PX && rect.bottom > viewport.height - CORNER_MARGIN_PX
}

/// Resolve the dock position given the number of conflicting elements.
pub fn resolve_position(conflicts: usize, config: &WidgetConfig) -> Position {
    if conflicts > 0 && config.avoid_conflicts {
        leptos::logging::log!("ERP Chat: Conflicts detected, adjusting position");
        return Position::BottomLeft;
    }
    config.position
}

/// Whether the widget sits away from its configured corner and should keep
/// extra distance from the host UI that displaced it.
pub fn is_adjusted(config: &WidgetConfig, resolved: Position) -> bool {
    config.respect_existing_ui && resolved != config.position
}

/// Count fixed-position elements in the corner, skipping the widget's own
/// subtree rooted at `#{exclude_id}`.
#[cfg(feature = "hydrate")]
pub fn scan_conflicts(exclude_id: &str) -> usize {
    let Some(window) = web_sys::window() else {
        return 0;
    };
    let Some(document) = window.document() else {
        return 0;
    };
    let viewport = Viewport {
        width: window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0),
        height: window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0),
    };
    let Ok(nodes) = document.query_selector_all("*") else {
        return 0;
    };
    let own_root = document.get_element_by_id(exclude_id);

    let mut conflicts = 0;
    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i).and_then(|n| wasm_bindgen::JsCast::dyn_into::<web_sys::Element>(n).ok()) else {
            continue;
        };
        let node: &web_sys::Node = &el;
        if own_root.as_ref().is_some_and(|root| root.contains(Some(node))) {
            continue;
        }
        let fixed = window
            .get_computed_style(&el)
            .ok()
            .flatten()
            .and_then(|style| style.get_property_value("position").ok())
            .is_some_and(|p| p == "fixed");
        if !fixed {
            continue;
        }
        let bounds = el.get_bounding_client_rect();
        if occupies_bottom_right(Rect { right: bounds.right(), bottom: bounds.bottom() }, viewport) {
            conflicts += 1;
        }
    }
    conflicts
}

#[cfg(not(feature = "hydrate"))]
pub fn scan_conflicts(exclude_id: &str) -> usize {
    let _ = exclude_id;
    0
}
