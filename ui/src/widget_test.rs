#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::config::ConfigOverrides;

fn handle_for(overrides: ConfigOverrides) -> ChatWidgetHandle {
    ChatWidgetHandle::new(WidgetConfig::from_overrides(overrides).unwrap()).unwrap()
}

#[test]
fn minimized_widget_starts_closed_and_toggles_open() {
    let widget = handle_for(ConfigOverrides {
        api_url: Some("https://x/api".to_owned()),
        minimized: Some(true),
        ..ConfigOverrides::default()
    });
    assert!(!widget.is_open());
    assert!(widget.toggle());
    assert!(widget.is_open());
    assert_eq!(widget.config().chat_endpoint(), "https://x/api/chat");
}

#[test]
fn expanded_widget_starts_open() {
    let widget = handle_for(ConfigOverrides { minimized: Some(false), ..ConfigOverrides::default() });
    assert!(widget.is_open());
    widget.close();
    assert!(!widget.is_open());
    widget.open();
    assert!(widget.is_open());
}

#[test]
fn chat_id_is_generated() {
    let widget = handle_for(ConfigOverrides::default());
    assert!(widget.chat_id().starts_with("chat_"));
}

#[test]
fn position_can_be_rewritten() {
    let widget = handle_for(ConfigOverrides::default());
    assert_eq!(widget.position(), Position::BottomRight);
    widget.set_position(Position::BottomLeft);
    assert_eq!(widget.position(), Position::BottomLeft);
    assert_eq!(widget.context().position.get_untracked(), Position::BottomLeft);
    assert_eq!(widget.config().position, Position::BottomRight);
}

#[test]
fn destroy_is_idempotent_outside_browser() {
    let mut widget = handle_for(ConfigOverrides::default());
    widget.save_state();
    widget.destroy();
    widget.destroy();
}

#[test]
fn root_class_reflects_state_and_adjustment() {
    assert_eq!(
        root_class(Position::BottomRight, Theme::SapFiori, false, false),
        "erp-chat-widget bottom-right sap-fiori minimized"
    );
    assert_eq!(
        root_class(Position::BottomLeft, Theme::Professional, true, true),
        "erp-chat-widget bottom-left professional open erp-adjusted"
    );
}

#[test]
fn new_context_starts_unadjusted() {
    let widget = handle_for(ConfigOverrides::default());
    assert!(!widget.context().adjusted.get_untracked());
}
