use super::*;

const VIEWPORT: Viewport = Viewport { width: 1280.0, height: 800.0 };

#[test]
fn element_in_corner_is_a_conflict() {
    assert!(occupies_bottom_right(Rect { right: 1270.0, bottom: 790.0 }, VIEWPORT));
}

#[test]
fn element_on_left_edge_is_not_a_conflict() {
    assert!(!occupies_bottom_right(Rect { right: 300.0, bottom: 790.0 }, VIEWPORT));
}

#[test]
fn element_at_top_right_is_not_a_conflict() {
    assert!(!occupies_bottom_right(Rect { right: 1280.0, bottom: 60.0 }, VIEWPORT));
}

#[test]
fn margin_boundary_is_exclusive() {
    assert!(!occupies_bottom_right(Rect { right: 1180.0, bottom: 790.0 }, VIEWPORT));
    assert!(!occupies_bottom_right(Rect { right: 1270.0, bottom: 700.0 }, VIEWPORT));
    assert!(occupies_bottom_right(Rect { right: 1180.5, bottom: 700.5 }, VIEWPORT));
}

#[test]
fn conflicts_move_widget_left_when_avoiding() {
    let cfg = WidgetConfig::default();
    assert_eq!(resolve_position(2, &cfg), Position::BottomLeft);
}

#[test]
fn no_conflicts_keep_configured_position() {
    let cfg = WidgetConfig { position: Position::BottomLeft, ..WidgetConfig::default() };
    assert_eq!(resolve_position(0, &cfg), Position::BottomLeft);
    assert_eq!(resolve_position(0, &WidgetConfig::default()), Position::BottomRight);
}

#[test]
fn conflicts_ignored_when_avoidance_disabled() {
    let cfg = WidgetConfig { avoid_conflicts: false, ..WidgetConfig::default() };
    assert_eq!(resolve_position(3, &cfg), Position::BottomRight);
}

#[test]
fn displaced_widget_is_adjusted_only_when_respecting_host_ui() {
    let cfg = WidgetConfig::default();
    assert!(is_adjusted(&cfg, Position::BottomLeft));
    assert!(!is_adjusted(&cfg, Position::BottomRight));

    let ignoring = WidgetConfig { respect_existing_ui: false, ..WidgetConfig::default() };
    assert!(!is_adjusted(&ignoring, Position::BottomLeft));
}

#[test]
fn scan_outside_browser_finds_nothing() {
    assert_eq!(scan_conflicts("erp-chat-widget"), 0);
}
