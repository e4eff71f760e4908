use super::*;

// =============================================================
// CollapseState transitions
// =============================================================

#[test]
fn initial_follows_option() {
    assert_eq!(CollapseState::initial(true), CollapseState::Collapsed);
    assert_eq!(CollapseState::initial(false), CollapseState::Expanded);
}

#[test]
fn toggle_from_expanded_starts_collapsing() {
    assert_eq!(CollapseState::Expanded.toggled(), CollapseState::Collapsing);
}

#[test]
fn toggle_from_collapsed_expands() {
    assert_eq!(CollapseState::Collapsed.toggled(), CollapseState::Expanded);
}

#[test]
fn toggle_mid_transition_expands() {
    assert_eq!(CollapseState::Collapsing.toggled(), CollapseState::Expanded);
}

#[test]
fn width_transition_settles_collapse() {
    assert_eq!(CollapseState::Collapsing.transition_ended("width"), CollapseState::Collapsed);
}

#[test]
fn other_transitions_are_ignored() {
    assert_eq!(CollapseState::Collapsing.transition_ended("height"), CollapseState::Collapsing);
    assert_eq!(CollapseState::Collapsing.transition_ended("opacity"), CollapseState::Collapsing);
}

#[test]
fn width_transition_outside_collapsing_is_ignored() {
    assert_eq!(CollapseState::Expanded.transition_ended("width"), CollapseState::Expanded);
    assert_eq!(CollapseState::Collapsed.transition_ended("width"), CollapseState::Collapsed);
}

// =============================================================
// Presentation table
// =============================================================

#[test]
fn expanded_presentation() {
    let p = CollapseState::Expanded.presentation();
    assert!(!p.collapsed);
    assert!(p.button_absolute);
    assert_eq!(p.label, LabelKind::Collapse);
}

#[test]
fn collapsing_keeps_button_absolute() {
    let p = CollapseState::Collapsing.presentation();
    assert!(p.collapsed);
    assert!(p.button_absolute);
    assert_eq!(p.label, LabelKind::Expand);
}

#[test]
fn collapsed_releases_button() {
    let p = CollapseState::Collapsed.presentation();
    assert!(p.collapsed);
    assert!(!p.button_absolute);
}

// =============================================================
// Collapse
// =============================================================

#[test]
fn full_collapse_cycle() {
    let mut c = Collapse::new(false, true);
    let collapsing = c.toggle();
    assert_eq!(collapsing, Some(CollapseState::Collapsing.presentation()));
    let settled = c.transition_end("width");
    assert_eq!(settled, Some(CollapseState::Collapsed.presentation()));
    let expanded = c.toggle();
    assert_eq!(expanded, Some(CollapseState::Expanded.presentation()));
    assert_eq!(c.state(), CollapseState::Expanded);
}

#[test]
fn unrelated_transition_reports_nothing() {
    let mut c = Collapse::new(false, true);
    c.toggle();
    assert!(c.transition_end("height").is_none());
    assert_eq!(c.state(), CollapseState::Collapsing);
}

#[test]
fn not_collapsible_ignores_toggle() {
    let mut c = Collapse::new(false, false);
    assert!(c.toggle().is_none());
    assert_eq!(c.state(), CollapseState::Expanded);
}

#[test]
fn state_serializes_snake_case() {
    let json = serde_json::to_string(&CollapseState::Collapsing).unwrap_or_default();
    assert_eq!(json, "\"collapsing\"");
}
