use super::*;

const CATALOG: &str = r#"[
    {
        "id": "LDX01",
        "description": "Single point, two converging tracks",
        "nodes": [
            { "id": "01", "mac": "00:50:56:C0:00:01", "ip": "192.168.1.101" },
            { "id": "02", "mac": "00:50:56:C0:00:02", "ip": "192.168.1.102" }
        ],
        "routes": [
            { "id": 1, "description": "Track 1 to main line" }
        ]
    },
    {
        "id": "LDX02",
        "description": "Passing loop",
        "nodes": [],
        "routes": []
    }
]"#;

// =============================================================
// LayoutsState defaults and catalog loading
// =============================================================

#[test]
fn layouts_state_default_is_empty() {
    let state = LayoutsState::default();
    assert!(state.items.is_empty());
    assert!(state.selected_id.is_none());
    assert!(state.selected().is_none());
}

#[test]
fn from_catalog_parses_layouts_and_selects_the_first() {
    let state = LayoutsState::from_catalog(CATALOG);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.selected_id.as_deref(), Some("LDX01"));

    let layout = state.selected().unwrap();
    assert_eq!(layout.description, "Single point, two converging tracks");
    assert_eq!(layout.nodes.len(), 2);
    assert_eq!(layout.nodes[0].mac, "00:50:56:C0:00:01");
    assert_eq!(layout.routes.len(), 1);
    assert_eq!(layout.routes[0].id, 1);
}

#[test]
fn from_catalog_with_invalid_json_yields_empty_state() {
    let state = LayoutsState::from_catalog("not a catalog");
    assert!(state.items.is_empty());
    assert!(state.selected_id.is_none());
}

// =============================================================
// Selection
// =============================================================

#[test]
fn select_switches_to_a_known_layout() {
    let mut state = LayoutsState::from_catalog(CATALOG);
    assert!(state.select("LDX02"));
    assert_eq!(state.selected_id.as_deref(), Some("LDX02"));
    assert_eq!(state.selected().unwrap().description, "Passing loop");
}

#[test]
fn select_ignores_an_unknown_id() {
    let mut state = LayoutsState::from_catalog(CATALOG);
    assert!(!state.select("LDX99"));
    assert_eq!(state.selected_id.as_deref(), Some("LDX01"));
}

#[test]
fn select_reports_no_change_for_the_current_layout() {
    let mut state = LayoutsState::from_catalog(CATALOG);
    assert!(!state.select("LDX01"));
    assert_eq!(state.selected_id.as_deref(), Some("LDX01"));
}
