use super::*;

// =============================================================
// ActivityState
// =============================================================

#[test]
fn activity_state_default_has_no_lines() {
    let state = ActivityState::default();
    assert!(state.lines.is_empty());
}

#[test]
fn push_appends_newest_last() {
    let mut state = ActivityState::default();
    state.push(ActivityKind::Selection, "layout LDX01 selected".to_owned());
    state.push(ActivityKind::Lock, "panel locked".to_owned());

    assert_eq!(state.lines.len(), 2);
    assert_eq!(state.lines[0].kind, ActivityKind::Selection);
    assert_eq!(state.lines[1].kind, ActivityKind::Lock);
    assert_eq!(state.lines[1].message, "panel locked");
}

#[test]
fn push_assigns_increasing_sequence_numbers() {
    let mut state = ActivityState::default();
    for i in 0..5 {
        state.push(ActivityKind::Command, format!("command {i}"));
    }
    let seqs: Vec<u64> = state.lines.iter().map(|l| l.seq).collect();
    assert_eq!(seqs, vec![1, 2, 3, 4, 5]);
}

// =============================================================
// ActivityKind
// =============================================================

#[test]
fn activity_kind_class_suffixes_are_distinct() {
    assert_ne!(ActivityKind::Selection.as_str(), ActivityKind::Command.as_str());
    assert_ne!(ActivityKind::Selection.as_str(), ActivityKind::Lock.as_str());
    assert_ne!(ActivityKind::Command.as_str(), ActivityKind::Lock.as_str());
}
