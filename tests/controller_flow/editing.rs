use super::support::Fixture;
use grm_map_edit::app::ContextActionId;
use grm_map_edit::{EditorIntent, InputOutcome, Key, Modifiers, TerrainPoint};

#[test]
fn test_drag_commits_exactly_one_move() {
    let mut f = Fixture::abc();

    assert_eq!(f.press(100.0, 0.0), InputOutcome::Handled);
    f.drag_to(110.0, 5.0);
    f.drag_to(120.0, 10.0);

    // Während des Drags: nur Vorschau, Punktfolge unverändert
    let preview = f.state.collections.get(f.path).expect("Pfad vorhanden");
    assert_eq!(preview.points()[1].x(), 100.0);
    assert_eq!(preview.display_point(1).map(|p| (p.x(), p.y())), Some((120.0, 10.0)));
    assert!(!f.state.can_undo());

    f.release(120.0, 10.0);
    assert_eq!(f.points()[1], (120.0, 10.0));
    assert_eq!(f.state.history.undo_len(), 1);
    assert_eq!(f.state.undo_name(), Some("Punkt verschieben"));

    f.send(EditorIntent::UndoRequested);
    assert_eq!(f.points()[1], (100.0, 0.0));
    f.send(EditorIntent::RedoRequested);
    assert_eq!(f.points()[1], (120.0, 10.0));
}

#[test]
fn test_drag_back_to_start_leaves_no_history() {
    let mut f = Fixture::abc();
    let before = f.points();

    f.press(100.0, 0.0);
    f.drag_to(150.0, 50.0);
    f.drag_to(100.0, 0.0);
    f.release(100.0, 0.0);

    assert_eq!(f.points(), before);
    assert!(!f.state.can_undo());
}

#[test]
fn test_drag_keeps_grab_offset() {
    let mut f = Fixture::abc();

    // 4 px rechts vom Punkt gegriffen
    f.press(104.0, 0.0);
    f.drag_to(124.0, 10.0);
    f.release(124.0, 10.0);

    assert_eq!(f.points()[1], (120.0, 10.0));
}

#[test]
fn test_double_click_on_path_inserts_point() {
    let mut f = Fixture::abc();

    assert_eq!(f.double_click(50.0, 1.0), InputOutcome::Handled);
    assert_eq!(
        f.points(),
        vec![(0.0, 0.0), (50.0, 1.0), (100.0, 0.0), (200.0, 0.0)]
    );
    assert_eq!(f.state.undo_name(), Some("Punkt einfügen"));

    f.send(EditorIntent::UndoRequested);
    assert_eq!(f.points().len(), 3);
    f.send(EditorIntent::RedoRequested);
    assert_eq!(f.points()[1], (50.0, 1.0));
}

#[test]
fn test_double_click_far_from_path_is_ignored() {
    let mut f = Fixture::abc();

    assert_eq!(f.double_click(50.0, 40.0), InputOutcome::Ignored);
    assert_eq!(f.points().len(), 3);
}

#[test]
fn test_delete_key_removes_selection_as_one_step() {
    let mut f = Fixture::with_path(&[
        (0.0, 0.0),
        (100.0, 0.0),
        (200.0, 0.0),
        (300.0, 0.0),
        (400.0, 0.0),
    ]);
    let before = f.points();

    f.click(0.0, 0.0);
    f.click(200.0, 0.0);
    f.click(300.0, 0.0);
    assert_eq!(f.state.selection.len(), 3);

    assert_eq!(f.key_down(Key::Delete, Modifiers::NONE), InputOutcome::Handled);
    assert_eq!(f.points(), vec![(100.0, 0.0), (400.0, 0.0)]);
    assert_eq!(f.state.history.undo_len(), 1);
    assert_eq!(f.state.undo_name(), Some("Punkte löschen"));
    assert!(f.state.selection.is_empty());
    assert_eq!(f.state.selection.focused(), None);

    f.key_down(Key::Z, Modifiers::CTRL);
    assert_eq!(f.points(), before);
}

#[test]
fn test_split_via_context_action() {
    let mut f = Fixture::abc();

    let outcome = f.send(EditorIntent::ContextActionChosen {
        action: ContextActionId::SplitPath,
        point: f.point_ref(1),
    });
    assert_eq!(outcome, InputOutcome::Handled);
    assert_eq!(f.state.collections.len(), 2);
    assert_eq!(f.points(), vec![(0.0, 0.0), (100.0, 0.0)]);

    let tail = f
        .state
        .collections
        .ids()
        .find(|id| *id != f.path)
        .expect("Split sollte eine neue Collection anlegen");
    assert_eq!(f.points_of(tail), vec![(100.0, 0.0), (200.0, 0.0)]);
    assert!(f.state.active_targets().contains(&tail));

    f.send(EditorIntent::UndoRequested);
    assert_eq!(f.state.collections.len(), 1);
    assert_eq!(f.points().len(), 3);

    f.send(EditorIntent::RedoRequested);
    assert_eq!(f.points_of(tail), vec![(100.0, 0.0), (200.0, 0.0)]);
}

#[test]
fn test_split_at_end_point_is_rejected() {
    let mut f = Fixture::abc();

    let outcome = f.send(EditorIntent::ContextActionChosen {
        action: ContextActionId::SplitPath,
        point: f.point_ref(2),
    });
    assert_eq!(outcome, InputOutcome::Ignored);
    assert_eq!(f.state.collections.len(), 1);
    assert!(!f.state.can_undo());
}

#[test]
fn test_delete_point_context_action() {
    let mut f = Fixture::abc();

    f.send(EditorIntent::ContextActionChosen {
        action: ContextActionId::DeletePoint,
        point: f.point_ref(0),
    });
    assert_eq!(f.points(), vec![(100.0, 0.0), (200.0, 0.0)]);
    assert_eq!(f.state.undo_name(), Some("Punkt löschen"));
}

#[test]
fn test_undo_sequence_restores_initial_state() {
    let mut f = Fixture::abc();
    let initial = f.points();

    f.double_click(150.0, 0.0);
    f.press(100.0, 0.0);
    f.drag_to(100.0, 30.0);
    f.release(100.0, 30.0);
    f.send(EditorIntent::ContextActionChosen {
        action: ContextActionId::DeletePoint,
        point: f.point_ref(0),
    });
    let edited = f.points();
    assert_eq!(f.state.history.undo_len(), 3);

    for _ in 0..3 {
        f.send(EditorIntent::UndoRequested);
    }
    assert_eq!(f.points(), initial);
    assert!(!f.state.can_undo());

    for _ in 0..3 {
        f.send(EditorIntent::RedoRequested);
    }
    assert_eq!(f.points(), edited);
}

#[test]
fn test_external_insert_drops_stale_selection_before_delete() {
    let mut f = Fixture::with_path(&[(0.0, 0.0), (100.0, 0.0), (200.0, 0.0), (300.0, 0.0)]);
    f.click(200.0, 0.0);
    assert_eq!(f.state.selection.len(), 1);

    // Index 2 zeigt danach auf B statt auf C
    f.state
        .collections
        .get_mut(f.path)
        .expect("Pfad vorhanden")
        .insert(0, TerrainPoint::new(-100.0, 0.0))
        .expect("Einfügen am Anfang erlaubt");

    f.key_down(Key::Delete, Modifiers::NONE);
    assert_eq!(
        f.points(),
        vec![(-100.0, 0.0), (0.0, 0.0), (100.0, 0.0), (200.0, 0.0), (300.0, 0.0)]
    );
    assert!(f.state.selection.is_empty());
    assert_eq!(f.host.deleted, 1);
    assert!(!f.state.can_undo());
}
