use super::support::Fixture;
use grm_map_edit::{
    EditMode, EditablePointCollection, EditorIntent, InputOutcome, Key, ModifierKey, Modifiers,
    PointCollectionCapabilities, PointRef, TerrainPoint,
};

const CTRL_KEY: Key = Key::Modifier(ModifierKey::Control);

/// Fokussiert den Endpunkt C und hält Strg gedrückt.
fn continue_from_end(f: &mut Fixture) {
    f.click(200.0, 0.0);
    assert_eq!(f.key_down(CTRL_KEY, Modifiers::CTRL), InputOutcome::Handled);
    assert_eq!(f.state.mode(), EditMode::ContinuePath);
}

#[test]
fn test_modifier_continue_path_extends_until_release() {
    let mut f = Fixture::abc();
    continue_from_end(&mut f);
    assert!(f.state.session.entered_via_modifier);

    f.press_with(300.0, 0.0, 1, Modifiers::CTRL);
    assert_eq!(f.state.selection.focused(), Some(f.point_ref(3)));
    f.press_with(400.0, 0.0, 1, Modifiers::CTRL);
    assert_eq!(f.state.selection.focused(), Some(f.point_ref(4)));

    f.key_up(CTRL_KEY, Modifiers::NONE);
    assert_eq!(f.state.mode(), EditMode::None);
    assert_eq!(
        f.points(),
        vec![(0.0, 0.0), (100.0, 0.0), (200.0, 0.0), (300.0, 0.0), (400.0, 0.0)]
    );
    assert_eq!(f.state.history.undo_len(), 2);
}

#[test]
fn test_continue_at_start_prepends() {
    let mut f = Fixture::abc();
    f.click(0.0, 0.0);
    f.key_down(CTRL_KEY, Modifiers::CTRL);

    f.press_with(-100.0, 0.0, 1, Modifiers::CTRL);
    assert_eq!(f.points()[0], (-100.0, 0.0));
    assert_eq!(f.state.selection.focused(), Some(f.point_ref(0)));
}

#[test]
fn test_modifier_on_interior_point_is_ignored() {
    let mut f = Fixture::abc();
    f.click(100.0, 0.0);

    assert_eq!(f.key_down(CTRL_KEY, Modifiers::CTRL), InputOutcome::Ignored);
    assert_eq!(f.state.mode(), EditMode::None);
}

#[test]
fn test_clicking_anchor_ends_continue_path() {
    let mut f = Fixture::abc();
    continue_from_end(&mut f);

    f.press_with(200.0, 0.0, 1, Modifiers::CTRL);
    assert_eq!(f.state.mode(), EditMode::None);
    assert_eq!(f.points().len(), 3);
}

#[test]
fn test_escape_ends_continue_path() {
    let mut f = Fixture::abc();
    continue_from_end(&mut f);

    f.key_down(Key::Escape, Modifiers::CTRL);
    assert_eq!(f.state.mode(), EditMode::None);
}

#[test]
fn test_continue_path_preview_follows_pointer() {
    let mut f = Fixture::abc();
    continue_from_end(&mut f);

    f.move_with(250.0, 40.0, false, Modifiers::CTRL);
    assert_eq!(
        f.state.continue_path_preview(),
        Some((TerrainPoint::new(200.0, 0.0), TerrainPoint::new(250.0, 40.0)))
    );
}

#[test]
fn test_undo_during_continue_path_keeps_end() {
    let mut f = Fixture::abc();
    continue_from_end(&mut f);
    f.press_with(300.0, 0.0, 1, Modifiers::CTRL);
    f.press_with(400.0, 0.0, 1, Modifiers::CTRL);

    f.key_down(Key::Z, Modifiers::CTRL);
    assert_eq!(f.points().len(), 4);
    assert_eq!(f.state.mode(), EditMode::ContinuePath);
    assert_eq!(f.state.selection.focused(), Some(f.point_ref(3)));

    f.press_with(500.0, 0.0, 1, Modifiers::CTRL);
    assert_eq!(f.points().last(), Some(&(500.0, 0.0)));
    assert_eq!(f.points().len(), 5);
}

#[test]
fn test_requested_continue_path_without_focus_uses_first_point() {
    let mut f = Fixture::abc();

    f.send(EditorIntent::EditModeRequested {
        mode: EditMode::ContinuePath,
    });
    assert_eq!(f.state.mode(), EditMode::ContinuePath);
    assert_eq!(f.state.selection.focused(), Some(f.point_ref(0)));

    f.press(-50.0, 10.0);
    assert_eq!(f.points()[0], (-50.0, 10.0));
}

#[test]
fn test_requested_continue_path_survives_modifier_release() {
    let mut f = Fixture::abc();
    f.click(200.0, 0.0);
    f.send(EditorIntent::EditModeRequested {
        mode: EditMode::ContinuePath,
    });
    assert!(!f.state.session.entered_via_modifier);

    f.key_down(CTRL_KEY, Modifiers::CTRL);
    f.key_up(CTRL_KEY, Modifiers::NONE);
    assert_eq!(f.state.mode(), EditMode::ContinuePath);

    f.press(300.0, 0.0);
    assert_eq!(f.points().len(), 4);
    assert_eq!(f.state.selection.focused(), Some(f.point_ref(3)));
}

#[test]
fn test_continue_path_rejected_for_polygon() {
    let mut f = Fixture::abc();
    let polygon = f.state.collections.add(EditablePointCollection::new(
        vec![
            TerrainPoint::new(0.0, 300.0),
            TerrainPoint::new(100.0, 300.0),
            TerrainPoint::new(100.0, 400.0),
        ],
        PointCollectionCapabilities::polygon(),
    ));
    f.state.set_edit_points(Some(polygon));

    let outcome = f.send(EditorIntent::EditModeRequested {
        mode: EditMode::ContinuePath,
    });
    assert_eq!(outcome, InputOutcome::Ignored);
    assert_eq!(f.state.mode(), EditMode::None);
    assert_eq!(f.state.selection.focused(), None);
}

#[test]
fn test_external_continue_path_in_multi_target_mode() {
    let mut f = Fixture::abc();
    let other = f.state.collections.add(EditablePointCollection::new(
        vec![
            TerrainPoint::new(0.0, 100.0),
            TerrainPoint::new(100.0, 100.0),
            TerrainPoint::new(200.0, 100.0),
        ],
        PointCollectionCapabilities::path(),
    ));
    f.state.set_multi_edit_points(vec![f.path, other]);
    assert_eq!(f.state.session.primary, None);

    f.send(EditorIntent::ContinuePathRequested {
        point: PointRef::new(other, 2),
    });
    assert_eq!(f.state.session.primary, Some(other));
    assert_eq!(f.state.mode(), EditMode::ContinuePath);

    f.press(300.0, 100.0);
    assert_eq!(f.points_of(other).len(), 4);
    assert_eq!(f.points().len(), 3);
}

#[test]
fn test_insert_mode_hands_free_points_to_host() {
    let mut f = Fixture::abc();

    f.send(EditorIntent::EditModeRequested {
        mode: EditMode::InsertPoint,
    });
    assert_eq!(f.press(50.0, 50.0), InputOutcome::Handled);
    assert_eq!(f.host.free_points, vec![TerrainPoint::new(50.0, 50.0)]);
    assert_eq!(f.points().len(), 3);

    f.key_down(Key::Escape, Modifiers::NONE);
    assert_eq!(f.state.mode(), EditMode::None);
}

#[test]
fn test_retarget_leaves_continue_path() {
    let mut f = Fixture::abc();
    continue_from_end(&mut f);

    f.state.set_edit_points(None);
    assert_eq!(f.state.mode(), EditMode::None);
    assert_eq!(f.state.selection.focused(), None);
}
