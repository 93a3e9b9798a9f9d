use super::support::Fixture;
use glam::Vec2;
use grm_map_edit::app::ContextActionId;
use grm_map_edit::{
    EditablePointCollection, EditorIntent, InputOutcome, Key, Modifiers, PointCollectionCapabilities,
    PointerButton, TerrainPoint,
};

fn indices(f: &Fixture) -> Vec<usize> {
    let mut indices: Vec<usize> = f
        .state
        .selection
        .selected()
        .filter(|p| p.collection == f.path)
        .map(|p| p.index)
        .collect();
    indices.sort_unstable();
    indices
}

#[test]
fn test_box_select_selects_points_and_focuses_first() {
    let mut f = Fixture::abc();

    assert_eq!(f.press(-10.0, -10.0), InputOutcome::Handled);
    f.hover(150.0, 10.0);
    assert_eq!(indices(&f), vec![0, 1]);

    f.release(150.0, 10.0);
    assert_eq!(indices(&f), vec![0, 1]);
    assert_eq!(f.state.selection.focused(), Some(f.point_ref(0)));
    assert!(f.state.session.gesture.is_none());
}

#[test]
fn test_shrinking_box_deselects_points() {
    let mut f = Fixture::abc();

    f.press(-10.0, -10.0);
    f.hover(250.0, 10.0);
    assert_eq!(indices(&f), vec![0, 1, 2]);
    f.hover(50.0, 10.0);
    assert_eq!(indices(&f), vec![0]);
}

#[test]
fn test_additive_box_select_keeps_previous_selection() {
    let mut f = Fixture::abc();

    f.press(-10.0, -10.0);
    f.hover(10.0, 10.0);
    f.release(10.0, 10.0);
    assert_eq!(indices(&f), vec![0]);

    f.press_with(190.0, -10.0, 1, Modifiers::CTRL);
    f.move_with(210.0, 10.0, true, Modifiers::CTRL);
    f.release_with(210.0, 10.0, Modifiers::CTRL);
    assert_eq!(indices(&f), vec![0, 2]);
}

#[test]
fn test_click_on_empty_space_clears_all_selections() {
    let mut f = Fixture::abc();
    f.click(100.0, 0.0);
    assert_eq!(indices(&f), vec![1]);

    f.click(50.0, 50.0);
    assert!(f.state.selection.is_empty());
    assert_eq!(f.state.selection.focused(), None);
    assert_eq!(f.host.cleared, 1);
}

#[test]
fn test_small_box_with_modifier_keeps_selection() {
    let mut f = Fixture::abc();
    f.click(100.0, 0.0);

    f.press_with(50.0, 50.0, 1, Modifiers::CTRL);
    f.release_with(50.0, 50.0, Modifiers::CTRL);
    assert_eq!(indices(&f), vec![1]);
    assert_eq!(f.host.cleared, 0);
}

#[test]
fn test_box_select_without_targets_goes_to_host() {
    let mut f = Fixture::abc();
    f.state.set_edit_points(None);

    f.press(0.0, 0.0);
    f.hover(20.0, 30.0);
    f.release(20.0, 30.0);

    assert_eq!(f.host.selected_polygons.len(), 1);
    let (polygon, additive) = &f.host.selected_polygons[0];
    assert!(!additive);
    assert!(polygon.contains(TerrainPoint::new(10.0, 10.0)));
    assert!(!polygon.contains(TerrainPoint::new(30.0, 10.0)));
    assert!(f.state.selection.is_empty());
}

#[test]
fn test_right_click_on_point_opens_context_menu() {
    let mut f = Fixture::abc();

    let pressed = f.send(EditorIntent::PointerPressed {
        button: PointerButton::Secondary,
        screen_pos: Vec2::new(100.0, 0.0),
        click_count: 1,
        modifiers: Modifiers::NONE,
    });
    assert_eq!(pressed, InputOutcome::Handled);
    assert_eq!(f.state.selection.focused(), Some(f.point_ref(1)));
    assert!(!f.state.selection.is_selected(f.point_ref(1)));

    f.send(EditorIntent::PointerReleased {
        button: PointerButton::Secondary,
        screen_pos: Vec2::new(100.0, 0.0),
        modifiers: Modifiers::NONE,
    });
    let (point, actions) = f
        .host
        .point_menus
        .first()
        .expect("Kontextmenü sollte geöffnet worden sein");
    assert_eq!(*point, f.point_ref(1));
    let enabled: Vec<(ContextActionId, bool)> = actions.iter().map(|a| (a.id, a.enabled)).collect();
    assert_eq!(
        enabled,
        vec![
            (ContextActionId::SplitPath, true),
            (ContextActionId::ContinuePath, false),
            (ContextActionId::DeletePoint, true),
        ]
    );
}

#[test]
fn test_right_click_on_empty_space_opens_selection_menu() {
    let mut f = Fixture::abc();

    let pressed = f.send(EditorIntent::PointerPressed {
        button: PointerButton::Secondary,
        screen_pos: Vec2::new(60.0, 60.0),
        click_count: 1,
        modifiers: Modifiers::NONE,
    });
    assert_eq!(pressed, InputOutcome::Ignored);

    f.send(EditorIntent::PointerReleased {
        button: PointerButton::Secondary,
        screen_pos: Vec2::new(60.0, 60.0),
        modifiers: Modifiers::NONE,
    });
    assert!(f.host.point_menus.is_empty());
    assert_eq!(f.host.selection_menus, vec![Vec2::new(60.0, 60.0)]);
}

#[test]
fn test_right_press_on_path_is_consumed() {
    let mut f = Fixture::abc();

    let pressed = f.send(EditorIntent::PointerPressed {
        button: PointerButton::Secondary,
        screen_pos: Vec2::new(50.0, 1.0),
        click_count: 1,
        modifiers: Modifiers::NONE,
    });
    assert_eq!(pressed, InputOutcome::Handled);
    assert_eq!(f.state.selection.focused(), None);
}

#[test]
fn test_right_press_on_path_without_primary_is_not_consumed() {
    let mut f = Fixture::abc();
    let other = f.state.collections.add(EditablePointCollection::new(
        vec![TerrainPoint::new(0.0, 100.0), TerrainPoint::new(100.0, 100.0)],
        PointCollectionCapabilities::path(),
    ));
    f.state.set_multi_edit_points(vec![f.path, other]);

    let right_press = |f: &mut Fixture, y: f32| {
        f.send(EditorIntent::PointerPressed {
            button: PointerButton::Secondary,
            screen_pos: Vec2::new(50.0, y),
            click_count: 1,
            modifiers: Modifiers::NONE,
        })
    };
    assert_eq!(right_press(&mut f, 1.0), InputOutcome::Ignored);
    assert_eq!(right_press(&mut f, 101.0), InputOutcome::Ignored);

    f.state.session.primary = Some(other);
    assert_eq!(right_press(&mut f, 1.0), InputOutcome::Ignored);
    assert_eq!(right_press(&mut f, 101.0), InputOutcome::Handled);
}

#[test]
fn test_delete_without_selection_goes_to_host() {
    let mut f = Fixture::abc();

    assert_eq!(f.key_down(Key::Delete, Modifiers::NONE), InputOutcome::Handled);
    assert_eq!(f.host.deleted, 1);
    assert_eq!(f.points().len(), 3);
}

#[test]
fn test_select_all_and_clear_requests() {
    let mut f = Fixture::abc();

    f.send(EditorIntent::SelectAllRequested);
    assert_eq!(indices(&f), vec![0, 1, 2]);

    f.send(EditorIntent::ClearSelectionRequested);
    assert!(f.state.selection.is_empty());
    assert_eq!(f.host.cleared, 0);
}
