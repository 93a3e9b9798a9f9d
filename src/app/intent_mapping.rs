//! Mapping von Host-Intents auf Editor-Commands.
//!
//! Hier fallen alle Entscheidungen der Eingabe-Zustandsmaschine (Treffer-Tests,
//! Modus, laufende Geste). Die Funktion ist rein: sie liest den State und
//! verändert nichts.

use super::context_menu::ContextActionId;
use super::state::{ActiveGesture, EditMode};
use super::use_cases::hit_test::{hits_outline, path_insert_target, pick_point};
use super::{EditorCommand, EditorIntent, EditorState};
use crate::core::PointRef;
use crate::shared::{Key, ModifierKey, Modifiers, PointerButton, Viewport};
use glam::Vec2;

/// Übersetzt einen `EditorIntent` in eine Sequenz ausführbarer `EditorCommand`s.
///
/// Eine leere Sequenz bedeutet: Event nicht behandelt, der Host darf es selbst
/// verarbeiten.
pub fn map_intent_to_commands(
    state: &EditorState,
    viewport: &dyn Viewport,
    intent: EditorIntent,
) -> Vec<EditorCommand> {
    match intent {
        EditorIntent::PointerPressed {
            button: PointerButton::Primary,
            screen_pos,
            click_count,
            modifiers,
        } => primary_pressed(state, viewport, screen_pos, click_count, modifiers),
        EditorIntent::PointerPressed {
            button: PointerButton::Secondary,
            screen_pos,
            ..
        } => secondary_pressed(state, viewport, screen_pos),
        EditorIntent::PointerMoved {
            screen_pos,
            primary_down,
            modifiers,
        } => pointer_moved(state, viewport, screen_pos, primary_down, modifiers),
        EditorIntent::PointerReleased {
            button: PointerButton::Primary,
            modifiers,
            ..
        } => primary_released(state, modifiers),
        EditorIntent::PointerReleased {
            button: PointerButton::Secondary,
            screen_pos,
            ..
        } => match pick_point(state, viewport, screen_pos) {
            Some(point) => vec![EditorCommand::OpenPointContextMenu { point }],
            None => vec![EditorCommand::OpenSelectionContextMenu { screen_pos }],
        },
        EditorIntent::KeyPressed { key, modifiers } => key_pressed(state, key, modifiers),
        EditorIntent::KeyReleased { key, modifiers } => modifier_changed(state, key, modifiers),
        EditorIntent::EditModeRequested { mode } => vec![EditorCommand::SetEditMode { mode }],
        EditorIntent::ContinuePathRequested { point } => vec![EditorCommand::ContinuePathFrom {
            point,
            via_modifier: false,
        }],
        EditorIntent::ContextActionChosen { action, point } => match action {
            ContextActionId::SplitPath => vec![EditorCommand::SplitPath { point }],
            ContextActionId::ContinuePath => vec![EditorCommand::ContinuePathFrom {
                point,
                via_modifier: false,
            }],
            ContextActionId::DeletePoint => vec![EditorCommand::DeletePoint { point }],
        },
        EditorIntent::UndoRequested => vec![EditorCommand::Undo],
        EditorIntent::RedoRequested => vec![EditorCommand::Redo],
        EditorIntent::ClearSelectionRequested => vec![EditorCommand::ClearSelection],
        EditorIntent::SelectAllRequested => vec![EditorCommand::SelectAll],
    }
}

fn primary_pressed(
    state: &EditorState,
    viewport: &dyn Viewport,
    screen_pos: Vec2,
    click_count: u8,
    modifiers: Modifiers,
) -> Vec<EditorCommand> {
    let mode = state.mode();

    if let Some(point) = pick_point(state, viewport, screen_pos) {
        if mode == EditMode::None {
            return vec![
                EditorCommand::FocusPoint {
                    point,
                    select: true,
                },
                EditorCommand::BeginDrag {
                    point,
                    press_screen: screen_pos,
                },
            ];
        }
        // Klick auf den Anker beendet den Modus; andere Marker zählen als Fläche
        if state.selection.focused() == Some(point) {
            return vec![EditorCommand::SetEditMode {
                mode: EditMode::None,
            }];
        }
    }

    let terrain = viewport.unproject(screen_pos);
    match mode {
        EditMode::InsertPoint => return vec![EditorCommand::InsertFreePoint { point: terrain }],
        EditMode::ContinuePath => {
            return continue_anchor_target(state)
                .map(|target| {
                    vec![EditorCommand::ExtendPath {
                        target,
                        point: terrain,
                    }]
                })
                .unwrap_or_default();
        }
        EditMode::None => {}
    }

    match click_count {
        2 => path_insert_target(state, terrain)
            .map(|target| {
                vec![EditorCommand::InsertPoint {
                    target,
                    point: terrain,
                }]
            })
            .unwrap_or_default(),
        1 => vec![EditorCommand::BeginBoxSelect { start: screen_pos }],
        _ if modifiers.is_none() => vec![EditorCommand::ClearAllSelections],
        _ => Vec::new(),
    }
}

/// Einfüge-Position für die nächste ContinuePath-Verlängerung.
fn continue_anchor_target(state: &EditorState) -> Option<PointRef> {
    let anchor = state.continue_anchor()?;
    let len = state.collections.get(anchor.collection)?.len();
    let index = if anchor.index == 0 { 0 } else { len };
    Some(PointRef::new(anchor.collection, index))
}

fn secondary_pressed(state: &EditorState, viewport: &dyn Viewport, screen_pos: Vec2) -> Vec<EditorCommand> {
    if let Some(point) = pick_point(state, viewport, screen_pos) {
        return vec![EditorCommand::FocusPoint {
            point,
            select: false,
        }];
    }
    if hits_outline(state, viewport.unproject(screen_pos)) {
        return vec![EditorCommand::Consume];
    }
    Vec::new()
}

fn pointer_moved(
    state: &EditorState,
    viewport: &dyn Viewport,
    screen_pos: Vec2,
    primary_down: bool,
    modifiers: Modifiers,
) -> Vec<EditorCommand> {
    match state.session.gesture {
        ActiveGesture::Dragging { .. } if primary_down => {
            vec![EditorCommand::UpdateDrag { screen_pos }]
        }
        ActiveGesture::BoxSelecting { .. } => vec![EditorCommand::UpdateBoxSelect {
            current: screen_pos,
            additive: modifiers.ctrl,
        }],
        _ if state.mode() == EditMode::ContinuePath => vec![EditorCommand::UpdateCursor {
            point: viewport.unproject(screen_pos),
        }],
        _ => Vec::new(),
    }
}

fn primary_released(state: &EditorState, modifiers: Modifiers) -> Vec<EditorCommand> {
    match state.session.gesture {
        ActiveGesture::Dragging { .. } => vec![EditorCommand::EndDrag],
        ActiveGesture::BoxSelecting { .. } => vec![EditorCommand::EndBoxSelect {
            additive: modifiers.ctrl,
            clear_if_small: modifiers.is_none(),
        }],
        ActiveGesture::None => Vec::new(),
    }
}

fn key_pressed(state: &EditorState, key: Key, modifiers: Modifiers) -> Vec<EditorCommand> {
    match key {
        Key::Modifier(_) => modifier_changed(state, key, modifiers),
        Key::Delete => delete_selected(state),
        Key::Escape => {
            let mut commands = Vec::new();
            if !state.session.gesture.is_none() {
                commands.push(EditorCommand::CancelGesture);
            }
            if state.mode() != EditMode::None {
                commands.push(EditorCommand::SetEditMode {
                    mode: EditMode::None,
                });
            }
            commands
        }
        Key::Z if modifiers.ctrl && modifiers.shift => vec![EditorCommand::Redo],
        Key::Z if modifiers.ctrl => vec![EditorCommand::Undo],
        Key::Y if modifiers.ctrl => vec![EditorCommand::Redo],
        _ => Vec::new(),
    }
}

/// Modifier gedrückt/losgelassen: ContinuePath betreten bzw. verlassen.
///
/// Loslassen beendet nur ein per Modifier betretenes ContinuePath. Ein über
/// Moduswahl oder Kontextaktion gestartetes ContinuePath bleibt bestehen, und
/// InsertPoint wird vom Loslassen nicht zurückgesetzt.
fn modifier_changed(state: &EditorState, key: Key, modifiers: Modifiers) -> Vec<EditorCommand> {
    let continue_key: ModifierKey = state.options.continue_path_modifier;
    if key != Key::Modifier(continue_key) {
        return Vec::new();
    }

    if modifiers.is_only(continue_key) {
        if state.mode() == EditMode::ContinuePath {
            return Vec::new();
        }
        return state
            .continue_anchor()
            .map(|point| {
                vec![EditorCommand::ContinuePathFrom {
                    point,
                    via_modifier: true,
                }]
            })
            .unwrap_or_default();
    }

    if state.mode() == EditMode::ContinuePath && state.session.entered_via_modifier {
        return vec![EditorCommand::SetEditMode {
            mode: EditMode::None,
        }];
    }
    Vec::new()
}

/// Entf: selektierte (und fokussierte) Punkte löschbarer Collections, sonst Host.
fn delete_selected(state: &EditorState) -> Vec<EditorCommand> {
    let mut candidates: Vec<PointRef> = state.selection.selected().collect();
    if let Some(focused) = state.selection.focused() {
        if !candidates.contains(&focused) {
            candidates.push(focused);
        }
    }
    if candidates.is_empty() {
        return vec![EditorCommand::DeleteHostSelection];
    }

    let points: Vec<PointRef> = candidates
        .into_iter()
        .filter(|p| state.is_active(p.collection))
        .filter(|p| {
            state
                .collections
                .get(p.collection)
                .is_some_and(|c| c.capabilities().can_delete_point && p.index < c.len())
        })
        .collect();
    if points.is_empty() {
        log::debug!("Selektierte Punkte sind nicht löschbar");
        return Vec::new();
    }
    vec![EditorCommand::DeletePoints { points }]
}
