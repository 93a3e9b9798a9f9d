//! Editor Controller für zentrale Event-Verarbeitung.

use super::{EditorCommand, EditorHost, EditorIntent, EditorState};
use crate::core::EditError;

/// Ob der Editor ein Event verarbeitet hat. Bei `Ignored` darf der Host es
/// selbst behandeln (z.B. Kamera schwenken).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Handled,
    Ignored,
}

/// Orchestriert Host-Events und Use-Cases auf den EditorState.
#[derive(Debug, Default)]
pub struct EditorController;

impl EditorController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// Abgelehnte Operationen (`EditError`) verändern nichts und führen zu
    /// `Ignored`; nur unerwartete Fehler werden weitergereicht.
    pub fn handle_intent(
        &mut self,
        state: &mut EditorState,
        host: &mut dyn EditorHost,
        intent: EditorIntent,
    ) -> anyhow::Result<InputOutcome> {
        // Punktfolgen können sich außerhalb des Controllers geändert haben
        state.selection.revalidate(&state.collections);
        let commands = super::intent_mapping::map_intent_to_commands(state, host.viewport(), intent);
        let mut outcome = InputOutcome::Ignored;
        for command in commands {
            if self.handle_command(state, host, command)? == InputOutcome::Handled {
                outcome = InputOutcome::Handled;
            }
        }
        Ok(outcome)
    }

    /// Führt einen Command aus. Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut EditorState,
        host: &mut dyn EditorHost,
        command: EditorCommand,
    ) -> anyhow::Result<InputOutcome> {
        state.command_log.record(&command);
        match self.dispatch(state, host, command) {
            Ok(()) => Ok(InputOutcome::Handled),
            Err(e) => match e.downcast_ref::<EditError>() {
                Some(rejected) => {
                    log::debug!("Command abgelehnt: {rejected}");
                    Ok(InputOutcome::Ignored)
                }
                None => Err(e),
            },
        }
    }

    fn dispatch(
        &mut self,
        state: &mut EditorState,
        host: &mut dyn EditorHost,
        command: EditorCommand,
    ) -> anyhow::Result<()> {
        use super::handlers;

        match command {
            // === Modi ===
            EditorCommand::SetEditMode { mode } => handlers::mode::set_edit_mode(state, mode)?,
            EditorCommand::ContinuePathFrom {
                point,
                via_modifier,
            } => handlers::mode::continue_path_from(state, point, via_modifier)?,
            EditorCommand::UpdateCursor { point } => handlers::mode::update_cursor(state, point),
            EditorCommand::CancelGesture => handlers::mode::cancel_gesture(state),

            // === Editing ===
            EditorCommand::InsertPoint { target, point } => {
                handlers::editing::insert_point(state, target, point)?
            }
            EditorCommand::ExtendPath { target, point } => {
                handlers::editing::extend_path(state, target, point)?
            }
            EditorCommand::DeletePoints { points } => {
                handlers::editing::delete_points(state, &points)?
            }
            EditorCommand::DeletePoint { point } => handlers::editing::delete_point(state, point)?,
            EditorCommand::SplitPath { point } => handlers::editing::split_path(state, point)?,
            EditorCommand::InsertFreePoint { point } => {
                handlers::editing::insert_free_point(host, point)
            }
            EditorCommand::DeleteHostSelection => handlers::editing::delete_host_selection(host),
            EditorCommand::BeginDrag {
                point,
                press_screen,
            } => handlers::editing::begin_drag(state, point, press_screen)?,
            EditorCommand::UpdateDrag { screen_pos } => {
                handlers::editing::update_drag(state, host.viewport(), screen_pos)?
            }
            EditorCommand::EndDrag => handlers::editing::end_drag(state)?,

            // === Selektion ===
            EditorCommand::FocusPoint { point, select } => {
                handlers::selection::focus_point(state, point, select)?
            }
            EditorCommand::BeginBoxSelect { start } => {
                handlers::selection::begin_box_select(state, start)
            }
            EditorCommand::UpdateBoxSelect { current, additive } => {
                handlers::selection::update_box_select(state, host.viewport(), current, additive)
            }
            EditorCommand::EndBoxSelect {
                additive,
                clear_if_small,
            } => handlers::selection::end_box_select(state, host, additive, clear_if_small),
            EditorCommand::ClearSelection => handlers::selection::clear(state),
            EditorCommand::ClearAllSelections => handlers::selection::clear_all(state, host),
            EditorCommand::SelectAll => handlers::selection::select_all(state),
            EditorCommand::OpenPointContextMenu { point } => {
                handlers::selection::open_point_context_menu(state, host, point)
            }
            EditorCommand::OpenSelectionContextMenu { screen_pos } => {
                handlers::selection::open_selection_context_menu(host, screen_pos)
            }
            EditorCommand::Consume => {}

            // === History ===
            EditorCommand::Undo => handlers::history::undo(state)?,
            EditorCommand::Redo => handlers::history::redo(state)?,
        }

        Ok(())
    }
}
