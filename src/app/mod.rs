//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod actions;
pub mod command_log;
pub mod context_menu;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
pub mod host;
mod intent_mapping;
/// Editor State
///
/// Dieses Modul verwaltet den Zustand einer Edit-Sitzung (Ziele, Selektion, Modus, Geste).
pub mod state;
pub mod use_cases;

pub use actions::{PointAction, PointHistory};
pub use command_log::CommandLog;
pub use context_menu::{ContextActionDescriptor, ContextActionId};
pub use controller::{EditorController, InputOutcome};
pub use events::{EditorCommand, EditorIntent};
pub use history::{ActionLog, BoxedAction, CompositeAction, UndoableAction};
pub use host::{EditorHost, NullHost};
pub use intent_mapping::map_intent_to_commands;
pub use state::{
    ActiveGesture, EditMode, EditSessionState, EditTargets, EditorState, SelectionChange,
    SelectionModel,
};
