//! Use-Cases der Application-Layer-Orchestrierung.

pub mod editing;
pub mod mode;
pub mod selection;
