//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `core`, `app` und dem Host geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod input;
mod notifier;
pub mod options;
mod viewport;

pub use input::{Key, ModifierKey, Modifiers, PointerButton};
pub use notifier::{ChangeNotifier, SubscriptionId};
pub use options::EditorOptions;
pub use viewport::{ScaledViewport, ScreenRect, Viewport};
