pub mod input;
pub mod lens;
pub mod lifecycle;
pub mod viewport;

pub use input::{InteractionMode, KeyCommand, ViewerAction, ViewerState};
pub use lifecycle::OverlayScope;
