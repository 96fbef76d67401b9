//! UI building blocks for Mosaic: stack and button primitives, a
//! single-line text input, the toolbar, and the edit overlays.

mod components;
mod input;
mod overlay;
mod toolbar;

pub use components::{button, h_stack, panel};
pub use input::{bind_input_keys, Input, InputState, InputStateEvent, INPUT_CONTEXT};
pub use overlay::{ImageOverlay, TextOverlay};
pub use toolbar::{Toolbar, ToolbarEvent};
