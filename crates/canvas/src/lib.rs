//! Canvas state and rendering for Mosaic.
//!
//! `EditorCanvas` owns the element collection, the editing pointer, and the
//! in-progress image choice; `CanvasView` renders the elements and wires up
//! drag, click-to-edit, and delete interactions.

mod canvas;
mod view;

pub use canvas::{CanvasEvent, DragState, EditorCanvas};
pub use view::CanvasView;
