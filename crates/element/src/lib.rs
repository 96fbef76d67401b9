//! Element model for the Mosaic editor.
//!
//! This crate provides a flat, non-hierarchical element model.
//! Elements are rendered in z-order (index in the list).

mod element;
mod element_id;
mod page;

pub use element::{Element, ElementKind};
pub use element_id::ElementId;
pub use page::Page;
