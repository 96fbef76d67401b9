//! Minimal theming for Mosaic.
//!
//! Provides colors for the canvas, placed elements, and editing overlays.

use gpui::Hsla;

/// Theme colors for the website editor.
#[derive(Clone, Debug)]
pub struct Theme {
    /// Canvas background
    pub canvas_background: Hsla,

    /// Border drawn around placed elements
    pub element_border: Hsla,

    /// Background of placed elements
    pub element_background: Hsla,

    /// Hover indicator color
    pub hover: Hsla,

    /// Delete glyph color
    pub delete: Hsla,

    /// Overlay panel background
    pub overlay_background: Hsla,

    /// Accent for primary actions (save buttons, focused input border)
    pub accent: Hsla,

    /// UI background
    pub ui_background: Hsla,

    /// UI border
    pub ui_border: Hsla,

    /// UI text
    pub ui_text: Hsla,

    /// UI text muted
    pub ui_text_muted: Hsla,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    pub fn light() -> Self {
        Self {
            canvas_background: gpui::white(),
            element_border: hsla(0.0, 0.0, 0.8, 1.0),
            element_background: hsla(0.0, 0.0, 0.99, 1.0),
            hover: hsla(0.58, 0.9, 0.5, 0.3),
            delete: hsla(0.0, 0.8, 0.5, 1.0),
            overlay_background: hsla(0.0, 0.0, 0.97, 1.0),
            accent: hsla(0.58, 0.9, 0.5, 1.0),
            ui_background: hsla(0.0, 0.0, 0.98, 1.0),
            ui_border: hsla(0.0, 0.0, 0.9, 1.0),
            ui_text: hsla(0.0, 0.0, 0.1, 1.0),
            ui_text_muted: hsla(0.0, 0.0, 0.5, 1.0),
        }
    }

    pub fn dark() -> Self {
        Self {
            canvas_background: hsla(0.0, 0.0, 0.1, 1.0),
            element_border: hsla(0.0, 0.0, 0.3, 1.0),
            element_background: hsla(0.0, 0.0, 0.14, 1.0),
            hover: hsla(0.58, 0.9, 0.5, 0.3),
            delete: hsla(0.0, 0.8, 0.55, 1.0),
            overlay_background: hsla(0.0, 0.0, 0.16, 1.0),
            accent: hsla(0.58, 0.9, 0.5, 1.0),
            ui_background: hsla(0.0, 0.0, 0.12, 1.0),
            ui_border: hsla(0.0, 0.0, 0.2, 1.0),
            ui_text: hsla(0.0, 0.0, 0.9, 1.0),
            ui_text_muted: hsla(0.0, 0.0, 0.5, 1.0),
        }
    }
}

/// Helper to create Hsla from h, s, l, a values.
pub fn hsla(h: f32, s: f32, l: f32, a: f32) -> Hsla {
    Hsla { h, s, l, a }
}
