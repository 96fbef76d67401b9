use crate::ElementId;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// The kind of element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Text,
    Image,
}

impl Default for ElementKind {
    fn default() -> Self {
        Self::Text
    }
}

/// Default content for newly added text elements.
pub const DEFAULT_TEXT_CONTENT: &str = "New Text";

/// Default position for newly added elements.
pub const DEFAULT_POSITION: (f32, f32) = (20.0, 20.0);

/// A positioned element on the page canvas.
///
/// The kind determines which payload field is meaningful: `content` for text
/// elements, `image_url` for image elements. The serialized form matches the
/// saved-document shape exactly (`type`, `left`, `top`, `imageUrl`), with the
/// inapplicable payload field omitted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,
    #[serde(rename = "type")]
    pub kind: ElementKind,

    /// Position in canvas space, CSS-style (offset from the top-left corner).
    pub left: f32,
    pub top: f32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Element {
    pub fn new_text(id: ElementId, position: Vec2, content: impl Into<String>) -> Self {
        Self {
            id,
            kind: ElementKind::Text,
            left: position.x,
            top: position.y,
            content: Some(content.into()),
            image_url: None,
        }
    }

    pub fn new_image(id: ElementId, position: Vec2, image_url: Option<String>) -> Self {
        Self {
            id,
            kind: ElementKind::Image,
            left: position.x,
            top: position.y,
            content: None,
            image_url,
        }
    }

    /// Creates a new element of the given kind with a fresh id, the default
    /// position, and the kind-appropriate default payload.
    pub fn with_defaults(kind: ElementKind) -> Self {
        let position = Vec2::new(DEFAULT_POSITION.0, DEFAULT_POSITION.1);
        match kind {
            ElementKind::Text => {
                Self::new_text(ElementId::generate(), position, DEFAULT_TEXT_CONTENT)
            }
            ElementKind::Image => Self::new_image(ElementId::generate(), position, None),
        }
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    pub fn move_to(&mut self, position: Vec2) {
        self.left = position.x;
        self.top = position.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_element_wire_shape() {
        let element = Element::new_text(
            ElementId::from_raw(1),
            Vec2::new(10.0, 10.0),
            "Text Element",
        );
        let value = serde_json::to_value(&element).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 1,
                "type": "text",
                "left": 10.0,
                "top": 10.0,
                "content": "Text Element",
            })
        );
    }

    #[test]
    fn test_image_element_wire_shape_omits_content() {
        let element = Element::new_image(
            ElementId::from_raw(2),
            Vec2::new(100.0, 50.0),
            Some("photos/cat.png".to_string()),
        );
        let value = serde_json::to_value(&element).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 2,
                "type": "image",
                "left": 100.0,
                "top": 50.0,
                "imageUrl": "photos/cat.png",
            })
        );
    }

    #[test]
    fn test_deserialize_saved_record() {
        let element: Element = serde_json::from_str(
            r#"{"id": 3, "type": "image", "left": 4.5, "top": 6.0, "imageUrl": "a.png"}"#,
        )
        .unwrap();
        assert_eq!(element.kind, ElementKind::Image);
        assert_eq!(element.position(), Vec2::new(4.5, 6.0));
        assert_eq!(element.image_url.as_deref(), Some("a.png"));
        assert_eq!(element.content, None);
    }

    #[test]
    fn test_defaults() {
        let text = Element::with_defaults(ElementKind::Text);
        assert_eq!(text.content.as_deref(), Some(DEFAULT_TEXT_CONTENT));
        assert_eq!(text.position(), Vec2::new(20.0, 20.0));

        let image = Element::with_defaults(ElementKind::Image);
        assert_eq!(image.image_url, None);
        assert_eq!(image.content, None);
    }
}
