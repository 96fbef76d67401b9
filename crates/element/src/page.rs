use crate::{Element, ElementId, ElementKind};
use glam::Vec2;

/// The ordered element collection for a page.
///
/// Insertion order is z-order (back to front) and display order. Ids are
/// unique within the collection. Operations that target an id are no-ops
/// when the id is absent.
#[derive(Clone, Debug, PartialEq)]
pub struct Page {
    elements: Vec<Element>,
}

impl Page {
    pub fn new(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    /// The two-element starter page shown before anything has been saved.
    pub fn seed() -> Self {
        Self::new(vec![
            Element::new_text(ElementId::from_raw(1), Vec2::new(10.0, 10.0), "Text Element"),
            Element::new_image(ElementId::from_raw(2), Vec2::new(100.0, 50.0), None),
        ])
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.get(id).is_some()
    }

    /// Appends a new element of the given kind with default payload and
    /// position, returning its id.
    pub fn add(&mut self, kind: ElementKind) -> ElementId {
        let element = Element::with_defaults(kind);
        let id = element.id;
        self.elements.push(element);
        id
    }

    /// Removes the element with the matching id. Returns whether anything
    /// was removed.
    pub fn remove(&mut self, id: ElementId) -> bool {
        let before = self.elements.len();
        self.elements.retain(|e| e.id != id);
        self.elements.len() != before
    }

    /// Relocates the matching element to the given position. Only the
    /// position fields change.
    pub fn move_to(&mut self, id: ElementId, position: Vec2) -> bool {
        match self.get_mut(id) {
            Some(element) => {
                element.move_to(position);
                true
            }
            None => false,
        }
    }

    /// Updates `content` for the matching element.
    pub fn set_content(&mut self, id: ElementId, content: impl Into<String>) -> bool {
        match self.get_mut(id) {
            Some(element) => {
                element.content = Some(content.into());
                true
            }
            None => false,
        }
    }

    /// Updates `image_url` for the matching element.
    pub fn set_image_url(&mut self, id: ElementId, image_url: Option<String>) -> bool {
        match self.get_mut(id) {
            Some(element) => {
                element.image_url = image_url;
                true
            }
            None => false,
        }
    }

    /// Replaces the whole collection, e.g. when restoring a saved page.
    pub fn replace(&mut self, elements: Vec<Element>) {
        self.elements = elements;
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::seed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_page() {
        let page = Page::seed();
        assert_eq!(page.len(), 2);
        assert_eq!(page.elements()[0].kind, ElementKind::Text);
        assert_eq!(page.elements()[1].kind, ElementKind::Image);
    }

    #[test]
    fn test_add_grows_by_one_with_defaults() {
        let mut page = Page::seed();
        let id = page.add(ElementKind::Text);
        assert_eq!(page.len(), 3);
        let added = page.get(id).unwrap();
        assert_eq!(added.kind, ElementKind::Text);
        assert_eq!(added.content.as_deref(), Some("New Text"));
        assert_eq!(added.position(), Vec2::new(20.0, 20.0));

        let id = page.add(ElementKind::Image);
        assert_eq!(page.len(), 4);
        let added = page.get(id).unwrap();
        assert_eq!(added.kind, ElementKind::Image);
        assert_eq!(added.image_url, None);
    }

    #[test]
    fn test_remove_targets_exactly_one() {
        let mut page = Page::seed();
        let keep = page.elements()[1].id;
        let gone = page.elements()[0].id;

        assert!(page.remove(gone));
        assert_eq!(page.len(), 1);
        assert!(page.contains(keep));
        assert!(!page.contains(gone));
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut page = Page::seed();
        assert!(!page.remove(ElementId::from_raw(999)));
        assert_eq!(page.len(), 2);
    }

    #[test]
    fn test_move_updates_only_position() {
        let mut page = Page::seed();
        let id = page.elements()[0].id;
        let before = page.get(id).unwrap().clone();

        assert!(page.move_to(id, Vec2::new(250.0, 75.0)));
        let after = page.get(id).unwrap();
        assert_eq!(after.position(), Vec2::new(250.0, 75.0));
        assert_eq!(after.content, before.content);
        assert_eq!(after.kind, before.kind);
        assert_eq!(after.id, before.id);

        assert!(!page.move_to(ElementId::from_raw(999), Vec2::ZERO));
    }

    #[test]
    fn test_set_content_targets_matching_id() {
        let mut page = Page::seed();
        let text_id = page.elements()[0].id;
        let image_id = page.elements()[1].id;

        assert!(page.set_content(text_id, "Hello"));
        assert_eq!(page.get(text_id).unwrap().content.as_deref(), Some("Hello"));
        assert_eq!(page.get(image_id).unwrap().content, None);
    }

    #[test]
    fn test_set_image_url() {
        let mut page = Page::seed();
        let image_id = page.elements()[1].id;

        assert!(page.set_image_url(image_id, Some("pic.png".into())));
        assert_eq!(
            page.get(image_id).unwrap().image_url.as_deref(),
            Some("pic.png")
        );
        assert!(!page.set_image_url(ElementId::from_raw(999), None));
    }
}
