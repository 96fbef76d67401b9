use anyhow::Result;
use element::{Element, ElementId, ElementKind, Page};
use glam::Vec2;
use gpui::{Context, EventEmitter, FocusHandle, Focusable};
use media::{ObjectUrl, ObjectUrlStore};
use std::path::PathBuf;
use store::{export_website, LocalStore, SAVED_ELEMENTS_KEY};

/// Mouse movement below this distance counts as a click, not a drag.
const CLICK_SLOP: f32 = 3.0;

/// Events emitted by the canvas.
#[derive(Clone, Debug)]
pub enum CanvasEvent {
    ElementAdded(ElementId),
    ElementRemoved(ElementId),
    EditingChanged,
    ContentChanged,
}

/// Active drag operation.
#[derive(Clone, Debug)]
pub struct DragState {
    pub id: ElementId,
    pub start_mouse: Vec2,
    pub start_position: Vec2,
    /// Set once the pointer travels past the click slop.
    pub moved: bool,
}

/// The editor canvas state.
///
/// Owns the ordered element collection (insertion order is z-order), the
/// editing pointer, and the transient image choice for an open image
/// overlay. Every operation is a synchronous state replacement followed by
/// `cx.notify()`.
pub struct EditorCanvas {
    page: Page,

    /// Element currently shown in an edit overlay, if any.
    editing: Option<ElementId>,

    /// Pending image choice for an open image overlay.
    selected_image: Option<ObjectUrl>,

    /// Registry backing transient image references.
    media: ObjectUrlStore,

    /// Active drag operation.
    drag: Option<DragState>,

    /// Focus handle for keyboard events.
    focus_handle: FocusHandle,
}

impl EditorCanvas {
    pub fn new(cx: &mut Context<Self>) -> Self {
        Self {
            page: Page::seed(),
            editing: None,
            selected_image: None,
            media: ObjectUrlStore::new(),
            drag: None,
            focus_handle: cx.focus_handle(),
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn elements(&self) -> &[Element] {
        self.page.elements()
    }

    pub fn editing(&self) -> Option<ElementId> {
        self.editing
    }

    /// The element the editing pointer references, if any.
    pub fn editing_element(&self) -> Option<&Element> {
        self.editing.and_then(|id| self.page.get(id))
    }

    pub fn drag(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    /// Appends a new element with a fresh id and kind-appropriate defaults.
    pub fn add_element(&mut self, kind: ElementKind, cx: &mut Context<Self>) -> ElementId {
        let id = self.page.add(kind);
        cx.emit(CanvasEvent::ElementAdded(id));
        cx.emit(CanvasEvent::ContentChanged);
        cx.notify();
        id
    }

    /// Relocates the matching element. No-op when the id is absent.
    pub fn move_element(&mut self, id: ElementId, position: Vec2, cx: &mut Context<Self>) {
        if self.page.move_to(id, position) {
            cx.emit(CanvasEvent::ContentChanged);
            cx.notify();
        }
    }

    /// Removes the matching element. No-op when the id is absent. Clears
    /// the editing pointer if it referenced the removed element.
    pub fn delete_element(&mut self, id: ElementId, cx: &mut Context<Self>) {
        if self.page.remove(id) {
            if self.editing == Some(id) {
                self.cancel_edit(cx);
            }
            cx.emit(CanvasEvent::ElementRemoved(id));
            cx.emit(CanvasEvent::ContentChanged);
            cx.notify();
        }
    }

    /// Points the edit overlay at the matching element. Only one overlay is
    /// visible at a time; which one renders follows the element's kind.
    pub fn begin_edit(&mut self, id: ElementId, cx: &mut Context<Self>) {
        if !self.page.contains(id) || self.editing == Some(id) {
            return;
        }
        self.release_selected_image();
        self.editing = Some(id);
        cx.emit(CanvasEvent::EditingChanged);
        cx.notify();
    }

    /// Closes any open overlay, revoking a pending image choice.
    pub fn cancel_edit(&mut self, cx: &mut Context<Self>) {
        if self.editing.is_none() {
            return;
        }
        self.release_selected_image();
        self.editing = None;
        cx.emit(CanvasEvent::EditingChanged);
        cx.notify();
    }

    /// Updates `content` for the matching element and clears the editing
    /// pointer.
    pub fn commit_text_edit(
        &mut self,
        id: ElementId,
        content: impl Into<String>,
        cx: &mut Context<Self>,
    ) {
        if self.page.set_content(id, content) {
            cx.emit(CanvasEvent::ContentChanged);
        }
        self.editing = None;
        cx.emit(CanvasEvent::EditingChanged);
        cx.notify();
    }

    /// Updates `image_url` for the matching element and clears the editing
    /// pointer and any pending image choice.
    pub fn commit_image_edit(
        &mut self,
        id: ElementId,
        image_url: Option<String>,
        cx: &mut Context<Self>,
    ) {
        if self.page.set_image_url(id, image_url) {
            cx.emit(CanvasEvent::ContentChanged);
        }
        self.release_selected_image();
        self.editing = None;
        cx.emit(CanvasEvent::EditingChanged);
        cx.notify();
    }

    /// Registers a chosen local file as the pending image for the open
    /// overlay. Replacing an earlier choice revokes its object URL.
    pub fn choose_image_file(&mut self, path: PathBuf, cx: &mut Context<Self>) {
        self.release_selected_image();
        let url = self.media.create_object_url(path);
        log::debug!("selected image {url}");
        self.selected_image = Some(url);
        cx.notify();
    }

    /// Commits the pending image choice to the matching element. With no
    /// pending choice this just closes the overlay, leaving the element's
    /// image untouched.
    pub fn commit_pending_image(&mut self, id: ElementId, cx: &mut Context<Self>) {
        match self.selected_image.take() {
            Some(url) => {
                let path = self.media.revoke(&url);
                let image_url = path.map(|p| p.display().to_string());
                self.commit_image_edit(id, image_url, cx);
            }
            None => {
                self.editing = None;
                cx.emit(CanvasEvent::EditingChanged);
                cx.notify();
            }
        }
    }

    pub fn selected_image(&self) -> Option<&ObjectUrl> {
        self.selected_image.as_ref()
    }

    /// The registry backing transient image references.
    pub fn media(&self) -> &ObjectUrlStore {
        &self.media
    }

    /// Path behind the pending image choice, for previews.
    pub fn selected_image_path(&self) -> Option<PathBuf> {
        let url = self.selected_image.as_ref()?;
        self.media.resolve(url).map(|p| p.to_path_buf())
    }

    /// Resolves an element's image reference to a renderable local path.
    ///
    /// Empty references and unresolvable `blob:` handles (e.g. restored
    /// from an old save) render as the placeholder instead.
    pub fn image_path(&self, element: &Element) -> Option<PathBuf> {
        let url = element.image_url.as_deref()?;
        if url.is_empty() || url.starts_with("blob:") || url.starts_with("http") {
            return None;
        }
        Some(PathBuf::from(url))
    }

    fn release_selected_image(&mut self) {
        if let Some(url) = self.selected_image.take() {
            self.media.revoke(&url);
        }
    }

    // Drag protocol: start on element mouse-down, update while the button
    // is held, finish on mouse-up. A drag that never leaves the click slop
    // is a click and begins editing instead.

    pub fn start_move(&mut self, id: ElementId, mouse: Vec2, _cx: &mut Context<Self>) {
        let Some(element) = self.page.get(id) else {
            return;
        };
        self.drag = Some(DragState {
            id,
            start_mouse: mouse,
            start_position: element.position(),
            moved: false,
        });
    }

    pub fn update_move(&mut self, mouse: Vec2, cx: &mut Context<Self>) {
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        let delta = mouse - drag.start_mouse;
        if delta.length() > CLICK_SLOP {
            drag.moved = true;
        }
        if drag.moved {
            let (id, position) = (drag.id, drag.start_position + delta);
            self.page.move_to(id, position.max(Vec2::ZERO));
            cx.notify();
        }
    }

    pub fn finish_move(&mut self, cx: &mut Context<Self>) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        if drag.moved {
            cx.emit(CanvasEvent::ContentChanged);
            cx.notify();
        } else {
            self.begin_edit(drag.id, cx);
        }
    }

    /// Serializes the collection under the `savedElements` key, overwriting
    /// any prior save.
    pub fn save(&self, store: &LocalStore) -> Result<()> {
        store.set(SAVED_ELEMENTS_KEY, &self.page.elements().to_vec())?;
        log::info!("saved {} elements", self.page.len());
        Ok(())
    }

    /// Replaces the collection from a parseable saved value; keeps the seed
    /// defaults otherwise.
    pub fn restore(&mut self, store: &LocalStore, cx: &mut Context<Self>) {
        match store.get::<Vec<Element>>(SAVED_ELEMENTS_KEY) {
            Some(elements) => {
                log::info!("restored {} elements", elements.len());
                self.page.replace(elements);
                cx.emit(CanvasEvent::ContentChanged);
                cx.notify();
            }
            None => log::info!("no saved elements, keeping seed page"),
        }
    }

    /// Writes the collection to `website.json`, returning the written path.
    pub fn export(&self, dir: Option<PathBuf>) -> Result<PathBuf> {
        export_website(self.page.elements(), dir)
    }
}

impl EventEmitter<CanvasEvent> for EditorCanvas {}

impl Focusable for EditorCanvas {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::{AppContext as _, Entity, TestAppContext};

    fn canvas(cx: &mut TestAppContext) -> Entity<EditorCanvas> {
        cx.new(|cx| EditorCanvas::new(cx))
    }

    #[gpui::test]
    fn test_commit_text_edit_clears_editing_pointer(cx: &mut TestAppContext) {
        let canvas = canvas(cx);
        canvas.update(cx, |canvas, cx| {
            let id = canvas.elements()[0].id;
            canvas.begin_edit(id, cx);
            assert_eq!(canvas.editing(), Some(id));

            canvas.commit_text_edit(id, "Edited", cx);
            assert_eq!(canvas.editing(), None);
            assert_eq!(
                canvas.page().get(id).unwrap().content.as_deref(),
                Some("Edited")
            );
        });
    }

    #[gpui::test]
    fn test_cancel_edit_revokes_pending_image(cx: &mut TestAppContext) {
        let canvas = canvas(cx);
        canvas.update(cx, |canvas, cx| {
            let id = canvas.elements()[1].id;
            canvas.begin_edit(id, cx);
            canvas.choose_image_file("/tmp/cat.png".into(), cx);
            assert_eq!(canvas.media().len(), 1);

            canvas.cancel_edit(cx);
            assert_eq!(canvas.editing(), None);
            assert!(canvas.selected_image().is_none());
            assert!(canvas.media().is_empty());
        });
    }

    #[gpui::test]
    fn test_replacing_pending_image_revokes_old_url(cx: &mut TestAppContext) {
        let canvas = canvas(cx);
        canvas.update(cx, |canvas, cx| {
            let id = canvas.elements()[1].id;
            canvas.begin_edit(id, cx);

            canvas.choose_image_file("/tmp/first.png".into(), cx);
            let first = canvas.selected_image().cloned().unwrap();

            canvas.choose_image_file("/tmp/second.png".into(), cx);
            assert_eq!(canvas.media().len(), 1);
            assert!(canvas.media().resolve(&first).is_none());
            assert_ne!(canvas.selected_image(), Some(&first));
        });
    }

    #[gpui::test]
    fn test_commit_pending_image_persists_backing_path(cx: &mut TestAppContext) {
        let canvas = canvas(cx);
        canvas.update(cx, |canvas, cx| {
            let id = canvas.elements()[1].id;
            canvas.begin_edit(id, cx);
            canvas.choose_image_file("/tmp/cat.png".into(), cx);

            canvas.commit_pending_image(id, cx);
            assert_eq!(canvas.editing(), None);
            assert!(canvas.media().is_empty());
            assert_eq!(
                canvas.page().get(id).unwrap().image_url.as_deref(),
                Some("/tmp/cat.png")
            );
        });
    }

    #[gpui::test]
    fn test_delete_edited_element_clears_pointer(cx: &mut TestAppContext) {
        let canvas = canvas(cx);
        canvas.update(cx, |canvas, cx| {
            let id = canvas.elements()[0].id;
            canvas.begin_edit(id, cx);

            canvas.delete_element(id, cx);
            assert_eq!(canvas.editing(), None);
            assert!(!canvas.page().contains(id));
        });
    }

    #[gpui::test]
    fn test_click_without_movement_begins_edit(cx: &mut TestAppContext) {
        let canvas = canvas(cx);
        canvas.update(cx, |canvas, cx| {
            let id = canvas.elements()[0].id;
            let start = canvas.page().get(id).unwrap().position();

            canvas.start_move(id, Vec2::new(12.0, 12.0), cx);
            canvas.update_move(Vec2::new(13.0, 12.0), cx);
            canvas.finish_move(cx);

            assert_eq!(canvas.editing(), Some(id));
            assert_eq!(canvas.page().get(id).unwrap().position(), start);
        });
    }

    #[gpui::test]
    fn test_drag_applies_mouse_delta(cx: &mut TestAppContext) {
        let canvas = canvas(cx);
        canvas.update(cx, |canvas, cx| {
            let id = canvas.elements()[0].id;
            let start = canvas.page().get(id).unwrap().position();

            canvas.start_move(id, Vec2::new(12.0, 12.0), cx);
            canvas.update_move(Vec2::new(62.0, 42.0), cx);
            canvas.finish_move(cx);

            assert_eq!(canvas.editing(), None);
            assert_eq!(
                canvas.page().get(id).unwrap().position(),
                start + Vec2::new(50.0, 30.0)
            );
        });
    }
}
