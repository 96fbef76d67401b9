//! The editor toolbar.

use crate::components::{button, h_stack};
use canvas::EditorCanvas;
use element::ElementKind;
use gpui::{
    div, prelude::*, px, ClickEvent, Context, Entity, EventEmitter, IntoElement, ParentElement,
    Render, Styled, Window,
};
use theme::Theme;

/// Requests the toolbar cannot satisfy on its own; the workspace owns the
/// store and the status toast.
#[derive(Clone, Debug)]
pub enum ToolbarEvent {
    SaveRequested,
    ExportRequested,
}

pub struct Toolbar {
    canvas: Entity<EditorCanvas>,
    theme: Theme,
}

impl Toolbar {
    pub fn new(canvas: Entity<EditorCanvas>, theme: Theme) -> Self {
        Self { canvas, theme }
    }

    fn add_element(&mut self, kind: ElementKind, cx: &mut Context<Self>) {
        self.canvas.update(cx, |canvas, cx| {
            canvas.add_element(kind, cx);
        });
    }
}

impl EventEmitter<ToolbarEvent> for Toolbar {}

impl Render for Toolbar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = self.theme.clone();

        h_stack()
            .gap(px(8.0))
            .p(px(8.0))
            .bg(theme.ui_background)
            .border_b_1()
            .border_color(theme.ui_border)
            .child(button("add-text", "Add Text", &theme).on_click(cx.listener(
                |this, _: &ClickEvent, _window, cx| this.add_element(ElementKind::Text, cx),
            )))
            .child(button("add-image", "Add Image", &theme).on_click(cx.listener(
                |this, _: &ClickEvent, _window, cx| this.add_element(ElementKind::Image, cx),
            )))
            .child(div().flex_1())
            .child(button("save", "Save Website", &theme).on_click(cx.listener(
                |_this, _: &ClickEvent, _window, cx| cx.emit(ToolbarEvent::SaveRequested),
            )))
            .child(button("export", "Download Website", &theme).on_click(cx.listener(
                |_this, _: &ClickEvent, _window, cx| cx.emit(ToolbarEvent::ExportRequested),
            )))
    }
}
