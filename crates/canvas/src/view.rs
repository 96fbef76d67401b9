use crate::EditorCanvas;
use element::{Element, ElementId, ElementKind};
use glam::Vec2;
use gpui::{
    div, img, prelude::*, px, AnyElement, Context, Entity, IntoElement, MouseButton,
    MouseDownEvent, MouseMoveEvent, MouseUpEvent, ParentElement, Pixels, Point, Render,
    SharedString, Styled, Window,
};
use std::path::PathBuf;
use theme::Theme;

/// Renders the canvas as a stack of absolutely positioned element views.
///
/// Mouse-down on an element starts a drag through the canvas drag protocol;
/// the container tracks movement and release. A press-and-release without
/// movement begins editing the pressed element.
pub struct CanvasView {
    canvas: Entity<EditorCanvas>,
    theme: Theme,
}

impl CanvasView {
    pub fn new(canvas: Entity<EditorCanvas>, theme: Theme) -> Self {
        Self { canvas, theme }
    }
}

fn to_vec2(point: Point<Pixels>) -> Vec2 {
    Vec2::new(point.x.into(), point.y.into())
}

impl Render for CanvasView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        // Copy render state out before wiring listeners.
        let (rows, editing) = {
            let canvas = self.canvas.read(cx);
            let rows: Vec<(Element, Option<PathBuf>)> = canvas
                .elements()
                .iter()
                .map(|element| (element.clone(), canvas.image_path(element)))
                .collect();
            (rows, canvas.editing())
        };
        let theme = self.theme.clone();

        div()
            .id("canvas")
            .relative()
            .size_full()
            .overflow_hidden()
            .bg(theme.canvas_background)
            .on_mouse_move(cx.listener(|this, event: &MouseMoveEvent, _window, cx| {
                let mouse = to_vec2(event.position);
                this.canvas.update(cx, |canvas, cx| canvas.update_move(mouse, cx));
            }))
            .on_mouse_up(
                MouseButton::Left,
                cx.listener(|this, _event: &MouseUpEvent, _window, cx| {
                    this.canvas.update(cx, |canvas, cx| canvas.finish_move(cx));
                }),
            )
            .children(
                rows.into_iter()
                    .map(|(element, image)| {
                        element_view(element, image, editing, &self.canvas, &theme)
                    }),
            )
    }
}

/// A single placed element with its delete glyph.
fn element_view(
    element: Element,
    image_path: Option<PathBuf>,
    editing: Option<ElementId>,
    canvas: &Entity<EditorCanvas>,
    theme: &Theme,
) -> impl IntoElement {
    let id = element.id;
    let is_editing = editing == Some(id);
    let drag_canvas = canvas.clone();
    let delete_canvas = canvas.clone();
    let hover = theme.hover;
    let delete = theme.delete;

    let body: AnyElement = match element.kind {
        ElementKind::Text => div()
            .child(element.content.clone().unwrap_or_default())
            .into_any_element(),
        ElementKind::Image => match image_path {
            Some(path) => img(path)
                .max_w(px(200.0))
                .max_h(px(200.0))
                .into_any_element(),
            None => div()
                .w(px(50.0))
                .h(px(50.0))
                .flex()
                .items_center()
                .justify_center()
                .border_1()
                .border_color(theme.element_border)
                .rounded(px(2.0))
                .text_color(theme.ui_text_muted)
                .child("Image")
                .into_any_element(),
        },
    };

    div()
        .id(SharedString::from(format!("element-{id}")))
        .absolute()
        .left(px(element.left))
        .top(px(element.top))
        .flex()
        .flex_row()
        .items_start()
        .gap(px(4.0))
        .p(px(4.0))
        .bg(theme.element_background)
        .border_1()
        .border_color(if is_editing {
            theme.accent
        } else {
            theme.element_border
        })
        .rounded(px(2.0))
        .cursor_grab()
        .hover(move |d| d.border_color(hover))
        .on_mouse_down(MouseButton::Left, move |event: &MouseDownEvent, _window, cx| {
            let mouse = to_vec2(event.position);
            drag_canvas.update(cx, |canvas, cx| canvas.start_move(id, mouse, cx));
        })
        .child(body)
        .child(
            div()
                .id(SharedString::from(format!("delete-{id}")))
                .cursor_pointer()
                .text_color(theme.ui_text_muted)
                .hover(move |d| d.text_color(delete))
                .on_mouse_down(MouseButton::Left, move |_event, _window, cx| {
                    cx.stop_propagation();
                    delete_canvas.update(cx, |canvas, cx| canvas.delete_element(id, cx));
                })
                .child("✕"),
        )
}
