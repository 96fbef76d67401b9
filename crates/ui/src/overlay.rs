//! Edit overlays.
//!
//! One overlay is open at a time, chosen by the kind of the element being
//! edited. The text overlay commits through its input's Enter/Escape
//! events; the image overlay runs the file prompt and stages the choice on
//! the canvas until Save.

use crate::components::{button, h_stack, panel};
use crate::input::{Input, InputState, InputStateEvent};
use canvas::EditorCanvas;
use element::ElementId;
use gpui::{
    div, img, prelude::*, px, ClickEvent, Context, Entity, Focusable as _, IntoElement,
    ParentElement, PathPromptOptions, Render, Styled, Subscription, Window,
};
use theme::Theme;

/// Inline editor for a text element.
pub struct TextOverlay {
    canvas: Entity<EditorCanvas>,
    element_id: ElementId,
    input: Entity<InputState>,
    theme: Theme,
    /// Focus the input on the first frame after the overlay opens.
    needs_focus: bool,
    _subscriptions: Vec<Subscription>,
}

impl TextOverlay {
    pub fn new(
        canvas: Entity<EditorCanvas>,
        element_id: ElementId,
        theme: Theme,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let initial = canvas
            .read(cx)
            .page()
            .get(element_id)
            .and_then(|element| element.content.clone())
            .unwrap_or_default();

        let input = cx.new(|cx| {
            let mut state = InputState::new("Enter text", cx);
            state.set_content(initial, cx);
            state
        });

        let subscriptions = vec![
            cx.subscribe(&input, |this: &mut Self, input, event, cx| match event {
                InputStateEvent::Committed => {
                    let content = input.read(cx).content().to_string();
                    this.commit(content, cx);
                }
                InputStateEvent::Cancelled => {
                    this.canvas.update(cx, |canvas, cx| canvas.cancel_edit(cx));
                }
                InputStateEvent::TextChanged => {}
            }),
            // Clicking away commits, like losing focus on an inline editor.
            // An edit already closed by Enter or Escape is left alone.
            cx.on_blur(&input.focus_handle(cx), window, |this, _window, cx| {
                if this.canvas.read(cx).editing() == Some(this.element_id) {
                    let content = this.input.read(cx).content().to_string();
                    this.commit(content, cx);
                }
            }),
        ];

        Self {
            canvas,
            element_id,
            input,
            theme,
            needs_focus: true,
            _subscriptions: subscriptions,
        }
    }

    fn commit(&mut self, content: String, cx: &mut Context<Self>) {
        let id = self.element_id;
        self.canvas
            .update(cx, |canvas, cx| canvas.commit_text_edit(id, content, cx));
    }
}

impl Render for TextOverlay {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        if self.needs_focus {
            self.needs_focus = false;
            window.focus(&self.input.focus_handle(cx));
        }

        panel(&self.theme)
            .bg(self.theme.overlay_background)
            .w(px(240.0))
            .flex()
            .flex_col()
            .gap(px(6.0))
            .child(Input::new(self.input.clone(), self.theme.clone()))
            .child(
                div()
                    .text_xs()
                    .text_color(self.theme.ui_text_muted)
                    .child("Enter to save · Esc to cancel"),
            )
    }
}

/// Image picker for an image element.
pub struct ImageOverlay {
    canvas: Entity<EditorCanvas>,
    element_id: ElementId,
    theme: Theme,
}

impl ImageOverlay {
    pub fn new(canvas: Entity<EditorCanvas>, element_id: ElementId, theme: Theme) -> Self {
        Self {
            canvas,
            element_id,
            theme,
        }
    }

    fn choose_file(&mut self, _: &ClickEvent, _window: &mut Window, cx: &mut Context<Self>) {
        let canvas = self.canvas.clone();
        let receiver = cx.prompt_for_paths(PathPromptOptions {
            files: true,
            directories: false,
            multiple: false,
            prompt: None,
        });

        cx.spawn(async move |_this, cx| {
            if let Ok(Ok(Some(mut paths))) = receiver.await {
                if let Some(path) = paths.pop() {
                    canvas
                        .update(cx, |canvas, cx| canvas.choose_image_file(path, cx))
                        .ok();
                }
            } else {
                log::debug!("image file prompt dismissed");
            }
        })
        .detach();
    }
}

impl Render for ImageOverlay {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = self.theme.clone();
        let preview = self.canvas.read(cx).selected_image_path();

        panel(&theme)
            .bg(theme.overlay_background)
            .w(px(260.0))
            .flex()
            .flex_col()
            .gap(px(8.0))
            .child(
                div()
                    .text_sm()
                    .text_color(theme.ui_text)
                    .child("Upload Image:"),
            )
            .child(
                button("choose-file", "Choose File…", &theme)
                    .on_click(cx.listener(Self::choose_file)),
            )
            .children(
                preview.map(|path| img(path).max_w(px(200.0)).max_h(px(120.0)).rounded(px(2.0))),
            )
            .child(
                h_stack()
                    .gap(px(8.0))
                    .child(button("save-image", "Save", &theme).on_click(cx.listener(
                        |this, _: &ClickEvent, _window, cx| {
                            let id = this.element_id;
                            this.canvas
                                .update(cx, |canvas, cx| canvas.commit_pending_image(id, cx));
                        },
                    )))
                    .child(button("close-image", "Close", &theme).on_click(cx.listener(
                        |this, _: &ClickEvent, _window, cx| {
                            this.canvas.update(cx, |canvas, cx| canvas.cancel_edit(cx));
                        },
                    ))),
            )
    }
}
