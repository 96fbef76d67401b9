//! Basic UI components.

use gpui::{
    div, prelude::*, px, Div, ElementId, InteractiveElement, IntoElement, ParentElement,
    SharedString, Stateful, StatefulInteractiveElement, Styled,
};
use theme::Theme;

/// Horizontal stack layout.
pub fn h_stack() -> Div {
    div().flex().flex_row().items_center()
}

/// A panel container with background and border.
pub fn panel(theme: &Theme) -> Div {
    div()
        .bg(theme.ui_background)
        .border_1()
        .border_color(theme.ui_border)
        .rounded(px(8.0))
        .p(px(8.0))
}

/// A simple button. Callers chain `.on_click` onto the result.
pub fn button(
    id: impl Into<ElementId>,
    label: impl Into<SharedString>,
    theme: &Theme,
) -> Stateful<Div> {
    let label = label.into();
    let hover_bg = theme::hsla(0.0, 0.0, 0.95, 1.0);

    div()
        .id(id)
        .px(px(12.0))
        .py(px(6.0))
        .bg(theme.ui_background)
        .border_1()
        .border_color(theme.ui_border)
        .rounded(px(4.0))
        .text_color(theme.ui_text)
        .text_sm()
        .cursor_pointer()
        .hover(move |d| d.bg(hover_bg))
        .child(label)
}
