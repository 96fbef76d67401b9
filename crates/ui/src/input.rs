//! A single-line text input.
//!
//! `InputState` holds the content and a byte-offset cursor; the `Input`
//! element renders it and routes keystrokes. Printable characters arrive
//! through `on_key_down`, editing and navigation keys through actions
//! bound in the `Input` key context.

use crate::components::h_stack;
use gpui::{
    actions, div, prelude::*, px, App, Context, Entity, EventEmitter, FocusHandle, Focusable,
    IntoElement, KeyBinding, KeyDownEvent, MouseButton, ParentElement, RenderOnce, SharedString,
    Styled, Window,
};
use theme::Theme;

actions!(
    input,
    [Backspace, Delete, Left, Right, Home, End, Enter, Escape]
);

/// The key context used for input element keybindings.
pub const INPUT_CONTEXT: &str = "Input";

/// Binds input keybindings to the application.
pub fn bind_input_keys(cx: &mut App) {
    let context = Some(INPUT_CONTEXT);
    cx.bind_keys([
        KeyBinding::new("backspace", Backspace, context),
        KeyBinding::new("delete", Delete, context),
        KeyBinding::new("left", Left, context),
        KeyBinding::new("right", Right, context),
        KeyBinding::new("home", Home, context),
        KeyBinding::new("end", End, context),
        KeyBinding::new("enter", Enter, context),
        KeyBinding::new("escape", Escape, context),
    ]);
}

/// Events emitted by `InputState`.
#[derive(Clone, Debug)]
pub enum InputStateEvent {
    TextChanged,
    /// Enter was pressed.
    Committed,
    /// Escape was pressed.
    Cancelled,
}

/// Content and cursor for a single-line input.
pub struct InputState {
    focus_handle: FocusHandle,
    content: String,
    /// Byte offset into `content`, always on a char boundary.
    cursor: usize,
    placeholder: SharedString,
}

impl InputState {
    pub fn new(placeholder: impl Into<SharedString>, cx: &mut Context<Self>) -> Self {
        Self {
            focus_handle: cx.focus_handle(),
            content: String::new(),
            cursor: 0,
            placeholder: placeholder.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn placeholder(&self) -> &SharedString {
        &self.placeholder
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replaces the content and moves the cursor to the end.
    pub fn set_content(&mut self, content: impl Into<String>, cx: &mut Context<Self>) {
        self.content = content.into();
        self.cursor = self.content.len();
        cx.emit(InputStateEvent::TextChanged);
        cx.notify();
    }

    pub fn insert(&mut self, text: &str, cx: &mut Context<Self>) {
        self.content.insert_str(self.cursor, text);
        self.cursor += text.len();
        cx.emit(InputStateEvent::TextChanged);
        cx.notify();
    }

    pub fn backspace(&mut self, cx: &mut Context<Self>) {
        let Some(start) = prev_char_boundary(&self.content, self.cursor) else {
            return;
        };
        self.content.replace_range(start..self.cursor, "");
        self.cursor = start;
        cx.emit(InputStateEvent::TextChanged);
        cx.notify();
    }

    pub fn delete(&mut self, cx: &mut Context<Self>) {
        let Some(end) = next_char_boundary(&self.content, self.cursor) else {
            return;
        };
        self.content.replace_range(self.cursor..end, "");
        cx.emit(InputStateEvent::TextChanged);
        cx.notify();
    }

    pub fn move_left(&mut self, cx: &mut Context<Self>) {
        if let Some(offset) = prev_char_boundary(&self.content, self.cursor) {
            self.cursor = offset;
            cx.notify();
        }
    }

    pub fn move_right(&mut self, cx: &mut Context<Self>) {
        if let Some(offset) = next_char_boundary(&self.content, self.cursor) {
            self.cursor = offset;
            cx.notify();
        }
    }

    pub fn move_home(&mut self, cx: &mut Context<Self>) {
        self.cursor = 0;
        cx.notify();
    }

    pub fn move_end(&mut self, cx: &mut Context<Self>) {
        self.cursor = self.content.len();
        cx.notify();
    }

    pub fn commit(&mut self, cx: &mut Context<Self>) {
        cx.emit(InputStateEvent::Committed);
    }

    pub fn cancel(&mut self, cx: &mut Context<Self>) {
        cx.emit(InputStateEvent::Cancelled);
    }
}

impl EventEmitter<InputStateEvent> for InputState {}

impl Focusable for InputState {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

/// Byte offset of the char before `cursor`, or `None` at the start.
fn prev_char_boundary(content: &str, cursor: usize) -> Option<usize> {
    content[..cursor]
        .chars()
        .next_back()
        .map(|c| cursor - c.len_utf8())
}

/// Byte offset past the char at `cursor`, or `None` at the end.
fn next_char_boundary(content: &str, cursor: usize) -> Option<usize> {
    content[cursor..].chars().next().map(|c| cursor + c.len_utf8())
}

/// Renders an `InputState` as a bordered single-line field.
#[derive(IntoElement)]
pub struct Input {
    state: Entity<InputState>,
    theme: Theme,
}

impl Input {
    pub fn new(state: Entity<InputState>, theme: Theme) -> Self {
        Self { state, theme }
    }
}

impl RenderOnce for Input {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = self.theme;
        let (content, cursor, placeholder, focus_handle) = {
            let state = self.state.read(cx);
            (
                state.content.clone(),
                state.cursor,
                state.placeholder.clone(),
                state.focus_handle.clone(),
            )
        };
        let focused = focus_handle.is_focused(window);
        let cursor_bar = div().w(px(1.5)).h(px(16.0)).bg(theme.accent);

        let text: gpui::AnyElement = if content.is_empty() {
            h_stack()
                .text_color(theme.ui_text_muted)
                .when(focused, |d| d.child(cursor_bar))
                .child(placeholder)
                .into_any_element()
        } else {
            let (before, after) = content.split_at(cursor.min(content.len()));
            h_stack()
                .text_color(theme.ui_text)
                .child(before.to_string())
                .when(focused, |d| d.child(cursor_bar))
                .child(after.to_string())
                .into_any_element()
        };

        div()
            .id("input")
            .key_context(INPUT_CONTEXT)
            .track_focus(&focus_handle)
            .on_action(state_action::<Backspace>(&self.state, InputState::backspace))
            .on_action(state_action::<Delete>(&self.state, InputState::delete))
            .on_action(state_action::<Left>(&self.state, InputState::move_left))
            .on_action(state_action::<Right>(&self.state, InputState::move_right))
            .on_action(state_action::<Home>(&self.state, InputState::move_home))
            .on_action(state_action::<End>(&self.state, InputState::move_end))
            .on_action(state_action::<Enter>(&self.state, InputState::commit))
            .on_action(state_action::<Escape>(&self.state, InputState::cancel))
            .on_key_down({
                let state = self.state.clone();
                move |event: &KeyDownEvent, _window, cx| {
                    let keystroke = &event.keystroke;
                    if keystroke.modifiers.control
                        || keystroke.modifiers.alt
                        || keystroke.modifiers.platform
                        || keystroke.modifiers.function
                    {
                        return;
                    }
                    let Some(key_char) = keystroke.key_char.clone() else {
                        return;
                    };
                    // Named keys (enter, tab) surface control chars here;
                    // those are handled by actions instead.
                    if key_char.chars().any(|c| c.is_control()) {
                        return;
                    }
                    state.update(cx, |state, cx| state.insert(&key_char, cx));
                }
            })
            .on_mouse_down(MouseButton::Left, {
                let focus_handle = focus_handle.clone();
                move |_event, window, _cx| window.focus(&focus_handle)
            })
            .w_full()
            .px(px(8.0))
            .py(px(6.0))
            .bg(theme.ui_background)
            .border_1()
            .border_color(if focused { theme.accent } else { theme.ui_border })
            .rounded(px(4.0))
            .text_sm()
            .cursor_text()
            .child(text)
    }
}

/// Wraps an `InputState` method as an action handler for `on_action`.
fn state_action<A: gpui::Action>(
    state: &Entity<InputState>,
    handler: impl Fn(&mut InputState, &mut Context<InputState>) + Copy + 'static,
) -> impl Fn(&A, &mut Window, &mut App) + 'static {
    let state = state.clone();
    move |_action, _window, cx| state.update(cx, |state, cx| handler(state, cx))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_boundaries() {
        let content = "a€b";
        assert_eq!(prev_char_boundary(content, 0), None);
        assert_eq!(prev_char_boundary(content, 1), Some(0));
        assert_eq!(prev_char_boundary(content, 4), Some(1));
        assert_eq!(next_char_boundary(content, 1), Some(4));
        assert_eq!(next_char_boundary(content, 4), Some(5));
        assert_eq!(next_char_boundary(content, 5), None);
    }
}
