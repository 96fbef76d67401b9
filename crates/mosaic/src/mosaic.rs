//! Mosaic: a drag-and-drop website editor.
//!
//! Elements are placed on a canvas, dragged into position, edited through
//! inline overlays, saved to local storage, and exported as `website.json`.

use canvas::{CanvasEvent, CanvasView, EditorCanvas};
use element::ElementKind;
use gpui::{
    actions, div, point, prelude::*, px, App, Application, Context, Entity, FocusHandle,
    Focusable, IntoElement, KeyBinding, Menu, MenuItem, ParentElement, Render, SharedString,
    Styled, Subscription, TitlebarOptions, Window, WindowBackgroundAppearance, WindowOptions,
};
use std::time::Duration;
use store::LocalStore;
use theme::Theme;
use ui::{bind_input_keys, panel, ImageOverlay, TextOverlay, Toolbar, ToolbarEvent};

mod logger;

actions!(
    mosaic,
    [
        AddText,
        AddImage,
        SaveWebsite,
        DownloadWebsite,
        DeleteElement,
        Cancel,
        Quit
    ]
);

/// How long save/export confirmations stay on screen.
const STATUS_DURATION: Duration = Duration::from_millis(2500);

/// Vertical offset of an edit overlay below its element.
const OVERLAY_OFFSET: f32 = 36.0;

/// Main application component.
struct Workspace {
    canvas: Entity<EditorCanvas>,
    canvas_view: Entity<CanvasView>,
    toolbar: Entity<Toolbar>,
    text_overlay: Option<Entity<TextOverlay>>,
    image_overlay: Option<Entity<ImageOverlay>>,
    store: LocalStore,
    status: Option<SharedString>,
    /// Bumped per toast so a stale clear task can't erase a newer message.
    status_epoch: usize,
    theme: Theme,
    focus_handle: FocusHandle,
    _subscriptions: Vec<Subscription>,
}

impl Workspace {
    fn new(window: &mut Window, store: LocalStore, cx: &mut Context<Self>) -> Self {
        let theme = Theme::light();
        let canvas = cx.new(|cx| EditorCanvas::new(cx));
        canvas.update(cx, |canvas, cx| canvas.restore(&store, cx));

        let canvas_view = cx.new(|_| CanvasView::new(canvas.clone(), theme.clone()));
        let toolbar = cx.new(|_| Toolbar::new(canvas.clone(), theme.clone()));

        let subscriptions = vec![
            cx.subscribe_in(&canvas, window, Self::handle_canvas_event),
            cx.subscribe(&toolbar, Self::handle_toolbar_event),
        ];

        Workspace {
            canvas,
            canvas_view,
            toolbar,
            text_overlay: None,
            image_overlay: None,
            store,
            status: None,
            status_epoch: 0,
            theme,
            focus_handle: cx.focus_handle(),
            _subscriptions: subscriptions,
        }
    }

    fn handle_canvas_event(
        &mut self,
        canvas: &Entity<EditorCanvas>,
        event: &CanvasEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        match event {
            CanvasEvent::EditingChanged => {
                self.text_overlay = None;
                self.image_overlay = None;

                let editing = canvas
                    .read(cx)
                    .editing_element()
                    .map(|element| (element.id, element.kind));
                if let Some((id, kind)) = editing {
                    match kind {
                        ElementKind::Text => {
                            let theme = self.theme.clone();
                            self.text_overlay = Some(cx.new(|cx| {
                                TextOverlay::new(canvas.clone(), id, theme, window, cx)
                            }));
                        }
                        ElementKind::Image => {
                            let theme = self.theme.clone();
                            self.image_overlay =
                                Some(cx.new(|_| ImageOverlay::new(canvas.clone(), id, theme)));
                        }
                    }
                }
                cx.notify();
            }
            CanvasEvent::ElementAdded(id) => log::info!("element added: {id:?}"),
            CanvasEvent::ElementRemoved(id) => log::info!("element removed: {id:?}"),
            CanvasEvent::ContentChanged => {}
        }
    }

    fn handle_toolbar_event(
        &mut self,
        _toolbar: Entity<Toolbar>,
        event: &ToolbarEvent,
        cx: &mut Context<Self>,
    ) {
        match event {
            ToolbarEvent::SaveRequested => self.save(cx),
            ToolbarEvent::ExportRequested => self.export(cx),
        }
    }

    fn save(&mut self, cx: &mut Context<Self>) {
        match self.canvas.read(cx).save(&self.store) {
            Ok(()) => self.show_status("Website saved!", cx),
            Err(error) => {
                log::error!("save failed: {error:#}");
                self.show_status(format!("Save failed: {error}"), cx);
            }
        }
    }

    fn export(&mut self, cx: &mut Context<Self>) {
        match self.canvas.read(cx).export(None) {
            Ok(path) => self.show_status(format!("Exported to {}", path.display()), cx),
            Err(error) => {
                log::error!("export failed: {error:#}");
                self.show_status(format!("Export failed: {error}"), cx);
            }
        }
    }

    fn show_status(&mut self, message: impl Into<SharedString>, cx: &mut Context<Self>) {
        self.status = Some(message.into());
        self.status_epoch += 1;
        let epoch = self.status_epoch;
        cx.notify();

        cx.spawn(async move |this, cx| {
            cx.background_executor().timer(STATUS_DURATION).await;
            this.update(cx, |this, cx| {
                if this.status_epoch == epoch {
                    this.status = None;
                    cx.notify();
                }
            })
            .ok();
        })
        .detach();
    }

    fn add_text(&mut self, _: &AddText, _window: &mut Window, cx: &mut Context<Self>) {
        self.canvas.update(cx, |canvas, cx| {
            canvas.add_element(ElementKind::Text, cx);
        });
    }

    fn add_image(&mut self, _: &AddImage, _window: &mut Window, cx: &mut Context<Self>) {
        self.canvas.update(cx, |canvas, cx| {
            canvas.add_element(ElementKind::Image, cx);
        });
    }

    fn save_website(&mut self, _: &SaveWebsite, _window: &mut Window, cx: &mut Context<Self>) {
        self.save(cx);
    }

    fn download_website(
        &mut self,
        _: &DownloadWebsite,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.export(cx);
    }

    /// Deletes the element currently being edited, if any.
    fn delete_element(&mut self, _: &DeleteElement, _window: &mut Window, cx: &mut Context<Self>) {
        self.canvas.update(cx, |canvas, cx| {
            if let Some(id) = canvas.editing() {
                canvas.delete_element(id, cx);
            }
        });
    }

    fn handle_cancel(&mut self, _: &Cancel, _window: &mut Window, cx: &mut Context<Self>) {
        self.canvas.update(cx, |canvas, cx| canvas.cancel_edit(cx));
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = self.theme.clone();
        let editing_position = self
            .canvas
            .read(cx)
            .editing_element()
            .map(|element| (element.left, element.top));

        let overlay = match (&self.text_overlay, &self.image_overlay) {
            (Some(overlay), _) => Some(overlay.clone().into_any_element()),
            (_, Some(overlay)) => Some(overlay.clone().into_any_element()),
            _ => None,
        };

        div()
            .id("Mosaic")
            .key_context("mosaic")
            .track_focus(&self.focus_handle)
            .absolute()
            .top_0()
            .left_0()
            .size_full()
            .flex()
            .flex_col()
            .font_family("Berkeley Mono")
            .text_sm()
            .bg(theme.ui_background)
            .text_color(theme.ui_text)
            .overflow_hidden()
            .on_action(cx.listener(Self::add_text))
            .on_action(cx.listener(Self::add_image))
            .on_action(cx.listener(Self::save_website))
            .on_action(cx.listener(Self::download_website))
            .on_action(cx.listener(Self::delete_element))
            .on_action(cx.listener(Self::handle_cancel))
            .child(self.toolbar.clone())
            .child(
                div()
                    .relative()
                    .flex_1()
                    .w_full()
                    .overflow_hidden()
                    .child(self.canvas_view.clone())
                    .children(overlay.zip(editing_position).map(|(overlay, (left, top))| {
                        div()
                            .absolute()
                            .left(px(left))
                            .top(px(top + OVERLAY_OFFSET))
                            .child(overlay)
                    }))
                    .children(self.status.clone().map(|status| {
                        div().absolute().bottom(px(16.0)).left(px(16.0)).child(
                            panel(&theme)
                                .px(px(12.0))
                                .py(px(8.0))
                                .text_color(theme.ui_text)
                                .child(status),
                        )
                    })),
            )
    }
}

impl Focusable for Workspace {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

fn init_keymap(cx: &mut App) {
    cx.bind_keys([
        KeyBinding::new("cmd-s", SaveWebsite, None),
        KeyBinding::new("cmd-e", DownloadWebsite, None),
        KeyBinding::new("cmd-t", AddText, None),
        KeyBinding::new("cmd-i", AddImage, None),
        KeyBinding::new("escape", Cancel, None),
        KeyBinding::new("delete", DeleteElement, None),
        KeyBinding::new("backspace", DeleteElement, None),
        KeyBinding::new("cmd-q", Quit, None),
    ]);
}

fn main() {
    if let Err(error) = logger::MosaicLogger::init() {
        eprintln!("failed to initialize logger: {error:#}");
    }

    let store = match LocalStore::open_default() {
        Ok(store) => store,
        Err(error) => {
            log::error!("storage unavailable, using a temporary directory: {error:#}");
            LocalStore::new(std::env::temp_dir().join("mosaic-storage"))
                .expect("failed to create storage directory")
        }
    };

    Application::new().run(|cx: &mut App| {
        cx.on_action(quit);

        cx.set_menus(vec![
            Menu {
                name: "Mosaic".into(),
                items: vec![
                    MenuItem::action("About Mosaic", Quit),
                    MenuItem::separator(),
                    MenuItem::action("Quit", Quit),
                ],
            },
            Menu {
                name: "File".into(),
                items: vec![
                    MenuItem::action("Save Website", SaveWebsite),
                    MenuItem::action("Download Website", DownloadWebsite),
                ],
            },
            Menu {
                name: "Insert".into(),
                items: vec![
                    MenuItem::action("Text Element", AddText),
                    MenuItem::action("Image Element", AddImage),
                ],
            },
            Menu {
                name: "Edit".into(),
                items: vec![MenuItem::action("Delete Element", DeleteElement)],
            },
        ]);

        init_keymap(cx);
        bind_input_keys(cx);

        let window = cx
            .open_window(
                WindowOptions {
                    titlebar: Some(TitlebarOptions {
                        title: Some("Mosaic".into()),
                        appears_transparent: true,
                        traffic_light_position: Some(point(px(8.0), px(8.0))),
                    }),
                    window_background: WindowBackgroundAppearance::Opaque,
                    ..Default::default()
                },
                |window, cx| cx.new(|cx| Workspace::new(window, store, cx)),
            )
            .unwrap();

        window
            .update(cx, |view, window, cx| {
                window.focus(&view.focus_handle(cx));
                cx.activate(true);
            })
            .unwrap();
    });
}

fn quit(_: &Quit, cx: &mut App) {
    cx.quit();
}
