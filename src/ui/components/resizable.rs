// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Drag-to-resize container structured for MVU-style updates.
//!
//! ```text
//! Idle --pointer down on handle--> Resizing --pointer up--> Idle
//!                                  Resizing --pointer move--> Resizing
//! Idle --arrow key on focused handle--> Idle (width changed)
//! ```

use eframe::egui;

use crate::models::resize::{ResizeConfig, ResizeEventData, ResizeState};
use crate::ui::document_style::{DocumentStyle, DragStyleGuard, SharedDocumentStyle};

/// Arrow keys understood by the focused handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResizeKey {
    Left,
    Right,
}

/// Messages emitted by the resizable view or sent by the host.
#[derive(Clone, Debug, PartialEq)]
pub enum ResizableMsg {
    PointerDown { x: f32 },
    PointerMove { x: f32 },
    PointerUp,
    Key(ResizeKey),
    SetWidth(f32),
    SetDisabled(bool),
    LaidOut(egui::Rect),
}

/// Lifecycle notifications produced by [`update`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ResizeEvent {
    Started(ResizeEventData),
    Resized(ResizeEventData),
    Ended(ResizeEventData),
}

impl ResizeEvent {
    /// Payload carried by the event regardless of its kind.
    pub fn data(&self) -> ResizeEventData {
        match self {
            Self::Started(data) | Self::Resized(data) | Self::Ended(data) => *data,
        }
    }
}

/// Visual passthrough for the container and its handle.
#[derive(Clone, Debug)]
pub struct ResizableStyle {
    /// Frame drawn around the wrapped content.
    pub frame: egui::Frame,
    /// Width of the drag handle strip.
    pub handle_width: f32,
    /// Fixed handle colour; `None` follows the widget visuals.
    pub handle_color: Option<egui::Color32>,
}

impl Default for ResizableStyle {
    fn default() -> Self {
        Self {
            frame: egui::Frame::default(),
            handle_width: 6.0,
            handle_color: None,
        }
    }
}

/// Active drag gesture. Dropping it releases the document style override.
#[derive(Debug)]
struct DragSession {
    start_x: f32,
    start_width: f32,
    _style: DragStyleGuard,
}

/// MVU state for a single resizable container.
#[derive(Debug)]
pub struct ResizableModel {
    config: ResizeConfig,
    style: ResizableStyle,
    width: f32,
    session: Option<DragSession>,
    document: SharedDocumentStyle,
    element: Option<egui::Rect>,
}

impl Default for ResizableModel {
    fn default() -> Self {
        Self::new(ResizeConfig::default())
    }
}

impl ResizableModel {
    /// Create a container with its own private document style.
    pub fn new(config: ResizeConfig) -> Self {
        Self::with_document(config, DocumentStyle::shared())
    }

    /// Create a container that overrides the host's document style while resizing.
    ///
    /// `initial_width` is taken as given; the first drag, key press or
    /// `set_width` brings it back inside the bounds.
    pub fn with_document(config: ResizeConfig, document: SharedDocumentStyle) -> Self {
        Self {
            width: config.initial_width,
            config,
            style: ResizableStyle::default(),
            session: None,
            document,
            element: None,
        }
    }

    pub fn with_style(mut self, style: ResizableStyle) -> Self {
        self.style = style;
        self
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn config(&self) -> &ResizeConfig {
        &self.config
    }

    pub fn style(&self) -> &ResizableStyle {
        &self.style
    }

    pub fn is_resizing(&self) -> bool {
        self.session.is_some()
    }

    /// Last laid-out rectangle of the content area, if the view ran at least once.
    pub fn element(&self) -> Option<egui::Rect> {
        self.element
    }

    /// Current width state as a plain snapshot.
    pub fn state(&self) -> ResizeState {
        match &self.session {
            Some(session) => ResizeState {
                width: self.width,
                is_resizing: true,
                start_x: session.start_x,
                start_width: session.start_width,
            },
            None => ResizeState {
                width: self.width,
                is_resizing: false,
                start_x: 0.0,
                start_width: self.width,
            },
        }
    }

    /// Imperative access for hosts that need to read or force the width.
    pub fn handle(&mut self) -> ResizableHandle<'_> {
        ResizableHandle { model: self }
    }

    fn set_width(&mut self, width: f32) {
        self.width = self.config.clamp(width);
    }

    /// Width the active drag would produce with the pointer at `x`.
    fn drag_width_at(&self, x: f32) -> Option<f32> {
        let session = self.session.as_ref()?;
        Some(self.config.clamp(session.start_width + x - session.start_x))
    }
}

/// Imperative handle onto a resizable container.
pub struct ResizableHandle<'a> {
    model: &'a mut ResizableModel,
}

impl ResizableHandle<'_> {
    pub fn width(&self) -> f32 {
        self.model.width
    }

    /// Force a width; out-of-range values are clamped. Works while disabled.
    pub fn set_width(&mut self, width: f32) {
        self.model.set_width(width);
    }

    pub fn element(&self) -> Option<egui::Rect> {
        self.model.element
    }
}

/// Apply a message to the model. Returns a lifecycle event when one fired.
pub fn update(model: &mut ResizableModel, msg: ResizableMsg) -> Option<ResizeEvent> {
    match msg {
        ResizableMsg::PointerDown { x } => {
            if model.config.disabled || model.session.is_some() {
                return None;
            }
            let width = model.width;
            model.session = Some(DragSession {
                start_x: x,
                start_width: width,
                _style: DragStyleGuard::acquire(&model.document),
            });
            tracing::debug!(width, start_x = x, "resize started");
            Some(ResizeEvent::Started(ResizeEventData {
                width,
                delta_x: 0.0,
                start_width: width,
            }))
        }
        ResizableMsg::PointerMove { x } => {
            let session = model.session.as_ref()?;
            let start_width = session.start_width;
            let delta_x = x - session.start_x;
            model.set_width(start_width + delta_x);
            Some(ResizeEvent::Resized(ResizeEventData {
                width: model.width,
                delta_x,
                start_width,
            }))
        }
        ResizableMsg::PointerUp => {
            let session = model.session.take()?;
            let width = model.width;
            tracing::debug!(width, start_width = session.start_width, "resize ended");
            Some(ResizeEvent::Ended(ResizeEventData {
                width,
                delta_x: width - session.start_width,
                start_width: session.start_width,
            }))
        }
        ResizableMsg::Key(key) => {
            // Keys are ignored mid-drag; the pointer owns the width until release.
            if model.config.disabled || model.session.is_some() {
                return None;
            }
            let start_width = model.width;
            let delta_x = match key {
                ResizeKey::Left => -model.config.keyboard_step,
                ResizeKey::Right => model.config.keyboard_step,
            };
            model.set_width(start_width + delta_x);
            Some(ResizeEvent::Resized(ResizeEventData {
                width: model.width,
                delta_x,
                start_width,
            }))
        }
        ResizableMsg::SetWidth(width) => {
            model.set_width(width);
            None
        }
        ResizableMsg::SetDisabled(disabled) => {
            model.config.disabled = disabled;
            if disabled && model.session.take().is_some() {
                tracing::debug!("resize abandoned: container disabled");
            }
            None
        }
        ResizableMsg::LaidOut(rect) => {
            model.element = Some(rect);
            None
        }
    }
}

/// Render the wrapped content followed by the drag handle on its right edge.
///
/// Returns the content closure's value and the messages produced this frame.
pub fn view<R>(
    ui: &mut egui::Ui,
    model: &ResizableModel,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> (R, Vec<ResizableMsg>) {
    let mut msgs = Vec::new();
    let width = model.width;
    let height = ui.available_height();

    let inner = ui.horizontal_top(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;

        let content = ui.allocate_ui_with_layout(
            egui::vec2(width, height),
            egui::Layout::top_down(egui::Align::Min),
            |ui| {
                ui.set_width(width);
                ui.set_min_height(height);
                model.style.frame.show(ui, add_contents).inner
            },
        );
        if model.element != Some(content.response.rect) {
            msgs.push(ResizableMsg::LaidOut(content.response.rect));
        }

        if !model.config.disabled {
            render_handle(ui, model, height, &mut msgs);
        }
        content.inner
    });

    (inner.inner, msgs)
}

fn render_handle(
    ui: &mut egui::Ui,
    model: &ResizableModel,
    height: f32,
    msgs: &mut Vec<ResizableMsg>,
) {
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(model.style.handle_width, height),
        egui::Sense::click_and_drag(),
    );
    let response = response.on_hover_cursor(egui::CursorIcon::ResizeHorizontal);

    if response.clicked() || response.drag_started() {
        response.request_focus();
    }

    if response.has_focus() {
        // Keep arrow keys on the handle instead of moving focus.
        ui.memory_mut(|mem| {
            mem.set_focus_lock_filter(
                response.id,
                egui::EventFilter {
                    horizontal_arrows: true,
                    ..Default::default()
                },
            )
        });
        let (left, right) = ui.input(|i| {
            (
                i.key_pressed(egui::Key::ArrowLeft),
                i.key_pressed(egui::Key::ArrowRight),
            )
        });
        if left {
            msgs.push(ResizableMsg::Key(ResizeKey::Left));
        }
        if right {
            msgs.push(ResizableMsg::Key(ResizeKey::Right));
        }
    }

    if model.is_resizing() {
        // Track the pointer globally so the drag survives leaving the handle.
        let (pos, moving, down) = ui.input(|i| {
            (
                i.pointer.latest_pos(),
                i.pointer.is_moving(),
                i.pointer.primary_down(),
            )
        });
        // The release frame still reads as moving; drop moves that leave the width as is.
        if moving
            && let Some(pos) = pos
            && (down || model.drag_width_at(pos.x) != Some(model.width))
        {
            msgs.push(ResizableMsg::PointerMove { x: pos.x });
        }
        if !down {
            msgs.push(ResizableMsg::PointerUp);
        }
    } else if response.drag_started_by(egui::PointerButton::Primary) {
        let (origin, latest) = ui.input(|i| (i.pointer.press_origin(), i.pointer.latest_pos()));
        if let Some(origin) = origin {
            msgs.push(ResizableMsg::PointerDown { x: origin.x });
            // egui reports the drag after a movement threshold; catch up to it.
            if let Some(latest) = latest {
                msgs.push(ResizableMsg::PointerMove { x: latest.x });
            }
        }
    }

    if ui.is_rect_visible(rect) {
        let visuals = ui.style().interact(&response);
        let fill = model.style.handle_color.unwrap_or(if model.is_resizing() {
            ui.visuals().widgets.active.bg_fill
        } else {
            visuals.bg_fill
        });
        ui.painter().rect_filled(rect, 0.0, fill);

        let stroke = if response.has_focus() {
            ui.visuals().selection.stroke
        } else {
            visuals.fg_stroke
        };
        ui.painter()
            .vline(rect.center().x, rect.shrink(4.0).y_range(), stroke);
    }
}

type ResizeCallback = Box<dyn FnMut(ResizeEventData)>;

/// Resizable model bundled with lifecycle callbacks.
///
/// Dropping the container counts as unmounting: an in-flight drag releases its
/// document style override and no further callbacks run.
#[derive(Default)]
pub struct ResizableContainer {
    model: ResizableModel,
    on_resize_start: Option<ResizeCallback>,
    on_resize: Option<ResizeCallback>,
    on_resize_end: Option<ResizeCallback>,
}

impl ResizableContainer {
    pub fn new(config: ResizeConfig) -> Self {
        Self::from_model(ResizableModel::new(config))
    }

    pub fn from_model(model: ResizableModel) -> Self {
        Self {
            model,
            on_resize_start: None,
            on_resize: None,
            on_resize_end: None,
        }
    }

    pub fn on_resize_start(mut self, callback: impl FnMut(ResizeEventData) + 'static) -> Self {
        self.on_resize_start = Some(Box::new(callback));
        self
    }

    pub fn on_resize(mut self, callback: impl FnMut(ResizeEventData) + 'static) -> Self {
        self.on_resize = Some(Box::new(callback));
        self
    }

    pub fn on_resize_end(mut self, callback: impl FnMut(ResizeEventData) + 'static) -> Self {
        self.on_resize_end = Some(Box::new(callback));
        self
    }

    pub fn model(&self) -> &ResizableModel {
        &self.model
    }

    pub fn handle(&mut self) -> ResizableHandle<'_> {
        self.model.handle()
    }

    /// Apply a message and invoke the matching callback.
    pub fn dispatch(&mut self, msg: ResizableMsg) -> Option<ResizeEvent> {
        let event = update(&mut self.model, msg)?;
        let callback = match event {
            ResizeEvent::Started(_) => self.on_resize_start.as_mut(),
            ResizeEvent::Resized(_) => self.on_resize.as_mut(),
            ResizeEvent::Ended(_) => self.on_resize_end.as_mut(),
        };
        if let Some(callback) = callback {
            callback(event.data());
        }
        Some(event)
    }

    /// Render the container and process its messages in one step.
    pub fn show<R>(
        &mut self,
        ui: &mut egui::Ui,
        add_contents: impl FnOnce(&mut egui::Ui) -> R,
    ) -> R {
        let (inner, msgs) = view(ui, &self.model, add_contents);
        for msg in msgs {
            self.dispatch(msg);
        }
        inner
    }
}
