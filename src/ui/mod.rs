// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Top-level egui demo shell.
//! Mounts a resizable tools sidebar and an observed panel, and wires the utilities to buttons.

pub mod components;
pub mod document_style;

use eframe::egui;

use crate::models::resize::ResizeConfig;
use crate::models::visible_area::VisibleArea;
use crate::mvu::{self, AppModel, Command, Msg};
use crate::ui::components::resizable::{self, ResizableMsg};
use crate::ui::components::visible_area::{self, VisibleAreaObserver};
use crate::ui::document_style::{DocumentStyle, SharedDocumentStyle};
use crate::utils::{self, HashAlgorithm};

/// Characters of an encoded data URL shown before truncation.
const DATA_URL_PREVIEW_CHARS: usize = 96;

/// Stateful egui application showcasing the components and helpers.
pub struct FrontkitApp {
    model: AppModel,
    inbox: Vec<Msg>,
    document: SharedDocumentStyle,
    observer: VisibleAreaObserver,
    area_rx: crossbeam_channel::Receiver<VisibleArea>,
    cmd_tx: crossbeam_channel::Sender<Command>,
    msg_rx: crossbeam_channel::Receiver<Msg>,
}

impl Default for FrontkitApp {
    fn default() -> Self {
        Self::new(ResizeConfig::default())
    }
}

impl FrontkitApp {
    /// Build the app and spawn the background command workers.
    pub fn new(sidebar_config: ResizeConfig) -> Self {
        let (cmd_tx, cmd_rx) = crossbeam_channel::unbounded::<Command>();
        let (msg_tx, msg_rx) = crossbeam_channel::unbounded::<Msg>();

        let threads = std::thread::available_parallelism()
            .map(|n| n.get().clamp(2, 4))
            .unwrap_or(2);
        for _ in 0..threads {
            let cmd_rx = cmd_rx.clone();
            let msg_tx = msg_tx.clone();
            std::thread::spawn(move || {
                for cmd in cmd_rx.iter() {
                    let msg = mvu::run_command(cmd);
                    let _ = msg_tx.send(msg);
                }
            });
        }
        tracing::debug!(threads, "command workers started");

        let (area_tx, area_rx) = crossbeam_channel::unbounded::<VisibleArea>();
        let observer = VisibleAreaObserver::new(move |area| {
            let _ = area_tx.send(area);
        });

        let document = DocumentStyle::shared();
        Self {
            model: AppModel::new(sidebar_config, document.clone()),
            inbox: Vec::new(),
            document,
            observer,
            area_rx,
            cmd_tx,
            msg_rx,
        }
    }
}

impl eframe::App for FrontkitApp {
    /// Drives a single UI frame.
    ///
    /// Applies the shared document style, drains worker and observer messages into the
    /// inbox, runs them through the MVU update in arrival order, dispatches resulting
    /// commands to the workers, and renders the top bar, status bar, error modal, and
    /// the sidebar/main split. Messages produced while rendering are handled next frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.document.get().apply(ctx);

        // Pull messages produced by the command workers.
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.model.pending_commands = self.model.pending_commands.saturating_sub(1);
            self.inbox.push(msg);
        }
        while let Ok(area) = self.area_rx.try_recv() {
            self.inbox.push(Msg::VisibleAreaChanged(area));
        }

        // Pointer messages depend on order, so process first-in first-out.
        for msg in std::mem::take(&mut self.inbox) {
            let mut commands = Vec::new();
            mvu::update(&mut self.model, msg, &mut commands);
            for cmd in commands {
                if self.cmd_tx.send(cmd).is_ok() {
                    self.model.pending_commands += 1;
                }
            }
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading("frontkit");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    egui::widgets::global_theme_preference_switch(ui);
                });
            });
            ui.add_space(4.0);
        });

        self.render_error_modal(ctx);

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.render_status(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal_top(|ui| {
                let (sidebar_msgs, resize_msgs) =
                    resizable::view(ui, &self.model.sidebar, |ui| {
                        let mut msgs = Vec::new();
                        egui::ScrollArea::vertical()
                            .id_salt("sidebar_scroll")
                            .show(ui, |ui| render_sidebar(ui, &self.model, &mut msgs));
                        msgs
                    });
                self.inbox
                    .extend(resize_msgs.into_iter().map(Msg::Sidebar));
                self.inbox.extend(sidebar_msgs);

                ui.add_space(12.0);
                ui.vertical(|ui| self.render_main_area(ui));
            });
        });
    }

    /// Required by eframe 0.34; all rendering happens in `update`, which eframe still calls.
    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}
}

impl FrontkitApp {
    /// Observed panel plus the file encoding section.
    fn render_main_area(&mut self, ui: &mut egui::Ui) {
        let mut msgs = Vec::new();

        let observed_area = self.model.observed_area;
        visible_area::view(ui, &mut self.observer, |ui| {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.heading("Observed panel");
                ui.label(match observed_area {
                    Some(area) => format!("Visible area: {area}"),
                    None => "Visible area: not reported yet".to_string(),
                });
                ui.label(
                    egui::RichText::new(
                        "Drag the sidebar handle or resize the window to move this panel.",
                    )
                    .small()
                    .color(egui::Color32::from_gray(110)),
                );
            });
        });

        ui.add_space(12.0);
        render_data_url_section(ui, &self.model, &mut msgs);
        self.inbox.extend(msgs);
    }

    /// Render a simple modal window for error messages.
    fn render_error_modal(&mut self, ctx: &egui::Context) {
        if let Some(message) = self.model.error.clone() {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label(message);
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        self.inbox.push(Msg::DismissError);
                    }
                });
        }
    }

    /// Render latest status message when present.
    fn render_status(&self, ui: &mut egui::Ui) {
        if let Some(text) = &self.model.status {
            let display = if self.model.pending_commands > 0 {
                format!("{}  ({} working…)", text, self.model.pending_commands)
            } else {
                text.to_string()
            };
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(display).color(egui::Color32::from_gray(68)));
                if self.model.pending_commands > 0 {
                    ui.add(egui::Spinner::new().size(14.0));
                }
            });
        }
    }
}

/// Sidebar contents: width controls, query-string playground, and hash tool.
fn render_sidebar(ui: &mut egui::Ui, model: &AppModel, msgs: &mut Vec<Msg>) {
    ui.heading("Tools");
    ui.add_space(6.0);

    ui.horizontal(|ui| {
        let mut locked = model.sidebar.config().disabled;
        if ui.checkbox(&mut locked, "Lock width").changed() {
            msgs.push(Msg::Sidebar(ResizableMsg::SetDisabled(locked)));
        }
        if ui
            .button(egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE)
            .on_hover_text("Reset width")
            .clicked()
        {
            let initial = model.sidebar.config().initial_width;
            msgs.push(Msg::Sidebar(ResizableMsg::SetWidth(initial)));
        }
    });

    ui.separator();
    render_query_tools(ui, model, msgs);
    ui.separator();
    render_hash_tools(ui, model, msgs);
}

fn render_query_tools(ui: &mut egui::Ui, model: &AppModel, msgs: &mut Vec<Msg>) {
    ui.label("Query string");
    let mut input = model.query_input.clone();
    if ui
        .add(egui::TextEdit::singleline(&mut input).hint_text("?page=2&q=egui"))
        .changed()
    {
        msgs.push(Msg::QueryInputChanged(input));
    }

    if model.query_params.is_empty() {
        ui.label(
            egui::RichText::new("No parameters")
                .small()
                .color(egui::Color32::from_gray(150)),
        );
    } else {
        egui::Grid::new("query_params_grid")
            .num_columns(2)
            .striped(true)
            .show(ui, |ui| {
                for (key, value) in model.query_params.iter() {
                    ui.label(key);
                    ui.monospace(value);
                    ui.end_row();
                }
            });
    }

    ui.horizontal(|ui| {
        if ui
            .button("Normalize")
            .on_hover_text("Rebuild the query string from the parsed parameters")
            .clicked()
        {
            msgs.push(Msg::NormalizeQuery);
        }
        let copy = egui::Button::new(format!("{} Copy", egui_phosphor::regular::COPY));
        if ui
            .add_enabled(!model.query_input.is_empty(), copy)
            .clicked()
        {
            copy_with_status(ui, "query string", &model.query_input, msgs);
        }
    });
}

fn render_hash_tools(ui: &mut egui::Ui, model: &AppModel, msgs: &mut Vec<Msg>) {
    ui.label("Hash");
    let mut input = model.hash_input.clone();
    if ui
        .add(egui::TextEdit::singleline(&mut input).hint_text("Text to hash"))
        .changed()
    {
        msgs.push(Msg::HashInputChanged(input));
    }

    let mut choice = model.hash_algorithm;
    ui.horizontal(|ui| {
        ui.selectable_value(&mut choice, HashAlgorithm::Sha256, "SHA-256");
        ui.selectable_value(&mut choice, HashAlgorithm::Md5, "MD5");
    });
    if choice != model.hash_algorithm {
        msgs.push(Msg::SetHashAlgorithm(choice));
    }

    if ui
        .button(format!("{} Compute", egui_phosphor::regular::HASH))
        .clicked()
    {
        msgs.push(Msg::HashRequested);
    }
}

fn render_data_url_section(ui: &mut egui::Ui, model: &AppModel, msgs: &mut Vec<Msg>) {
    egui::CollapsingHeader::new("File to data URL")
        .default_open(true)
        .show(ui, |ui| {
            if ui
                .button(format!(
                    "{} Pick file…",
                    egui_phosphor::regular::FOLDER_OPEN
                ))
                .clicked()
            {
                msgs.push(Msg::RequestPickFile);
            }

            let Some(url) = &model.data_url else {
                return;
            };
            if let Some(path) = &model.data_url_source {
                ui.label(
                    egui::RichText::new(path.to_string_lossy())
                        .small()
                        .color(egui::Color32::from_gray(102)),
                );
            }
            let mut preview: String = url.chars().take(DATA_URL_PREVIEW_CHARS).collect();
            if preview.len() < url.len() {
                preview.push('…');
            }
            ui.monospace(preview);

            if ui
                .button(format!("{} Copy data URL", egui_phosphor::regular::COPY))
                .clicked()
            {
                copy_with_status(ui, "data URL", url, msgs);
            }
        });
}

fn copy_with_status(ui: &egui::Ui, what: &'static str, text: &str, msgs: &mut Vec<Msg>) {
    let mut ctx = ui.ctx().clone();
    utils::copy_to_clipboard(&mut ctx, text);
    msgs.push(Msg::Copied {
        what,
        chars: text.chars().count(),
    });
}
