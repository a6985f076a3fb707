// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Root Model-View-Update kernel for the demo shell: component state, messages, and commands.

use std::path::PathBuf;

use crate::models::resize::ResizeConfig;
use crate::models::visible_area::VisibleArea;
use crate::ui::components::resizable::{self, ResizableModel, ResizableMsg, ResizeEvent};
use crate::ui::document_style::SharedDocumentStyle;
use crate::utils::{self, HashAlgorithm, QueryParams};

/// Top-level application state.
pub struct AppModel {
    /// Resizable sidebar hosting the query-string and hash tools.
    pub sidebar: ResizableModel,
    /// Latest area reported for the observed panel.
    pub observed_area: Option<VisibleArea>,
    /// Raw query string typed by the user.
    pub query_input: String,
    /// Parsed form of `query_input`.
    pub query_params: QueryParams,
    /// Data URL of the last encoded file.
    pub data_url: Option<String>,
    /// Source of `data_url`.
    pub data_url_source: Option<PathBuf>,
    /// Text to hash.
    pub hash_input: String,
    /// Selected digest algorithm.
    pub hash_algorithm: HashAlgorithm,
    /// Latest status message to display.
    pub status: Option<String>,
    /// Latest error message to display in modal.
    pub error: Option<String>,
    /// Count of queued background commands.
    pub pending_commands: usize,
}

impl AppModel {
    pub fn new(sidebar_config: ResizeConfig, document: SharedDocumentStyle) -> Self {
        Self {
            sidebar: ResizableModel::with_document(sidebar_config, document),
            observed_area: None,
            query_input: String::new(),
            query_params: QueryParams::new(),
            data_url: None,
            data_url_source: None,
            hash_input: String::new(),
            hash_algorithm: HashAlgorithm::Sha256,
            status: None,
            error: None,
            pending_commands: 0,
        }
    }
}

/// Application messages routed through the update function.
pub enum Msg {
    Sidebar(ResizableMsg),
    VisibleAreaChanged(VisibleArea),
    QueryInputChanged(String),
    NormalizeQuery,
    Copied { what: &'static str, chars: usize },
    RequestPickFile,
    FilePicked(Option<PathBuf>),
    FileEncoded {
        path: PathBuf,
        result: Result<String, String>,
    },
    HashInputChanged(String),
    SetHashAlgorithm(HashAlgorithm),
    HashRequested,
    DismissError,
}

/// Commands represent side-effects executed between frames.
pub enum Command {
    PickFile,
    EncodeFile(PathBuf),
}

/// Update the application model and enqueue commands.
pub fn update(model: &mut AppModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::Sidebar(m) => {
            if let Some(event) = resizable::update(&mut model.sidebar, m) {
                surface_resize_event(model, event);
            }
        }
        Msg::VisibleAreaChanged(area) => model.observed_area = Some(area),
        Msg::QueryInputChanged(text) => {
            model.query_params = utils::query_string_to_object(&text);
            model.query_input = text;
        }
        Msg::NormalizeQuery => {
            model.query_input = utils::object_to_query_string(model.query_params.iter());
        }
        Msg::Copied { what, chars } => {
            surface_event(model, format!("Copied {what} ({chars} characters)."), false);
        }
        Msg::RequestPickFile => cmds.push(Command::PickFile),
        Msg::FilePicked(Some(path)) => {
            surface_event(model, format!("Encoding {}…", path.display()), false);
            cmds.push(Command::EncodeFile(path));
        }
        Msg::FilePicked(None) => surface_event(model, "File selection cancelled.".into(), false),
        Msg::FileEncoded { path, result } => match result {
            Ok(url) => {
                surface_event(
                    model,
                    format!("Encoded {} ({} characters)", path.display(), url.len()),
                    false,
                );
                model.data_url = Some(url);
                model.data_url_source = Some(path);
            }
            Err(err) => surface_event(model, format!("Failed to encode file:\n\n{err}"), true),
        },
        Msg::HashInputChanged(text) => model.hash_input = text,
        Msg::SetHashAlgorithm(algorithm) => model.hash_algorithm = algorithm,
        Msg::HashRequested => {
            let algorithm = model.hash_algorithm;
            match utils::get_hash(&model.hash_input, &algorithm.to_string()) {
                Ok(digest) => surface_event(model, format!("{algorithm}: {digest}"), false),
                Err(err) => surface_event(model, format!("Hashing failed: {err}"), true),
            }
        }
        Msg::DismissError => model.error = None,
    }
}

/// Execute a command off the UI thread and return a resulting message.
pub fn run_command(cmd: Command) -> Msg {
    match cmd {
        Command::PickFile => {
            let file = rfd::FileDialog::new()
                .set_title("Select a file to encode")
                .pick_file();
            Msg::FilePicked(file)
        }
        Command::EncodeFile(path) => {
            let result = utils::file_to_base64(&path).map_err(|err| format!("{err:#}"));
            Msg::FileEncoded { path, result }
        }
    }
}

fn surface_resize_event(model: &mut AppModel, event: ResizeEvent) {
    match event {
        ResizeEvent::Started(_) => model.status = Some("Resizing sidebar…".into()),
        ResizeEvent::Resized(data) => {
            // Keyboard steps never start a gesture; report them directly.
            if !model.sidebar.is_resizing() {
                model.status = Some(format!("Sidebar width: {:.0} px", data.width));
            }
        }
        ResizeEvent::Ended(data) => {
            model.status = Some(format!(
                "Sidebar width: {:.0} px ({:+.0})",
                data.width, data.delta_x
            ));
        }
    }
}

/// Update status/error fields consistently for user feedback.
fn surface_event(model: &mut AppModel, message: String, is_error: bool) {
    if is_error {
        model.error = Some(message.clone());
    }
    model.status = Some(message);
}
