// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! egui components for drag-to-resize containers and visible-area observation,
//! plus small helpers for clipboard copy, data URLs, query strings, and hashing.

pub mod app;
pub mod models;
pub mod mvu;
pub mod ui;
pub mod utils;

pub use models::{ResizeConfig, ResizeEventData, ResizeState, VisibleArea};
pub use ui::components::{
    ResizableContainer, ResizableHandle, ResizableModel, ResizableMsg, ResizableStyle,
    ResizeEvent, ResizeKey, VisibleAreaObserver,
};
pub use ui::document_style::{DocumentStyle, DragStyleGuard, SharedDocumentStyle};
