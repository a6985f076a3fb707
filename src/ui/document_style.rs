// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Host-wide presentation state that components may override temporarily.
//!
//! The host owns one [`SharedDocumentStyle`] and calls [`DocumentStyle::apply`] once per
//! frame. Components never write to it directly; they acquire a [`DragStyleGuard`], which
//! restores the previous values when dropped.

use std::cell::Cell;
use std::rc::Rc;

use eframe::egui;

/// Document-level cursor and text selection settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DocumentStyle {
    /// Cursor forced for the whole window, `None` leaves widgets in charge.
    pub cursor: Option<egui::CursorIcon>,
    /// Whether labels may be selected with the pointer.
    pub text_selection: bool,
}

impl Default for DocumentStyle {
    fn default() -> Self {
        Self {
            cursor: None,
            text_selection: true,
        }
    }
}

/// Document style shared between the host and its components on the UI thread.
///
/// A `Cell` holds it by value, so reads and writes never conflict with each other.
pub type SharedDocumentStyle = Rc<Cell<DocumentStyle>>;

impl DocumentStyle {
    /// Create a fresh shared document style with default values.
    pub fn shared() -> SharedDocumentStyle {
        Rc::new(Cell::new(Self::default()))
    }

    /// Push the current settings into the egui context for this frame.
    pub fn apply(&self, ctx: &egui::Context) {
        if let Some(cursor) = self.cursor {
            ctx.set_cursor_icon(cursor);
        }
        let selectable = self.text_selection;
        ctx.style_mut(|style| style.interaction.selectable_labels = selectable);
    }
}

/// Scoped override of the document style for the duration of a drag.
///
/// Holding the guard forces a horizontal-resize cursor and disables text selection.
#[derive(Debug)]
pub struct DragStyleGuard {
    document: SharedDocumentStyle,
    previous: DocumentStyle,
}

impl DragStyleGuard {
    pub fn acquire(document: &SharedDocumentStyle) -> Self {
        let previous = document.get();
        document.set(DocumentStyle {
            cursor: Some(egui::CursorIcon::ResizeHorizontal),
            text_selection: false,
        });
        tracing::trace!(?previous, "document style overridden for drag");
        Self {
            document: Rc::clone(document),
            previous,
        }
    }
}

impl Drop for DragStyleGuard {
    fn drop(&mut self) {
        self.document.set(self.previous);
        tracing::trace!("document style restored");
    }
}
