// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Reusable egui components structured for MVU-style updates.

pub mod resizable;
pub mod visible_area;

pub use resizable::{
    ResizableContainer, ResizableHandle, ResizableModel, ResizableMsg, ResizableStyle,
    ResizeEvent, ResizeKey,
};
pub use visible_area::VisibleAreaObserver;
