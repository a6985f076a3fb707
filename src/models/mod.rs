// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Domain layer: pure data types and validation helpers shared between components and the demo app.

pub mod resize;
pub mod visible_area;

pub use resize::{ResizeConfig, ResizeEventData, ResizeState};
pub use visible_area::VisibleArea;
