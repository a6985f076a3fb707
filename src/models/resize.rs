// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Resizable container domain types: configuration, state snapshots, and clamping (UI-agnostic).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default lower width bound in logical points.
pub const DEFAULT_MIN_WIDTH: f32 = 200.0;
/// Default upper width bound in logical points.
pub const DEFAULT_MAX_WIDTH: f32 = 500.0;
/// Default width used when the container is created.
pub const DEFAULT_INITIAL_WIDTH: f32 = 240.0;
/// Default width change per arrow key press.
pub const DEFAULT_KEYBOARD_STEP: f32 = 10.0;

/// Behavioural configuration for a resizable container.
///
/// Every field falls back to its default when missing from a serialized config,
/// so `{}` is a valid JSON document.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ResizeConfig {
    /// Smallest width the container may take.
    pub min_width: f32,
    /// Largest width the container may take.
    pub max_width: f32,
    /// Width on creation. Used as given, see [`ResizeConfig::clamp`].
    pub initial_width: f32,
    /// Hide the handle and ignore all pointer/keyboard input.
    pub disabled: bool,
    /// Width change applied per arrow key press.
    pub keyboard_step: f32,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            min_width: DEFAULT_MIN_WIDTH,
            max_width: DEFAULT_MAX_WIDTH,
            initial_width: DEFAULT_INITIAL_WIDTH,
            disabled: false,
            keyboard_step: DEFAULT_KEYBOARD_STEP,
        }
    }
}

impl ResizeConfig {
    /// Parse a configuration from JSON, filling absent fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns an error when the input is not valid JSON or a field has the wrong type.
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input).context("Failed to parse resizable container config")
    }

    /// Constrain `width` to `[min_width, max_width]`.
    ///
    /// A config with `min_width > max_width` resolves to `min_width`; the lower
    /// bound wins so the result is still deterministic.
    pub fn clamp(&self, width: f32) -> f32 {
        if width.is_nan() {
            return self.min_width;
        }
        width.min(self.max_width).max(self.min_width)
    }
}

/// Snapshot of the container's width state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeState {
    pub width: f32,
    pub is_resizing: bool,
    /// Pointer x at drag start; `0.0` while idle.
    pub start_x: f32,
    /// Width at drag start; equals `width` while idle.
    pub start_width: f32,
}

/// Immutable payload handed to resize lifecycle callbacks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeEventData {
    pub width: f32,
    pub delta_x: f32,
    pub start_width: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = ResizeConfig::default();
        assert_eq!(config.min_width, 200.0);
        assert_eq!(config.max_width, 500.0);
        assert_eq!(config.initial_width, 240.0);
        assert!(!config.disabled);
        assert_eq!(config.keyboard_step, 10.0);
    }

    #[test]
    fn clamp_keeps_values_inside_bounds() {
        let config = ResizeConfig::default();
        assert_eq!(config.clamp(50.0), 200.0);
        assert_eq!(config.clamp(320.0), 320.0);
        assert_eq!(config.clamp(10_000.0), 500.0);
        assert_eq!(config.clamp(f32::NAN), 200.0);
    }

    // Inverted bounds must still produce a single well-defined answer.
    #[test]
    fn clamp_prefers_min_when_bounds_are_inverted() {
        let config = ResizeConfig {
            min_width: 400.0,
            max_width: 300.0,
            ..Default::default()
        };
        assert_eq!(config.clamp(350.0), 400.0);
    }

    #[test]
    fn from_json_fills_missing_fields_with_defaults() {
        let config = ResizeConfig::from_json(r#"{"max_width": 640, "disabled": true}"#).unwrap();
        assert_eq!(config.max_width, 640.0);
        assert!(config.disabled);
        assert_eq!(config.min_width, DEFAULT_MIN_WIDTH);
        assert_eq!(config.initial_width, DEFAULT_INITIAL_WIDTH);
    }

    #[test]
    fn from_json_rejects_wrong_types() {
        let err = ResizeConfig::from_json(r#"{"min_width": "wide"}"#).unwrap_err();
        assert!(err.to_string().contains("resizable container config"));
    }
}
