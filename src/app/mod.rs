// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Application entry point wiring egui/eframe to launch the frontkit demo.

use std::path::Path;

use anyhow::{Context, Result};
use eframe::egui;
use egui_phosphor::Variant;

use crate::models::resize::ResizeConfig;
use crate::ui::FrontkitApp;

/// Environment variable naming a JSON file with the sidebar's resize config.
pub const SIDEBAR_CONFIG_ENV: &str = "FRONTKIT_SIDEBAR_CONFIG";

/// Load the sidebar config from `path`.
///
/// # Errors
///
/// Returns an error when the file cannot be read or is not a valid config.
pub fn load_sidebar_config(path: &Path) -> Result<ResizeConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read sidebar config: {:?}", path))?;
    ResizeConfig::from_json(&content)
}

/// Sidebar config from [`SIDEBAR_CONFIG_ENV`], falling back to defaults on any problem.
fn sidebar_config_from_env() -> ResizeConfig {
    let Some(path) = std::env::var_os(SIDEBAR_CONFIG_ENV) else {
        return ResizeConfig::default();
    };
    match load_sidebar_config(Path::new(&path)) {
        Ok(config) => {
            tracing::info!(?config, "loaded sidebar config");
            config
        }
        Err(err) => {
            tracing::warn!("using default sidebar config: {err:#}");
            ResizeConfig::default()
        }
    }
}

/// Bootstrap the desktop application and run the main egui event loop.
pub fn run() -> eframe::Result<()> {
    let sidebar_config = sidebar_config_from_env();

    // Register Phosphor icon font.
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, Variant::Regular);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 720.0])
            .with_min_inner_size([640.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "frontkit",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(FrontkitApp::new(sidebar_config)))
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_sidebar_config_reads_json_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("sidebar.json");
        fs::write(&path, r#"{"min_width": 150, "initial_width": 180}"#).unwrap();

        let config = load_sidebar_config(&path).unwrap();
        assert_eq!(config.min_width, 150.0);
        assert_eq!(config.initial_width, 180.0);
        assert_eq!(config.max_width, 500.0);
    }

    #[test]
    fn load_sidebar_config_reports_missing_file() {
        let tmp = TempDir::new().unwrap();
        let err = load_sidebar_config(&tmp.path().join("nope.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read sidebar config"));
    }
}
