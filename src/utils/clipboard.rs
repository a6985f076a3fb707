// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Best-effort clipboard copy.

use anyhow::Result;
use eframe::egui;

/// Anything that can receive text destined for the system clipboard.
pub trait ClipboardSink {
    /// Hand `text` to the clipboard.
    ///
    /// # Errors
    ///
    /// Returns an error when the platform clipboard is unavailable.
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// egui forwards the text to the platform integration at the end of the frame.
impl ClipboardSink for egui::Context {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.copy_text(text.to_owned());
        Ok(())
    }
}

/// Copy `text`, surfacing a failure to the caller.
///
/// # Errors
///
/// Propagates the sink's error unchanged.
pub fn try_copy_to_clipboard(sink: &mut impl ClipboardSink, text: &str) -> Result<()> {
    sink.write_text(text)?;
    tracing::debug!(bytes = text.len(), "copied text to clipboard");
    Ok(())
}

/// Fire-and-forget copy. Failures are logged and swallowed.
pub fn copy_to_clipboard(sink: &mut impl ClipboardSink, text: &str) {
    if let Err(err) = try_copy_to_clipboard(sink, text) {
        tracing::warn!("clipboard copy failed: {err:#}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[derive(Default)]
    struct RecordingSink {
        copied: Vec<String>,
    }

    impl ClipboardSink for RecordingSink {
        fn write_text(&mut self, text: &str) -> Result<()> {
            self.copied.push(text.to_owned());
            Ok(())
        }
    }

    struct BrokenSink;

    impl ClipboardSink for BrokenSink {
        fn write_text(&mut self, _text: &str) -> Result<()> {
            Err(anyhow!("no clipboard"))
        }
    }

    #[test]
    fn copy_hands_text_to_sink() {
        let mut sink = RecordingSink::default();
        copy_to_clipboard(&mut sink, "hello");
        copy_to_clipboard(&mut sink, "");
        assert_eq!(sink.copied, vec!["hello".to_string(), String::new()]);
    }

    #[test]
    fn copy_swallows_sink_failures() {
        copy_to_clipboard(&mut BrokenSink, "lost");
    }

    #[test]
    fn try_copy_surfaces_sink_failures() {
        let err = try_copy_to_clipboard(&mut BrokenSink, "lost").unwrap_err();
        assert_eq!(err.to_string(), "no clipboard");
    }

    #[test]
    fn egui_context_accepts_text() {
        let mut ctx = egui::Context::default();
        assert!(try_copy_to_clipboard(&mut ctx, "from egui").is_ok());
    }
}
