// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Observer that reports where a wrapped element sits in the viewport.

use eframe::egui;

use crate::models::visible_area::VisibleArea;

type ChangeCallback = Box<dyn FnMut(VisibleArea)>;

/// Watches a wrapped element's layout box and forwards changes to a callback.
///
/// The observer is connected on construction. Each frame the wrapped element is laid
/// out counts as one notification, so the callback fires at most once per frame and
/// only when the rounded rectangle actually changed.
pub struct VisibleAreaObserver {
    on_change: Option<ChangeCallback>,
    last: Option<VisibleArea>,
}

impl VisibleAreaObserver {
    pub fn new(on_change: impl FnMut(VisibleArea) + 'static) -> Self {
        Self {
            on_change: Some(Box::new(on_change)),
            last: None,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.on_change.is_some()
    }

    /// Most recently reported area.
    pub fn last_area(&self) -> Option<VisibleArea> {
        self.last
    }

    /// Handle one notification for the element's current layout rectangle.
    ///
    /// `None` means the element was not available this time; the notification is
    /// skipped and the next one retries. Returns the area when the callback fired.
    pub fn notify(&mut self, element: Option<egui::Rect>) -> Option<VisibleArea> {
        let on_change = self.on_change.as_mut()?;
        let Some(rect) = element else {
            tracing::warn!("visible area skipped: element not available");
            return None;
        };

        let area = VisibleArea::from_rounded(rect.min.x, rect.min.y, rect.width(), rect.height());
        if self.last == Some(area) {
            return None;
        }
        self.last = Some(area);
        tracing::trace!(%area, "visible area changed");
        on_change(area);
        Some(area)
    }

    /// Stop observing. No callback runs after this returns.
    pub fn disconnect(&mut self) {
        if self.on_change.take().is_some() {
            tracing::debug!("visible area observer disconnected");
        }
    }
}

impl Drop for VisibleAreaObserver {
    fn drop(&mut self) {
        self.disconnect();
    }
}

/// Render `add_contents` and notify the observer about the resulting layout box.
pub fn view<R>(
    ui: &mut egui::Ui,
    observer: &mut VisibleAreaObserver,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    let inner = ui.scope(add_contents);
    let rect = inner.response.rect;
    // An element that was never placed has no usable box. Empty content still has a
    // position and reports a zero size.
    observer.notify(rect.is_finite().then_some(rect));
    inner.inner
}
