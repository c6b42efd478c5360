// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size};
use peniko::Color;

/// Renderer-side options for drawing the crop surface.
///
/// The controller only stores these; it never draws.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayStyle {
    /// Fill used to dim everything outside the viewport.
    pub color: Color,
    /// Whether the image should be drawn with bilinear filtering.
    pub filter_bitmap: bool,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            color: Color::from_rgba8(0, 0, 0, 200),
            filter_bitmap: true,
        }
    }
}

/// Returns the four bands that dim the container around `viewport`.
///
/// The bands are, in order: left, top, right and bottom. Left and right
/// span the viewport's height only; top and bottom span the full container
/// width. Bands collapse to zero area where the viewport touches the edge.
#[must_use]
pub fn overlay_rects(container: Size, viewport: Rect) -> [Rect; 4] {
    let w = container.width.max(0.0);
    let h = container.height.max(0.0);
    let viewport = viewport.intersect(Rect::new(0.0, 0.0, w, h));
    [
        Rect::new(0.0, viewport.y0, viewport.x0, viewport.y1),
        Rect::new(0.0, 0.0, w, viewport.y0),
        Rect::new(viewport.x1, viewport.y0, w, viewport.y1),
        Rect::new(0.0, viewport.y1, w, h),
    ]
}
