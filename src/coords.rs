//! Conversions between the zoom-independent stored form of a rectangle and
//! the live viewport a page is currently rendered at

use serde::{Deserialize, Serialize};

use crate::geometry::{PageNumber, Point, Rect};

/// Per-page render descriptor supplied by the host viewer.
///
/// `to_page_point` and `to_viewport_quad` expose the viewer's own transform
/// for documents whose values live in native page space (origin bottom-left,
/// y growing upward).
pub trait PageViewport {
    /// Current rendered page size in CSS pixels.
    fn rendered_size(&self) -> (f64, f64);

    /// Page size in native document units.
    fn native_size(&self) -> (f64, f64);

    /// Viewport point to native page coordinates.
    fn to_page_point(&self, x: f64, y: f64) -> Point;

    /// Native-space corner pair `[x1, y1, x2, y2]` to viewport corners.
    fn to_viewport_quad(&self, quad: [f64; 4]) -> [f64; 4];
}

/// A [`PageViewport`] for hosts whose render transform is a plain uniform
/// scale. Also the descriptor the tests drive the transforms with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearViewport {
    pub native_width: f64,
    pub native_height: f64,
    pub scale: f64,
}

impl LinearViewport {
    #[must_use]
    pub fn new(native_width: f64, native_height: f64, scale: f64) -> Self {
        Self {
            native_width,
            native_height,
            scale,
        }
    }
}

impl PageViewport for LinearViewport {
    fn rendered_size(&self) -> (f64, f64) {
        (
            self.native_width * self.scale,
            self.native_height * self.scale,
        )
    }

    fn native_size(&self) -> (f64, f64) {
        (self.native_width, self.native_height)
    }

    fn to_page_point(&self, x: f64, y: f64) -> Point {
        // Native origin is bottom-left, y grows upward.
        Point::new(x / self.scale, self.native_height - y / self.scale)
    }

    fn to_viewport_quad(&self, quad: [f64; 4]) -> [f64; 4] {
        let [x1, y1, x2, y2] = quad;
        [
            x1 * self.scale,
            (self.native_height - y1) * self.scale,
            x2 * self.scale,
            (self.native_height - y2) * self.scale,
        ]
    }
}

/// Zoom-independent stored form of a rectangle.
///
/// `(x1, y1)`-`(x2, y2)` are opposite corners. `width`/`height` record the
/// rendered page size at capture time; later renders divide by them to
/// recover the rect as a fraction of the page, which is what makes the value
/// survive zoom changes. All six fields are always derived together from one
/// source transform ([`viewport_to_scaled`]) and never patched individually.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScaledRect {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_number: Option<PageNumber>,
}

/// Project a stored rect onto the page's current viewport.
///
/// With `use_pdf_coordinates` the stored corners are native page coordinates
/// and go through the descriptor's own transform; the per-axis minima absorb
/// the y-axis flip. Otherwise the corners are scaled viewport values and
/// rescale by the ratio of the current to the captured page size.
#[must_use]
pub fn scaled_to_viewport(
    scaled: &ScaledRect,
    viewport: &dyn PageViewport,
    use_pdf_coordinates: bool,
) -> Rect {
    let mut rect = if use_pdf_coordinates {
        let [xa, ya, xb, yb] =
            viewport.to_viewport_quad([scaled.x1, scaled.y1, scaled.x2, scaled.y2]);
        Rect::new(xa.min(xb), ya.min(yb), (xb - xa).abs(), (yb - ya).abs())
    } else {
        let (rendered_width, rendered_height) = viewport.rendered_size();
        let x_ratio = rendered_width / scaled.width;
        let y_ratio = rendered_height / scaled.height;
        Rect::new(
            scaled.x1 * x_ratio,
            scaled.y1 * y_ratio,
            (scaled.x2 - scaled.x1) * x_ratio,
            (scaled.y2 - scaled.y1) * y_ratio,
        )
    };
    rect.page_number = scaled.page_number;
    rect
}

/// Capture a live viewport rect into its stored form.
#[must_use]
pub fn viewport_to_scaled(rect: &Rect, viewport: &dyn PageViewport) -> ScaledRect {
    let (rendered_width, rendered_height) = viewport.rendered_size();
    ScaledRect {
        x1: rect.left,
        y1: rect.top,
        x2: rect.left + rect.width,
        y2: rect.top + rect.height,
        width: rendered_width,
        height: rendered_height,
        page_number: rect.page_number,
    }
}
