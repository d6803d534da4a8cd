//! Viewport-space rectangle primitives shared by the rest of the crate

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 1-based page number. Every record, lookup and grouping key uses this form;
/// hosts with 0-based page arrays convert at their adapter.
pub type PageNumber = u32;

/// Returned by [`union`] when there are no rectangles to merge.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("cannot compute the bounding rect of zero rectangles")]
pub struct EmptyInputError;

/// A point in viewport coordinates (CSS pixels, origin top-left).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in viewport coordinates.
///
/// `page_number` is only set on rects that belong to a different page than
/// their parent position (multi-page text selections); `None` means "same
/// page as the position".
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_number: Option<PageNumber>,
}

impl Rect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
            page_number: None,
        }
    }

    /// Build a rect from two opposite corners given in either order.
    #[must_use]
    pub fn from_points(a: Point, b: Point) -> Self {
        Self::new(
            a.x.min(b.x),
            a.y.min(b.y),
            (a.x - b.x).abs(),
            (a.y - b.y).abs(),
        )
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[must_use]
    pub fn on_page(mut self, page: PageNumber) -> Self {
        self.page_number = Some(page);
        self
    }

    /// Drags below the minimum in either dimension are click noise, not
    /// selections.
    #[must_use]
    pub fn meets_minimum_size(&self, min_width: f64, min_height: f64) -> bool {
        self.width >= min_width && self.height >= min_height
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x <= self.right()
            && point.y >= self.top
            && point.y <= self.bottom()
    }
}

/// Tight bounding rect of a set of rects. Exact (bit-identical) for a single
/// input.
pub fn union(rects: &[Rect]) -> Result<Rect, EmptyInputError> {
    let (first, rest) = rects.split_first().ok_or(EmptyInputError)?;
    if rest.is_empty() {
        return Ok(*first);
    }

    let mut left = first.left;
    let mut top = first.top;
    let mut right = first.right();
    let mut bottom = first.bottom();

    for rect in rest {
        left = left.min(rect.left);
        top = top.min(rect.top);
        right = right.max(rect.right());
        bottom = bottom.max(rect.bottom());
    }

    Ok(Rect::new(left, top, right - left, bottom - top))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(left: f64, top: f64, width: f64, height: f64) -> Rect {
        Rect::new(left, top, width, height)
    }

    #[test]
    fn test_union_of_single_rect_is_exact() {
        let r = rect(10.0, 20.0, 30.0, 40.0);
        assert_eq!(union(&[r]).unwrap(), r);
        assert_eq!(union(&[r, r]).unwrap(), r);
    }

    #[test]
    fn test_union_spans_all_inputs() {
        let merged = union(&[
            rect(10.0, 10.0, 10.0, 10.0),
            rect(40.0, 5.0, 10.0, 10.0),
            rect(15.0, 30.0, 5.0, 5.0),
        ])
        .unwrap();
        assert_eq!(merged, rect(10.0, 5.0, 40.0, 30.0));
    }

    #[test]
    fn test_union_of_empty_input_fails() {
        assert_eq!(union(&[]), Err(EmptyInputError));
    }

    #[test]
    fn test_union_of_tagged_rects_is_untagged() {
        let merged = union(&[
            rect(0.0, 0.0, 10.0, 10.0).on_page(2),
            rect(5.0, 0.0, 10.0, 10.0).on_page(3),
        ])
        .unwrap();
        assert_eq!(merged.page_number, None);
    }

    #[test]
    fn test_from_points_normalizes_corner_order() {
        let r = Rect::from_points(Point::new(50.0, 50.0), Point::new(10.0, 10.0));
        assert_eq!(r, rect(10.0, 10.0, 40.0, 40.0));
    }

    #[test]
    fn test_from_points_mixed_corners() {
        // Drag from bottom-left corner to top-right corner.
        let r = Rect::from_points(Point::new(10.0, 50.0), Point::new(30.0, 20.0));
        assert_eq!(r, rect(10.0, 20.0, 20.0, 30.0));
    }

    #[test]
    fn test_minimum_size_rejects_degenerate_drags() {
        assert!(!rect(0.0, 0.0, 0.0, 0.0).meets_minimum_size(1.0, 1.0));
        assert!(!rect(0.0, 0.0, 0.5, 20.0).meets_minimum_size(1.0, 1.0));
        assert!(rect(0.0, 0.0, 1.0, 1.0).meets_minimum_size(1.0, 1.0));
    }

    #[test]
    fn test_contains_point_includes_edges() {
        let r = rect(10.0, 10.0, 20.0, 20.0);
        assert!(r.contains_point(Point::new(10.0, 10.0)));
        assert!(r.contains_point(Point::new(30.0, 30.0)));
        assert!(!r.contains_point(Point::new(30.1, 30.0)));
    }
}
