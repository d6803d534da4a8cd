//! Placement of the comment tip next to its highlight

use crate::geometry::Rect;

/// Gap between the tip and its anchor rect, in CSS pixels.
pub const TIP_MARGIN: f64 = 5.0;

/// Measured size of the tip element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TipSize {
    pub width: f64,
    pub height: f64,
}

impl TipSize {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TipPlacement {
    /// The element has not been measured yet; keep it hidden rather than
    /// flashing it at a wrong position.
    Pending,
    Visible {
        left: f64,
        top: f64,
        /// Whether the tip sits above its anchor.
        above: bool,
    },
}

/// Place the tip centered over `anchor`, clamped into the page's horizontal
/// bounds, preferring the space above the anchor and flipping below when the
/// tip would cross `visible_top` (the top edge of the visible scroll area).
#[must_use]
pub fn place_tip(
    anchor: &Rect,
    page: &Rect,
    size: Option<TipSize>,
    visible_top: f64,
) -> TipPlacement {
    let Some(size) = size else {
        return TipPlacement::Pending;
    };

    let centered = anchor.left + anchor.width / 2.0 - size.width / 2.0;
    // min before max: when the tip is wider than the page the left edge wins.
    let left = centered
        .min(page.left + page.width - size.width)
        .max(page.left);

    let above_top = anchor.top - size.height - TIP_MARGIN;
    if above_top >= visible_top {
        TipPlacement::Visible {
            left,
            top: above_top,
            above: true,
        }
    } else {
        TipPlacement::Visible {
            left,
            top: anchor.bottom() + TIP_MARGIN,
            above: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Rect {
        Rect::new(40.0, 0.0, 612.0, 792.0)
    }

    fn placement(anchor: Rect, size: TipSize, visible_top: f64) -> (f64, f64, bool) {
        match place_tip(&anchor, &page(), Some(size), visible_top) {
            TipPlacement::Visible { left, top, above } => (left, top, above),
            TipPlacement::Pending => panic!("expected a visible placement"),
        }
    }

    #[test]
    fn test_unmeasured_tip_stays_hidden() {
        let anchor = Rect::new(100.0, 100.0, 50.0, 20.0);
        assert_eq!(
            place_tip(&anchor, &page(), None, 0.0),
            TipPlacement::Pending
        );
    }

    #[test]
    fn test_tip_centers_over_the_anchor() {
        let anchor = Rect::new(300.0, 400.0, 100.0, 20.0);
        let (left, top, above) = placement(anchor, TipSize::new(200.0, 80.0), 0.0);

        assert_eq!(left, 250.0);
        assert_eq!(top, 400.0 - 80.0 - TIP_MARGIN);
        assert!(above);
    }

    #[test]
    fn test_tip_clamps_at_the_left_page_edge() {
        let anchor = Rect::new(45.0, 400.0, 10.0, 20.0);
        let (left, _, _) = placement(anchor, TipSize::new(200.0, 80.0), 0.0);
        assert_eq!(left, 40.0);
    }

    #[test]
    fn test_tip_clamps_at_the_right_page_edge() {
        let anchor = Rect::new(630.0, 400.0, 20.0, 20.0);
        let (left, _, _) = placement(anchor, TipSize::new(200.0, 80.0), 0.0);
        assert_eq!(left, 40.0 + 612.0 - 200.0);
    }

    #[test]
    fn test_tip_wider_than_page_pins_to_left_edge() {
        let anchor = Rect::new(300.0, 400.0, 10.0, 20.0);
        let (left, _, _) = placement(anchor, TipSize::new(700.0, 80.0), 0.0);
        assert_eq!(left, 40.0);
    }

    #[test]
    fn test_tip_flips_below_near_the_visible_top() {
        let anchor = Rect::new(300.0, 60.0, 100.0, 20.0);
        let (_, top, above) = placement(anchor, TipSize::new(200.0, 80.0), 0.0);

        assert!(!above);
        assert_eq!(top, 80.0 + TIP_MARGIN);
    }

    #[test]
    fn test_scrolled_container_flips_relative_to_visible_top() {
        // Anchor at y=500; the space above the anchor is 415 once the tip
        // height and margin are taken out.
        let anchor = Rect::new(300.0, 500.0, 100.0, 20.0);
        let (_, _, above) = placement(anchor, TipSize::new(200.0, 80.0), 400.0);
        assert!(above);

        let (_, top, above) = placement(anchor, TipSize::new(200.0, 80.0), 430.0);
        assert!(!above);
        assert_eq!(top, 520.0 + TIP_MARGIN);
    }

    #[test]
    fn test_exact_fit_above_stays_above() {
        // above_top lands exactly on the visible top.
        let anchor = Rect::new(300.0, 85.0, 100.0, 20.0);
        let (_, top, above) = placement(anchor, TipSize::new(200.0, 80.0), 0.0);
        assert!(above);
        assert_eq!(top, 0.0);
    }
}
