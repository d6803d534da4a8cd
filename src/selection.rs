//! Turn raw user selections into highlight drafts

use thiserror::Error;

use crate::geometry::{union, PageNumber, Point, Rect};
use crate::highlight::{Highlight, Position};
use crate::view::{viewport_position_to_scaled, DocumentView, PageElement};

/// Smallest drag that still counts as a selection, in CSS pixels. Also the
/// floor for configured minima: a bare click never becomes a selection.
pub const MIN_DRAG_WIDTH: f64 = 1.0;
pub const MIN_DRAG_HEIGHT: f64 = 1.0;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// The selection produced no usable rectangles. Recovered by discarding
    /// the attempt; never surfaced to the user.
    #[error("selection produced no usable rectangles")]
    InvalidSelection,

    /// A touched page has no rendered viewport yet, which happens while the
    /// viewer is still laying pages out during a scroll.
    #[error("page {0} has no rendered viewport")]
    MissingPage(PageNumber),
}

/// Viewport-space rects of one page's share of a text selection, as handed
/// over by the rendering collaborator.
#[derive(Clone, Debug, PartialEq)]
pub struct PageSelection {
    pub page_number: PageNumber,
    pub rects: Vec<Rect>,
}

impl PageSelection {
    #[must_use]
    pub fn new(page_number: PageNumber, rects: Vec<Rect>) -> Self {
        Self { page_number, rects }
    }
}

/// Build the viewport position of a text selection from per-page rect
/// batches.
///
/// The position's own page is the lowest page touched. When the selection
/// spans several pages, every rect and the bounding rect are tagged with
/// their originating page so later grouping can split them again.
pub fn text_selection_position(batches: &[PageSelection]) -> Result<Position, SelectionError> {
    let touched: Vec<&PageSelection> = batches.iter().filter(|b| !b.rects.is_empty()).collect();
    let primary = touched
        .iter()
        .map(|b| b.page_number)
        .min()
        .ok_or(SelectionError::InvalidSelection)?;
    let spans_pages = touched.len() > 1;

    let mut rects = Vec::new();
    for batch in &touched {
        for rect in &batch.rects {
            let mut rect = *rect;
            if spans_pages {
                rect.page_number = Some(batch.page_number);
            }
            rects.push(rect);
        }
    }

    let mut bounding_rect = union(&rects).map_err(|_| SelectionError::InvalidSelection)?;
    if spans_pages {
        bounding_rect.page_number = Some(primary);
    }

    Ok(Position::new(bounding_rect, rects, primary))
}

/// Build the viewport position of an area selection from the drag rectangle
/// (container coordinates) and the page it started on.
pub fn area_selection_position(
    drag_rect: &Rect,
    page: &PageElement,
) -> Result<Position, SelectionError> {
    let local = Rect::new(
        drag_rect.left - page.bounds.left,
        drag_rect.top - page.bounds.top,
        drag_rect.width,
        drag_rect.height,
    );

    if !local.meets_minimum_size(MIN_DRAG_WIDTH, MIN_DRAG_HEIGHT) {
        return Err(SelectionError::InvalidSelection);
    }

    Ok(Position::new(local, Vec::new(), page.page_number))
}

/// Finished text selection to a ghost highlight in stored form.
pub fn text_draft(
    view: &dyn DocumentView,
    batches: &[PageSelection],
    text: impl Into<String>,
) -> Result<Highlight, SelectionError> {
    let position = text_selection_position(batches)?;
    let scaled = viewport_position_to_scaled(view, &position)?;
    Ok(Highlight::text(text, scaled))
}

/// Finished area drag to a ghost highlight in stored form, with the dragged
/// region captured as the highlight image.
pub fn area_draft(
    view: &dyn DocumentView,
    origin: Point,
    drag_rect: &Rect,
) -> Result<Highlight, SelectionError> {
    let page_number = view
        .page_at(origin)
        .ok_or(SelectionError::InvalidSelection)?;
    let element = view
        .page_element(page_number)
        .ok_or(SelectionError::MissingPage(page_number))?;

    let position = area_selection_position(drag_rect, &element)?;
    let image = view
        .capture_region(page_number, &position.bounding_rect)
        .ok_or(SelectionError::InvalidSelection)?;
    let scaled = viewport_position_to_scaled(view, &position)?;

    Ok(Highlight::area(image, scaled))
}
