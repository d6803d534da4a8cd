//! Host viewer capabilities and whole-position resolution
//!
//! The crate never reaches into the rendering engine on its own; everything
//! it needs from the viewer comes through [`DocumentView`], passed explicitly
//! at each call site.

use log::debug;

use crate::coords::{scaled_to_viewport, viewport_to_scaled, PageViewport};
use crate::geometry::{PageNumber, Point, Rect};
use crate::highlight::{Highlight, Position, ScaledPosition, ViewportHighlight};
use crate::selection::SelectionError;

/// A page's on-screen placement: bounds relative to the scroll container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageElement {
    pub page_number: PageNumber,
    pub bounds: Rect,
}

/// What the host viewer exposes to the highlight layer.
///
/// Lookups return `None` for pages the viewer has not laid out yet; callers
/// treat that as "skip for this pass", not as a failure.
pub trait DocumentView {
    /// Render descriptor for a laid-out page.
    fn viewport(&self, page: PageNumber) -> Option<&dyn PageViewport>;

    /// On-screen placement of a laid-out page.
    fn page_element(&self, page: PageNumber) -> Option<PageElement>;

    /// Page under a container point, if any.
    fn page_at(&self, point: Point) -> Option<PageNumber>;

    /// Screenshot of a page-relative region as a data URI.
    fn capture_region(&self, page: PageNumber, rect: &Rect) -> Option<String>;

    /// Scroll the viewer so the native-space destination on `page` is in view.
    fn scroll_to(&mut self, page: PageNumber, destination: Point);

    fn page_count(&self) -> PageNumber;

    /// Scroll container bounds in container coordinates.
    fn container_bounds(&self) -> Rect;
}

/// Resolve a stored position against the current layout.
///
/// Rects on pages that are not laid out yet are skipped for this pass; a
/// missing own page fails the whole position, since there is nothing to
/// anchor the bounding rect to.
pub fn scaled_position_to_viewport(
    view: &dyn DocumentView,
    position: &ScaledPosition,
) -> Result<Position, SelectionError> {
    let own_page = position.page_number;
    let viewport = view
        .viewport(own_page)
        .ok_or(SelectionError::MissingPage(own_page))?;

    let bounding_rect = scaled_to_viewport(
        &position.bounding_rect,
        viewport,
        position.use_pdf_coordinates,
    );

    let mut rects = Vec::with_capacity(position.rects.len());
    for scaled in &position.rects {
        let page = scaled.page_number.unwrap_or(own_page);
        match view.viewport(page) {
            Some(page_viewport) => rects.push(scaled_to_viewport(
                scaled,
                page_viewport,
                position.use_pdf_coordinates,
            )),
            None => debug!("skipping rect on page {page}: page not laid out"),
        }
    }

    Ok(Position::new(bounding_rect, rects, own_page))
}

/// Capture a live position into the stored form. Every touched page must be
/// laid out; a capture cannot be partial.
pub fn viewport_position_to_scaled(
    view: &dyn DocumentView,
    position: &Position,
) -> Result<ScaledPosition, SelectionError> {
    let own_page = position.page_number;
    let viewport = view
        .viewport(own_page)
        .ok_or(SelectionError::MissingPage(own_page))?;

    let bounding_rect = viewport_to_scaled(&position.bounding_rect, viewport);

    let mut rects = Vec::with_capacity(position.rects.len());
    for rect in &position.rects {
        let page = rect.page_number.unwrap_or(own_page);
        let page_viewport = view
            .viewport(page)
            .ok_or(SelectionError::MissingPage(page))?;
        rects.push(viewport_to_scaled(rect, page_viewport));
    }

    Ok(ScaledPosition::new(bounding_rect, rects, own_page))
}

/// Resolve one stored highlight for rendering.
pub fn resolve_highlight(
    view: &dyn DocumentView,
    highlight: &Highlight,
) -> Result<ViewportHighlight, SelectionError> {
    let position = scaled_position_to_viewport(view, &highlight.position)?;
    Ok(ViewportHighlight {
        id: highlight.id.clone(),
        content: highlight.content.clone(),
        position,
        comment: highlight.comment.clone(),
    })
}

/// Resolve a render group, skipping highlights whose page is not laid out.
#[must_use]
pub fn resolve_highlights<'a>(
    view: &dyn DocumentView,
    highlights: impl IntoIterator<Item = &'a Highlight>,
) -> Vec<ViewportHighlight> {
    highlights
        .into_iter()
        .filter_map(|highlight| match resolve_highlight(view, highlight) {
            Ok(resolved) => Some(resolved),
            Err(err) => {
                debug!("skipping highlight {:?}: {err}", highlight.id);
                None
            }
        })
        .collect()
}
