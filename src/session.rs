//! Interactive highlighting session
//!
//! One session per open document. The host feeds it discrete input events
//! (pointer, selection changes, escape, scroll signals) and receives
//! [`HighlightEvent`] values back; rendering state (drag preview, pending
//! ghost, scroll flash target) is read through queries.

use std::time::{Duration, Instant};

use log::debug;

use crate::coords::scaled_to_viewport;
use crate::debounce::Debouncer;
use crate::drag::{AreaSelection, DragUpdate};
use crate::geometry::{Point, Rect};
use crate::highlight::Highlight;
use crate::selection::{
    area_draft, text_draft, PageSelection, SelectionError, MIN_DRAG_HEIGHT, MIN_DRAG_WIDTH,
};
use crate::view::DocumentView;

const DEFAULT_SELECTION_DEBOUNCE: Duration = Duration::from_millis(250);
const DEFAULT_SCROLL_MARGIN: f64 = 10.0;

#[derive(Clone, Copy, Debug)]
pub struct SessionOptions {
    /// Trailing-edge delay between the last selection change and
    /// finalization.
    pub selection_debounce: Duration,
    /// Gap left above a highlight when scrolling it into view, in CSS pixels.
    pub scroll_margin: f64,
    /// Smallest drag the area selection will finalize, in CSS pixels.
    /// Values below [`MIN_DRAG_WIDTH`] / [`MIN_DRAG_HEIGHT`] are raised to
    /// that floor; a bare click never becomes a selection.
    pub min_drag_width: f64,
    pub min_drag_height: f64,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            selection_debounce: DEFAULT_SELECTION_DEBOUNCE,
            scroll_margin: DEFAULT_SCROLL_MARGIN,
            min_drag_width: MIN_DRAG_WIDTH,
            min_drag_height: MIN_DRAG_HEIGHT,
        }
    }
}

/// A pointer press as the host saw it. The host evaluates its own trigger
/// policy (modifier key, mode toggle) and page hit-testing; the session only
/// consumes the verdicts.
#[derive(Clone, Copy, Debug)]
pub struct PointerInput {
    pub point: Point,
    /// Whether area selection may start from this press.
    pub area_enabled: bool,
    /// Whether the press landed on a page surface rather than gutter or UI
    /// chrome. Presses on the tip or other overlays must not be forwarded at
    /// all, or they would discard the pending highlight underneath.
    pub on_page: bool,
}

/// What the host must react to after feeding the session an event.
#[derive(Clone, Debug, PartialEq)]
pub enum HighlightEvent {
    /// A finished selection produced a draft highlight (no id yet). The host
    /// shows its comment editor and either commits or cancels.
    SelectionFinalized(Highlight),
    /// The area-selection overlay appeared or disappeared.
    AreaSelectionVisible(bool),
    /// The viewer finished scrolling to the given highlight.
    ScrollCompleted(String),
    /// An in-progress or pending highlight was discarded.
    PendingCancelled,
}

pub struct HighlighterSession {
    options: SessionOptions,
    area: AreaSelection,
    debounce: Debouncer,
    ghost: Option<Highlight>,
    /// Highlight id a scroll request is in flight for.
    scroll_target: Option<String>,
    /// Highlight id currently marked as scrolled-to, until the user scrolls.
    scrolled_to: Option<String>,
}

impl Default for HighlighterSession {
    fn default() -> Self {
        Self::new(SessionOptions::default())
    }
}

impl HighlighterSession {
    #[must_use]
    pub fn new(options: SessionOptions) -> Self {
        Self {
            options,
            area: AreaSelection::with_minimum_size(
                options.min_drag_width,
                options.min_drag_height,
            ),
            debounce: Debouncer::new(options.selection_debounce),
            ghost: None,
            scroll_target: None,
            scrolled_to: None,
        }
    }

    /// A press anywhere on the document discards pending state and may start
    /// an area drag.
    pub fn pointer_down(&mut self, input: PointerInput) -> Vec<HighlightEvent> {
        let mut events = Vec::new();
        self.debounce.cancel();
        if self.ghost.take().is_some() {
            events.push(HighlightEvent::PendingCancelled);
        }

        let was_active = self.area.is_active();
        self.area
            .pointer_down(input.point, input.area_enabled, input.on_page);
        self.emit_visibility(was_active, &mut events);
        events
    }

    pub fn pointer_move(&mut self, point: Point) -> Vec<HighlightEvent> {
        self.area.pointer_move(point);
        Vec::new()
    }

    /// A release finishes the drag; a valid rectangle becomes the pending
    /// ghost with its region captured from the viewer.
    pub fn pointer_up(&mut self, view: &dyn DocumentView, point: Point) -> Vec<HighlightEvent> {
        let mut events = Vec::new();
        let inside = view.container_bounds().contains_point(point);
        let was_active = self.area.is_active();

        if let DragUpdate::Finalized { origin, rect } = self.area.pointer_up(point, inside) {
            match area_draft(view, origin, &rect) {
                Ok(draft) => {
                    self.ghost = Some(draft.clone());
                    events.push(HighlightEvent::SelectionFinalized(draft));
                }
                Err(err) => {
                    debug!("area selection discarded: {err}");
                    self.area.reset();
                }
            }
        }

        self.emit_visibility(was_active, &mut events);
        events
    }

    /// The host's text selection changed. Ignored while an area drag is
    /// active, since the drag suppresses text selection.
    pub fn selection_changed(&mut self, now: Instant) {
        if self.suppresses_text_selection() {
            return;
        }
        self.debounce.bump(now);
    }

    /// True when a settled text selection should be finalized now. The host
    /// then gathers the selection's per-page rects and text and calls
    /// [`HighlighterSession::finalize_text_selection`].
    #[must_use]
    pub fn poll_selection(&mut self, now: Instant) -> bool {
        self.debounce.poll(now)
    }

    pub fn finalize_text_selection(
        &mut self,
        view: &dyn DocumentView,
        batches: &[PageSelection],
        text: impl Into<String>,
    ) -> Vec<HighlightEvent> {
        match text_draft(view, batches, text) {
            Ok(draft) => {
                self.ghost = Some(draft.clone());
                vec![HighlightEvent::SelectionFinalized(draft)]
            }
            Err(err) => {
                debug!("text selection discarded: {err}");
                Vec::new()
            }
        }
    }

    /// Escape cancels whatever is in progress or pending, with no partial
    /// effects.
    pub fn handle_escape(&mut self) -> Vec<HighlightEvent> {
        let mut events = Vec::new();
        self.debounce.cancel();

        let was_active = self.area.is_active();
        self.area.reset();
        self.emit_visibility(was_active, &mut events);

        if self.ghost.take().is_some() {
            events.push(HighlightEvent::PendingCancelled);
        }
        events
    }

    /// Ask the viewer to bring a highlight into view, leaving
    /// [`SessionOptions::scroll_margin`] above it.
    pub fn scroll_to(
        &mut self,
        view: &mut dyn DocumentView,
        highlight: &Highlight,
    ) -> Result<(), SelectionError> {
        let page = highlight.position.page_number;
        let destination = {
            let viewport = view
                .viewport(page)
                .ok_or(SelectionError::MissingPage(page))?;
            let rect = scaled_to_viewport(
                &highlight.position.bounding_rect,
                viewport,
                highlight.position.use_pdf_coordinates,
            );
            viewport.to_page_point(0.0, rect.top - self.options.scroll_margin)
        };

        view.scroll_to(page, destination);
        self.scroll_target = highlight.id.clone();
        self.scrolled_to = None;
        Ok(())
    }

    /// The viewer reports the requested scroll has settled.
    pub fn handle_scroll_completed(&mut self) -> Vec<HighlightEvent> {
        match self.scroll_target.take() {
            Some(id) => {
                self.scrolled_to = Some(id.clone());
                vec![HighlightEvent::ScrollCompleted(id)]
            }
            None => Vec::new(),
        }
    }

    /// Any user-initiated scroll clears the scrolled-to mark.
    pub fn handle_user_scroll(&mut self) {
        self.scroll_target = None;
        self.scrolled_to = None;
    }

    /// The host persisted the pending ghost; hand it over and clear
    /// selection state. The returned draft still has no id. Tearing down a
    /// locked area overlay is reported as
    /// [`HighlightEvent::AreaSelectionVisible`], same as on the pointer
    /// paths.
    pub fn commit_ghost(&mut self) -> Option<(Highlight, Vec<HighlightEvent>)> {
        let draft = self.ghost.take()?;
        let mut events = Vec::new();
        let was_active = self.area.is_active();
        self.area.reset();
        self.debounce.cancel();
        self.emit_visibility(was_active, &mut events);
        Some((draft, events))
    }

    #[must_use]
    pub fn ghost(&self) -> Option<&Highlight> {
        self.ghost.as_ref()
    }

    /// Area rectangle to paint right now, if any.
    #[must_use]
    pub fn area_preview(&self) -> Option<Rect> {
        self.area.preview()
    }

    /// While true the host must suppress its native text selection.
    #[must_use]
    pub fn suppresses_text_selection(&self) -> bool {
        self.area.is_active()
    }

    /// Highlight id to render with the scrolled-to flash, if any.
    #[must_use]
    pub fn scrolled_to(&self) -> Option<&str> {
        self.scrolled_to.as_deref()
    }

    fn emit_visibility(&self, was_active: bool, events: &mut Vec<HighlightEvent>) {
        let active = self.area.is_active();
        if was_active != active {
            events.push(HighlightEvent::AreaSelectionVisible(active));
        }
    }
}
