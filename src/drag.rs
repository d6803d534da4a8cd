//! Mouse-drag state machine for area selections

use crate::geometry::{Point, Rect};
use crate::selection::{MIN_DRAG_HEIGHT, MIN_DRAG_WIDTH};

/// One drag at a time; the machine holds coordinates only. Whether a drag may
/// start at all (modifier key held, pointer on a page) is evaluated by the
/// caller and passed in as facts.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    /// Pointer is down and moving; `current` trails the pointer.
    Dragging { origin: Point, current: Point },
    /// Pointer released over a valid rectangle, held until the resulting
    /// highlight is committed or cancelled.
    Locked { rect: Rect },
}

/// Outcome of feeding one pointer event to the machine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragUpdate {
    /// The event did not apply to the current state.
    Ignored,
    Started,
    Moved(Rect),
    Finalized { origin: Point, rect: Rect },
    Cancelled,
}

#[derive(Clone, Debug)]
pub struct AreaSelection {
    state: DragState,
    min_width: f64,
    min_height: f64,
}

impl Default for AreaSelection {
    fn default() -> Self {
        Self::new()
    }
}

impl AreaSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::with_minimum_size(MIN_DRAG_WIDTH, MIN_DRAG_HEIGHT)
    }

    /// Minima below [`MIN_DRAG_WIDTH`] / [`MIN_DRAG_HEIGHT`] are raised to
    /// that floor, so the machine never finalizes a drag the selection layer
    /// would discard as a click.
    #[must_use]
    pub fn with_minimum_size(min_width: f64, min_height: f64) -> Self {
        Self {
            state: DragState::Idle,
            min_width: min_width.max(MIN_DRAG_WIDTH),
            min_height: min_height.max(MIN_DRAG_HEIGHT),
        }
    }

    /// Pointer pressed at `point`. `enabled` is the caller's trigger policy
    /// for area selection, `on_page` whether the pointer sits on a page
    /// surface rather than gutter or UI chrome.
    pub fn pointer_down(&mut self, point: Point, enabled: bool, on_page: bool) -> DragUpdate {
        match self.state {
            DragState::Idle => self.begin(point, enabled, on_page),
            // A press while a finished rect is pending discards it, then
            // counts as a fresh drag start.
            DragState::Locked { .. } => {
                self.state = DragState::Idle;
                match self.begin(point, enabled, on_page) {
                    DragUpdate::Ignored => DragUpdate::Cancelled,
                    update => update,
                }
            }
            DragState::Dragging { .. } => DragUpdate::Ignored,
        }
    }

    pub fn pointer_move(&mut self, point: Point) -> DragUpdate {
        match self.state {
            DragState::Dragging { origin, .. } => {
                self.state = DragState::Dragging {
                    origin,
                    current: point,
                };
                DragUpdate::Moved(Rect::from_points(origin, point))
            }
            _ => DragUpdate::Ignored,
        }
    }

    /// Pointer released at `point`. `inside_container` is whether the release
    /// happened within the scroll container; releases outside discard the
    /// drag.
    pub fn pointer_up(&mut self, point: Point, inside_container: bool) -> DragUpdate {
        match self.state {
            DragState::Dragging { origin, .. } => {
                let rect = Rect::from_points(origin, point);
                if inside_container && rect.meets_minimum_size(self.min_width, self.min_height) {
                    self.state = DragState::Locked { rect };
                    DragUpdate::Finalized { origin, rect }
                } else {
                    self.state = DragState::Idle;
                    DragUpdate::Cancelled
                }
            }
            _ => DragUpdate::Ignored,
        }
    }

    /// External cancel (escape, commit, teardown).
    pub fn reset(&mut self) {
        self.state = DragState::Idle;
    }

    #[must_use]
    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// Rectangle to paint right now: the live drag preview or the locked
    /// result.
    #[must_use]
    pub fn preview(&self) -> Option<Rect> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging { origin, current } => Some(Rect::from_points(origin, current)),
            DragState::Locked { rect } => Some(rect),
        }
    }

    /// True while a drag is in progress or a finished rect is pending. Host
    /// text selection stays suppressed for exactly this window.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self.state, DragState::Idle)
    }

    fn begin(&mut self, point: Point, enabled: bool, on_page: bool) -> DragUpdate {
        if enabled && on_page {
            self.state = DragState::Dragging {
                origin: point,
                current: point,
            };
            DragUpdate::Started
        } else {
            DragUpdate::Ignored
        }
    }
}
