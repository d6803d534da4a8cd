//! Viewport-independent highlights for rendered document pages.
//!
//! Highlights are captured once from live viewport geometry into a
//! zoom-independent stored form and re-resolved against the current layout
//! on every render. The host viewer stays in charge of rendering, events and
//! persistence; it talks to this crate through the [`view::DocumentView`]
//! and [`coords::PageViewport`] capability traits.

pub mod coords;
pub mod debounce;
pub mod drag;
pub mod geometry;
pub mod grouping;
pub mod highlight;
pub mod selection;
pub mod session;
pub mod store;
pub mod tip;
pub mod view;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use coords::{scaled_to_viewport, viewport_to_scaled, LinearViewport, PageViewport, ScaledRect};
pub use debounce::Debouncer;
pub use drag::{AreaSelection, DragState, DragUpdate};
pub use geometry::{union, EmptyInputError, PageNumber, Point, Rect};
pub use grouping::group_by_page;
pub use highlight::{
    Comment, Highlight, HighlightContent, HighlightRecord, Position, ScaledPosition,
    ViewportHighlight,
};
pub use selection::{PageSelection, SelectionError};
pub use session::{HighlightEvent, HighlighterSession, PointerInput, SessionOptions};
pub use store::{HighlightStore, UnknownIdError};
pub use tip::{place_tip, TipPlacement, TipSize};
pub use view::{resolve_highlight, resolve_highlights, DocumentView, PageElement};
