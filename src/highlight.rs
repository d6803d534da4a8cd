//! Highlight records: what gets persisted by the host and what gets drawn

use serde::{Deserialize, Serialize};

use crate::coords::ScaledRect;
use crate::geometry::{union, PageNumber, Rect};

/// What a highlight marks on the page.
///
/// The discriminant doubles as the highlight kind: a `Text` highlight covers
/// the selected line rects, an `Image` highlight is a single dragged
/// rectangle with a captured screenshot of the region.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HighlightContent {
    Text {
        text: String,
    },
    Image {
        /// Region screenshot as a data URI.
        image: String,
    },
}

/// User note attached to a highlight. The only part of a stored highlight
/// that may change after creation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
}

impl Comment {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emoji: None,
        }
    }

    #[must_use]
    pub fn with_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = Some(emoji.into());
        self
    }
}

/// Where a highlight sits in live viewport coordinates.
///
/// Recomputed from the stored form on every zoom or layout change and thrown
/// away afterwards; deliberately not serializable.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Position {
    pub bounding_rect: Rect,
    pub rects: Vec<Rect>,
    pub page_number: PageNumber,
}

impl Position {
    /// `bounding_rect` must cover the union of `rects` whenever `rects` is
    /// non-empty; checked in debug builds.
    #[must_use]
    pub fn new(bounding_rect: Rect, rects: Vec<Rect>, page_number: PageNumber) -> Self {
        if cfg!(debug_assertions) {
            if let Ok(hull) = union(&rects) {
                let slack = 0.5;
                debug_assert!(
                    bounding_rect.left <= hull.left + slack
                        && bounding_rect.top <= hull.top + slack
                        && bounding_rect.right() >= hull.right() - slack
                        && bounding_rect.bottom() >= hull.bottom() - slack,
                    "bounding rect {bounding_rect:?} does not cover the selection rects {hull:?}"
                );
            }
        }
        Self {
            bounding_rect,
            rects,
            page_number,
        }
    }
}

/// Where a highlight sits in the zoom-independent stored form.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScaledPosition {
    pub bounding_rect: ScaledRect,
    pub rects: Vec<ScaledRect>,
    pub page_number: PageNumber,
    /// Set when the stored values are native page coordinates (for example
    /// highlights imported from embedded document annotations) rather than
    /// captured viewport values. Fixed at capture and honored on every
    /// subsequent render of this position.
    #[serde(default)]
    pub use_pdf_coordinates: bool,
}

impl ScaledPosition {
    #[must_use]
    pub fn new(bounding_rect: ScaledRect, rects: Vec<ScaledRect>, page_number: PageNumber) -> Self {
        Self {
            bounding_rect,
            rects,
            page_number,
            use_pdf_coordinates: false,
        }
    }

    #[must_use]
    pub fn with_pdf_coordinates(mut self) -> Self {
        self.use_pdf_coordinates = true;
        self
    }
}

/// A highlight record, generic over the position form.
///
/// [`Highlight`] (stored form) is what hosts persist and feed back in;
/// [`ViewportHighlight`] (viewport form) exists only for the duration of a
/// render pass.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HighlightRecord<P> {
    /// `None` while the highlight is a transient draft; assigned by the host
    /// when it persists the record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub content: HighlightContent,
    pub position: P,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<Comment>,
}

/// Stored highlight, anchored in zoom-independent coordinates.
pub type Highlight = HighlightRecord<ScaledPosition>;

/// Highlight resolved against the current viewport for one render pass.
pub type ViewportHighlight = HighlightRecord<Position>;

impl<P> HighlightRecord<P> {
    /// True while the highlight has not been persisted yet.
    #[must_use]
    pub fn is_ghost(&self) -> bool {
        self.id.is_none()
    }

    /// True for area highlights, the ones drawn as a dragged rectangle with
    /// [`HighlightContent::Image`] content.
    #[must_use]
    pub fn is_area(&self) -> bool {
        matches!(self.content, HighlightContent::Image { .. })
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_comment(mut self, comment: Comment) -> Self {
        self.comment = Some(comment);
        self
    }
}

impl Highlight {
    /// Draft for a finished text selection. Text highlights carry the
    /// selected line rects; checked in debug builds.
    #[must_use]
    pub fn text(text: impl Into<String>, position: ScaledPosition) -> Self {
        debug_assert!(
            !position.rects.is_empty(),
            "a text highlight needs at least one selection rect"
        );
        Self {
            id: None,
            content: HighlightContent::Text { text: text.into() },
            position,
            comment: None,
        }
    }

    /// Draft for a finished area selection. Area highlights are defined by
    /// their bounding rect alone; checked in debug builds.
    #[must_use]
    pub fn area(image: impl Into<String>, position: ScaledPosition) -> Self {
        debug_assert!(
            position.rects.is_empty(),
            "an area highlight carries no selection rects"
        );
        Self {
            id: None,
            content: HighlightContent::Image {
                image: image.into(),
            },
            position,
            comment: None,
        }
    }
}
