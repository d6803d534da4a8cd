//! Partition a flat highlight collection into per-page render groups

use std::collections::BTreeMap;

use crate::coords::ScaledRect;
use crate::geometry::PageNumber;
use crate::highlight::Highlight;

/// Group highlights by the pages they touch, including `transient` (the
/// in-progress ghost) so it renders exactly like a stored highlight.
///
/// A multi-page highlight is emitted once per touched page as a page-scoped
/// copy: `position.page_number` set to the group page, `rects` filtered to
/// that page's rects, bounding rect kept as captured. A page appears only if
/// a highlight contributed a rect to it or is the highlight's own page (which
/// covers area highlights, whose rect list is empty).
///
/// Ascending page order; input order within each page. Two calls over the
/// same input produce structurally equal maps, so callers can diff cheaply.
#[must_use]
pub fn group_by_page(
    highlights: &[Highlight],
    transient: Option<&Highlight>,
) -> BTreeMap<PageNumber, Vec<Highlight>> {
    let mut grouped: BTreeMap<PageNumber, Vec<Highlight>> = BTreeMap::new();

    for highlight in highlights.iter().chain(transient) {
        let own_page = highlight.position.page_number;

        let mut pages = vec![own_page];
        for rect in &highlight.position.rects {
            if let Some(page) = rect.page_number {
                if !pages.contains(&page) {
                    pages.push(page);
                }
            }
        }

        for &page in &pages {
            let rects: Vec<ScaledRect> = highlight
                .position
                .rects
                .iter()
                .filter(|rect| rect.page_number.unwrap_or(own_page) == page)
                .copied()
                .collect();

            if rects.is_empty() && page != own_page {
                continue;
            }

            let mut scoped = highlight.clone();
            scoped.position.page_number = page;
            scoped.position.rects = rects;
            grouped.entry(page).or_default().push(scoped);
        }
    }

    grouped
}
