pub mod fixtures {
    use crate::coords::{LinearViewport, PageViewport};
    use crate::geometry::{PageNumber, Point, Rect};
    use crate::view::{DocumentView, PageElement};

    /// A [`DocumentView`] over a fixed set of laid-out pages.
    ///
    /// Pages are registered with a builder; scrolls are recorded for
    /// assertions instead of moving anything.
    pub struct FixedDocumentView {
        pages: Vec<FixedPage>,
        container: Rect,
        captures: bool,
        scrolled: Vec<(PageNumber, Point)>,
    }

    struct FixedPage {
        page_number: PageNumber,
        viewport: LinearViewport,
        bounds: Rect,
    }

    impl FixedDocumentView {
        pub fn new(container: Rect) -> Self {
            Self {
                pages: Vec::new(),
                container,
                captures: true,
                scrolled: Vec::new(),
            }
        }

        /// Register a laid-out page with its render descriptor and on-screen
        /// bounds.
        pub fn with_page(
            mut self,
            page_number: PageNumber,
            viewport: LinearViewport,
            bounds: Rect,
        ) -> Self {
            self.pages.push(FixedPage {
                page_number,
                viewport,
                bounds,
            });
            self
        }

        /// Simulate a viewer that cannot screenshot regions.
        pub fn without_capture(mut self) -> Self {
            self.captures = false;
            self
        }

        /// Scroll requests received so far, in order.
        pub fn scrolled(&self) -> &[(PageNumber, Point)] {
            &self.scrolled
        }

        fn page(&self, page_number: PageNumber) -> Option<&FixedPage> {
            self.pages.iter().find(|p| p.page_number == page_number)
        }
    }

    impl DocumentView for FixedDocumentView {
        fn viewport(&self, page: PageNumber) -> Option<&dyn PageViewport> {
            self.page(page).map(|p| &p.viewport as &dyn PageViewport)
        }

        fn page_element(&self, page: PageNumber) -> Option<PageElement> {
            self.page(page).map(|p| PageElement {
                page_number: p.page_number,
                bounds: p.bounds,
            })
        }

        fn page_at(&self, point: Point) -> Option<PageNumber> {
            self.pages
                .iter()
                .find(|p| p.bounds.contains_point(point))
                .map(|p| p.page_number)
        }

        fn capture_region(&self, page: PageNumber, _rect: &Rect) -> Option<String> {
            if self.captures && self.page(page).is_some() {
                Some(format!("data:image/png;base64,capture-of-page-{page}"))
            } else {
                None
            }
        }

        fn scroll_to(&mut self, page: PageNumber, destination: Point) {
            self.scrolled.push((page, destination));
        }

        fn page_count(&self) -> PageNumber {
            self.pages.len() as PageNumber
        }

        fn container_bounds(&self) -> Rect {
            self.container
        }
    }
}
