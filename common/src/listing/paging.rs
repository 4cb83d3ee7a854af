use crate::model::envelope::ListPage;

/// How a list decides whether a "next" page exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagingPolicy {
    /// A batch shorter than the page size is the last page.
    BatchHeuristic,
    /// The server's `prev`/`next` fields decide. Bare arrays fall back to
    /// `BatchHeuristic`.
    ServerLinks,
    /// `ceil(total / page_size)` pages. Without a total, `BatchHeuristic`.
    TotalCount,
}

/// Current page (1-based) and the fixed page size of one list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    page: u32,
    page_size: u32,
}

impl PageCursor {
    pub fn new(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// The same list positioned at `page`, clamped to 1.
    pub fn at(self, page: u32) -> Self {
        Self {
            page: page.max(1),
            ..self
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.page_size)
    }
}

/// State of the pagination affordances after a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageControls {
    pub page: u32,
    pub has_prev: bool,
    pub has_next: bool,
    pub total_pages: Option<u64>,
}

impl PageControls {
    /// Before the first load: page 1, nothing to navigate to.
    pub fn initial() -> Self {
        Self {
            page: 1,
            has_prev: false,
            has_next: false,
            total_pages: None,
        }
    }

    pub fn compute(policy: PagingPolicy, cursor: PageCursor, page: &ListPage) -> Self {
        let page_size = u64::from(cursor.page_size());
        let current = u64::from(cursor.page());
        let full_batch = page.records.len() as u64 >= page_size;
        let total_pages = page.total.map(|total| total.div_ceil(page_size));
        let not_first = cursor.page() > 1;

        let (has_prev, has_next) = match (policy, page.links, total_pages) {
            (PagingPolicy::ServerLinks, Some(links), _) => {
                (not_first && links.has_prev, links.has_next)
            }
            (PagingPolicy::TotalCount, _, Some(pages)) => (not_first, current < pages),
            _ => (not_first, full_batch),
        };

        Self {
            page: cursor.page(),
            has_prev,
            has_next,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::envelope::PageLinks;
    use crate::model::record::Record;

    fn batch(len: usize) -> ListPage {
        ListPage {
            records: vec![Record::default(); len],
            links: None,
            total: None,
        }
    }

    #[test]
    fn cursor_never_goes_below_one() {
        let cursor = PageCursor::new(10).at(0);
        assert_eq!(cursor.page(), 1);
        assert_eq!(cursor.offset(), 0);
        assert_eq!(PageCursor::new(0).page_size(), 1);
    }

    #[test]
    fn short_batch_is_last_page() {
        // 25 records, page size 10: page 3 holds 5.
        let cursor = PageCursor::new(10).at(3);
        assert_eq!(cursor.offset(), 20);
        let controls = PageControls::compute(PagingPolicy::BatchHeuristic, cursor, &batch(5));
        assert_eq!(controls.page, 3);
        assert!(controls.has_prev);
        assert!(!controls.has_next);
    }

    #[test]
    fn full_batch_keeps_next_enabled() {
        let cursor = PageCursor::new(10);
        let controls = PageControls::compute(PagingPolicy::BatchHeuristic, cursor, &batch(10));
        assert!(!controls.has_prev);
        assert!(controls.has_next);
    }

    #[test]
    fn totals_bound_the_page_count() {
        let cursor = PageCursor::new(10).at(2);
        let page = batch(10).with_total(25);
        let controls = PageControls::compute(PagingPolicy::TotalCount, cursor, &page);
        assert_eq!(controls.total_pages, Some(3));
        assert!(controls.has_next);

        let last = PageControls::compute(PagingPolicy::TotalCount, cursor.at(3), &batch(5).with_total(25));
        assert!(!last.has_next);
    }

    #[test]
    fn empty_total_disables_next() {
        let controls =
            PageControls::compute(PagingPolicy::TotalCount, PageCursor::new(10), &batch(0).with_total(0));
        assert_eq!(controls.total_pages, Some(0));
        assert!(!controls.has_next);
        assert!(!controls.has_prev);
    }

    #[test]
    fn server_links_win_over_batch_length() {
        let mut page = batch(10);
        page.links = Some(PageLinks {
            has_prev: true,
            has_next: false,
        });
        let controls = PageControls::compute(PagingPolicy::ServerLinks, PageCursor::new(10).at(4), &page);
        assert!(controls.has_prev);
        assert!(!controls.has_next);
    }

    #[test]
    fn server_links_fall_back_for_bare_arrays() {
        let controls =
            PageControls::compute(PagingPolicy::ServerLinks, PageCursor::new(10), &batch(3));
        assert!(!controls.has_next);
    }

    #[test]
    fn previous_is_disabled_on_page_one_even_if_server_disagrees() {
        let mut page = batch(10);
        page.links = Some(PageLinks {
            has_prev: true,
            has_next: true,
        });
        let controls = PageControls::compute(PagingPolicy::ServerLinks, PageCursor::new(10), &page);
        assert!(!controls.has_prev);
    }
}
