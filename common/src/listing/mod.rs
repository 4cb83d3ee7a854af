//! List controller: the in-memory page of records a panel displays.
//!
//! The controller owns the page cursor, the last fetched records, the
//! pagination controls and the applied search filter. Rendering is a pure
//! projection of that state through `rows`, so pagination and filtering are
//! exercised here without any DOM.

pub mod debounce;
pub mod filter;
pub mod paging;

use crate::model::envelope::ListPage;
use crate::model::record::{Record, RecordId};
use crate::model::resource::ResourceKind;
use crate::requests::ApiRequest;
use filter::SearchFilter;
use paging::{PageControls, PageCursor, PagingPolicy};

/// What one table row shows.
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub id: Option<RecordId>,
    pub cells: Vec<String>,
    /// `false` rows stay in the table, hidden.
    pub visible: bool,
}

#[derive(Debug, Clone)]
pub struct ListController {
    kind: ResourceKind,
    cursor: PageCursor,
    records: Vec<Record>,
    controls: PageControls,
    filter: SearchFilter,
    loading: bool,
}

impl ListController {
    pub fn new(kind: ResourceKind, page_size: u32) -> Self {
        Self {
            kind,
            cursor: PageCursor::new(page_size),
            records: Vec::new(),
            controls: PageControls::initial(),
            filter: SearchFilter::default(),
            loading: false,
        }
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn page(&self) -> u32 {
        self.cursor.page()
    }

    pub fn controls(&self) -> PageControls {
        self.controls
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn filter(&self) -> &SearchFilter {
        &self.filter
    }

    /// Starts loading `page` and returns the request to send.
    ///
    /// The cursor only moves once the response arrives.
    pub fn begin_load(&mut self, page: u32) -> ApiRequest {
        self.loading = true;
        ApiRequest::list(self.kind, self.cursor.at(page))
    }

    pub fn reload(&mut self) -> ApiRequest {
        self.begin_load(self.cursor.page())
    }

    pub fn next_page(&mut self) -> Option<(u32, ApiRequest)> {
        if !self.controls.has_next {
            return None;
        }
        let page = self.cursor.page() + 1;
        Some((page, self.begin_load(page)))
    }

    pub fn previous_page(&mut self) -> Option<(u32, ApiRequest)> {
        if !self.controls.has_prev || self.cursor.page() <= 1 {
            return None;
        }
        let page = self.cursor.page() - 1;
        Some((page, self.begin_load(page)))
    }

    /// The out-of-band count request `page` still needs, if any.
    ///
    /// Total-based lists whose endpoint reports no total are counted with an
    /// unpaged fetch of the whole collection. A backend that applies its own
    /// default limit to unpaged lists caps this count, so "next" stays
    /// disabled past that many records; that is the backend's behavior, kept
    /// as is.
    pub fn count_request(&self, page: &ListPage) -> Option<ApiRequest> {
        (self.kind.paging_policy() == PagingPolicy::TotalCount && page.total.is_none())
            .then(|| ApiRequest::list_all(self.kind))
    }

    /// Replaces the displayed records with a freshly loaded page.
    ///
    /// The applied filter is dropped so the new rows start visible.
    pub fn finish_load(&mut self, page: u32, result: ListPage) {
        self.cursor = self.cursor.at(page);
        self.controls = PageControls::compute(self.kind.paging_policy(), self.cursor, &result);
        self.records = result.records;
        self.filter.clear();
        self.loading = false;
    }

    /// A failed load leaves records, cursor and controls as they were.
    pub fn fail_load(&mut self) {
        self.loading = false;
    }

    pub fn apply_filter(&mut self, query: &str) {
        self.filter.apply(query);
    }

    pub fn rows(&self) -> Vec<RowView> {
        let columns = self.kind.columns();
        let search = self.kind.search_columns();
        self.records
            .iter()
            .map(|record| RowView {
                id: record.id(),
                cells: columns
                    .iter()
                    .map(|column| record.text(column.key, column.format))
                    .collect(),
                visible: self.filter.is_visible(record, search),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn laborers(names: &[&str]) -> ListPage {
        let body = serde_json::Value::Array(
            names
                .iter()
                .enumerate()
                .map(|(i, name)| json!({"id": i + 1, "name": name, "age": 30}))
                .collect(),
        );
        ListPage::parse(&body.to_string()).unwrap()
    }

    #[test]
    fn third_page_of_twenty_five() {
        let mut list = ListController::new(ResourceKind::Laborers, 10);
        let req = list.begin_load(3);
        assert_eq!(req.path, "/labours/?skip=20&limit=10");
        assert!(list.is_loading());

        list.finish_load(3, laborers(&["a", "b", "c", "d", "e"]));
        assert_eq!(list.page(), 3);
        assert_eq!(list.rows().len(), 5);
        assert!(!list.controls().has_next);
        assert!(list.controls().has_prev);
        assert!(!list.is_loading());
        assert_eq!(list.next_page(), None);
    }

    #[test]
    fn failed_load_keeps_previous_content() {
        let mut list = ListController::new(ResourceKind::Laborers, 2);
        list.begin_load(1);
        list.finish_load(1, laborers(&["Ann", "Bob"]));
        let before = list.rows();

        let (page, _) = list.next_page().unwrap();
        assert_eq!(page, 2);
        list.fail_load();

        assert_eq!(list.page(), 1);
        assert_eq!(list.rows(), before);
        assert!(list.controls().has_next);
        assert!(!list.is_loading());
    }

    #[test]
    fn previous_is_unavailable_on_first_page() {
        let mut list = ListController::new(ResourceKind::Laborers, 10);
        list.begin_load(1);
        list.finish_load(1, laborers(&["Ann"]));
        assert_eq!(list.previous_page(), None);
    }

    #[test]
    fn rows_project_columns_and_filter() {
        let mut list = ListController::new(ResourceKind::Laborers, 10);
        list.begin_load(1);
        list.finish_load(1, laborers(&["John", "Anna", "Johnny"]));
        list.apply_filter("john");

        let rows = list.rows();
        assert_eq!(rows[0].cells, vec!["John", "30", "N/A", "N/A"]);
        assert_eq!(rows[0].id, Some(RecordId::new("1")));
        let visible: Vec<bool> = rows.iter().map(|r| r.visible).collect();
        assert_eq!(visible, vec![true, false, true]);
    }

    #[test]
    fn reload_shows_all_rows_again() {
        let mut list = ListController::new(ResourceKind::Laborers, 10);
        list.begin_load(1);
        list.finish_load(1, laborers(&["John", "Anna"]));
        list.apply_filter("zzz");
        assert!(list.rows().iter().all(|r| !r.visible));

        let req = list.reload();
        assert_eq!(req.path, "/labours/?skip=0&limit=10");
        list.finish_load(1, laborers(&["John", "Anna"]));
        assert!(list.rows().iter().all(|r| r.visible));
    }

    #[test]
    fn sites_count_out_of_band_unless_total_is_reported() {
        let list = ListController::new(ResourceKind::Sites, 10);
        let bare = ListPage::parse(r#"[{"id": 1, "name": "Depot"}]"#).unwrap();
        assert_eq!(
            list.count_request(&bare).map(|r| r.path),
            Some("/sites/".to_string())
        );
        assert_eq!(list.count_request(&bare.with_total(1)), None);

        let laborers = ListController::new(ResourceKind::Laborers, 10);
        assert_eq!(laborers.count_request(&ListPage::default()), None);
    }

    #[test]
    fn capped_site_count_keeps_next_disabled() {
        let names: Vec<String> = (1..=10).map(|i| format!("Site {i}")).collect();
        let names: Vec<&str> = names.iter().map(String::as_str).collect();
        let mut list = ListController::new(ResourceKind::Sites, 10);
        list.begin_load(1);
        // The unpaged count came back with the backend's default 10 rows.
        list.finish_load(1, laborers(&names).with_total(10));
        assert_eq!(list.controls().total_pages, Some(1));
        assert!(!list.controls().has_next);
    }
}
