use crate::model::record::Record;
use crate::model::resource::Column;

/// Client-side substring filter over the rows currently displayed.
///
/// It never refetches: records outside the current page are invisible to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    query: Option<String>,
}

impl SearchFilter {
    /// Applies a new query. Only the empty string shows every row; whitespace
    /// is part of the query.
    pub fn apply(&mut self, raw: &str) {
        let query = raw.to_lowercase();
        self.query = (!query.is_empty()).then_some(query);
    }

    pub fn clear(&mut self) {
        self.query = None;
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// A row is visible iff any designated column contains the query.
    pub fn is_visible(&self, record: &Record, columns: &[Column]) -> bool {
        match &self.query {
            None => true,
            Some(query) => columns.iter().any(|column| {
                record
                    .text(column.key, column.format)
                    .to_lowercase()
                    .contains(query.as_str())
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::resource::ResourceKind;
    use serde_json::json;

    fn record(value: serde_json::Value) -> Record {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn matching_is_case_insensitive() {
        let mut filter = SearchFilter::default();
        filter.apply("JO");
        let columns = ResourceKind::Laborers.search_columns();
        assert!(filter.is_visible(&record(json!({"name": "John"})), columns));
        assert!(filter.is_visible(&record(json!({"name": "Major Joe"})), columns));
        assert!(!filter.is_visible(&record(json!({"name": "Anna"})), columns));
    }

    #[test]
    fn only_designated_columns_are_searched() {
        let mut filter = SearchFilter::default();
        filter.apply("male");
        let columns = ResourceKind::Laborers.search_columns();
        assert!(!filter.is_visible(&record(json!({"name": "Ravi", "gender": "Male"})), columns));
    }

    #[test]
    fn any_designated_column_may_match() {
        let mut filter = SearchFilter::default();
        filter.apply("yard");
        let columns = ResourceKind::Attendance.search_columns();
        let row = record(json!({"laborer_name": "Sam", "site_name": "North Yard"}));
        assert!(filter.is_visible(&row, columns));
    }

    #[test]
    fn empty_query_shows_everything() {
        let mut filter = SearchFilter::default();
        filter.apply("zzz");
        filter.apply("");
        assert_eq!(filter.query(), None);
        assert!(filter.is_visible(&Record::default(), ResourceKind::Sites.search_columns()));
    }

    #[test]
    fn whitespace_only_query_is_matched_literally() {
        let mut filter = SearchFilter::default();
        filter.apply("   ");
        assert_eq!(filter.query(), Some("   "));
        let columns = ResourceKind::Laborers.search_columns();
        assert!(!filter.is_visible(&record(json!({"name": "Ravi"})), columns));
        assert!(filter.is_visible(&record(json!({"name": "Ravi   Kumar"})), columns));
    }

    #[test]
    fn trailing_space_is_part_of_the_query() {
        let mut filter = SearchFilter::default();
        filter.apply("major ");
        let columns = ResourceKind::Laborers.search_columns();
        assert!(!filter.is_visible(&record(json!({"name": "Major"})), columns));
        assert!(filter.is_visible(&record(json!({"name": "Major Joe"})), columns));
    }
}
