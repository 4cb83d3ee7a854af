//! Normalization of list responses.
//!
//! The backend is not consistent about list shapes: laborers, sites and
//! materials answer with a bare JSON array, attendance with
//! `{results, prev, next, total}` and payments with `{results, prev, next}`
//! plus page bookkeeping fields the console ignores. Everything is folded into
//! a single `ListPage` right after decoding.

use serde::Deserialize;
use serde_json::Value;

use crate::error::ConsoleError;
use crate::model::record::Record;

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope {
    Plain(Vec<Record>),
    Paged {
        results: Vec<Record>,
        #[serde(default)]
        prev: Option<Value>,
        #[serde(default)]
        next: Option<Value>,
        #[serde(default)]
        total: Option<u64>,
    },
}

/// Whether the server says there is a neighbouring page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLinks {
    pub has_prev: bool,
    pub has_next: bool,
}

/// One page of records in the shape the list controller works with.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListPage {
    pub records: Vec<Record>,
    /// `None` when the endpoint answered with a bare array.
    pub links: Option<PageLinks>,
    pub total: Option<u64>,
}

impl ListPage {
    pub fn parse(body: &str) -> Result<Self, ConsoleError> {
        serde_json::from_str::<ListEnvelope>(body)
            .map(ListPage::from)
            .map_err(|e| ConsoleError::MalformedBody(e.to_string()))
    }

    /// Attaches a total obtained out of band.
    pub fn with_total(mut self, total: u64) -> Self {
        self.total = Some(total);
        self
    }
}

impl From<ListEnvelope> for ListPage {
    fn from(envelope: ListEnvelope) -> Self {
        match envelope {
            ListEnvelope::Plain(records) => ListPage {
                records,
                links: None,
                total: None,
            },
            ListEnvelope::Paged {
                results,
                prev,
                next,
                total,
            } => ListPage {
                records: results,
                links: Some(PageLinks {
                    has_prev: prev.is_some(),
                    has_next: next.is_some(),
                }),
                total,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_arrays_have_no_links() {
        let page = ListPage::parse(r#"[{"id": 1, "name": "A"}, {"id": 2, "name": "B"}]"#).unwrap();
        assert_eq!(page.records.len(), 2);
        assert_eq!(page.links, None);
        assert_eq!(page.total, None);
    }

    #[test]
    fn attendance_envelope_keeps_links_and_total() {
        let body = r#"{"results": [{"id": 4}], "prev": 10, "next": null, "total": 21}"#;
        let page = ListPage::parse(body).unwrap();
        assert_eq!(page.records.len(), 1);
        assert_eq!(
            page.links,
            Some(PageLinks {
                has_prev: true,
                has_next: false
            })
        );
        assert_eq!(page.total, Some(21));
    }

    #[test]
    fn payment_envelope_ignores_bookkeeping_fields() {
        let body = r#"{"results": [], "prev": null, "next": 2, "current": 1, "totalPages": 4}"#;
        let page = ListPage::parse(body).unwrap();
        assert!(page.records.is_empty());
        assert_eq!(
            page.links,
            Some(PageLinks {
                has_prev: false,
                has_next: true
            })
        );
    }

    #[test]
    fn unexpected_shapes_are_malformed() {
        assert!(matches!(
            ListPage::parse(r#"{"detail": "oops"}"#),
            Err(ConsoleError::MalformedBody(_))
        ));
        assert!(matches!(
            ListPage::parse("<html>"),
            Err(ConsoleError::MalformedBody(_))
        ));
    }
}
