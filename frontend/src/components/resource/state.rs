//! Runtime state of one resource panel.
//!
//! Pagination, filtering and the editing token live in the `common` controllers;
//! this struct adds what only the browser needs: the search box text, dropdown
//! options, the sheet's `NodeRef` and dirty tracking.

use std::collections::HashMap;

use common::form::FormBinder;
use common::listing::debounce::Debouncer;
use common::listing::ListController;
use common::model::resource::ResourceKind;
use yew::prelude::*;

use crate::helpers::compute_md5;

use super::props::ResourcePanelProps;

pub struct ResourcePanel {
    pub list: ListController,

    pub form: FormBinder,

    pub debouncer: Debouncer,

    /// Text currently in the search box, which may not be applied yet.
    pub search_text: String,

    /// Dropdown options per lookup field key, as `(value, label)`.
    pub lookups: HashMap<&'static str, Vec<(String, String)>>,

    pub form_sheet_ref: NodeRef,

    /// Whether the form sheet is showing.
    pub form_open: bool,

    /// A submit is in flight; the submit button is disabled meanwhile.
    pub saving: bool,

    /// MD5 of the form snapshot when it was opened or loaded.
    pub form_baseline_md5: Option<String>,

    /// Guard for the first-render load.
    pub loaded: bool,
}

impl ResourcePanel {
    pub fn new(props: &ResourcePanelProps) -> Self {
        let kind: ResourceKind = props.kind;
        Self {
            list: ListController::new(kind, props.config.page_size),
            form: FormBinder::new(kind),
            debouncer: Debouncer::new(props.config.search_debounce_ms),
            search_text: String::new(),
            lookups: HashMap::new(),
            form_sheet_ref: NodeRef::default(),
            form_open: false,
            saving: false,
            form_baseline_md5: None,
            loaded: false,
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.form_baseline_md5
            .as_ref()
            .is_some_and(|baseline| *baseline != compute_md5(&self.form.snapshot()))
    }

    /// Records the current form contents as the saved state.
    pub fn mark_form_clean(&mut self, props: &ResourcePanelProps) {
        self.form_baseline_md5 = Some(compute_md5(&self.form.snapshot()));
        self.publish_dirty_flag(props);
    }

    /// Reports this panel's dirty state to the shell, which owns the page flag.
    pub fn publish_dirty_flag(&self, props: &ResourcePanelProps) {
        props.on_dirty_changed.emit((self.form.kind(), self.is_dirty()));
    }
}
