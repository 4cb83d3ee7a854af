//! Edit/create form binder.
//!
//! Holds the raw text of every input plus the Editing Token. The token decides
//! whether a submit creates or updates; it is set by `begin_edit`, cleared by
//! `complete` and `reset`, and left untouched by a failed submit.

pub mod dirty;
pub mod field;

use serde_json::Map;
use std::collections::BTreeMap;

use crate::error::ConsoleError;
use crate::model::record::{Record, RecordId};
use crate::model::resource::ResourceKind;
use crate::requests::ApiRequest;
use field::FieldSpec;

#[derive(Debug, Clone, PartialEq)]
pub struct FormBinder {
    kind: ResourceKind,
    values: BTreeMap<&'static str, String>,
    editing: Option<RecordId>,
}

impl FormBinder {
    pub fn new(kind: ResourceKind) -> Self {
        Self {
            kind,
            values: kind.fields().iter().map(|f| (f.key, String::new())).collect(),
            editing: None,
        }
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        self.kind.fields()
    }

    /// The Editing Token.
    pub fn editing(&self) -> Option<&RecordId> {
        self.editing.as_ref()
    }

    pub fn value(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or_default()
    }

    /// Sets one input. Keys outside the form schema are ignored.
    pub fn set(&mut self, key: &str, raw: impl Into<String>) {
        if let Some(value) = self.values.get_mut(key) {
            *value = raw.into();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.values().all(|v| v.trim().is_empty())
    }

    /// Copies `record` into the inputs and marks `id` as being edited.
    pub fn begin_edit(&mut self, id: RecordId, record: &Record) {
        for field in self.kind.fields() {
            self.values
                .insert(field.key, field.input_text(record.get(field.key)));
        }
        self.editing = Some(id);
    }

    /// Builds the JSON body from the inputs, validating every field.
    pub fn payload(&self) -> Result<Map<String, serde_json::Value>, ConsoleError> {
        self.kind
            .fields()
            .iter()
            .map(|field| {
                field
                    .parse_input(self.value(field.key))
                    .map(|value| (field.key.to_string(), value))
            })
            .collect()
    }

    /// Update when a record is being edited, create otherwise.
    pub fn submit_request(&self) -> Result<ApiRequest, ConsoleError> {
        let payload = self.payload()?;
        Ok(match &self.editing {
            Some(id) => ApiRequest::update(self.kind, id, payload),
            None => ApiRequest::create(self.kind, payload),
        })
    }

    /// After a successful submit: empty form, no token.
    pub fn complete(&mut self) {
        self.reset();
    }

    /// Cancel: empty form, no token.
    pub fn reset(&mut self) {
        self.values.values_mut().for_each(String::clear);
        self.editing = None;
    }

    /// Canonical text of the inputs, for change detection.
    pub fn snapshot(&self) -> String {
        self.values
            .iter()
            .map(|(key, value)| format!("{}={}\n", key, value))
            .collect()
    }
}
