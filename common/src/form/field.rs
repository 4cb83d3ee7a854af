use regex::Regex;
use serde_json::{Number, Value};
use std::sync::LazyLock;

use crate::error::ConsoleError;
use crate::model::envelope::ListPage;
use crate::model::record::CellFormat;
use crate::model::resource::ResourceKind;

static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-(0[1-9]|1[0-2])-(0[1-9]|[12]\d|3[01])$").unwrap());

/// A dropdown whose options come from another resource's list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lookup {
    pub source: ResourceKind,
    /// Record field submitted as the value.
    pub value_key: &'static str,
    /// Record field shown to the user.
    pub label_key: &'static str,
    /// Submit the value as a JSON number instead of a string.
    pub numeric: bool,
}

impl Lookup {
    /// `(value, label)` pairs for the dropdown, skipping records without a value.
    pub fn options(&self, page: &ListPage) -> Vec<(String, String)> {
        page.records
            .iter()
            .filter(|record| record.get(self.value_key).is_some())
            .map(|record| {
                (
                    record.text(self.value_key, CellFormat::Plain),
                    record.text(self.label_key, CellFormat::Plain),
                )
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Decimal,
    /// `YYYY-MM-DD`, as produced by `<input type="date">`.
    Date,
    Choice(&'static [&'static str]),
    Lookup(Lookup),
}

/// One input of a resource form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    /// Converts raw input text into the JSON value sent to the backend.
    ///
    /// Empty optional fields become `null`.
    pub fn parse_input(&self, raw: &str) -> Result<Value, ConsoleError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return if self.required {
                Err(ConsoleError::invalid_field(self.label, "is required"))
            } else {
                Ok(Value::Null)
            };
        }

        match self.kind {
            FieldKind::Text => Ok(Value::String(raw.to_string())),
            FieldKind::Integer => self.integer(raw),
            FieldKind::Decimal => raw
                .parse::<f64>()
                .ok()
                .and_then(Number::from_f64)
                .map(Value::Number)
                .ok_or_else(|| ConsoleError::invalid_field(self.label, "must be a number")),
            FieldKind::Date if DATE_PATTERN.is_match(raw) => Ok(Value::String(raw.to_string())),
            FieldKind::Date => Err(ConsoleError::invalid_field(
                self.label,
                "must be a date (YYYY-MM-DD)",
            )),
            FieldKind::Choice(options) if options.iter().any(|o| *o == raw) => {
                Ok(Value::String(raw.to_string()))
            }
            FieldKind::Choice(options) => Err(ConsoleError::invalid_field(
                self.label,
                format!("must be one of {}", options.join(", ")),
            )),
            FieldKind::Lookup(lookup) if lookup.numeric => self.integer(raw),
            FieldKind::Lookup(_) => Ok(Value::String(raw.to_string())),
        }
    }

    /// Text shown in the input for a value loaded from the backend.
    pub fn input_text(&self, value: Option<&Value>) -> String {
        match value {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    fn integer(&self, raw: &str) -> Result<Value, ConsoleError> {
        raw.parse::<i64>()
            .map(Value::from)
            .map_err(|_| ConsoleError::invalid_field(self.label, "must be a whole number"))
    }
}
