use num_format::{Locale, ToFormattedString};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Opaque identifier of a backend record, kept as the string used in URLs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        RecordId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How a cell value is turned into display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellFormat {
    Plain,
    /// Two decimals with thousands separators (wages, payment amounts).
    Amount,
}

/// A record as returned by the backend: field name to scalar value.
///
/// The console never owns these; it only displays the last fetched page and
/// copies single records into forms.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn id(&self) -> Option<RecordId> {
        match self.0.get("id") {
            Some(Value::Number(n)) => Some(RecordId(n.to_string())),
            Some(Value::String(s)) if !s.is_empty() => Some(RecordId(s.clone())),
            _ => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Display text for one column. Missing and null values read `N/A`.
    pub fn text(&self, key: &str, format: CellFormat) -> String {
        match (self.0.get(key), format) {
            (None | Some(Value::Null), _) => "N/A".to_string(),
            (Some(Value::Number(n)), CellFormat::Amount) => match n.as_f64() {
                Some(v) => format_amount(v),
                None => n.to_string(),
            },
            (Some(Value::String(s)), CellFormat::Amount) => match s.trim().parse::<f64>() {
                Ok(v) => format_amount(v),
                Err(_) => s.clone(),
            },
            (Some(Value::String(s)), CellFormat::Plain) => s.clone(),
            (Some(Value::Number(n)), CellFormat::Plain) => n.to_string(),
            (Some(Value::Bool(true)), _) => "Yes".to_string(),
            (Some(Value::Bool(false)), _) => "No".to_string(),
            (Some(other), _) => other.to_string(),
        }
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Record(fields)
    }
}

fn format_amount(value: f64) -> String {
    let cents = (value * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    format!(
        "{}{}.{:02}",
        sign,
        (cents / 100).to_formatted_string(&Locale::en),
        cents % 100
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn numeric_and_string_ids() {
        assert_eq!(record(json!({"id": 7})).id(), Some(RecordId::new("7")));
        assert_eq!(record(json!({"id": "a-1"})).id(), Some(RecordId::new("a-1")));
        assert_eq!(record(json!({"id": ""})).id(), None);
        assert_eq!(record(json!({"name": "x"})).id(), None);
    }

    #[test]
    fn missing_and_null_cells_read_not_available() {
        let r = record(json!({"description": null}));
        assert_eq!(r.text("description", CellFormat::Plain), "N/A");
        assert_eq!(r.text("material_name", CellFormat::Plain), "N/A");
    }

    #[test]
    fn amounts_get_separators_and_cents() {
        let r = record(json!({"amount": 1234567.5, "wage": "450", "neg": -3.456}));
        assert_eq!(r.text("amount", CellFormat::Amount), "1,234,567.50");
        assert_eq!(r.text("wage", CellFormat::Amount), "450.00");
        assert_eq!(r.text("neg", CellFormat::Amount), "-3.46");
    }

    #[test]
    fn plain_cells_keep_backend_text() {
        let r = record(json!({"name": "John", "age": 31, "active": true}));
        assert_eq!(r.text("name", CellFormat::Plain), "John");
        assert_eq!(r.text("age", CellFormat::Plain), "31");
        assert_eq!(r.text("active", CellFormat::Plain), "Yes");
    }
}
