//! Static description of every resource the console manages.
//!
//! A `ResourceKind` carries everything the generic panel needs: the REST
//! endpoint, table columns, which columns the search box looks at, the form
//! schema, the pagination policy that fits what the endpoint reports, and the
//! lists that must be refreshed when a record of this kind is deleted.

use serde_json::{Map, Value};

use crate::form::field::{FieldKind, FieldSpec, Lookup};
use crate::listing::paging::PagingPolicy;
use crate::model::record::{CellFormat, RecordId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Laborers,
    Attendance,
    Materials,
    Sites,
    Payments,
}

/// One table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub header: &'static str,
    pub format: CellFormat,
}

/// Row affordances beyond edit and delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    /// Opens the attendance form for the laborer on this row.
    RecordAttendance,
}

impl RowAction {
    pub fn label(self) -> &'static str {
        match self {
            RowAction::RecordAttendance => "Record Attendance",
        }
    }

    /// The resource whose create form the action opens.
    pub fn target(self) -> ResourceKind {
        match self {
            RowAction::RecordAttendance => ResourceKind::Attendance,
        }
    }

    /// Inputs pre-filled in the target form for the row `id`.
    pub fn prefill(self, id: &RecordId) -> Vec<(&'static str, String)> {
        match self {
            RowAction::RecordAttendance => vec![("laborer_id", id.to_string())],
        }
    }
}

const fn col(key: &'static str, header: &'static str) -> Column {
    Column {
        key,
        header,
        format: CellFormat::Plain,
    }
}

const fn amount_col(key: &'static str, header: &'static str) -> Column {
    Column {
        key,
        header,
        format: CellFormat::Amount,
    }
}

const fn required(key: &'static str, label: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec {
        key,
        label,
        kind,
        required: true,
    }
}

const fn optional(key: &'static str, label: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec {
        key,
        label,
        kind,
        required: false,
    }
}

const LABORER_LOOKUP: Lookup = Lookup {
    source: ResourceKind::Laborers,
    value_key: "id",
    label_key: "name",
    numeric: true,
};

const SITE_LOOKUP: Lookup = Lookup {
    source: ResourceKind::Sites,
    value_key: "id",
    label_key: "name",
    numeric: true,
};

const LABORER_COLUMNS: &[Column] = &[
    col("name", "Name"),
    col("age", "Age"),
    col("gender", "Gender"),
    amount_col("daily_wage", "Daily Wage"),
];

const ATTENDANCE_COLUMNS: &[Column] = &[
    col("laborer_name", "Laborer"),
    col("date", "Date"),
    col("present", "Status"),
    col("hours_worked", "Hours Worked"),
    col("site_name", "Site"),
];

const ATTENDANCE_SEARCH: &[Column] = &[col("laborer_name", "Laborer"), col("site_name", "Site")];

const MATERIAL_COLUMNS: &[Column] = &[
    col("name", "Name"),
    col("quantity", "Quantity"),
    col("unit", "Unit"),
    col("site_name", "Site"),
    col("arrival_date", "Arrival Date"),
    col("transport_type", "Transport"),
];

const MATERIAL_SEARCH: &[Column] = &[col("name", "Name"), col("site_name", "Site")];

const SITE_COLUMNS: &[Column] = &[col("name", "Name"), col("location", "Location")];

const PAYMENT_COLUMNS: &[Column] = &[
    amount_col("amount", "Amount"),
    col("date", "Date"),
    col("labor_name", "Laborer"),
    col("site_name", "Site"),
    col("material_name", "Material"),
    col("description", "Description"),
];

const LABORER_FIELDS: &[FieldSpec] = &[
    required("name", "Name", FieldKind::Text),
    required("age", "Age", FieldKind::Integer),
    required("gender", "Gender", FieldKind::Choice(&["Male", "Female", "Other"])),
    required("daily_wage", "Daily Wage", FieldKind::Decimal),
    required("date_of_joining", "Date of Joining", FieldKind::Date),
];

const ATTENDANCE_FIELDS: &[FieldSpec] = &[
    required("laborer_id", "Laborer", FieldKind::Lookup(LABORER_LOOKUP)),
    required("date", "Date", FieldKind::Date),
    required("present", "Status", FieldKind::Choice(&["Present", "Absent"])),
    required("hours_worked", "Hours Worked", FieldKind::Decimal),
    required(
        "site_name",
        "Site",
        FieldKind::Lookup(Lookup {
            source: ResourceKind::Sites,
            value_key: "name",
            label_key: "name",
            numeric: false,
        }),
    ),
];

const MATERIAL_FIELDS: &[FieldSpec] = &[
    required("name", "Name", FieldKind::Text),
    required("quantity", "Quantity", FieldKind::Decimal),
    required("unit", "Unit", FieldKind::Text),
    required("site_id", "Site", FieldKind::Lookup(SITE_LOOKUP)),
    required("arrival_date", "Arrival Date", FieldKind::Date),
    optional("transport_type", "Transport Type", FieldKind::Text),
];

const SITE_FIELDS: &[FieldSpec] = &[
    required("name", "Name", FieldKind::Text),
    required("location", "Location", FieldKind::Text),
];

const PAYMENT_FIELDS: &[FieldSpec] = &[
    required("amount", "Amount", FieldKind::Decimal),
    required("date", "Date", FieldKind::Date),
    required("labor_id", "Laborer", FieldKind::Lookup(LABORER_LOOKUP)),
    required("site_id", "Site", FieldKind::Lookup(SITE_LOOKUP)),
    optional(
        "material_name",
        "Material",
        FieldKind::Lookup(Lookup {
            source: ResourceKind::Materials,
            value_key: "name",
            label_key: "name",
            numeric: false,
        }),
    ),
    optional("description", "Description", FieldKind::Text),
];

impl ResourceKind {
    pub const ALL: [ResourceKind; 5] = [
        ResourceKind::Laborers,
        ResourceKind::Attendance,
        ResourceKind::Materials,
        ResourceKind::Sites,
        ResourceKind::Payments,
    ];

    /// Path segment of the REST collection.
    pub fn endpoint(self) -> &'static str {
        match self {
            ResourceKind::Laborers => "labours",
            ResourceKind::Attendance => "attendance",
            ResourceKind::Materials => "materials",
            ResourceKind::Sites => "sites",
            ResourceKind::Payments => "payments",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ResourceKind::Laborers => "Laborers",
            ResourceKind::Attendance => "Attendance",
            ResourceKind::Materials => "Materials",
            ResourceKind::Sites => "Sites",
            ResourceKind::Payments => "Payments",
        }
    }

    pub fn singular(self) -> &'static str {
        match self {
            ResourceKind::Laborers => "laborer",
            ResourceKind::Attendance => "attendance record",
            ResourceKind::Materials => "material",
            ResourceKind::Sites => "site",
            ResourceKind::Payments => "payment",
        }
    }

    pub fn columns(self) -> &'static [Column] {
        match self {
            ResourceKind::Laborers => LABORER_COLUMNS,
            ResourceKind::Attendance => ATTENDANCE_COLUMNS,
            ResourceKind::Materials => MATERIAL_COLUMNS,
            ResourceKind::Sites => SITE_COLUMNS,
            ResourceKind::Payments => PAYMENT_COLUMNS,
        }
    }

    /// Columns the search box matches against.
    pub fn search_columns(self) -> &'static [Column] {
        match self {
            ResourceKind::Laborers | ResourceKind::Sites => &self.columns()[..1],
            ResourceKind::Attendance => ATTENDANCE_SEARCH,
            ResourceKind::Materials => MATERIAL_SEARCH,
            ResourceKind::Payments => PAYMENT_COLUMNS,
        }
    }

    pub fn fields(self) -> &'static [FieldSpec] {
        match self {
            ResourceKind::Laborers => LABORER_FIELDS,
            ResourceKind::Attendance => ATTENDANCE_FIELDS,
            ResourceKind::Materials => MATERIAL_FIELDS,
            ResourceKind::Sites => SITE_FIELDS,
            ResourceKind::Payments => PAYMENT_FIELDS,
        }
    }

    pub fn paging_policy(self) -> PagingPolicy {
        match self {
            ResourceKind::Laborers | ResourceKind::Materials => PagingPolicy::BatchHeuristic,
            ResourceKind::Attendance | ResourceKind::Payments => PagingPolicy::ServerLinks,
            ResourceKind::Sites => PagingPolicy::TotalCount,
        }
    }

    /// Lists that show data derived from this resource.
    pub fn dependents(self) -> &'static [ResourceKind] {
        match self {
            ResourceKind::Laborers => &[ResourceKind::Attendance],
            _ => &[],
        }
    }

    pub fn row_actions(self) -> &'static [RowAction] {
        match self {
            ResourceKind::Laborers => &[RowAction::RecordAttendance],
            _ => &[],
        }
    }

    /// Collection path a new record is posted to.
    ///
    /// Attendance is created under the laborer it belongs to.
    pub fn create_path(self, payload: &Map<String, Value>) -> String {
        match (self, payload.get("laborer_id")) {
            (ResourceKind::Attendance, Some(Value::Number(id))) => {
                format!("/labours/{}/attendance/", id)
            }
            _ => format!("/{}/", self.endpoint()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn search_columns_are_displayed_columns() {
        for kind in ResourceKind::ALL {
            for search in kind.search_columns() {
                assert!(kind.columns().contains(search), "{:?} {}", kind, search.key);
            }
        }
    }

    #[test]
    fn attendance_search_covers_laborer_and_site() {
        let keys: Vec<_> = ResourceKind::Attendance
            .search_columns()
            .iter()
            .map(|c| c.key)
            .collect();
        assert_eq!(keys, ["laborer_name", "site_name"]);
    }

    #[test]
    fn attendance_is_created_under_its_laborer() {
        let payload = json!({"laborer_id": 12, "date": "2024-05-01"});
        let payload = payload.as_object().unwrap();
        assert_eq!(
            ResourceKind::Attendance.create_path(payload),
            "/labours/12/attendance/"
        );
        assert_eq!(ResourceKind::Sites.create_path(payload), "/sites/");
    }

    #[test]
    fn deleting_a_laborer_refreshes_attendance() {
        assert_eq!(
            ResourceKind::Laborers.dependents(),
            &[ResourceKind::Attendance]
        );
        assert!(ResourceKind::Sites.dependents().is_empty());
    }

    #[test]
    fn record_attendance_prefills_the_laborer() {
        let action = RowAction::RecordAttendance;
        assert_eq!(action.target(), ResourceKind::Attendance);
        let values = action.prefill(&RecordId::new("7"));
        assert_eq!(values, vec![("laborer_id", "7".to_string())]);
        let field_keys: Vec<_> = action.target().fields().iter().map(|f| f.key).collect();
        assert!(values.iter().all(|(key, _)| field_keys.contains(key)));
    }
}
