//! Properties of the generic `ResourcePanel`.
//!
//! The console mounts one panel per `ResourceKind`. Cross-panel effects go
//! through the `App`: it counts deletions to refresh dependent lists, and it
//! forwards row actions such as "Record Attendance" to the panel that owns
//! the target form.

use common::model::config::ConsoleConfig;
use common::model::record::RecordId;
use common::model::resource::{ResourceKind, RowAction};
use yew::prelude::*;

/// A request to open the create form with some inputs already filled.
#[derive(Clone, Debug, PartialEq)]
pub struct Prefill {
    /// Changes on every request so the same prefill can be asked for twice.
    pub nonce: u32,
    pub values: Vec<(&'static str, String)>,
}

#[derive(Properties, PartialEq, Clone)]
pub struct ResourcePanelProps {
    pub kind: ResourceKind,
    pub config: ConsoleConfig,

    /// Bumped by the parent whenever this list must reload its current page.
    #[prop_or_default]
    pub refresh: u32,

    #[prop_or_default]
    pub prefill: Option<Prefill>,

    /// Emitted after a record of `kind` was deleted.
    pub on_deleted: Callback<ResourceKind>,

    pub on_row_action: Callback<(RowAction, RecordId)>,

    /// Emitted when the backend rejects the session.
    pub on_unauthorized: Callback<()>,

    /// Emitted whenever the form's unsaved-changes state may have changed.
    pub on_dirty_changed: Callback<(ResourceKind, bool)>,
}
