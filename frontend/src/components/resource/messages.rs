use common::error::ConsoleError;
use common::listing::debounce::DebounceTicket;
use common::model::envelope::ListPage;
use common::model::record::{Record, RecordId};
use common::model::resource::RowAction;

pub enum Msg {
    Load(u32),
    NextPage,
    PreviousPage,
    PageFetched { page: u32, result: ListPage },
    PageLoaded { page: u32, result: ListPage },
    LoadFailed(ConsoleError),
    SearchInput(String),
    SearchElapsed(DebounceTicket),
    LookupLoaded {
        key: &'static str,
        options: Vec<(String, String)>,
    },
    OpenCreate(Vec<(&'static str, String)>),
    StartEdit(RecordId),
    EditLoaded { id: RecordId, record: Record },
    FieldChanged { key: &'static str, value: String },
    Submit,
    SubmitSucceeded,
    SubmitFailed(ConsoleError),
    Cancel,
    Delete(RecordId),
    Deleted,
    RowAction(RowAction, RecordId),
    ActionFailed(ConsoleError),
}
