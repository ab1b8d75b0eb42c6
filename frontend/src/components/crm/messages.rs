use crate::api::ApiError;
use common::model::lead::Lead;
use common::model::stage::Stage;

use super::state::{ContactSort, Page};

/// Lead-form field identifiers for [`Msg::EditDraft`].
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    FirstName,
    LastName,
    Company,
    Position,
    Email,
    Phone,
    DealValue,
    Stage,
    Notes,
}

pub enum Msg {
    /// Periodic poll; ignored while a mutation is in flight.
    Tick,
    /// Kick off a full remote fetch.
    Refresh,
    LeadsFetched(Result<Vec<Lead>, ApiError>),

    SetPage(Page),
    SetSearch(String),
    SetSort(ContactSort),

    OpenAddModal(Option<Stage>),
    OpenEditModal(String),
    CloseModal,
    EditDraft(DraftField, String),
    SubmitDraft,
    CreateFinished(Result<Lead, ApiError>),
    UpdateFinished(Result<Lead, ApiError>),

    RequestDelete(String),
    CancelDelete,
    ConfirmDelete,
    DeleteFinished {
        id: String,
        result: Result<(), ApiError>,
    },

    DragStart(String),
    DragEnd,
    DragOver(Stage),
    DragLeave,
    DropOn(Stage),

    ExportCsv,
    ToggleTheme,
    Logout,
}
