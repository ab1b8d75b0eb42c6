//! Update function for the CRM component, Elm-style: takes the current
//! state, the context and a message, mutates the state, and returns whether
//! the view should re-render.
//!
//! Remote calls run in `spawn_local` futures and complete into `*Finished`
//! messages; the collection is only ever mutated from those completions,
//! through the [`crate::store::LeadStore`] apply operations. Failures become
//! a toast and a console entry, never a panic.

use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::stage::Stage;
use common::requests::SaveLeadRequest;
use common::export;

use crate::{api, session, theme};

use super::helpers::{download_csv, now_millis, show_toast, validate_draft};
use super::messages::{DraftField, Msg};
use super::state::CrmComponent;

pub fn update(component: &mut CrmComponent, ctx: &Context<CrmComponent>, msg: Msg) -> bool {
    match msg {
        Msg::Tick => {
            // Skip the poll while a write is pending so the reload cannot
            // overwrite state the backend has not confirmed yet.
            if component.mutations_in_flight == 0 {
                ctx.link().send_message(Msg::Refresh);
            }
            false
        }
        Msg::Refresh => {
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::LeadsFetched(api::fetch_leads().await));
            });
            false
        }
        Msg::LeadsFetched(result) => {
            if let Err(e) = &result {
                error!("Failed to load leads, serving cached snapshot:", e.to_string());
            }
            component.store.apply_loaded(result);
            true
        }

        Msg::SetPage(page) => {
            component.page = page;
            true
        }
        Msg::SetSearch(query) => {
            component.search = query;
            true
        }
        Msg::SetSort(sort) => {
            component.sort = sort;
            true
        }

        Msg::OpenAddModal(stage) => {
            component.editing_id = None;
            component.draft = SaveLeadRequest {
                stage: stage.unwrap_or_default(),
                ..SaveLeadRequest::default()
            };
            component.modal_open = true;
            true
        }
        Msg::OpenEditModal(id) => {
            if let Some(lead) = component.store.find(&id) {
                component.draft = SaveLeadRequest::from_lead(lead);
                component.editing_id = Some(id);
                component.modal_open = true;
                return true;
            }
            false
        }
        Msg::CloseModal => {
            component.modal_open = false;
            component.editing_id = None;
            true
        }
        Msg::EditDraft(field, value) => {
            edit_draft(&mut component.draft, field, value);
            true
        }
        Msg::SubmitDraft => {
            if component.saving {
                return false;
            }
            if let Err(reason) = validate_draft(&component.draft) {
                show_toast(&reason);
                return false;
            }

            component.saving = true;
            component.mutations_in_flight += 1;
            let payload = component.draft.clone();
            let link = ctx.link().clone();
            match component.editing_id.clone() {
                Some(id) => spawn_local(async move {
                    link.send_message(Msg::UpdateFinished(api::update_lead(&id, &payload).await));
                }),
                None => spawn_local(async move {
                    link.send_message(Msg::CreateFinished(api::create_lead(&payload).await));
                }),
            }
            true
        }
        Msg::CreateFinished(result) => {
            component.saving = false;
            component.mutations_in_flight = component.mutations_in_flight.saturating_sub(1);
            match result {
                Ok(lead) => {
                    component.store.apply_created(lead);
                    component.modal_open = false;
                    show_toast("Lead added successfully");
                }
                Err(e) => show_toast(&format!("Error saving lead: {e}")),
            }
            true
        }
        Msg::UpdateFinished(result) => {
            component.saving = false;
            component.mutations_in_flight = component.mutations_in_flight.saturating_sub(1);
            match result {
                Ok(lead) => {
                    component.store.apply_updated(lead);
                    component.modal_open = false;
                    component.editing_id = None;
                    show_toast("Lead updated successfully");
                }
                Err(e) => show_toast(&format!("Error updating lead: {e}")),
            }
            true
        }

        Msg::RequestDelete(id) => {
            component.pending_delete = Some(id);
            true
        }
        Msg::CancelDelete => {
            component.pending_delete = None;
            true
        }
        Msg::ConfirmDelete => {
            let Some(id) = component.pending_delete.take() else {
                return false;
            };
            component.mutations_in_flight += 1;
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::delete_lead(&id).await;
                link.send_message(Msg::DeleteFinished { id, result });
            });
            true
        }
        Msg::DeleteFinished { id, result } => {
            component.mutations_in_flight = component.mutations_in_flight.saturating_sub(1);
            match result {
                Ok(()) => {
                    component.store.apply_deleted(&id);
                    show_toast("Lead deleted successfully");
                }
                Err(e) => show_toast(&format!("Error deleting lead: {e}")),
            }
            true
        }

        Msg::DragStart(id) => {
            component.dragging = Some(id);
            false
        }
        Msg::DragEnd => {
            component.dragging = None;
            component.drag_over = None;
            true
        }
        Msg::DragOver(stage) => {
            if component.drag_over != Some(stage) {
                component.drag_over = Some(stage);
                return true;
            }
            false
        }
        Msg::DragLeave => {
            component.drag_over = None;
            true
        }
        Msg::DropOn(stage) => {
            component.drag_over = None;
            let Some(id) = component.dragging.take() else {
                return true;
            };
            let Some(lead) = component.store.find(&id) else {
                return true;
            };
            if lead.stage == stage {
                return true;
            }

            let payload = SaveLeadRequest::stage_change(lead, stage);
            component.mutations_in_flight += 1;
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::UpdateFinished(api::update_lead(&id, &payload).await));
            });
            true
        }

        Msg::ExportCsv => {
            let leads = component.store.leads();
            if leads.is_empty() {
                show_toast("Nothing to export yet");
                return false;
            }
            download_csv(
                &export::leads_to_csv(leads),
                &export::export_filename(now_millis()),
            );
            show_toast("Funnel exported as CSV");
            false
        }
        Msg::ToggleTheme => {
            component.theme = component.theme.toggled();
            theme::apply(component.theme);
            true
        }
        Msg::Logout => {
            session::clear();
            ctx.props().on_logout.emit(());
            false
        }
    }
}

fn edit_draft(draft: &mut SaveLeadRequest, field: DraftField, value: String) {
    match field {
        DraftField::FirstName => draft.first_name = value,
        DraftField::LastName => draft.last_name = value,
        DraftField::Company => draft.company = value,
        DraftField::Position => draft.position = value,
        DraftField::Email => draft.email = value,
        DraftField::Phone => draft.phone = value,
        DraftField::DealValue => draft.deal_value = value.trim().parse().unwrap_or(0),
        DraftField::Stage => {
            if let Some(stage) = Stage::from_key(&value) {
                draft.stage = stage;
            }
        }
        DraftField::Notes => draft.notes = value,
    }
}
