//! View rendering for the CRM component.
//!
//! Five pages behind a sidebar: dashboard (KPI cards, funnel chart, recent
//! activity), the kanban sales funnel with drag-and-drop stage moves, the
//! searchable contacts table, the analytics breakdown, and settings. Two
//! modals: the add/edit lead form and the delete confirmation. All numbers
//! come from `common::funnel`; rendering adds no derivation of its own.

use common::funnel;
use common::model::lead::Lead;
use common::model::stage::Stage;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::{format_currency, format_date};
use super::messages::{DraftField, Msg};
use super::state::{ContactSort, CrmComponent, Page};

pub fn view(component: &CrmComponent, ctx: &Context<CrmComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="crm-layout">
            { build_sidebar(component, ctx) }
            <main class="crm-main">
                { build_topbar(component, link) }
                {
                    match component.page {
                        Page::Dashboard => build_dashboard(component),
                        Page::Funnel => build_funnel(component, link),
                        Page::Contacts => build_contacts(component, link),
                        Page::Analytics => build_analytics(component),
                        Page::Settings => build_settings(component, ctx),
                    }
                }
            </main>
            { build_lead_modal(component, link) }
            { build_confirm_modal(component, link) }
        </div>
    }
}

/// Brand, navigation links and the user badge with logout.
fn build_sidebar(component: &CrmComponent, ctx: &Context<CrmComponent>) -> Html {
    let link = ctx.link();
    let user = &ctx.props().user;

    html! {
        <aside class="sidebar">
            <div class="brand">{"ProCRM"}</div>
            <nav class="nav">
                {
                    for Page::ALL.iter().map(|&page| {
                        let active = component.page == page;
                        html! {
                            <a
                                class={classes!("nav-link", active.then_some("active"))}
                                onclick={link.callback(move |_| Msg::SetPage(page))}
                            >
                                { page.title() }
                            </a>
                        }
                    })
                }
            </nav>
            <div class="sidebar-user">
                <div class="user-avatar">{ user.initials() }</div>
                <div class="user-meta">
                    <div class="user-name">{ &user.name }</div>
                    <div class="user-role">{ &user.role }</div>
                </div>
                <button class="logout-btn" onclick={link.callback(|_| Msg::Logout)}>
                    {"Log out"}
                </button>
            </div>
        </aside>
    }
}

/// Page title plus the global actions: add lead, export, theme toggle.
fn build_topbar(component: &CrmComponent, link: &Scope<CrmComponent>) -> Html {
    html! {
        <header class="topbar">
            <h1 class="page-title">{ component.page.title() }</h1>
            <div class="topbar-actions">
                <button class="btn btn-primary" onclick={link.callback(|_| Msg::OpenAddModal(None))}>
                    {"+ Add Lead"}
                </button>
                <button class="btn" onclick={link.callback(|_| Msg::ExportCsv)}>
                    {"Export CSV"}
                </button>
                <button
                    class="btn icon-btn"
                    title={component.theme.toggle_label()}
                    onclick={link.callback(|_| Msg::ToggleTheme)}
                >
                    { if component.theme == crate::theme::Theme::Dark { "☀" } else { "☾" } }
                </button>
            </div>
        </header>
    }
}

/// KPI cards, the funnel percentage bars and the recent-activity feed.
fn build_dashboard(component: &CrmComponent) -> Html {
    let leads = component.store.leads();
    let kpis = funnel::kpis(leads);

    html! {
        <section class="page">
            <div class="kpi-grid">
                { kpi_card("Total Leads", kpis.total_leads.to_string()) }
                { kpi_card("Pipeline Value", format_currency(kpis.pipeline_value)) }
                { kpi_card("Closed Deals", format_currency(kpis.closed_value)) }
                { kpi_card("Conversion Rate", format!("{:.1}%", kpis.conversion_rate)) }
            </div>

            <div class="panel">
                <h3>{"Funnel Breakdown"}</h3>
                {
                    for funnel::by_stage(leads).into_iter().map(|slice| html! {
                        <div class="funnel-row">
                            <span class="funnel-label">{ slice.stage.label() }</span>
                            <div class="funnel-track">
                                <div
                                    class={classes!("funnel-bar", format!("bar-{}", slice.stage.key()))}
                                    style={format!("width: {:.1}%", slice.percentage)}
                                />
                            </div>
                            <span class="funnel-count">{ slice.count }</span>
                        </div>
                    })
                }
            </div>

            <div class="panel">
                <h3>{"Recent Activity"}</h3>
                { build_recent_activity(leads) }
            </div>
        </section>
    }
}

fn kpi_card(label: &str, value: String) -> Html {
    html! {
        <div class="kpi-card">
            <div class="kpi-value">{ value }</div>
            <div class="kpi-label">{ label }</div>
        </div>
    }
}

fn build_recent_activity(leads: &[Lead]) -> Html {
    let recent: Vec<&Lead> = funnel::recent_activity(leads, 5).collect();
    if recent.is_empty() {
        return html! { <p class="empty-state">{"No recent activity"}</p> };
    }

    html! {
        <div class="activity-list">
            {
                for recent.into_iter().map(|lead| html! {
                    <div class="activity-item">
                        <div class="activity-title">{ lead.full_name() }</div>
                        <div class="activity-subtitle">
                            { format!("{} • {}", lead.company, lead.stage.label()) }
                        </div>
                        <div class="activity-time">{ format_date(&lead.created_at) }</div>
                    </div>
                })
            }
        </div>
    }
}

/// Kanban board: one column per stage, cards draggable between columns.
fn build_funnel(component: &CrmComponent, link: &Scope<CrmComponent>) -> Html {
    html! {
        <section class="page kanban">
            { for Stage::ALL.iter().map(|&stage| build_kanban_column(component, link, stage)) }
        </section>
    }
}

fn build_kanban_column(component: &CrmComponent, link: &Scope<CrmComponent>, stage: Stage) -> Html {
    let cards: Vec<&Lead> = component
        .store
        .leads()
        .iter()
        .filter(|l| l.stage == stage)
        .collect();
    let hovered = component.drag_over == Some(stage);

    let ondragover = link.callback(move |e: DragEvent| {
        e.prevent_default();
        Msg::DragOver(stage)
    });
    let ondrop = link.callback(move |e: DragEvent| {
        e.prevent_default();
        Msg::DropOn(stage)
    });

    html! {
        <div class={classes!("kanban-column", format!("column-{}", stage.key()))}>
            <div class="column-header">
                <span class="column-title">{ stage.label() }</span>
                <span class="column-count">{ cards.len() }</span>
            </div>
            <div
                class={classes!("cards-container", hovered.then_some("drag-over"))}
                {ondragover}
                ondragleave={link.callback(|_| Msg::DragLeave)}
                {ondrop}
            >
                { for cards.into_iter().map(|lead| build_kanban_card(link, lead)) }
            </div>
            <button
                class="btn column-add"
                onclick={link.callback(move |_| Msg::OpenAddModal(Some(stage)))}
            >
                {"+ Add"}
            </button>
        </div>
    }
}

fn build_kanban_card(link: &Scope<CrmComponent>, lead: &Lead) -> Html {
    let drag_id = lead.id.clone();
    let edit_id = lead.id.clone();
    let delete_id = lead.id.clone();

    html! {
        <div
            class="kanban-card"
            draggable="true"
            ondragstart={link.callback(move |_: DragEvent| Msg::DragStart(drag_id.clone()))}
            ondragend={link.callback(|_: DragEvent| Msg::DragEnd)}
        >
            <div class="card-title">{ lead.full_name() }</div>
            <div class="card-company">{ &lead.company }</div>
            {
                if lead.deal_value > 0 {
                    html! { <div class="card-value">{ format_currency(lead.deal_value) }</div> }
                } else {
                    html! {}
                }
            }
            <div class="card-footer">
                <span class="card-date">{ format_date(&lead.created_at) }</span>
                <span class="card-actions">
                    <button
                        class="action-btn"
                        title="Edit"
                        onclick={link.callback(move |_| Msg::OpenEditModal(edit_id.clone()))}
                    >
                        {"Edit"}
                    </button>
                    <button
                        class="action-btn action-danger"
                        title="Delete"
                        onclick={link.callback(move |_| Msg::RequestDelete(delete_id.clone()))}
                    >
                        {"Delete"}
                    </button>
                </span>
            </div>
        </div>
    }
}

/// Searchable, sortable contacts table. Search and sort are render-time
/// views only; the collection itself keeps creation order.
fn build_contacts(component: &CrmComponent, link: &Scope<CrmComponent>) -> Html {
    let rows = component.visible_contacts();

    let oninput = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetSearch(input.value())
    });
    let onsort = link.callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::SetSort(ContactSort::from_key(&select.value()).unwrap_or_default())
    });

    html! {
        <section class="page">
            <div class="table-toolbar">
                <input
                    class="search-input"
                    type="search"
                    placeholder="Search contacts..."
                    value={component.search.clone()}
                    {oninput}
                />
                <select class="sort-select" onchange={onsort}>
                    {
                        for ContactSort::ALL.iter().map(|sort| html! {
                            <option value={sort.key()} selected={component.sort == *sort}>
                                { sort.label() }
                            </option>
                        })
                    }
                </select>
            </div>
            <table class="contacts-table">
                <thead>
                    <tr>
                        <th>{"Name"}</th>
                        <th>{"Company"}</th>
                        <th>{"Email"}</th>
                        <th>{"Phone"}</th>
                        <th>{"Stage"}</th>
                        <th>{"Value"}</th>
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    {
                        if rows.is_empty() {
                            html! {
                                <tr>
                                    <td colspan="7" class="empty-state">{"No contacts found"}</td>
                                </tr>
                            }
                        } else {
                            html! { for rows.into_iter().map(|lead| build_contact_row(link, lead)) }
                        }
                    }
                </tbody>
            </table>
        </section>
    }
}

fn build_contact_row(link: &Scope<CrmComponent>, lead: &Lead) -> Html {
    let edit_id = lead.id.clone();
    let delete_id = lead.id.clone();

    html! {
        <tr>
            <td><strong>{ lead.full_name() }</strong></td>
            <td>{ &lead.company }</td>
            <td><a href={format!("mailto:{}", lead.email)}>{ &lead.email }</a></td>
            <td>{ if lead.phone.is_empty() { "-".to_string() } else { lead.phone.clone() } }</td>
            <td>{ stage_badge(lead.stage) }</td>
            <td>{ format_currency(lead.deal_value) }</td>
            <td>
                <button
                    class="action-btn"
                    onclick={link.callback(move |_| Msg::OpenEditModal(edit_id.clone()))}
                >
                    {"Edit"}
                </button>
                <button
                    class="action-btn action-danger"
                    onclick={link.callback(move |_| Msg::RequestDelete(delete_id.clone()))}
                >
                    {"Delete"}
                </button>
            </td>
        </tr>
    }
}

fn stage_badge(stage: Stage) -> Html {
    html! {
        <span class={classes!("stage-badge", format!("stage-{}", stage.key()))}>
            { stage.label() }
        </span>
    }
}

/// Per-stage count, summed value and share of the funnel.
fn build_analytics(component: &CrmComponent) -> Html {
    html! {
        <section class="page">
            <div class="panel">
                <h3>{"Funnel Statistics"}</h3>
                {
                    for funnel::by_stage(component.store.leads()).into_iter().map(|slice| html! {
                        <div class="stat-item">
                            <div class="stat-label">{ slice.stage.label() }</div>
                            <div class="stat-value">
                                { format!("{} leads • {}", slice.count, format_currency(slice.value)) }
                            </div>
                            <div class="stat-track">
                                <div class="stat-bar" style={format!("width: {:.1}%", slice.percentage)} />
                            </div>
                        </div>
                    })
                }
            </div>
        </section>
    }
}

fn build_settings(component: &CrmComponent, ctx: &Context<CrmComponent>) -> Html {
    let user = &ctx.props().user;
    let link = ctx.link();

    html! {
        <section class="page">
            <div class="panel">
                <h3>{"Profile"}</h3>
                <p><strong>{"Name: "}</strong>{ &user.name }</p>
                <p><strong>{"Email: "}</strong>{ &user.email }</p>
                <p><strong>{"Role: "}</strong>{ &user.role }</p>
            </div>
            <div class="panel">
                <h3>{"Appearance"}</h3>
                <button class="btn" onclick={link.callback(|_| Msg::ToggleTheme)}>
                    { component.theme.toggle_label() }
                </button>
            </div>
        </section>
    }
}

/// Add/edit lead form. One field helper per input keeps the markup flat.
fn build_lead_modal(component: &CrmComponent, link: &Scope<CrmComponent>) -> Html {
    if !component.modal_open {
        return html! {};
    }
    let title = if component.editing_id.is_some() {
        "Edit Lead"
    } else {
        "Add New Lead"
    };
    let draft = &component.draft;

    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::SubmitDraft
    });
    let onstage = link.callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::EditDraft(DraftField::Stage, select.value())
    });
    let onnotes = link.callback(|e: InputEvent| {
        let area: HtmlTextAreaElement = e.target_unchecked_into();
        Msg::EditDraft(DraftField::Notes, area.value())
    });

    html! {
        <div class="modal-backdrop">
            <div class="modal">
                <h2>{ title }</h2>
                <form {onsubmit}>
                    <div class="form-row">
                        { text_field(link, "First Name", DraftField::FirstName, &draft.first_name) }
                        { text_field(link, "Last Name", DraftField::LastName, &draft.last_name) }
                    </div>
                    <div class="form-row">
                        { text_field(link, "Company", DraftField::Company, &draft.company) }
                        { text_field(link, "Position", DraftField::Position, &draft.position) }
                    </div>
                    <div class="form-row">
                        { text_field(link, "Email", DraftField::Email, &draft.email) }
                        { text_field(link, "Phone", DraftField::Phone, &draft.phone) }
                    </div>
                    <div class="form-row">
                        { text_field(link, "Deal Value", DraftField::DealValue, &draft.deal_value.to_string()) }
                        <label class="form-field">
                            {"Stage"}
                            <select onchange={onstage}>
                                {
                                    for Stage::ALL.iter().map(|stage| html! {
                                        <option value={stage.key()} selected={draft.stage == *stage}>
                                            { stage.label() }
                                        </option>
                                    })
                                }
                            </select>
                        </label>
                    </div>
                    <label class="form-field">
                        {"Notes"}
                        <textarea value={draft.notes.clone()} oninput={onnotes} rows="3" />
                    </label>
                    <div class="modal-actions">
                        <button type="button" class="btn" onclick={link.callback(|_| Msg::CloseModal)}>
                            {"Cancel"}
                        </button>
                        <button type="submit" class="btn btn-primary" disabled={component.saving}>
                            { if component.saving { "Saving..." } else { "Save Lead" } }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

fn text_field(link: &Scope<CrmComponent>, label: &str, field: DraftField, value: &str) -> Html {
    let oninput = link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::EditDraft(field, input.value())
    });

    html! {
        <label class="form-field">
            { label }
            <input type="text" value={value.to_string()} {oninput} />
        </label>
    }
}

fn build_confirm_modal(component: &CrmComponent, link: &Scope<CrmComponent>) -> Html {
    if component.pending_delete.is_none() {
        return html! {};
    }

    html! {
        <div class="modal-backdrop">
            <div class="modal modal-confirm">
                <h2>{"Delete Lead"}</h2>
                <p>{"Are you sure you want to delete this lead? This action cannot be undone."}</p>
                <div class="modal-actions">
                    <button class="btn" onclick={link.callback(|_| Msg::CancelDelete)}>
                        {"Cancel"}
                    </button>
                    <button class="btn btn-danger" onclick={link.callback(|_| Msg::ConfirmDelete)}>
                        {"Delete"}
                    </button>
                </div>
            </div>
        </div>
    }
}
