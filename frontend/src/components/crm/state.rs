//! State for the main CRM component.
//!
//! Holds the [`LeadStore`] (the authoritative in-session collection), the
//! active page, the contacts search/sort settings, the lead-form draft,
//! modal and drag bookkeeping, and the refresh interval handle.
//!
//! Fields are `pub` because they are accessed by the `view` and `update`
//! modules.

use crate::store::browser::BrowserCache;
use crate::store::LeadStore;
use crate::theme::Theme;
use common::model::lead::Lead;
use common::model::stage::Stage;
use common::requests::SaveLeadRequest;
use gloo_timers::callback::Interval;

/// Top-level pages reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Funnel,
    Contacts,
    Analytics,
    Settings,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Dashboard,
        Page::Funnel,
        Page::Contacts,
        Page::Analytics,
        Page::Settings,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Funnel => "Sales Funnel",
            Page::Contacts => "Contacts",
            Page::Analytics => "Analytics",
            Page::Settings => "Settings",
        }
    }
}

/// Non-persistent ordering of the contacts table. Applied at render time
/// only; the underlying collection keeps creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactSort {
    #[default]
    Newest,
    Name,
    Value,
}

impl ContactSort {
    pub const ALL: [ContactSort; 3] = [ContactSort::Newest, ContactSort::Name, ContactSort::Value];

    pub fn key(&self) -> &'static str {
        match self {
            ContactSort::Newest => "newest",
            ContactSort::Name => "name",
            ContactSort::Value => "value",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactSort::Newest => "Newest first",
            ContactSort::Name => "Name",
            ContactSort::Value => "Deal value",
        }
    }

    pub fn from_key(key: &str) -> Option<ContactSort> {
        Self::ALL.iter().copied().find(|s| s.key() == key)
    }
}

pub struct CrmComponent {
    pub store: LeadStore<BrowserCache>,
    pub page: Page,
    pub search: String,
    pub sort: ContactSort,

    /// Lead form contents. Reused for both add and edit.
    pub draft: SaveLeadRequest,
    /// `Some` while editing an existing lead, `None` while adding.
    pub editing_id: Option<String>,
    pub modal_open: bool,
    /// Guards against double submit while a save is in flight.
    pub saving: bool,
    /// Lead awaiting delete confirmation.
    pub pending_delete: Option<String>,

    /// Card currently being dragged on the kanban board.
    pub dragging: Option<String>,
    /// Column currently hovered during a drag.
    pub drag_over: Option<Stage>,

    /// Count of remote mutations in flight. The periodic refresh is
    /// suppressed while non-zero so a reload cannot clobber a pending
    /// write.
    pub mutations_in_flight: u32,

    pub theme: Theme,
    /// First-render guard.
    pub loaded: bool,
    /// Keeps the 5-second refresh alive; dropped with the component.
    pub poll: Option<Interval>,
}

impl CrmComponent {
    pub fn new() -> Self {
        Self {
            store: LeadStore::new(BrowserCache),
            page: Page::Dashboard,
            search: String::new(),
            sort: ContactSort::default(),
            draft: SaveLeadRequest::default(),
            editing_id: None,
            modal_open: false,
            saving: false,
            pending_delete: None,
            dragging: None,
            drag_over: None,
            mutations_in_flight: 0,
            theme: crate::theme::load(),
            loaded: false,
            poll: None,
        }
    }

    /// Contacts-page rows: search filter plus the selected ordering, both
    /// applied to a temporary view of the collection.
    pub fn visible_contacts(&self) -> Vec<&Lead> {
        let query = self.search.trim();
        let mut rows: Vec<&Lead> = self
            .store
            .leads()
            .iter()
            .filter(|l| query.is_empty() || l.matches(query))
            .collect();
        match self.sort {
            ContactSort::Newest => rows.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            ContactSort::Name => rows.sort_by(|a, b| {
                (a.first_name.to_lowercase(), a.last_name.to_lowercase())
                    .cmp(&(b.first_name.to_lowercase(), b.last_name.to_lowercase()))
            }),
            ContactSort::Value => rows.sort_by(|a, b| b.deal_value.cmp(&a.deal_value)),
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_keys_round_trip() {
        for sort in ContactSort::ALL {
            assert_eq!(ContactSort::from_key(sort.key()), Some(sort));
        }
        assert_eq!(ContactSort::from_key("oldest"), None);
    }
}
