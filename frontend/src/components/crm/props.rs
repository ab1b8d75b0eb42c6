//! Properties for the main CRM component.

use common::model::user::User;
use yew::prelude::*;

/// Passed by the composition root once a session exists.
#[derive(Properties, PartialEq, Clone)]
pub struct CrmProps {
    /// The signed-in user, shown in the sidebar and settings page.
    pub user: User,
    /// Emitted after the session has been cleared so the root can swap back
    /// to the login screen.
    pub on_logout: Callback<()>,
}
