//! Composition root. Owns the session state and swaps between the login
//! screen and the CRM proper; the CRM component in turn owns the
//! [`crate::store::LeadStore`], so nothing here is ambient or global.

use common::model::user::User;
use yew::prelude::*;

use crate::components::crm::CrmComponent;
use crate::components::login::LoginComponent;
use crate::session;

pub enum Msg {
    Authenticated(User),
    LoggedOut,
}

pub struct App {
    user: Option<User>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        // Resume a still-valid session (session storage first, remembered
        // local record second).
        Self {
            user: session::current().map(|record| record.user),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Authenticated(user) => {
                self.user = Some(user);
                true
            }
            Msg::LoggedOut => {
                self.user = None;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        match &self.user {
            Some(user) => html! {
                <CrmComponent
                    user={user.clone()}
                    on_logout={link.callback(|_| Msg::LoggedOut)}
                />
            },
            None => html! {
                <LoginComponent
                    on_authenticated={link.callback(Msg::Authenticated)}
                />
            },
        }
    }
}
