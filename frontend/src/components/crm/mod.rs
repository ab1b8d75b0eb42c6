//! Main CRM component: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic, view rendering,
//! and helpers.
//!
//! On first render the component applies the saved theme, performs the
//! initial lead load (remote, with silent fallback to the local snapshot)
//! and starts the 5-second refresh poll. The poll sends [`Msg::Tick`],
//! which the update logic drops while a mutation is in flight.

use gloo_timers::callback::Interval;
use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::CrmProps;
pub use state::CrmComponent;

const REFRESH_INTERVAL_MS: u32 = 5_000;

impl Component for CrmComponent {
    type Message = Msg;
    type Properties = CrmProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CrmComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            crate::theme::apply(self.theme);
            ctx.link().send_message(Msg::Refresh);

            let link = ctx.link().clone();
            self.poll = Some(Interval::new(REFRESH_INTERVAL_MS, move || {
                link.send_message(Msg::Tick);
            }));
        }
    }
}
