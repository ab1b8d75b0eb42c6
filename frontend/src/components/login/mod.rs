//! Login and signup screen.
//!
//! Both forms talk to the remote auth endpoints only; there is no offline
//! credential store. On success the issued token and user profile are
//! persisted through [`crate::session`] and the parent is notified so it
//! can swap in the CRM.

use common::model::user::User;
use common::requests::{LoginRequest, SignupRequest};
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::{self, ApiError};
use crate::session;

const MIN_PASSWORD_LEN: usize = 6;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    Login,
    Signup,
}

pub enum Msg {
    SwitchMode,
    SetName(String),
    SetEmail(String),
    SetPassword(String),
    ToggleRemember,
    Submit,
    Finished(Result<(String, User), ApiError>),
}

#[derive(Properties, PartialEq, Clone)]
pub struct LoginProps {
    /// Emitted once a session has been stored.
    pub on_authenticated: Callback<User>,
}

pub struct LoginComponent {
    mode: Mode,
    name: String,
    email: String,
    password: String,
    remember: bool,
    error: Option<String>,
    busy: bool,
}

impl LoginComponent {
    fn validate(&self) -> Result<(), String> {
        if self.mode == Mode::Signup && self.name.trim().is_empty() {
            return Err("Name is required".to_string());
        }
        if self.email.trim().is_empty() {
            return Err("Email is required".to_string());
        }
        if self.password.len() < MIN_PASSWORD_LEN {
            return Err(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters"
            ));
        }
        Ok(())
    }
}

impl Component for LoginComponent {
    type Message = Msg;
    type Properties = LoginProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            mode: Mode::Login,
            name: String::new(),
            email: String::new(),
            password: String::new(),
            remember: false,
            error: None,
            busy: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SwitchMode => {
                self.mode = match self.mode {
                    Mode::Login => Mode::Signup,
                    Mode::Signup => Mode::Login,
                };
                self.error = None;
                true
            }
            Msg::SetName(value) => {
                self.name = value;
                false
            }
            Msg::SetEmail(value) => {
                self.email = value;
                false
            }
            Msg::SetPassword(value) => {
                self.password = value;
                false
            }
            Msg::ToggleRemember => {
                self.remember = !self.remember;
                true
            }
            Msg::Submit => {
                if self.busy {
                    return false;
                }
                if let Err(reason) = self.validate() {
                    self.error = Some(reason);
                    return true;
                }

                self.busy = true;
                self.error = None;
                let link = ctx.link().clone();
                match self.mode {
                    Mode::Login => {
                        let request = LoginRequest {
                            email: self.email.trim().to_string(),
                            password: self.password.clone(),
                        };
                        spawn_local(async move {
                            link.send_message(Msg::Finished(api::login(&request).await));
                        });
                    }
                    Mode::Signup => {
                        let request = SignupRequest {
                            name: self.name.trim().to_string(),
                            email: self.email.trim().to_string(),
                            password: self.password.clone(),
                        };
                        spawn_local(async move {
                            link.send_message(Msg::Finished(api::signup(&request).await));
                        });
                    }
                }
                true
            }
            Msg::Finished(result) => {
                self.busy = false;
                match result {
                    Ok((token, user)) => {
                        session::store(user.clone(), token, self.remember);
                        ctx.props().on_authenticated.emit(user);
                        false
                    }
                    Err(ApiError::Network(_)) => {
                        self.error =
                            Some("Network error. Is the backend running?".to_string());
                        true
                    }
                    Err(e) => {
                        self.error = Some(e.to_string());
                        true
                    }
                }
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let (title, submit_label, switch_label) = match self.mode {
            Mode::Login => ("Welcome back", "Log in", "Need an account? Sign up"),
            Mode::Signup => ("Create your account", "Sign up", "Have an account? Log in"),
        };

        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        html! {
            <div class="login-layout">
                <form class="login-card" {onsubmit}>
                    <h1 class="brand">{"ProCRM"}</h1>
                    <h2>{ title }</h2>
                    {
                        if let Some(error) = &self.error {
                            html! { <div class="form-error">{ error }</div> }
                        } else {
                            html! {}
                        }
                    }
                    {
                        if self.mode == Mode::Signup {
                            html! {
                                <label class="form-field">
                                    {"Name"}
                                    <input
                                        type="text"
                                        value={self.name.clone()}
                                        oninput={input_callback(link, Msg::SetName)}
                                    />
                                </label>
                            }
                        } else {
                            html! {}
                        }
                    }
                    <label class="form-field">
                        {"Email"}
                        <input
                            type="email"
                            value={self.email.clone()}
                            oninput={input_callback(link, Msg::SetEmail)}
                        />
                    </label>
                    <label class="form-field">
                        {"Password"}
                        <input
                            type="password"
                            value={self.password.clone()}
                            oninput={input_callback(link, Msg::SetPassword)}
                        />
                    </label>
                    <label class="form-check">
                        <input
                            type="checkbox"
                            checked={self.remember}
                            onchange={link.callback(|_| Msg::ToggleRemember)}
                        />
                        {"Remember me on this device"}
                    </label>
                    <button type="submit" class="btn btn-primary" disabled={self.busy}>
                        { if self.busy { "Please wait..." } else { submit_label } }
                    </button>
                    <a class="toggle-form" onclick={link.callback(|_| Msg::SwitchMode)}>
                        { switch_label }
                    </a>
                </form>
            </div>
        }
    }
}

fn input_callback(
    link: &yew::html::Scope<LoginComponent>,
    make: fn(String) -> Msg,
) -> Callback<InputEvent> {
    link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        make(input.value())
    })
}
