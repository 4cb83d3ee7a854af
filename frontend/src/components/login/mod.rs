//! Sign-in screen shown before the console and after every sign-out.

use common::error::ConsoleError;
use common::model::session::{login_failure_message, LoginRequest};
use common::requests::ApiRequest;
use gloo_console::{log, warn};
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;

pub enum Msg {
    UsernameChanged(String),
    PasswordChanged(String),
    Submit,
    Succeeded,
    Failed(ConsoleError),
}

#[derive(Properties, PartialEq)]
pub struct LoginProps {
    pub api_base: String,
    pub on_signed_in: Callback<()>,
}

#[derive(Default)]
pub struct LoginComponent {
    username: String,
    password: String,
    error: Option<String>,
    pending: bool,
}

impl Component for LoginComponent {
    type Message = Msg;
    type Properties = LoginProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self::default()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::UsernameChanged(value) => self.username = value,
            Msg::PasswordChanged(value) => self.password = value,
            Msg::Submit => {
                if self.pending {
                    return false;
                }
                let credentials = LoginRequest::new(&self.username, &self.password);
                if let Err(err) = credentials.validate() {
                    self.error = Some(err.to_string());
                    return true;
                }
                self.pending = true;
                self.error = None;

                let link = ctx.link().clone();
                let base = ctx.props().api_base.clone();
                let request = ApiRequest::login(&credentials);
                spawn_local(async move {
                    match api::send(&base, &request).await {
                        Ok(_) => link.send_message(Msg::Succeeded),
                        Err(err) => link.send_message(Msg::Failed(err)),
                    }
                });
            }
            Msg::Succeeded => {
                log!(format!("signed in as {}", self.username.trim()));
                self.pending = false;
                self.password.clear();
                ctx.props().on_signed_in.emit(());
            }
            Msg::Failed(err) => {
                warn!(format!("login failed: {}", err));
                self.pending = false;
                self.error = Some(login_failure_message(&err));
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="login-screen">
                <form
                    class="login-card"
                    onsubmit={link.callback(|e: SubmitEvent| {
                        e.prevent_default();
                        Msg::Submit
                    })}
                >
                    <h2>{ "Admin Login" }</h2>
                    <label class="form-field">
                        <span class="field-label">{ "Username" }</span>
                        <input
                            type="text"
                            autocomplete="username"
                            value={self.username.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                Msg::UsernameChanged(e.target_unchecked_into::<HtmlInputElement>().value())
                            })}
                        />
                    </label>
                    <label class="form-field">
                        <span class="field-label">{ "Password" }</span>
                        <input
                            type="password"
                            autocomplete="current-password"
                            value={self.password.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                Msg::PasswordChanged(e.target_unchecked_into::<HtmlInputElement>().value())
                            })}
                        />
                    </label>
                    if let Some(error) = &self.error {
                        <p class="login-error">{ error.clone() }</p>
                    }
                    <button type="submit" class="primary-btn" disabled={self.pending}>
                        { if self.pending { "Signing in..." } else { "Login" } }
                    </button>
                </form>
            </div>
        }
    }
}
