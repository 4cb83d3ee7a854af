//! Console shell: configuration bootstrap, the login gate and the tabbed
//! resource panels.
//!
//! Every panel stays mounted while signed in, inactive ones hidden, so a
//! deletion in one list can reload the lists that depend on it.

use std::collections::HashMap;

use common::form::dirty::DirtyForms;
use common::model::config::ConsoleConfig;
use common::model::record::RecordId;
use common::model::resource::{ResourceKind, RowAction};
use common::requests::ApiRequest;
use gloo_console::{log, warn};
use yew::platform::spawn_local;
use yew::{classes, html, Component, Context, Html};

use crate::api;
use crate::components::login::LoginComponent;
use crate::components::resource::{Prefill, ResourcePanel};
use crate::helpers::set_window_dirty_flag;

pub enum Msg {
    ConfigLoaded(ConsoleConfig),
    SignedIn,
    Logout,
    LoggedOut,
    SelectTab(ResourceKind),
    Deleted(ResourceKind),
    RowAction(RowAction, RecordId),
    DirtyChanged(ResourceKind, bool),
    Unauthorized,
}

pub struct App {
    config: Option<ConsoleConfig>,
    signed_in: bool,
    active: ResourceKind,
    /// Reload counters handed to panels as their `refresh` prop.
    refresh: HashMap<ResourceKind, u32>,
    prefill: Option<(ResourceKind, Prefill)>,
    prefill_nonce: u32,
    /// Forms with unsaved changes; drives the page-level `console_dirty` flag.
    dirty: DirtyForms,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::ConfigLoaded(api::load_config().await));
        });
        Self {
            config: None,
            signed_in: false,
            active: ResourceKind::Laborers,
            refresh: HashMap::new(),
            prefill: None,
            prefill_nonce: 0,
            dirty: DirtyForms::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ConfigLoaded(config) => self.config = Some(config),
            Msg::SignedIn => {
                self.signed_in = true;
                self.active = ResourceKind::Laborers;
                self.prefill = None;
            }
            Msg::Logout => {
                let base = self.api_base();
                let link = ctx.link().clone();
                spawn_local(async move {
                    if let Err(err) = api::send(&base, &ApiRequest::logout()).await {
                        warn!(format!("logout failed: {}", err));
                    }
                    link.send_message(Msg::LoggedOut);
                });
                return false;
            }
            Msg::LoggedOut => {
                log!("signed out");
                self.sign_out();
            }
            Msg::Unauthorized => {
                if !self.signed_in {
                    return false;
                }
                warn!("session rejected by the backend");
                self.sign_out();
            }
            Msg::DirtyChanged(kind, dirty) => {
                set_window_dirty_flag(self.dirty.mark(kind, dirty));
                return false;
            }
            Msg::SelectTab(kind) => self.active = kind,
            Msg::Deleted(kind) => {
                for dependent in kind.dependents() {
                    *self.refresh.entry(*dependent).or_default() += 1;
                }
            }
            Msg::RowAction(action, id) => {
                self.prefill_nonce += 1;
                let target = action.target();
                self.prefill = Some((
                    target,
                    Prefill {
                        nonce: self.prefill_nonce,
                        values: action.prefill(&id),
                    },
                ));
                self.active = target;
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let Some(config) = &self.config else {
            return html! { <div class="boot">{ "Loading..." }</div> };
        };
        let link = ctx.link();

        if !self.signed_in {
            return html! {
                <LoginComponent
                    api_base={config.api_base.clone()}
                    on_signed_in={link.callback(|_: ()| Msg::SignedIn)}
                />
            };
        }

        html! {
            <div class="console">
                <header class="console-header">
                    <nav class="tab-bar">
                        { for ResourceKind::ALL.iter().map(|kind| {
                            let kind = *kind;
                            html! {
                                <button
                                    class={classes!("tab-btn", (kind == self.active).then_some("active"))}
                                    onclick={link.callback(move |_| Msg::SelectTab(kind))}
                                >
                                    { kind.title() }
                                </button>
                            }
                        }) }
                    </nav>
                    <button class="logout-btn" onclick={link.callback(|_| Msg::Logout)}>
                        { "Logout" }
                    </button>
                </header>
                <main>
                    { for ResourceKind::ALL.iter().map(|kind| self.panel(*kind, config, ctx)) }
                </main>
            </div>
        }
    }
}

impl App {
    fn api_base(&self) -> String {
        self.config
            .as_ref()
            .map(|c| c.api_base.clone())
            .unwrap_or_default()
    }

    fn sign_out(&mut self) {
        self.signed_in = false;
        self.prefill = None;
        self.refresh.clear();
        self.dirty.clear();
        set_window_dirty_flag(false);
    }

    fn panel(&self, kind: ResourceKind, config: &ConsoleConfig, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let prefill = self
            .prefill
            .as_ref()
            .filter(|(target, _)| *target == kind)
            .map(|(_, prefill)| prefill.clone());
        let hidden = (kind != self.active).then_some("display: none;");

        html! {
            <div class="panel-host" style={hidden} key={kind.endpoint()}>
                <h2>{ kind.title() }</h2>
                <ResourcePanel
                    {kind}
                    config={config.clone()}
                    refresh={self.refresh.get(&kind).copied().unwrap_or_default()}
                    {prefill}
                    on_deleted={link.callback(Msg::Deleted)}
                    on_row_action={link.callback(|(action, id): (RowAction, RecordId)| Msg::RowAction(action, id))}
                    on_unauthorized={link.callback(|_: ()| Msg::Unauthorized)}
                    on_dirty_changed={link.callback(|(kind, dirty): (ResourceKind, bool)| Msg::DirtyChanged(kind, dirty))}
                />
            </div>
        }
    }
}
