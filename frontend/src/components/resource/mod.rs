//! Generic resource panel: the list, search box, pager and form sheet for one
//! `ResourceKind`.
//!
//! Responsibilities
//! - Re-export `Msg`, `ResourcePanelProps`, `Prefill` and `ResourcePanel`.
//! - Delegate to `update::update` and `view::view`.
//! - Load page 1 on first render.
//! - React to parent props: a bumped `refresh` reloads the current page and a
//!   new `prefill` opens the create form with those inputs filled.

use yew::prelude::*;

mod dialogs;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::{Prefill, ResourcePanelProps};
pub use state::ResourcePanel;

impl Component for ResourcePanel {
    type Message = Msg;
    type Properties = ResourcePanelProps;

    fn create(ctx: &Context<Self>) -> Self {
        ResourcePanel::new(ctx.props())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        if props.refresh != old_props.refresh {
            ctx.link().send_message(Msg::Load(self.list.page()));
        }
        if let Some(prefill) = &props.prefill {
            let is_new = old_props
                .prefill
                .as_ref()
                .is_none_or(|old| old.nonce != prefill.nonce);
            if is_new {
                ctx.link().send_message(Msg::OpenCreate(prefill.values.clone()));
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            ctx.link().send_message(Msg::Load(1));
        }
    }
}
