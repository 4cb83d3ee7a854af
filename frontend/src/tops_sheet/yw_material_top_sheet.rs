//! Slide-down sheet hosting the create/edit forms.
//!
//! The sheet is always in the DOM; `open_top_sheet` and `close_top_sheet`
//! toggle its `show` class so the CSS transition runs.

use gloo_timers::future::TimeoutFuture;
use uuid::Uuid;
use yew::{html, Callback, Component, Context, Html, MouseEvent, NodeRef, Properties};

const SHOW_CLASS: &str = "show";

pub struct YwMaterialTopSheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
    pub title: String,
    /// Fired by the close button; the owner decides whether to close.
    pub on_close: Callback<MouseEvent>,
}

impl Component for YwMaterialTopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("sheet-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div class="top-sheet" id={self.id.clone()} ref={props.node_ref.clone()}>
                <div class="top-sheet-header">
                    <h3>{ props.title.clone() }</h3>
                    <button class="icon-btn" title="Close" onclick={props.on_close.clone()}>{ "✕" }</button>
                </div>
                { props.children.clone() }
            </div>
        }
    }
}

pub fn open_top_sheet(top_sheet_ref: NodeRef) {
    set_shown(top_sheet_ref, true);
}

pub fn close_top_sheet(top_sheet_ref: NodeRef) {
    set_shown(top_sheet_ref, false);
}

/// Toggles the class after a short delay so a freshly rendered sheet animates.
fn set_shown(top_sheet_ref: NodeRef, shown: bool) {
    wasm_bindgen_futures::spawn_local(async move {
        TimeoutFuture::new(50).await;
        if let Some(top_sheet) = top_sheet_ref.cast::<web_sys::HtmlElement>() {
            let classes = top_sheet.class_list();
            let _ = if shown {
                classes.add_1(SHOW_CLASS)
            } else {
                classes.remove_1(SHOW_CLASS)
            };
        }
    });
}
