//! View rendering for the resource panel.
//!
//! Layout, top to bottom: a toolbar (search box and add button), the table of
//! the current page, and the pager. The form sheet is rendered alongside and
//! slides down when opened.

use common::listing::RowView;
use common::model::resource::RowAction;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::dialogs::form::form_dialog;
use super::messages::Msg;
use super::state::ResourcePanel;

pub fn view(panel: &ResourcePanel, ctx: &Context<ResourcePanel>) -> Html {
    let link = ctx.link();
    html! {
        <section class="resource-panel">
            { build_toolbar(panel, link) }
            { build_table(panel, link) }
            { build_pager(panel, link) }
            { form_dialog(panel, link) }
        </section>
    }
}

fn build_toolbar(panel: &ResourcePanel, link: &Scope<ResourcePanel>) -> Html {
    let kind = panel.list.kind();
    html! {
        <div class="panel-toolbar">
            <input
                class="search-input"
                type="search"
                placeholder={format!("Search {}...", kind.title().to_lowercase())}
                value={panel.search_text.clone()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::SearchInput(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
            />
            <button class="primary-btn" onclick={link.callback(|_| Msg::OpenCreate(Vec::new()))}>
                { format!("Add {}", kind.singular()) }
            </button>
        </div>
    }
}

fn build_table(panel: &ResourcePanel, link: &Scope<ResourcePanel>) -> Html {
    let kind = panel.list.kind();
    let columns = kind.columns();
    let rows = panel.list.rows();

    let body = if rows.is_empty() {
        let message = if panel.list.is_loading() {
            "Loading...".to_string()
        } else {
            format!("No {} found.", kind.title().to_lowercase())
        };
        html! {
            <tr class="empty-row">
                <td colspan={(columns.len() + 1).to_string()}>{ message }</td>
            </tr>
        }
    } else {
        rows.into_iter()
            .map(|row| build_row(row, kind.row_actions(), link))
            .collect::<Html>()
    };

    html! {
        <table class={classes!("resource-table", panel.list.is_loading().then_some("loading"))}>
            <thead>
                <tr>
                    { for columns.iter().map(|c| html! { <th>{ c.header }</th> }) }
                    <th>{ "Actions" }</th>
                </tr>
            </thead>
            <tbody>{ body }</tbody>
        </table>
    }
}

fn build_row(row: RowView, actions: &'static [RowAction], link: &Scope<ResourcePanel>) -> Html {
    let style = (!row.visible).then_some("display: none;");
    let buttons = match row.id {
        Some(id) => {
            let edit_id = id.clone();
            let delete_id = id.clone();
            html! {
                <>
                    <button class="row-btn" onclick={link.callback(move |_| Msg::StartEdit(edit_id.clone()))}>
                        { "Edit" }
                    </button>
                    <button class="row-btn danger" onclick={link.callback(move |_| Msg::Delete(delete_id.clone()))}>
                        { "Delete" }
                    </button>
                    { for actions.iter().map(|action| {
                        let action = *action;
                        let id = id.clone();
                        html! {
                            <button class="row-btn" onclick={link.callback(move |_| Msg::RowAction(action, id.clone()))}>
                                { action.label() }
                            </button>
                        }
                    }) }
                </>
            }
        }
        None => html! {},
    };

    html! {
        <tr {style}>
            { for row.cells.into_iter().map(|cell| html! { <td>{ cell }</td> }) }
            <td class="row-actions">{ buttons }</td>
        </tr>
    }
}

fn build_pager(panel: &ResourcePanel, link: &Scope<ResourcePanel>) -> Html {
    let controls = panel.list.controls();
    let label = match controls.total_pages {
        Some(total) => format!("Page {} of {}", controls.page, total.max(1)),
        None => format!("Page {}", controls.page),
    };
    let busy = panel.list.is_loading();

    html! {
        <div class="pager">
            <button
                disabled={busy || !controls.has_prev}
                onclick={link.callback(|_| Msg::PreviousPage)}
            >
                { "Previous" }
            </button>
            <span class="page-info">{ label }</span>
            <button
                disabled={busy || !controls.has_next}
                onclick={link.callback(|_| Msg::NextPage)}
            >
                { "Next" }
            </button>
        </div>
    }
}
