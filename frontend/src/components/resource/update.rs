//! Update function for the resource panel.
//!
//! Elm-style: takes the panel state, the `Context` and a `Msg`, mutates the
//! state and returns whether to re-render. Network calls are spawned as local
//! futures that report back through the component link; nothing here awaits.
//!
//! Key behaviors
//! - Loading a page, with an extra count request for total-based lists.
//! - Debounced search over the rows already displayed.
//! - Opening the form sheet for create or edit, refreshing its dropdowns.
//! - Submitting create/update and reloading the current page on success.
//! - Confirmed deletes, which also notify the parent so dependents reload.

use common::error::ConsoleError;
use common::form::dirty::may_discard;
use common::form::field::FieldKind;
use common::model::envelope::ListPage;
use common::model::record::Record;
use common::requests::{decode, ApiRequest};
use gloo_console::{error, log};
use gloo_timers::future::TimeoutFuture;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::helpers::{alert, confirm, show_toast};
use crate::tops_sheet::yw_material_top_sheet::{close_top_sheet, open_top_sheet};

use super::messages::Msg;
use super::state::ResourcePanel;

/// Central update function for the panel.
pub fn update(panel: &mut ResourcePanel, ctx: &Context<ResourcePanel>, msg: Msg) -> bool {
    let kind = panel.list.kind();
    match msg {
        Msg::Load(page) => {
            let request = panel.list.begin_load(page);
            fetch_page(ctx, page, request);
            true
        }
        Msg::NextPage => match panel.list.next_page() {
            Some((page, request)) => {
                fetch_page(ctx, page, request);
                true
            }
            None => false,
        },
        Msg::PreviousPage => match panel.list.previous_page() {
            Some((page, request)) => {
                fetch_page(ctx, page, request);
                true
            }
            None => false,
        },
        Msg::PageFetched { page, result } => {
            match panel.list.count_request(&result) {
                Some(count) => {
                    let link = ctx.link().clone();
                    let base = api_base(ctx);
                    spawn_local(async move {
                        let counted = api::send(&base, &count)
                            .await
                            .and_then(|body| ListPage::parse(&body));
                        match counted {
                            Ok(all) => {
                                let total = all.total.unwrap_or(all.records.len() as u64);
                                link.send_message(Msg::PageLoaded {
                                    page,
                                    result: result.with_total(total),
                                });
                            }
                            Err(err) => link.send_message(Msg::LoadFailed(err)),
                        }
                    });
                }
                None => ctx.link().send_message(Msg::PageLoaded { page, result }),
            }
            false
        }
        Msg::PageLoaded { page, result } => {
            log!(format!(
                "{}: page {} loaded with {} records",
                kind.endpoint(),
                page,
                result.records.len()
            ));
            panel.list.finish_load(page, result);
            panel.search_text.clear();
            panel.debouncer.cancel();
            true
        }
        Msg::LoadFailed(err) => {
            panel.list.fail_load();
            report(ctx, &format!("Failed to load {}", kind.title().to_lowercase()), err);
            true
        }
        Msg::SearchInput(text) => {
            let ticket = panel.debouncer.schedule(text.clone());
            panel.search_text = text;
            let delay = panel.debouncer.delay_ms();
            let link = ctx.link().clone();
            spawn_local(async move {
                TimeoutFuture::new(delay).await;
                link.send_message(Msg::SearchElapsed(ticket));
            });
            true
        }
        Msg::SearchElapsed(ticket) => match panel.debouncer.elapsed(ticket) {
            Some(query) => {
                panel.list.apply_filter(&query);
                true
            }
            None => false,
        },
        Msg::LookupLoaded { key, options } => {
            panel.lookups.insert(key, options);
            true
        }
        Msg::OpenCreate(values) => {
            if !confirm_discard(panel) {
                return false;
            }
            panel.form.reset();
            for (key, value) in values {
                panel.form.set(key, value);
            }
            open_form(panel, ctx);
            true
        }
        Msg::StartEdit(id) => {
            let link = ctx.link().clone();
            let base = api_base(ctx);
            let request = ApiRequest::fetch(kind, &id);
            spawn_local(async move {
                let fetched = api::send(&base, &request)
                    .await
                    .and_then(|body| decode::<Record>(&body));
                match fetched {
                    Ok(record) => link.send_message(Msg::EditLoaded { id, record }),
                    Err(err) => link.send_message(Msg::ActionFailed(err)),
                }
            });
            false
        }
        Msg::EditLoaded { id, record } => {
            if !confirm_discard(panel) {
                return false;
            }
            panel.form.begin_edit(id, &record);
            open_form(panel, ctx);
            true
        }
        Msg::FieldChanged { key, value } => {
            panel.form.set(key, value);
            panel.publish_dirty_flag(ctx.props());
            true
        }
        Msg::Submit => {
            if panel.saving {
                return false;
            }
            match panel.form.submit_request() {
                Ok(request) => {
                    panel.saving = true;
                    let link = ctx.link().clone();
                    let base = api_base(ctx);
                    spawn_local(async move {
                        match api::send(&base, &request).await {
                            Ok(_) => link.send_message(Msg::SubmitSucceeded),
                            Err(err) => link.send_message(Msg::SubmitFailed(err)),
                        }
                    });
                }
                Err(err) => report(ctx, &format!("Failed to save {}", kind.singular()), err),
            }
            true
        }
        Msg::SubmitSucceeded => {
            let verb = if panel.form.editing().is_some() {
                "updated"
            } else {
                "added"
            };
            show_toast(&format!("{} {} successfully!", capitalize(kind.singular()), verb));
            panel.saving = false;
            panel.form.complete();
            close_form(panel, ctx);
            ctx.link().send_message(Msg::Load(panel.list.page()));
            true
        }
        Msg::SubmitFailed(err) => {
            panel.saving = false;
            report(ctx, &format!("Failed to save {}", kind.singular()), err);
            true
        }
        Msg::Cancel => {
            if !confirm_discard(panel) {
                return false;
            }
            panel.form.reset();
            close_form(panel, ctx);
            true
        }
        Msg::Delete(id) => {
            let confirmed = confirm(&format!(
                "Are you sure you want to delete this {}?",
                kind.singular()
            ));
            let Some(request) = ApiRequest::delete(kind, &id, confirmed) else {
                return false;
            };
            let link = ctx.link().clone();
            let base = api_base(ctx);
            spawn_local(async move {
                match api::send(&base, &request).await {
                    Ok(_) => link.send_message(Msg::Deleted),
                    Err(err) => link.send_message(Msg::ActionFailed(err)),
                }
            });
            false
        }
        Msg::Deleted => {
            show_toast(&format!("{} deleted successfully!", capitalize(kind.singular())));
            ctx.props().on_deleted.emit(kind);
            ctx.link().send_message(Msg::Load(panel.list.page()));
            false
        }
        Msg::RowAction(action, id) => {
            ctx.props().on_row_action.emit((action, id));
            false
        }
        Msg::ActionFailed(err) => {
            report(ctx, &format!("Failed to process {}", kind.singular()), err);
            false
        }
    }
}

fn api_base(ctx: &Context<ResourcePanel>) -> String {
    ctx.props().config.api_base.clone()
}

fn fetch_page(ctx: &Context<ResourcePanel>, page: u32, request: ApiRequest) {
    let link = ctx.link().clone();
    let base = api_base(ctx);
    spawn_local(async move {
        let fetched = api::send(&base, &request)
            .await
            .and_then(|body| ListPage::parse(&body));
        match fetched {
            Ok(result) => link.send_message(Msg::PageFetched { page, result }),
            Err(err) => link.send_message(Msg::LoadFailed(err)),
        }
    });
}

/// Fills every dropdown of the form. Failures only leave a dropdown empty.
fn load_lookups(ctx: &Context<ResourcePanel>) {
    let limit = ctx.props().config.lookup_limit;
    for field in ctx.props().kind.fields() {
        let FieldKind::Lookup(lookup) = field.kind else {
            continue;
        };
        let key = field.key;
        let link = ctx.link().clone();
        let base = api_base(ctx);
        let request = ApiRequest::lookup(lookup.source, limit);
        spawn_local(async move {
            let fetched = api::send(&base, &request)
                .await
                .and_then(|body| ListPage::parse(&body));
            match fetched {
                Ok(page) => link.send_message(Msg::LookupLoaded {
                    key,
                    options: lookup.options(&page),
                }),
                Err(err) => error!(format!("options for {} unavailable: {}", key, err)),
            }
        });
    }
}

fn open_form(panel: &mut ResourcePanel, ctx: &Context<ResourcePanel>) {
    panel.form_open = true;
    panel.mark_form_clean(ctx.props());
    open_top_sheet(panel.form_sheet_ref.clone());
    load_lookups(ctx);
}

fn close_form(panel: &mut ResourcePanel, ctx: &Context<ResourcePanel>) {
    panel.form_open = false;
    panel.form_baseline_md5 = None;
    panel.publish_dirty_flag(ctx.props());
    close_top_sheet(panel.form_sheet_ref.clone());
}

/// Asks before unsaved form contents are replaced or dropped.
fn confirm_discard(panel: &ResourcePanel) -> bool {
    may_discard(panel.is_dirty(), || confirm("Discard unsaved changes?"))
}

/// Logs and surfaces a failed action; a rejected session also signs out.
fn report(ctx: &Context<ResourcePanel>, context: &str, err: ConsoleError) {
    error!(format!("{}: {}", context, err));
    alert(&format!("{}. {}", context, err));
    if err == ConsoleError::Unauthorized {
        ctx.props().on_unauthorized.emit(());
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
