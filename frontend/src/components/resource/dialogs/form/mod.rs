//! Create/edit form shown inside the panel's top sheet.

use common::form::field::{FieldKind, FieldSpec};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::resource::{Msg, ResourcePanel};
use crate::tops_sheet::yw_material_top_sheet::YwMaterialTopSheet;

pub fn form_dialog(panel: &ResourcePanel, link: &Scope<ResourcePanel>) -> Html {
    let kind = panel.form.kind();
    let title = match panel.form.editing() {
        Some(_) => format!("Edit {}", kind.singular()),
        None => format!("Add {}", kind.singular()),
    };
    let submit_label = if panel.saving { "Saving..." } else { "Save" };

    html! {
        <YwMaterialTopSheet
            node_ref={panel.form_sheet_ref.clone()}
            {title}
            on_close={link.callback(|_: MouseEvent| Msg::Cancel)}
        >
            <form
                class="resource-form"
                onsubmit={link.callback(|e: SubmitEvent| {
                    e.prevent_default();
                    Msg::Submit
                })}
            >
                if panel.is_dirty() {
                    <span class="dirty-dot" title="Unsaved changes" />
                }
                { for panel.form.fields().iter().map(|field| build_field(panel, field, link)) }
                <div class="form-actions">
                    <button type="submit" class="primary-btn" disabled={panel.saving}>
                        { submit_label }
                    </button>
                    <button type="button" onclick={link.callback(|_| Msg::Cancel)}>
                        { "Cancel" }
                    </button>
                </div>
            </form>
        </YwMaterialTopSheet>
    }
}

fn build_field(panel: &ResourcePanel, field: &FieldSpec, link: &Scope<ResourcePanel>) -> Html {
    let key = field.key;
    let value = panel.form.value(key).to_string();
    let label = if field.required {
        format!("{} *", field.label)
    } else {
        field.label.to_string()
    };

    let input = match field.kind {
        FieldKind::Text => text_input("text", None, key, value, field.required, link),
        FieldKind::Integer => text_input("number", Some("1"), key, value, field.required, link),
        FieldKind::Decimal => text_input("number", Some("any"), key, value, field.required, link),
        FieldKind::Date => text_input("date", None, key, value, field.required, link),
        FieldKind::Choice(choices) => {
            let options = choices
                .iter()
                .map(|c| (c.to_string(), c.to_string()))
                .collect::<Vec<_>>();
            select_input(key, &value, &options, field.required, link)
        }
        FieldKind::Lookup(_) => {
            let options = panel.lookups.get(key).cloned().unwrap_or_default();
            select_input(key, &value, &options, field.required, link)
        }
    };

    html! {
        <label class="form-field">
            <span class="field-label">{ label }</span>
            { input }
        </label>
    }
}

fn text_input(
    input_type: &'static str,
    step: Option<&'static str>,
    key: &'static str,
    value: String,
    required: bool,
    link: &Scope<ResourcePanel>,
) -> Html {
    html! {
        <input
            type={input_type}
            {step}
            name={key}
            {value}
            {required}
            oninput={link.callback(move |e: InputEvent| Msg::FieldChanged {
                key,
                value: e.target_unchecked_into::<HtmlInputElement>().value(),
            })}
        />
    }
}

/// A dropdown. A current value missing from `options` is kept as its own
/// entry so editing never silently changes it.
fn select_input(
    key: &'static str,
    value: &str,
    options: &[(String, String)],
    required: bool,
    link: &Scope<ResourcePanel>,
) -> Html {
    let missing = !value.is_empty() && !options.iter().any(|(v, _)| v == value);

    html! {
        <select
            name={key}
            {required}
            onchange={link.callback(move |e: Event| Msg::FieldChanged {
                key,
                value: e.target_unchecked_into::<HtmlSelectElement>().value(),
            })}
        >
            <option value="" selected={value.is_empty()}>{ "Select..." }</option>
            if missing {
                <option value={value.to_string()} selected=true>{ value.to_string() }</option>
            }
            { for options.iter().map(|(v, l)| html! {
                <option value={v.clone()} selected={v == value}>{ l.clone() }</option>
            }) }
        </select>
    }
}
