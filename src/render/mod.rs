//! Server-side HTML for the page's components.
//!
//! Components are plain functions from data to markup. Interactive elements
//! carry `data-action` / `data-target` attributes that [`Action::parse`]
//! turns back into actions for [`Site::dispatch`](crate::Site::dispatch).

mod components;
mod modal;

pub use components::*;
pub use modal::registration_modal;

use crate::model::{EventRecord, SiteInfo, Sponsor};
use crate::site::{detail_anchor, Action, TOP_ANCHOR};
use crate::workflow::RegistrationWorkflow;

/// Everything the page needs to render.
pub struct PageView<'a> {
    pub info: &'a SiteInfo,
    pub events: &'a [EventRecord],
    pub sponsors: &'a [Sponsor],
    pub modal: Option<&'a RegistrationWorkflow>,
    pub scroll_button_visible: bool,
    pub copyright_year: i32,
}

/// Escape text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// ` data-action="..." data-target="..."` for a button.
pub(crate) fn action_attrs(action: &Action) -> String {
    let mut attrs = format!(r#" data-action="{}""#, action.kind().as_ref());
    if let Some(target) = action.target() {
        attrs.push_str(&format!(r#" data-target="{}""#, escape(&target)));
    }
    attrs
}

pub(crate) fn button(class: &str, action: &Action, disabled: bool, label: &str) -> String {
    let disabled = if disabled { " disabled" } else { "" };
    format!(
        r#"<button type="button" class="{class}"{}{disabled}>{label}</button>"#,
        action_attrs(action)
    )
}

/// The full document.
pub fn page(view: &PageView) -> String {
    let cards: String = view.events.iter().map(event_card).collect();
    let details: String = view
        .events
        .iter()
        .map(|event| {
            format!(
                r#"<div id="{}">{}</div>"#,
                detail_anchor(event.id),
                event_details(event, view.info)
            )
        })
        .collect();
    let modal = view.modal.map(registration_modal).unwrap_or_default();

    format!(
        concat!(
            "<!DOCTYPE html>\n",
            r#"<html lang="en"><head><meta charset="utf-8"><title>{title}</title></head>"#,
            r#"<body><div id="{top}" class="page">"#,
            "{header}",
            r#"<main><section id="events" class="events">{cards}</section>"#,
            r#"<section id="details" class="details">{details}</section>"#,
            "{sponsors}</main>",
            "{footer}{scroll}{modal}",
            "</div></body></html>\n"
        ),
        title = escape(view.info.event_name),
        top = TOP_ANCHOR,
        header = header(view.info),
        cards = cards,
        details = details,
        sponsors = sponsors(view.sponsors),
        footer = footer(view.info, view.copyright_year),
        scroll = scroll_to_top_button(view.scroll_button_visible),
        modal = modal,
    )
}
