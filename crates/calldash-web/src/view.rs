//! HTML rendering of the dashboard state

use crate::components::{CallDetails, CallList, Composer};
use crate::controller::DashboardState;
use leptos::prelude::*;
use std::time::Duration;

pub use crate::components::call_details::AWAITING_RESULTS;
pub use crate::components::call_list::EMPTY_LIST;

const PAGE_TEMPLATE: &str = include_str!("../templates/dashboard.html");

/// Shown when no call is selected
pub const NO_SELECTION: &str = "Select a call to view details";

/// Render the full dashboard page
#[must_use]
pub fn render_page(state: &DashboardState, poll_interval: Duration) -> String {
    fill_template(PAGE_TEMPLATE, |slot| match slot {
        "composer" => Some(render_composer(state)),
        "calls" => Some(render_call_list(state)),
        "details" => Some(render_details(state)),
        "poll_interval_ms" => Some(poll_interval.as_millis().to_string()),
        _ => None,
    })
}

/// Render the call history panel; also served on its own for polling
#[must_use]
pub fn render_call_list(state: &DashboardState) -> String {
    let entries = state.entries();
    let selected = state.selected.as_ref().map(|call| call.id.clone());

    view! { <CallList entries selected /> }.to_html()
}

fn render_composer(state: &DashboardState) -> String {
    let phone_input = state.phone_input.clone();
    let initiating = state.initiating;
    let error = state.error.clone();
    let notice = state.notice.clone();

    view! { <Composer phone_input initiating error notice /> }.to_html()
}

/// Render the details panel for the selected call
#[must_use]
pub fn render_details(state: &DashboardState) -> String {
    match state.selected.clone() {
        Some(call) => view! { <CallDetails call /> }.to_html(),
        None => view! { <p class="no-selection">{NO_SELECTION}</p> }.to_html(),
    }
}

/// Replace each `{{name}}` marker in one pass over the template.
///
/// Inserted text is never scanned again, so markers appearing inside call data
/// stay literal. Unknown markers are kept as they are.
fn fill_template(template: &str, slot: impl Fn(&str) -> Option<String>) -> String {
    let mut html = String::with_capacity(template.len());
    let mut rest = template;

    while let Some((before, after)) = rest.split_once("{{") {
        html.push_str(before);
        let Some((name, tail)) = after.split_once("}}") else {
            html.push_str("{{");
            rest = after;
            break;
        };
        match slot(name) {
            Some(value) => html.push_str(&value),
            None => {
                html.push_str("{{");
                html.push_str(name);
                html.push_str("}}");
            }
        }
        rest = tail;
    }

    html.push_str(rest);
    html
}
