//! Call history component

use calldash_core::{CallId, CallListEntry};
use leptos::prelude::*;

/// Shown when the call list is empty
pub const EMPTY_LIST: &str = "No calls yet. Initiate your first call!";

/// Call history panel
#[component]
pub fn CallList(
    /// Calls in server order
    entries: Vec<CallListEntry>,
    /// Id of the call whose details are open
    selected: Option<CallId>,
) -> impl IntoView {
    let heading = format!("Call History ({})", entries.len());
    let empty = entries.is_empty();

    view! {
        <h2>{heading}</h2>
        <div class="calls-container">
            {empty.then(|| view! { <p class="empty-state">{EMPTY_LIST}</p> })}
            {entries
                .into_iter()
                .map(|entry| {
                    let active = selected.as_ref() == Some(&entry.id);
                    view! { <CallRow entry active /> }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

/// One clickable call in the history
#[component]
fn CallRow(entry: CallListEntry, active: bool) -> impl IntoView {
    let class = if active { "call-item active" } else { "call-item" };
    let href = format!("/calls/{}", urlencoding::encode(entry.id.as_str()));
    let badge_style = format!("background-color: {}", entry.status.color());
    let status = entry.status.as_str().to_string();

    view! {
        <a class=class href=href>
            <div class="call-header">
                <span class="call-number">{entry.phone_number}</span>
                <span class="call-status" style=badge_style>{status}</span>
            </div>
            <div class="call-meta">
                <span class="call-date">{entry.created}</span>
                {entry.duration.map(|duration| view! { <span class="call-duration">{duration}</span> })}
            </div>
        </a>
    }
}
