//! Details panel for the selected call

use crate::controller::DELETE_PROMPT;
use calldash_core::Call;
use leptos::prelude::*;

/// Shown when a selected call has no transcript, summary or extracted data
pub const AWAITING_RESULTS: &str = "Call is in progress or no data available yet.";

/// Everything known about one call, with a delete action
#[component]
pub fn CallDetails(
    /// Full snapshot of the selected call
    call: Call,
) -> impl IntoView {
    let delete_action = format!("/calls/{}/delete", urlencoding::encode(call.id.as_str()));
    let badge_style = format!("background-color: {}", call.status.color());
    let status = call.status.as_str().to_string();
    let created = call.created_display();
    let duration = call.duration_long();
    let transcript = call.transcript_text().map(str::to_string);
    let summary = call.summary_text().map(str::to_string);
    let answers = call.extracted_answers_pretty();
    let awaiting = call.awaiting_results();

    view! {
        <div class="call-details">
            <div class="call-details-header">
                <h2>"Call Details"</h2>
                <form method="post" action=delete_action data-confirm=DELETE_PROMPT>
                    <input type="hidden" name="confirm" value="no" />
                    <button type="submit" class="btn-delete">"Delete"</button>
                </form>
            </div>
            <div class="detail-section">
                <h3>"Call Information"</h3>
                <dl class="info-grid">
                    <dt>"Phone Number"</dt>
                    <dd>{call.phone_number}</dd>
                    <dt>"Status"</dt>
                    <dd><span class="call-status" style=badge_style>{status}</span></dd>
                    <dt>"Created"</dt>
                    <dd>{created}</dd>
                    {duration.map(|duration| view! {
                        <dt>"Duration"</dt>
                        <dd>{duration}</dd>
                    })}
                </dl>
            </div>
            {transcript.map(|text| view! {
                <div class="detail-section">
                    <h3>"Transcript"</h3>
                    <pre class="transcript">{text}</pre>
                </div>
            })}
            {summary.map(|text| view! {
                <div class="detail-section">
                    <h3>"AI Summary"</h3>
                    <p class="summary">{text}</p>
                </div>
            })}
            {answers.map(|text| view! {
                <div class="detail-section">
                    <h3>"Extracted Information"</h3>
                    <pre class="extracted">{text}</pre>
                </div>
            })}
            {awaiting.then(|| view! { <p class="waiting">{AWAITING_RESULTS}</p> })}
        </div>
    }
}
