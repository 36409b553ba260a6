//! Phone number form with its feedback messages

use leptos::prelude::*;

/// Form for placing a new call
#[component]
pub fn Composer(
    /// Pending phone number input
    phone_input: String,
    /// True while an initiate request is in flight
    initiating: bool,
    /// Last user-facing error
    error: Option<String>,
    /// One-shot success acknowledgment
    notice: Option<String>,
) -> impl IntoView {
    let label = if initiating { "Initiating..." } else { "Initiate Call" };

    view! {
        <h2>"Initiate New Call"</h2>
        <form class="initiate-form" method="post" action="/calls/initiate">
            <div class="form-group">
                <label for="phone_number">"Phone Number"</label>
                <input
                    type="tel"
                    id="phone_number"
                    name="phone_number"
                    value=phone_input
                    placeholder="+1234567890"
                    disabled=initiating
                />
            </div>
            <button type="submit" class="btn-primary" disabled=initiating>{label}</button>
        </form>
        {error.map(|message| view! {
            <div class="alert alert-error" role="alert">
                <span>{message}</span>
                <form method="post" action="/error/dismiss">
                    <button type="submit" class="btn-dismiss" aria-label="Dismiss">"×"</button>
                </form>
            </div>
        })}
        {notice.map(|message| view! {
            <div class="alert alert-success" role="status">
                <span>{message}</span>
            </div>
        })}
    }
}
