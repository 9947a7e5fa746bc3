//! Pairing succeeded; shows the chosen device name and auto-advances.

#[cfg(test)]
#[path = "connection_confirmation_test.rs"]
mod connection_confirmation_test;

use leptos::prelude::*;

use crate::util::delay;

/// How long the confirmation stays up before moving on.
pub const CONFIRMATION_MS: u32 = 2_000;

/// Name shown on the confirmation card; placeholder when naming was skipped.
pub(crate) fn confirmation_name(device_name: &str) -> &str {
    if device_name.is_empty() {
        "YOUR YOU2ME"
    } else {
        device_name
    }
}

#[component]
pub fn ConnectionConfirmationScreen(
    #[prop(default = String::new())] device_name: String,
    on_complete: Callback<()>,
) -> impl IntoView {
    let alive = delay::screen_alive();
    delay::run_after(&alive, CONFIRMATION_MS, move || on_complete.run(()));

    let shown_name = confirmation_name(&device_name).to_owned();

    view! {
        <div class="connection-confirmation-screen">
            <div class="connection-confirmation-screen__check">"✓"</div>
            <h1>"You're now connected 💙"</h1>
            <p class="connection-confirmation-screen__name">{shown_name}</p>
            <p>"Your YOU2ME device is ready to help you discover shared interests around you."</p>
        </div>
    }
}
