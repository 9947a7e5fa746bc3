//! Match-search interstitial; rotating copy, auto-advances.

use leptos::prelude::*;

use crate::util::delay;

/// How long the interstitial runs before landing.
pub const LOADING_MS: u32 = 4_000;
/// How often the status copy rotates.
pub const LOADING_MESSAGE_ROTATE_MS: u32 = 1_500;

/// Rotating status copy while "matching" runs.
pub const LOADING_MESSAGES: [&str; 3] = [
    "Finding your people…",
    "Tuning into shared interests…",
    "Almost there…",
];

#[component]
pub fn LoadingScreen(on_complete: Callback<()>) -> impl IntoView {
    let message_index = RwSignal::new(0_usize);

    let alive = delay::screen_alive();
    delay::run_every(&alive, LOADING_MESSAGE_ROTATE_MS, move || {
        message_index.update(|i| *i = delay::cycle_next(*i, LOADING_MESSAGES.len()));
    });
    delay::run_after(&alive, LOADING_MS, move || on_complete.run(()));

    view! {
        <div class="loading-screen">
            <div class="loading-screen__pulse" aria-hidden="true"></div>
            <p class="loading-screen__message">
                {move || LOADING_MESSAGES[message_index.get()]}
            </p>
        </div>
    }
}
