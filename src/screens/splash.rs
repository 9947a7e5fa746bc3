//! Brand splash; auto-advances after a fixed delay.

use leptos::prelude::*;

use crate::util::delay;

/// How long the splash stays up before handing off to auth.
pub const SPLASH_MS: u32 = 4_000;

#[component]
pub fn SplashScreen(on_complete: Callback<()>) -> impl IntoView {
    let alive = delay::screen_alive();
    delay::run_after(&alive, SPLASH_MS, move || on_complete.run(()));

    view! {
        <div class="splash-screen">
            <div class="splash-screen__logo">"Y2M"</div>
            <h1 class="splash-screen__title">"YOU2ME"</h1>
            <p class="splash-screen__tagline">
                "Meet people nearby who care about what you care about."
            </p>
        </div>
    }
}
