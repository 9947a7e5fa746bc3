//! Post-auth welcome; single continue into device setup.

use leptos::prelude::*;

#[component]
pub fn WelcomeScreen(on_next: Callback<()>) -> impl IntoView {
    view! {
        <div class="welcome-screen">
            <div class="welcome-screen__logo">"Y2M"</div>
            <h1>"Welcome to YOU2ME"</h1>
            <p>"Let's connect your device to get started."</p>
            <button class="btn btn--primary" on:click=move |_| on_next.run(())>
                "Connect my device"
            </button>
        </div>
    }
}
