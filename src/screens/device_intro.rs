//! What the companion device does; single continue into scanning.

use leptos::prelude::*;

#[component]
pub fn DeviceIntroScreen(on_continue: Callback<()>) -> impl IntoView {
    view! {
        <div class="device-intro-screen">
            <div class="device-intro-screen__device" aria-hidden="true"></div>
            <h1>
                "Your YOU2ME Keyform alerts you when someone nearby shares the same interests as you."
            </h1>
            <p>"No pressure. You decide when to interact."</p>
            <button class="btn btn--primary" on:click=move |_| on_continue.run(())>
                "Got it, let's connect"
            </button>
        </div>
    }
}
