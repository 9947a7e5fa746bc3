//! Scan-failure screen: retry the scan or skip device setup.

use leptos::prelude::*;

#[component]
pub fn DeviceErrorScreen(on_try_again: Callback<()>, on_skip: Callback<()>) -> impl IntoView {
    view! {
        <div class="device-error-screen">
            <div class="device-error-screen__icon">"⚠"</div>
            <h1>"Hmm, we can't find it yet."</h1>
            <div class="device-error-screen__tips">
                <p>"Try these steps:"</p>
                <ul>
                    <li>"Keep the device within arm's reach"</li>
                    <li>"Check that Bluetooth is on"</li>
                    <li>"Long-press the device button to wake it"</li>
                </ul>
            </div>
            <button class="btn btn--primary" on:click=move |_| on_try_again.run(())>
                "Try again"
            </button>
            <button class="btn btn--ghost" on:click=move |_| on_skip.run(())>
                "Skip for now"
            </button>
        </div>
    }
}
