//! Location permission ask; allow and skip both continue the flow.

use leptos::prelude::*;

#[component]
pub fn LocationPermissionScreen(on_allow: Callback<()>, on_skip: Callback<()>) -> impl IntoView {
    view! {
        <div class="location-permission-screen">
            <div class="location-permission-screen__icon">"📍"</div>
            <h1>"Enable location"</h1>
            <p>"We use location only to show nearby people with shared interests."</p>
            <p class="location-permission-screen__privacy">
                <strong>"Your privacy matters."</strong>
                " Location data is only used within the app to find nearby connections. We never share your exact location with other users or third parties."
            </p>
            <button class="btn btn--primary" on:click=move |_| on_allow.run(())>
                "Allow location"
            </button>
            <button class="btn btn--ghost" on:click=move |_| on_skip.run(())>
                "Not now"
            </button>
        </div>
    }
}
