//! Generic recoverable-error screen; retry restarts the flow.

use leptos::prelude::*;

#[component]
pub fn GenericErrorScreen(
    #[prop(default = String::new())] message: String,
    on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="generic-error-screen">
            <div class="generic-error-screen__icon">"!"</div>
            <p class="generic-error-screen__message">{message}</p>
            <button class="btn btn--primary" on:click=move |_| on_retry.run(())>
                "Try again"
            </button>
        </div>
    }
}
