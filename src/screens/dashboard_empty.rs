//! Empty dashboard shown before any interests are picked.

use leptos::prelude::*;

#[component]
pub fn DashboardEmptyScreen(on_choose_interests: Callback<()>) -> impl IntoView {
    view! {
        <div class="dashboard-empty-screen">
            <header class="dashboard-empty-screen__header">
                <h1>"YOU2ME"</h1>
            </header>
            <div class="dashboard-empty-screen__body">
                <div class="dashboard-empty-screen__icon">"☹"</div>
                <h2>"You haven't picked interests yet"</h2>
                <p>
                    "Choose what you're interested in so YOU2ME can find people nearby who share them."
                </p>
                <button class="btn btn--primary" on:click=move |_| on_choose_interests.run(())>
                    "Choose interests"
                </button>
            </div>
        </div>
    }
}
