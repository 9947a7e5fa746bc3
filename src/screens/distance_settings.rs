//! Device alert-radius preference; one pick, then continue.

use leptos::prelude::*;

use crate::state::session::DistanceBand;

#[component]
pub fn DistanceSettingsScreen(on_continue: Callback<DistanceBand>) -> impl IntoView {
    let selected = RwSignal::new(None::<DistanceBand>);

    let continue_now = move |_| {
        if let Some(band) = selected.get() {
            on_continue.run(band);
        }
    };

    view! {
        <div class="distance-settings-screen">
            <header class="distance-settings-screen__header">
                <h1>"Distance setting"</h1>
                <p>"How far should your YOU2ME listen?"</p>
            </header>

            <div class="distance-settings-screen__options">
                {DistanceBand::ALL
                    .into_iter()
                    .map(|band| {
                        view! {
                            <button
                                class="distance-card"
                                class:distance-card--selected=move || selected.get() == Some(band)
                                on:click=move |_| selected.set(Some(band))
                            >
                                <span class="distance-card__title">{band.title()}</span>
                                <span class="distance-card__range">{band.range()}</span>
                                <span class="distance-card__description">{band.description()}</span>
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <button
                class="btn btn--primary"
                disabled=move || selected.get().is_none()
                on:click=continue_now
            >
                "Continue"
            </button>
        </div>
    }
}
