//! Age-window preference; one pick, then continue.

use leptos::prelude::*;

use crate::state::session::AgeBand;

#[component]
pub fn AgePreferenceScreen(on_continue: Callback<AgeBand>) -> impl IntoView {
    let selected = RwSignal::new(None::<AgeBand>);

    let continue_now = move |_| {
        if let Some(band) = selected.get() {
            on_continue.run(band);
        }
    };

    view! {
        <div class="age-preference-screen">
            <header class="age-preference-screen__header">
                <h1>"Age preference"</h1>
                <p>"For comfort and relevance — not strict filtering."</p>
            </header>

            <div class="age-preference-screen__options">
                {AgeBand::ALL
                    .into_iter()
                    .map(|band| {
                        view! {
                            <button
                                class="option-row"
                                class:option-row--selected=move || selected.get() == Some(band)
                                on:click=move |_| selected.set(Some(band))
                            >
                                {band.label()}
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
