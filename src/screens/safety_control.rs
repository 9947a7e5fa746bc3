//! The control promises; three cards and a continue.

use leptos::prelude::*;

const CONTROLS: [(&str, &str, &str); 3] = [
    (
        "🎯",
        "You control interests",
        "Change what you're open to connecting about anytime.",
    ),
    (
        "📍",
        "You control distance",
        "Set how far away people can be before YOU2ME alerts you.",
    ),
    (
        "💬",
        "You choose when to chat",
        "No obligation to respond. Connect only when you want to.",
    ),
];

#[component]
pub fn SafetyControlScreen(on_continue: Callback<()>) -> impl IntoView {
    view! {
        <div class="safety-control-screen">
            <h1>"You're in control"</h1>
            <div class="safety-control-screen__cards">
                {CONTROLS
                    .into_iter()
                    .map(|(icon, title, description)| {
                        view! {
                            <div class="value-card">
                                <span class="value-card__icon">{icon}</span>
                                <div>
                                    <h3 class="value-card__title">{title}</h3>
                                    <p class="value-card__description">{description}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <button class="btn btn--primary" on:click=move |_| on_continue.run(())>
                "Continue"
            </button>
        </div>
    }
}
