//! What YOU2ME is for; three value cards and a continue.

use leptos::prelude::*;

const VALUES: [(&str, &str, &str); 3] = [
    (
        "💙",
        "No awkward intros",
        "Connect naturally through shared interests, not forced conversations.",
    ),
    (
        "👥",
        "Belonging without pressure",
        "Find your people without the anxiety of making the first move.",
    ),
    (
        "🛡",
        "Safe & comfortable",
        "You're always in control of when and how you interact.",
    ),
];

#[component]
pub fn PurposeValuesScreen(on_continue: Callback<()>) -> impl IntoView {
    view! {
        <div class="purpose-values-screen">
            <h1>"How YOU2ME works"</h1>
            <div class="purpose-values-screen__cards">
                {VALUES
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
