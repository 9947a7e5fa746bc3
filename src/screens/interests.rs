//! Interest selection grid, capped at a per-call-site maximum.
//!
//! DESIGN
//! ======
//! The continue event is the guard: it fires only when the selection
//! reaches exactly `max_selection`, so the navigator can store the list
//! verbatim without re-checking. Selection keeps insertion order and
//! cannot hold duplicates — toggling an already-selected interest removes
//! it instead.

#[cfg(test)]
#[path = "interests_test.rs"]
mod interests_test;

use leptos::prelude::*;

/// The fixed interest catalogue.
pub const INTEREST_OPTIONS: [&str; 20] = [
    "Photography",
    "Hiking",
    "Coffee",
    "Music",
    "Art",
    "Reading",
    "Gaming",
    "Cooking",
    "Travel",
    "Fitness",
    "Movies",
    "Tech",
    "Yoga",
    "Dancing",
    "Food",
    "Nature",
    "Writing",
    "Fashion",
    "Podcasts",
    "Sports",
];

/// Toggle one interest: deselect if present, select if below the cap,
/// otherwise leave the selection untouched.
pub(crate) fn toggle_interest(selection: &mut Vec<String>, interest: &str, max: usize) {
    if let Some(position) = selection.iter().position(|i| i == interest) {
        selection.remove(position);
    } else if selection.len() < max {
        selection.push(interest.to_owned());
    }
}

/// The guard: continue only with exactly `max` interests selected.
pub(crate) fn can_continue(selection: &[String], max: usize) -> bool {
    selection.len() == max
}

#[component]
pub fn InterestsSelectionScreen(
    title: String,
    subtitle: String,
    #[prop(default = 3)] max_selection: usize,
    on_continue: Callback<Vec<String>>,
) -> impl IntoView {
    let selection = RwSignal::new(Vec::<String>::new());

    let continue_now = move |_| {
        let chosen = selection.get();
        if can_continue(&chosen, max_selection) {
            on_continue.run(chosen);
        }
    };

    view! {
        <div class="interests-screen">
            <header class="interests-screen__header">
                <h1>{title}</h1>
                <p>{subtitle}</p>
                <span class="interests-screen__count">
                    {move || format!("{}/{max_selection} selected", selection.get().len())}
                </span>
            </header>

            <div class="interests-screen__grid">
                {INTEREST_OPTIONS
                    .into_iter()
                    .map(|interest| {
                        view! {
                            <button
                                class="interest-chip"
                                class:interest-chip--selected=move || {
                                    selection.get().iter().any(|i| i == interest)
                                }
                                on:click=move |_| {
                                    selection
                                        .update(|chosen| {
                                            toggle_interest(chosen, interest, max_selection)
                                        });
                                }
                            >
                                {interest}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <button
                class="btn btn--primary interests-screen__continue"
                disabled=move || !can_continue(&selection.get(), max_selection)
                on:click=continue_now
            >
                "Continue"
            </button>
        </div>
    }
}
