//! Authenticated landing: interest pills plus the nearby-people list.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the populated half of the landing state; the app root renders
//! the empty dashboard instead when no interests are picked. Saved hearts
//! are screen-local — they are not session data.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use leptos::prelude::*;

use crate::components::person_card::PersonCard;
use crate::sim::people;
use crate::state::person::Person;

pub(crate) fn people_label(count: usize) -> String {
    if count == 1 {
        "1 person found".to_owned()
    } else {
        format!("{count} people found")
    }
}

/// Toggle a person id in the saved list, preserving insertion order.
pub(crate) fn toggle_saved(saved: &mut Vec<String>, person_id: &str) {
    if let Some(position) = saved.iter().position(|id| id == person_id) {
        saved.remove(position);
    } else {
        saved.push(person_id.to_owned());
    }
}

#[component]
pub fn LandingScreen(
    user_name: String,
    user_interests: Vec<String>,
    on_start_chat: Callback<Person>,
    on_edit_interests: Callback<()>,
) -> impl IntoView {
    let nearby = people::nearby_people();
    let saved = RwSignal::new(Vec::<String>::new());

    let on_toggle_save = Callback::new(move |person_id: String| {
        saved.update(|ids| toggle_saved(ids, &person_id));
    });

    let pills = user_interests.clone();
    let count_label = people_label(nearby.len());

    view! {
        <div class="landing-screen">
            <header class="landing-screen__header">
                <h1>"YOU2ME"</h1>
                <span class="landing-screen__user">{format!("Hi, {user_name}")}</span>
            </header>

            <section class="landing-screen__interests">
                <div class="landing-screen__interests-heading">
                    <h2>"Your interests for today"</h2>
                    <button
                        class="landing-screen__edit"
                        on:click=move |_| on_edit_interests.run(())
                    >
                        "Edit"
                    </button>
                </div>
                <div class="landing-screen__pills">
                    {pills
                        .into_iter()
                        .map(|interest| {
                            view! { <span class="landing-screen__pill">{interest}</span> }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="landing-screen__people">
                <h3>"People nearby with similar interests"</h3>
                <p class="landing-screen__count">{count_label}</p>
                {move || {
                    let saved_now = saved.get();
                    nearby
                        .clone()
                        .into_iter()
                        .map(|person| {
                            let is_saved = saved_now.iter().any(|id| *id == person.id);
                            view! {
                                <PersonCard
                                    person=person
                                    user_interests=user_interests.clone()
                                    saved=is_saved
                                    on_toggle_save=on_toggle_save
                                    on_start_chat=on_start_chat
                                />
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </section>
        </div>
    }
}
