//! Card component for one nearby person on the landing screen.
//!
//! DESIGN
//! ======
//! Keeps match presentation in one place so the landing list stays a thin
//! loop; save state lives with the caller because it spans cards.

use leptos::prelude::*;

use crate::sim::people::shared_interests;
use crate::state::person::Person;

/// A nearby-match card with save toggle and a start-chat action.
#[component]
pub fn PersonCard(
    person: Person,
    user_interests: Vec<String>,
    saved: bool,
    on_toggle_save: Callback<String>,
    on_start_chat: Callback<Person>,
) -> impl IntoView {
    let shared = shared_interests(&person.interests, &user_interests);
    let save_id = person.id.clone();
    let chat_person = person.clone();

    view! {
        <div class="person-card">
            <div class="person-card__avatar">{person.icon.clone()}</div>
            <div class="person-card__body">
                <div class="person-card__heading">
                    <div>
                        <h4 class="person-card__name">{person.name.clone()}</h4>
                        <p class="person-card__distance">{person.distance.clone()}</p>
                    </div>
                    <button
                        class="person-card__save"
                        class:person-card__save--active=saved
                        on:click=move |_| on_toggle_save.run(save_id.clone())
                    >
                        "♥"
                    </button>
                </div>
                <Show when={
                    let has_shared = !shared.is_empty();
                    move || has_shared
                }>
                    <div class="person-card__shared">
                        <p class="person-card__shared-label">"Shared interests:"</p>
                        <div class="person-card__shared-pills">
                            {shared
                                .clone()
                                .into_iter()
                                .map(|interest| {
                                    view! { <span class="person-card__pill">{interest}</span> }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>
                </Show>
                <button
                    class="btn btn--primary person-card__chat"
                    on:click=move |_| on_start_chat.run(chat_person.clone())
                >
                    "Press to start chatting"
                </button>
            </div>
        </div>
    }
}
