//! One-to-one chat with a matched person; local echo only.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no messaging transport — history is seeded and sends append
//! locally. The screen requires a person; the app root renders nothing for
//! the chat state when none is set.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use leptos::prelude::*;

use crate::state::person::Person;

/// A single chat bubble.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub from_me: bool,
    pub time_label: String,
}

/// 12-hour clock label, e.g. `"9:41 AM"`.
pub(crate) fn clock_label(hours: u32, minutes: u32) -> String {
    let meridiem = if hours < 12 { "AM" } else { "PM" };
    let hour = match hours % 12 {
        0 => 12,
        h => h,
    };
    format!("{hour}:{minutes:02} {meridiem}")
}

fn now_label() -> String {
    #[cfg(feature = "csr")]
    {
        let now = js_sys::Date::new_0();
        clock_label(now.get_hours(), now.get_minutes())
    }
    #[cfg(not(feature = "csr"))]
    {
        clock_label(9, 41)
    }
}

/// The conversation every chat opens with.
pub(crate) fn seeded_history() -> Vec<ChatMessage> {
    vec![
        ChatMessage {
            id: "1".to_owned(),
            text: "Hey! I noticed we both love photography 📸".to_owned(),
            from_me: false,
            time_label: now_label(),
        },
        ChatMessage {
            id: "2".to_owned(),
            text: "Hi! Yes, I'm always looking for great spots around here!".to_owned(),
            from_me: true,
            time_label: now_label(),
        },
    ]
}

/// Build an outgoing message from the draft, or `None` for blank drafts.
pub(crate) fn outgoing_message(draft: &str) -> Option<ChatMessage> {
    let text = draft.trim();
    if text.is_empty() {
        return None;
    }
    Some(ChatMessage {
        id: uuid::Uuid::new_v4().to_string(),
        text: text.to_owned(),
        from_me: true,
        time_label: now_label(),
    })
}

pub(crate) fn avatar_initial(name: &str) -> String {
    name.chars().next().map(|c| c.to_string()).unwrap_or_default()
}

#[component]
pub fn ChatScreen(person: Person, on_back: Callback<()>) -> impl IntoView {
    let messages = RwSignal::new(seeded_history());
    let draft = RwSignal::new(String::new());
    let list_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest message in view.
    #[cfg(feature = "csr")]
    Effect::new(move || {
        let _ = messages.get().len();
        if let Some(list) = list_ref.get() {
            let list: web_sys::HtmlDivElement = list;
            list.set_scroll_top(list.scroll_height());
        }
    });

    let send = move || {
        if let Some(message) = outgoing_message(&draft.get()) {
            messages.update(|all| all.push(message));
            draft.set(String::new());
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            send();
        }
    };

    let initial = avatar_initial(&person.name);
    let interests_line = person.interests.join(", ");

    view! {
        <div class="chat-screen">
            <header class="chat-screen__header">
                <button class="btn btn--ghost" on:click=move |_| on_back.run(())>
                    "←"
                </button>
                <div class="chat-screen__peer">
                    <span class="chat-screen__avatar">{initial}</span>
                    <div>
                        <p class="chat-screen__name">{person.name.clone()}</p>
                        <p class="chat-screen__interests">{interests_line}</p>
                    </div>
                </div>
            </header>

            <div class="chat-screen__messages" node_ref=list_ref>
                {move || {
                    messages
                        .get()
                        .into_iter()
                        .map(|message| {
                            view! {
                                <div
                                    class="chat-bubble"
                                    class:chat-bubble--mine=message.from_me
                                >
                                    <p class="chat-bubble__text">{message.text}</p>
                                    <p class="chat-bubble__time">{message.time_label}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <p class="chat-screen__safety">
                "💙 Remember to keep conversations respectful and safe"
            </p>

            <div class="chat-screen__composer">
                <input
                    class="chat-screen__input"
                    type="text"
                    placeholder="Say hello…"
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary" on:click=move |_| send()>
                    "Send"
                </button>
            </div>
        </div>
    }
}
