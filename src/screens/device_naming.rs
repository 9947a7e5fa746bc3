//! Give the paired device a personal name.

#[cfg(test)]
#[path = "device_naming_test.rs"]
mod device_naming_test;

use leptos::prelude::*;

/// Trimmed device name, or `None` when nothing usable was typed.
pub(crate) fn normalized_device_name(input: &str) -> Option<String> {
    let name = input.trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_owned())
    }
}

#[component]
pub fn DeviceNamingScreen(on_continue: Callback<String>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let input_ref = NodeRef::<leptos::html::Input>::new();

    #[cfg(feature = "csr")]
    Effect::new(move || {
        if let Some(input) = input_ref.get() {
            let input: web_sys::HtmlInputElement = input;
            let _ = input.focus();
        }
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(device_name) = normalized_device_name(&name.get()) {
            on_continue.run(device_name);
        }
    };

    view! {
        <div class="device-naming-screen">
            <div class="device-naming-screen__device" aria-hidden="true"></div>
            <h1>"Name your YOU2ME Keyform"</h1>
            <form class="device-naming-screen__form" on:submit=submit>
                <label class="device-naming-screen__label">
                    "YOU2ME Keyform Name"
                    <input
                        class="device-naming-screen__input"
                        type="text"
                        placeholder="e.g., My YOU2ME"
                        node_ref=input_ref
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <p class="device-naming-screen__hint">"This helps you recognise your device."</p>
                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || normalized_device_name(&name.get()).is_none()
                >
                    "Continue"
                </button>
            </form>
        </div>
    }
}
