//! Authentication method picker with inline email and phone forms.
//!
//! ERROR HANDLING
//! ==============
//! Validation failures stay on-screen as a dismissable banner; the
//! navigator only hears about complete submissions.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::state::event::AuthMethod;

/// Which inline form is open, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum AuthForm {
    #[default]
    Picker,
    Email,
    Phone,
}

pub(crate) fn validate_email_input(
    email: &str,
    password: &str,
) -> Result<AuthMethod, &'static str> {
    let email = email.trim();
    let password = password.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Please enter both email and password");
    }
    Ok(AuthMethod::Email {
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

pub(crate) fn validate_phone_input(number: &str) -> Result<AuthMethod, &'static str> {
    let number = number.trim();
    if number.is_empty() {
        return Err("Please enter your phone number");
    }
    Ok(AuthMethod::Phone {
        number: number.to_owned(),
    })
}

#[component]
pub fn AuthScreen(on_auth: Callback<AuthMethod>) -> impl IntoView {
    let form = RwSignal::new(AuthForm::Picker);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);

    let open_form = move |next: AuthForm| {
        error.set(None);
        form.set(next);
    };

    let submit_email = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_email_input(&email.get(), &password.get()) {
            Ok(method) => on_auth.run(method),
            Err(message) => error.set(Some(message)),
        }
    };

    let submit_phone = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_phone_input(&phone.get()) {
            Ok(method) => on_auth.run(method),
            Err(message) => error.set(Some(message)),
        }
    };

    view! {
        <div class="auth-screen">
            <header class="auth-screen__header">
                <h1>"Let's get you connected"</h1>
                <p>"This takes under a minute"</p>
            </header>

            <div class="auth-screen__options">
                <Show when=move || form.get() == AuthForm::Picker>
                    <button
                        class="btn btn--apple"
                        on:click=move |_| on_auth.run(AuthMethod::Apple)
                    >
                        "Continue with Apple"
                    </button>
                    <button
                        class="btn btn--google"
                        on:click=move |_| on_auth.run(AuthMethod::Google)
                    >
                        "Continue with Google"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| open_form(AuthForm::Email)>
                        "Continue with Email"
                    </button>
                    <button class="btn btn--outline" on:click=move |_| open_form(AuthForm::Phone)>
                        "Continue with Phone"
                    </button>
                </Show>

                <Show when=move || form.get() == AuthForm::Email>
                    <form class="auth-form" on:submit=submit_email>
                        <label class="auth-form__label">
                            "Email"
                            <input
                                class="auth-form__input"
                                type="email"
                                placeholder="you@example.com"
                                prop:value=move || email.get()
                                on:input=move |ev| {
                                    email.set(event_target_value(&ev));
                                    error.set(None);
                                }
                            />
                        </label>
                        <label class="auth-form__label">
                            "Password"
                            <input
                                class="auth-form__input"
                                type="password"
                                placeholder="Create a password"
                                prop:value=move || password.get()
                                on:input=move |ev| {
                                    password.set(event_target_value(&ev));
                                    error.set(None);
                                }
                            />
                        </label>
                        <button class="btn btn--primary" type="submit">
                            "Continue"
                        </button>
                        <button
                            class="btn btn--ghost"
                            type="button"
                            on:click=move |_| open_form(AuthForm::Picker)
                        >
                            "Back"
                        </button>
                    </form>
                </Show>

                <Show when=move || form.get() == AuthForm::Phone>
                    <form class="auth-form" on:submit=submit_phone>
                        <label class="auth-form__label">
                            "Phone Number"
                            <input
                                class="auth-form__input"
                                type="tel"
                                placeholder="+1 (555) 000-0000"
                                prop:value=move || phone.get()
                                on:input=move |ev| {
                                    phone.set(event_target_value(&ev));
                                    error.set(None);
                                }
                            />
                        </label>
                        <p class="auth-form__hint">
                            "We'll send you an OTP to verify your number"
                        </p>
                        <button class="btn btn--primary" type="submit">
                            "Send OTP"
                        </button>
                        <button
                            class="btn btn--ghost"
                            type="button"
                            on:click=move |_| open_form(AuthForm::Picker)
                        >
                            "Back"
                        </button>
                    </form>
                </Show>

                <Show when=move || error.get().is_some()>
                    <p class="auth-screen__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
            </div>
        </div>
    }
}
