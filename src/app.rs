//! Root application component: session ownership, event dispatch, and the
//! rendering arm of the screen-flow state machine.
//!
//! ARCHITECTURE
//! ============
//! One `RwSignal<SessionState>` is the whole application state. Screens get
//! `Callback` props that feed [`FlowEvent`]s into [`dispatch`]; the match in
//! [`render_screen`] is the only place a screen identifier turns into a
//! view, and the compiler keeps it exhaustive over all nineteen states.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::screens::age_preference::AgePreferenceScreen;
use crate::screens::auth::AuthScreen;
use crate::screens::chat::ChatScreen;
use crate::screens::connection_confirmation::ConnectionConfirmationScreen;
use crate::screens::dashboard_empty::DashboardEmptyScreen;
use crate::screens::device_error::DeviceErrorScreen;
use crate::screens::device_intro::DeviceIntroScreen;
use crate::screens::device_naming::DeviceNamingScreen;
use crate::screens::device_scanning::DeviceScanningScreen;
use crate::screens::distance_settings::DistanceSettingsScreen;
use crate::screens::generic_error::GenericErrorScreen;
use crate::screens::interests::InterestsSelectionScreen;
use crate::screens::landing::LandingScreen;
use crate::screens::loading::LoadingScreen;
use crate::screens::location_permission::LocationPermissionScreen;
use crate::screens::purpose_values::PurposeValuesScreen;
use crate::screens::safety_control::SafetyControlScreen;
use crate::screens::splash::SplashScreen;
use crate::screens::welcome::WelcomeScreen;
use crate::state::event::FlowEvent;
use crate::state::screen::{LandingVariant, Screen, landing_variant};
use crate::state::session::SessionState;

/// Feed one flow event into the session. Stale events (from timers of
/// already-replaced screens) are dropped by `apply` and only logged.
fn dispatch(session: RwSignal<SessionState>, event: FlowEvent) {
    session.update(|state| {
        let from = state.current_screen;
        let applied = state.apply(event);
        #[cfg(feature = "csr")]
        if applied {
            log::debug!("screen transition {from:?} -> {:?}", state.current_screen);
        } else {
            log::debug!("stale flow event ignored on {from:?}");
        }
        #[cfg(not(feature = "csr"))]
        let _ = (from, applied);
    });
}

/// Root component. Owns the session and renders the current screen.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());

    view! {
        <Title text="YOU2ME"/>
        <main class="app-shell">{move || render_screen(session)}</main>
    }
}

fn render_screen(session: RwSignal<SessionState>) -> AnyView {
    let state = session.get();
    match state.current_screen {
        Screen::Splash => view! {
            <SplashScreen on_complete=Callback::new(move |()| {
                dispatch(session, FlowEvent::SplashDone);
            })/>
        }
        .into_any(),

        Screen::Auth => view! {
            <AuthScreen on_auth=Callback::new(move |method| {
                dispatch(session, FlowEvent::Authenticated(method));
            })/>
        }
        .into_any(),

        Screen::Welcome => view! {
            <WelcomeScreen on_next=Callback::new(move |()| {
                dispatch(session, FlowEvent::WelcomeNext);
            })/>
        }
        .into_any(),

        Screen::DeviceIntro => view! {
            <DeviceIntroScreen on_continue=Callback::new(move |()| {
                dispatch(session, FlowEvent::DeviceIntroContinue);
            })/>
        }
        .into_any(),

        Screen::DeviceScanning => view! {
            <DeviceScanningScreen
                on_select=Callback::new(move |(id, name)| {
                    dispatch(session, FlowEvent::DeviceSelected { id, name });
                })
                on_back=Callback::new(move |()| dispatch(session, FlowEvent::ScanBack))
                on_error=Callback::new(move |()| dispatch(session, FlowEvent::ScanFailed))
            />
        }
        .into_any(),

        Screen::DeviceError => view! {
            <DeviceErrorScreen
                on_try_again=Callback::new(move |()| dispatch(session, FlowEvent::ScanRetry))
                on_skip=Callback::new(move |()| dispatch(session, FlowEvent::ScanSkip))
            />
        }
        .into_any(),

        Screen::DeviceNaming => view! {
            <DeviceNamingScreen on_continue=Callback::new(move |name| {
                dispatch(session, FlowEvent::DeviceNamed { name });
            })/>
        }
        .into_any(),

        Screen::ConnectionConfirmation => view! {
            <ConnectionConfirmationScreen
                device_name=state.device_name.clone()
                on_complete=Callback::new(move |()| {
                    dispatch(session, FlowEvent::ConnectionDone);
                })
            />
        }
        .into_any(),

        Screen::LocationPermission => view! {
            <LocationPermissionScreen
                on_allow=Callback::new(move |()| dispatch(session, FlowEvent::LocationDecided))
                on_skip=Callback::new(move |()| dispatch(session, FlowEvent::LocationDecided))
            />
        }
        .into_any(),

        Screen::PurposeValues => view! {
            <PurposeValuesScreen on_continue=Callback::new(move |()| {
                dispatch(session, FlowEvent::PurposeContinue);
            })/>
        }
        .into_any(),

        Screen::SafetyControl => view! {
            <SafetyControlScreen on_continue=Callback::new(move |()| {
                dispatch(session, FlowEvent::SafetyContinue);
            })/>
        }
        .into_any(),

        Screen::SelectInterests => view! {
            <InterestsSelectionScreen
                title="Select your interests".to_owned()
                subtitle="Pick at least one — this is how YOU2ME works.".to_owned()
                max_selection=5
                on_continue=Callback::new(move |interests| {
                    dispatch(session, FlowEvent::InterestsChosen { interests });
                })
            />
        }
        .into_any(),

        Screen::AgePreference => view! {
            <AgePreferenceScreen on_continue=Callback::new(move |band| {
                dispatch(session, FlowEvent::AgeChosen(band));
            })/>
        }
        .into_any(),

        Screen::DistanceSettings => view! {
            <DistanceSettingsScreen on_continue=Callback::new(move |band| {
                dispatch(session, FlowEvent::DistanceChosen(band));
            })/>
        }
        .into_any(),

        Screen::Loading => view! {
            <LoadingScreen on_complete=Callback::new(move |()| {
                dispatch(session, FlowEvent::LoadingDone);
            })/>
        }
        .into_any(),

        Screen::Error => view! {
            <GenericErrorScreen
                message=state.error_message.clone()
                on_retry=Callback::new(move |()| dispatch(session, FlowEvent::ErrorRetry))
            />
        }
        .into_any(),

        Screen::Landing => match landing_variant(&state.user_interests) {
            LandingVariant::Empty => view! {
                <DashboardEmptyScreen on_choose_interests=Callback::new(move |()| {
                    dispatch(session, FlowEvent::EditInterests);
                })/>
            }
            .into_any(),
            LandingVariant::Populated => view! {
                <LandingScreen
                    user_name=state.user_name.clone()
                    user_interests=state.user_interests.clone()
                    on_start_chat=Callback::new(move |person| {
                        dispatch(session, FlowEvent::StartChat(person));
                    })
                    on_edit_interests=Callback::new(move |()| {
                        dispatch(session, FlowEvent::EditInterests);
                    })
                />
            }
            .into_any(),
        },

        Screen::DashboardEmpty => view! {
            <DashboardEmptyScreen on_choose_interests=Callback::new(move |()| {
                dispatch(session, FlowEvent::ChooseInterests);
            })/>
        }
        .into_any(),

        // Unreachable through the transition table without a person; render
        // nothing rather than crash.
        Screen::Chat => match state.current_chat_person.clone() {
            Some(person) => view! {
                <ChatScreen
                    person=person
                    on_back=Callback::new(move |()| dispatch(session, FlowEvent::ChatBack))
                />
            }
            .into_any(),
            None => ().into_any(),
        },
    }
}
