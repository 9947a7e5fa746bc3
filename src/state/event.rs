//! Transition triggers the screens may emit.
//!
//! DESIGN
//! ======
//! One variant per row of the transition table, carrying exactly the payload
//! that row writes into the session. Every event knows its source screen;
//! [`crate::state::session::SessionState::apply`] rejects an event whose
//! source is no longer the current screen, which is what keeps a timer from
//! a replaced screen from ever firing a transition.

#[cfg(test)]
#[path = "event_test.rs"]
mod event_test;

use crate::state::person::Person;
use crate::state::screen::Screen;
use crate::state::session::{AgeBand, DistanceBand};

/// How the user authenticated on the auth screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthMethod {
    Apple,
    Google,
    Email { email: String, password: String },
    Phone { number: String },
}

/// A named transition trigger, emitted at most once per user action (or by a
/// screen-scoped timer for the auto-advance rows).
#[derive(Clone, Debug, PartialEq)]
pub enum FlowEvent {
    /// Splash delay elapsed (auto).
    SplashDone,
    Authenticated(AuthMethod),
    WelcomeNext,
    DeviceIntroContinue,
    /// A discovered device was picked from the scan results.
    DeviceSelected { id: String, name: String },
    ScanBack,
    /// The scan window closed with no devices found.
    ScanFailed,
    ScanRetry,
    ScanSkip,
    DeviceNamed { name: String },
    /// Connection-confirmation delay elapsed (auto).
    ConnectionDone,
    /// Location allowed or skipped — both converge on the same next screen.
    LocationDecided,
    PurposeContinue,
    SafetyContinue,
    /// Precondition: the interests screen emits this only once the selection
    /// reaches its configured maximum.
    InterestsChosen { interests: Vec<String> },
    AgeChosen(AgeBand),
    DistanceChosen(DistanceBand),
    /// Loading delay elapsed (auto).
    LoadingDone,
    StartChat(Person),
    EditInterests,
    /// The standalone empty dashboard's call-to-action.
    ChooseInterests,
    ChatBack,
    ErrorRetry,
}

impl FlowEvent {
    /// The screen this event may legally be emitted from.
    #[must_use]
    pub fn source(&self) -> Screen {
        match self {
            Self::SplashDone => Screen::Splash,
            Self::Authenticated(_) => Screen::Auth,
            Self::WelcomeNext => Screen::Welcome,
            Self::DeviceIntroContinue => Screen::DeviceIntro,
            Self::DeviceSelected { .. } | Self::ScanBack | Self::ScanFailed => {
                Screen::DeviceScanning
            }
            Self::ScanRetry | Self::ScanSkip => Screen::DeviceError,
            Self::DeviceNamed { .. } => Screen::DeviceNaming,
            Self::ConnectionDone => Screen::ConnectionConfirmation,
            Self::LocationDecided => Screen::LocationPermission,
            Self::PurposeContinue => Screen::PurposeValues,
            Self::SafetyContinue => Screen::SafetyControl,
            Self::InterestsChosen { .. } => Screen::SelectInterests,
            Self::AgeChosen(_) => Screen::AgePreference,
            Self::DistanceChosen(_) => Screen::DistanceSettings,
            Self::LoadingDone => Screen::Loading,
            Self::StartChat(_) | Self::EditInterests => Screen::Landing,
            Self::ChooseInterests => Screen::DashboardEmpty,
            Self::ChatBack => Screen::Chat,
            Self::ErrorRetry => Screen::Error,
        }
    }
}
