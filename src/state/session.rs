//! The session record and the full transition table.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `SessionState` lives for the whole page lifetime, owned by the app
//! root as a context signal. Screens never mutate it directly; they emit
//! [`FlowEvent`]s and all mutation funnels through [`SessionState::apply`].
//! Nothing is persisted — a reload starts over at the splash screen.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::state::event::{AuthMethod, FlowEvent};
use crate::state::person::Person;
use crate::state::screen::Screen;

/// Age window the user is comfortable matching within.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum AgeBand {
    Within1,
    Within2,
    Within3,
    Within5,
    Any,
}

impl AgeBand {
    pub const ALL: [Self; 5] = [
        Self::Within1,
        Self::Within2,
        Self::Within3,
        Self::Within5,
        Self::Any,
    ];

    /// Stable token for the band.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Self::Within1 => "±1",
            Self::Within2 => "±2",
            Self::Within3 => "±3",
            Self::Within5 => "±5",
            Self::Any => "any",
        }
    }

    /// Label shown on the age-preference screen.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Within1 => "±1 year",
            Self::Within2 => "±2 years",
            Self::Within3 => "±3 years",
            Self::Within5 => "±5 years",
            Self::Any => "Doesn't matter",
        }
    }

    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|band| band.token() == token)
    }
}

/// Alert radius the companion device should cover.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum DistanceBand {
    Low,
    Medium,
    High,
}

impl DistanceBand {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Stable token for the band.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Approximate radius shown on the distance screen.
    #[must_use]
    pub fn range(self) -> &'static str {
        match self {
            Self::Low => "20m",
            Self::Medium => "50m",
            Self::High => "2km",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Low => "Very close proximity",
            Self::Medium => "Same area or building",
            Self::High => "General neighborhood",
        }
    }

    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|band| band.token() == token)
    }
}

/// The in-memory record of onboarding answers and navigation position.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub current_screen: Screen,
    pub user_name: String,
    pub device_name: String,
    /// Insertion-ordered, duplicate-free (the selection screen enforces
    /// both before emitting).
    pub user_interests: Vec<String>,
    pub age_preference: Option<AgeBand>,
    pub distance_preference: Option<DistanceBand>,
    pub current_chat_person: Option<Person>,
    /// Read only by the generic error screen.
    pub error_message: String,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            current_screen: Screen::Splash,
            user_name: "Guest".to_owned(),
            device_name: String::new(),
            user_interests: Vec::new(),
            age_preference: None,
            distance_preference: None,
            current_chat_person: None,
            error_message: String::new(),
        }
    }
}

impl SessionState {
    /// Apply one flow event: mutate the onboarding data the corresponding
    /// table row writes and advance `current_screen`.
    ///
    /// Returns `false` without mutating anything when the event's source
    /// screen is no longer current — a late timer or double-fired callback
    /// from a replaced screen is silently dropped.
    pub fn apply(&mut self, event: FlowEvent) -> bool {
        if self.current_screen != event.source() {
            return false;
        }
        match event {
            FlowEvent::SplashDone => self.current_screen = Screen::Auth,
            FlowEvent::Authenticated(method) => {
                if let Some(name) = display_name(&method) {
                    self.user_name = name;
                }
                self.current_screen = Screen::Welcome;
            }
            FlowEvent::WelcomeNext => self.current_screen = Screen::DeviceIntro,
            FlowEvent::DeviceIntroContinue => self.current_screen = Screen::DeviceScanning,
            FlowEvent::DeviceSelected { name, .. } => {
                self.device_name = name;
                self.current_screen = Screen::DeviceNaming;
            }
            FlowEvent::ScanBack => self.current_screen = Screen::DeviceIntro,
            FlowEvent::ScanFailed => self.current_screen = Screen::DeviceError,
            FlowEvent::ScanRetry => self.current_screen = Screen::DeviceScanning,
            FlowEvent::ScanSkip => self.current_screen = Screen::LocationPermission,
            FlowEvent::DeviceNamed { name } => {
                self.device_name = name;
                self.current_screen = Screen::ConnectionConfirmation;
            }
            FlowEvent::ConnectionDone => self.current_screen = Screen::LocationPermission,
            FlowEvent::LocationDecided => self.current_screen = Screen::PurposeValues,
            FlowEvent::PurposeContinue => self.current_screen = Screen::SafetyControl,
            FlowEvent::SafetyContinue => self.current_screen = Screen::SelectInterests,
            FlowEvent::InterestsChosen { interests } => {
                self.user_interests = interests;
                self.current_screen = Screen::AgePreference;
            }
            FlowEvent::AgeChosen(band) => {
                self.age_preference = Some(band);
                self.current_screen = Screen::DistanceSettings;
            }
            FlowEvent::DistanceChosen(band) => {
                self.distance_preference = Some(band);
                self.current_screen = Screen::Loading;
            }
            FlowEvent::LoadingDone => self.current_screen = Screen::Landing,
            FlowEvent::StartChat(person) => {
                self.current_chat_person = Some(person);
                self.current_screen = Screen::Chat;
            }
            FlowEvent::EditInterests | FlowEvent::ChooseInterests => {
                self.current_screen = Screen::SelectInterests;
            }
            FlowEvent::ChatBack => self.current_screen = Screen::Landing,
            FlowEvent::ErrorRetry => self.current_screen = Screen::Splash,
        }
        true
    }

    /// Jump to the generic error screen with a message. The only inbound
    /// edge to [`Screen::Error`]; recovery is `ErrorRetry` back to splash.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.error_message = message.into();
        self.current_screen = Screen::Error;
    }
}

/// Display name derived from the auth method: the email local-part with its
/// first character uppercased, or a fixed placeholder per provider. `None`
/// leaves the default name in place.
#[must_use]
pub fn display_name(method: &AuthMethod) -> Option<String> {
    match method {
        AuthMethod::Apple => Some("Alex".to_owned()),
        AuthMethod::Google => Some("Jordan".to_owned()),
        AuthMethod::Phone { .. } => Some("User".to_owned()),
        AuthMethod::Email { email, .. } => {
            let local = email.split('@').next().unwrap_or_default();
            let mut chars = local.chars();
            let first = chars.next()?;
            let mut name = String::new();
            name.extend(first.to_uppercase());
            name.push_str(chars.as_str());
            Some(name)
        }
    }
}
