//! The enumerated set of screens in the onboarding/usage flow.

#[cfg(test)]
#[path = "screen_test.rs"]
mod screen_test;

/// One visual step in the flow; a state of the navigator's state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    /// Brand splash, auto-advances into auth.
    #[default]
    Splash,
    Auth,
    Welcome,
    DeviceIntro,
    DeviceNaming,
    DeviceScanning,
    DeviceError,
    ConnectionConfirmation,
    LocationPermission,
    PurposeValues,
    SafetyControl,
    SelectInterests,
    AgePreference,
    DistanceSettings,
    Loading,
    /// Generic recoverable-error screen.
    Error,
    Landing,
    DashboardEmpty,
    Chat,
}

/// Which rendering the landing state resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LandingVariant {
    /// No interests picked yet — show the empty dashboard instead of matches.
    Empty,
    /// Interest pills plus the nearby-people list.
    Populated,
}

/// View-level branch for [`Screen::Landing`]: the empty dashboard when no
/// interests have been picked, the populated match list otherwise.
#[must_use]
pub fn landing_variant(user_interests: &[String]) -> LandingVariant {
    if user_interests.is_empty() {
        LandingVariant::Empty
    } else {
        LandingVariant::Populated
    }
}
