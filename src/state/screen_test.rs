use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_screen_is_splash() {
    assert_eq!(Screen::default(), Screen::Splash);
}

// =============================================================
// Landing view branch
// =============================================================

#[test]
fn no_interests_renders_empty_dashboard() {
    assert_eq!(landing_variant(&[]), LandingVariant::Empty);
}

#[test]
fn any_interest_renders_populated_list() {
    assert_eq!(
        landing_variant(&["Coffee".to_owned()]),
        LandingVariant::Populated
    );
}
