use super::*;

// =============================================================
// AliveFlag
// =============================================================

#[test]
fn new_flag_is_alive() {
    assert!(AliveFlag::new().is_alive());
    assert!(AliveFlag::default().is_alive());
}

#[test]
fn cancel_kills_the_flag() {
    let flag = AliveFlag::new();
    flag.cancel();
    assert!(!flag.is_alive());
}

#[test]
fn clones_share_cancellation() {
    let flag = AliveFlag::new();
    let clone = flag.clone();
    clone.cancel();
    assert!(!flag.is_alive());
}

#[test]
fn run_after_without_browser_never_fires() {
    // Host-side the timer layer is inert; the action must not run inline.
    let flag = AliveFlag::new();
    run_after(&flag, 0, || panic!("must not fire host-side"));
    run_every(&flag, 0, || panic!("must not fire host-side"));
}

// =============================================================
// Rotating-copy cycling
// =============================================================

#[test]
fn cycle_wraps_at_len() {
    assert_eq!(cycle_next(0, 3), 1);
    assert_eq!(cycle_next(1, 3), 2);
    assert_eq!(cycle_next(2, 3), 0);
}

#[test]
fn cycle_of_empty_stays_put() {
    assert_eq!(cycle_next(0, 0), 0);
}
