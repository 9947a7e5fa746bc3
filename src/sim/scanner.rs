//! Simulated Bluetooth device scan.
//!
//! Browser builds wait out the scan window and roll for an outcome; with
//! default features (host-side tests) [`scan`] resolves immediately with the
//! fixed discovery list. The outcome decision is a pure function of the roll
//! so both branches are testable without a timer.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "scanner_test.rs"]
mod scanner_test;

/// A companion device discovered during a scan.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeviceHit {
    pub id: String,
    pub name: String,
    /// Signal-strength proximity label, e.g. `"Very close"`.
    pub distance: String,
}

/// Scan window before results (or nothing) are reported.
pub const SCAN_WINDOW_MS: u32 = 4_000;
/// Pause between an empty result and the error hand-off.
pub const FAILURE_GRACE_MS: u32 = 500;
/// Pause between tapping a device and confirming the selection.
pub const SELECT_CONFIRM_MS: u32 = 500;
/// Fraction of scans that come back empty.
pub const FAILURE_RATE: f64 = 0.2;

/// Rotating status copy shown while the scan window is open.
pub const SCAN_MESSAGES: [&str; 3] = [
    "Searching for your YOU2ME…",
    "Almost there…",
    "Still looking…",
];
/// How often the scanning copy rotates.
pub const SCAN_MESSAGE_ROTATE_MS: u32 = 2_000;

/// The fixed hits a successful scan reports.
#[must_use]
pub fn discovered_devices() -> Vec<DeviceHit> {
    vec![
        DeviceHit {
            id: "1".to_owned(),
            name: "YOU2ME #A7F3".to_owned(),
            distance: "Very close".to_owned(),
        },
        DeviceHit {
            id: "2".to_owned(),
            name: "YOU2ME #B2E9".to_owned(),
            distance: "Close".to_owned(),
        },
        DeviceHit {
            id: "3".to_owned(),
            name: "YOU2ME #C8D1".to_owned(),
            distance: "Nearby".to_owned(),
        },
    ]
}

/// Whether a roll in `[0, 1)` counts as a successful scan.
#[must_use]
pub fn roll_succeeds(roll: f64) -> bool {
    roll > FAILURE_RATE
}

/// Run one scan window and report the discovered devices; an empty list
/// means the scan failed. Dropping the future cancels the scan.
pub async fn scan() -> Vec<DeviceHit> {
    #[cfg(feature = "csr")]
    {
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(SCAN_WINDOW_MS)))
            .await;
        if roll_succeeds(js_sys::Math::random()) {
            discovered_devices()
        } else {
            Vec::new()
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        discovered_devices()
    }
}
