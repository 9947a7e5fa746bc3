//! Simulated Bluetooth scan: scan window, then device list or error.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns one scan task and the rotating status copy; both die with the
//! screen's alive flag, so navigating back mid-scan leaves nothing behind
//! to fire a stale transition.

#[cfg(test)]
#[path = "device_scanning_test.rs"]
mod device_scanning_test;

use leptos::prelude::*;

use crate::sim::scanner::{self, DeviceHit};
use crate::util::delay;

pub(crate) fn found_label(count: usize) -> String {
    if count == 1 {
        "1 device found".to_owned()
    } else {
        format!("{count} devices found")
    }
}

#[component]
pub fn DeviceScanningScreen(
    /// Invoked with `(device_id, device_name)` once a pick is confirmed.
    on_select: Callback<(String, String)>,
    on_back: Callback<()>,
    on_error: Callback<()>,
) -> impl IntoView {
    let scanning = RwSignal::new(true);
    let devices = RwSignal::new(Vec::<DeviceHit>::new());
    let selected = RwSignal::new(None::<String>);
    let message_index = RwSignal::new(0_usize);

    let alive = delay::screen_alive();

    delay::run_every(&alive, scanner::SCAN_MESSAGE_ROTATE_MS, move || {
        message_index.update(|i| *i = delay::cycle_next(*i, scanner::SCAN_MESSAGES.len()));
    });

    #[cfg(feature = "csr")]
    {
        let alive_scan = alive.clone();
        leptos::task::spawn_local(async move {
            let hits = scanner::scan().await;
            if !alive_scan.is_alive() {
                return;
            }
            scanning.set(false);
            if hits.is_empty() {
                delay::run_after(&alive_scan, scanner::FAILURE_GRACE_MS, move || {
                    on_error.run(());
                });
            } else {
                devices.set(hits);
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    let _ = on_error;

    let select_device = {
        let alive = alive.clone();
        move |hit: DeviceHit| {
            if selected.get().is_some() {
                return;
            }
            selected.set(Some(hit.id.clone()));
            delay::run_after(&alive, scanner::SELECT_CONFIRM_MS, move || {
                on_select.run((hit.id, hit.name));
            });
        }
    };

    view! {
        <div class="device-scanning-screen">
            <header class="device-scanning-screen__header">
                <button class="btn btn--ghost" on:click=move |_| on_back.run(())>
                    "←"
                </button>
                <h1>"Select your device"</h1>
            </header>

            <Show
                when=move || scanning.get()
                fallback=move || {
                    let select_device = select_device.clone();
                    view! {
                        <div class="device-scanning-screen__results">
                            <p class="device-scanning-screen__count">
                                {move || found_label(devices.get().len())}
                            </p>
                            {move || {
                                let select_device = select_device.clone();
                                devices
                                    .get()
                                    .into_iter()
                                    .map(|hit| {
                                        let select_device = select_device.clone();
                                        let hit_id = hit.id.clone();
                                        let pick = hit.clone();
                                        view! {
                                            <button
                                                class="device-row"
                                                class:device-row--selected=move || {
                                                    selected.get().as_deref() == Some(hit_id.as_str())
                                                }
                                                disabled=move || selected.get().is_some()
                                                on:click=move |_| select_device(pick.clone())
                                            >
                                                <span class="device-row__name">{hit.name.clone()}</span>
                                                <span class="device-row__distance">
                                                    {hit.distance.clone()}
                                                </span>
                                            </button>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    }
                }
            >
                <div class="device-scanning-screen__scanning">
                    <div class="device-scanning-screen__spinner" aria-hidden="true"></div>
                    <p class="device-scanning-screen__message">
                        {move || scanner::SCAN_MESSAGES[message_index.get()]}
                    </p>
                    <div class="device-scanning-screen__tips">
                        <p>"Keep device nearby"</p>
                        <ul>
                            <li>"Bluetooth on"</li>
                            <li>"Long-press device button if needed"</li>
                        </ul>
                    </div>
                </div>
            </Show>
        </div>
    }
}
