//! Simulated external services.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything a shipping build would get from hardware or a backend —
//! Bluetooth scanning, nearby-people matching — is stubbed here with timers
//! and fixed mock data. These modules are the seam a real integration
//! replaces; the navigator and screens never know the difference.

pub mod people;
pub mod scanner;
