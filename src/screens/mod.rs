//! Screen modules, one per navigator state.
//!
//! ARCHITECTURE
//! ============
//! Each screen is a presentational leaf: it takes plain config values plus
//! `Callback` props and emits each callback at most once per user action.
//! Navigation decisions live entirely in `state::session`; screens never
//! touch the session directly.

pub mod age_preference;
pub mod auth;
pub mod chat;
pub mod connection_confirmation;
pub mod dashboard_empty;
pub mod device_error;
pub mod device_intro;
pub mod device_naming;
pub mod device_scanning;
pub mod distance_settings;
pub mod generic_error;
pub mod interests;
pub mod landing;
pub mod loading;
pub mod location_permission;
pub mod purpose_values;
pub mod safety_control;
pub mod splash;
pub mod welcome;
