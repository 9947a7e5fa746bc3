//! Reusable UI component modules.

pub mod person_card;
