//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and shared cards, reading the session and
//! UI state from Leptos context providers.

pub mod course_card;
pub mod footer;
pub mod navbar;
pub mod protected_route;
