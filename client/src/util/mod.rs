//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure decision
//! logic from page and component markup to improve reuse and testability.

pub mod dark_mode;
pub mod display;
pub mod guard;
pub mod validation;
