//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is the plain model, `provider` is its single writer exposed
//! through context, `form` is per-form submission bookkeeping, and `ui`
//! holds presentation toggles.

pub mod form;
pub mod provider;
pub mod session;
pub mod ui;
