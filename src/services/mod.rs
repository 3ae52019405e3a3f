//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own account and session bookkeeping so route handlers can
//! stay focused on protocol translation and cookie plumbing.

pub mod account;
pub mod session;
