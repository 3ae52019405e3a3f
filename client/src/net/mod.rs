//! Networking modules for the auth boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` defines the collaborator contract, `api` implements it over HTTP,
//! and `types` defines the shared wire schema.

pub mod api;
pub mod auth;
pub mod types;
