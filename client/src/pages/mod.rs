//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Session restriction is applied in `app`, not here.

pub mod assessment;
pub mod course_detail;
pub mod courses;
pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod register;
