//! User domain module.
//!
//! Contains the authenticated user model, the onboarding profile payload,
//! and the fixed selection tables used by the onboarding form.

mod model;

pub use model::{OCCUPATIONS, OnboardingProfile, PROVINCES, Role, User};
