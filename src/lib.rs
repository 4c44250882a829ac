//! SleepMitra - insomnia self-management service
//!
//! Scores the Insomnia Severity Index questionnaire, ranks sleep specialists
//! from a static catalog, and keeps per-user sleep diaries, bookings, CBT-I
//! therapy plans and chatbot history in an in-memory session store.

pub mod catalog;
pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{filter_doctors, rank_doctors, score_severity, CoreError, DoctorRanker, SessionState};
pub use models::{DoctorFilter, DoctorProfile, DoctorRecommendation, SeverityResult, SeverityTier};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let ranked = rank_doctors(catalog::doctors(), Some(SeverityTier::Moderate), "हिंदी", None, 2);
        assert_eq!(ranked.len(), 2);
    }
}
