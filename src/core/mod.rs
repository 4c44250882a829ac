// Core algorithm exports
pub mod chatbot;
pub mod diary;
pub mod error;
pub mod filters;
pub mod ranking;
pub mod scoring;
pub mod session;
pub mod severity;
pub mod therapy;

pub use chatbot::{bot_reply, quick_questions};
pub use diary::{calculate_sleep_metrics, sleep_insights};
pub use error::CoreError;
pub use filters::{filter_doctors, matches_filter};
pub use ranking::{rank_doctors, DoctorRanker};
pub use scoring::calculate_doctor_score;
pub use session::{SessionState, SessionSummary};
pub use severity::{isi_questions, score_severity};
pub use therapy::{create_therapy_plan, due_reminders, upcoming_reminders};
