use crate::models::domain::{
    AssessmentRecord, Booking, ChatMessage, DiaryEntry, DoctorProfile, DoctorRecommendation, Reminder,
    SeverityTier, SleepInsight, SleepMetrics, TherapyPlan, TherapySession,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionCreatedResponse {
    #[serde(rename = "sessionId")]
    pub session_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorListResponse {
    pub doctors: Vec<DoctorProfile>,
    pub total: usize,
}

/// Response for doctor recommendation endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub severity: Option<SeverityTier>,
    pub recommendations: Vec<DoctorRecommendation>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentHistoryResponse {
    pub assessments: Vec<AssessmentRecord>,
}

/// Diary entries with their aggregate metrics and insights
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiaryResponse {
    pub entries: Vec<DiaryEntry>,
    pub metrics: Option<SleepMetrics>,
    pub insights: Vec<SleepInsight>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingsResponse {
    pub bookings: Vec<Booking>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TherapyPlanResponse {
    pub plan: TherapyPlan,
    pub progress: f64,
}

impl From<TherapyPlan> for TherapyPlanResponse {
    fn from(plan: TherapyPlan) -> Self {
        let progress = plan.progress();
        Self { plan, progress }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledSessionResponse {
    pub session: TherapySession,
    pub reminder: Reminder,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TherapySessionsResponse {
    pub sessions: Vec<TherapySession>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemindersResponse {
    pub reminders: Vec<Reminder>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatHistoryResponse {
    pub messages: Vec<ChatMessage>,
    #[serde(rename = "quickQuestions")]
    pub quick_questions: Vec<String>,
}
