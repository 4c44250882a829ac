// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AnswerOption, AppointmentType, AssessmentRecord, Booking, BookingDetails, BotReply, ChatMessage,
    ChatRole, DiaryEntry, Difficulty, DoctorFilter, DoctorProfile, DoctorRecommendation, InsightKind,
    ModuleState, PlannedModule, Question, RankingQuery, RankingWeights, Reminder, ReminderLead,
    ReminderStatus, SessionStatus, SeverityResult, SeverityTier, SleepInsight, SleepMetrics,
    TherapyModule, TherapyPlan, TherapySession,
};
pub use requests::{
    default_language, BookingRequest, ChatRequest, DiaryEntryRequest, RecommendDoctorsRequest, RecommendedDoctorsQuery,
    RemindersQuery, ScheduleSessionRequest, ScoreAssessmentRequest,
};
pub use responses::{
    AssessmentHistoryResponse, BookingsResponse, ChatHistoryResponse, DiaryResponse,
    DoctorListResponse, ErrorResponse, HealthResponse, RecommendationsResponse, RemindersResponse,
    ScheduledSessionResponse, SessionCreatedResponse, TherapyPlanResponse, TherapySessionsResponse,
};
