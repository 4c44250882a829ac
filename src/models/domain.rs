use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Insomnia severity tier derived from the ISI total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityTier {
    Mild,
    Moderate,
    Severe,
}

impl SeverityTier {
    /// Hindi label shown to the user
    pub fn label(&self) -> &'static str {
        match self {
            SeverityTier::Mild => "हल्का",
            SeverityTier::Moderate => "मध्यम",
            SeverityTier::Severe => "गंभीर",
        }
    }
}

/// One selectable answer of a questionnaire item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerOption {
    pub label: String,
    pub score: u8,
}

/// A fixed questionnaire item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub options: Vec<AnswerOption>,
}

/// Outcome of scoring a complete questionnaire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeverityResult {
    #[serde(rename = "totalScore")]
    pub total_score: u8,
    #[serde(rename = "maxScore")]
    pub max_score: u8,
    pub severity: SeverityTier,
    #[serde(rename = "severityLabel")]
    pub severity_label: String,
    pub recommendations: Vec<String>,
    pub answers: BTreeMap<String, u8>,
}

/// Scored assessment kept in a session's history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub id: Uuid,
    pub result: SeverityResult,
    #[serde(rename = "assessedAt")]
    pub assessed_at: DateTime<Utc>,
}

/// Static doctor catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorProfile {
    pub id: String,
    pub name: String,
    /// Display title, e.g. "नींद चिकित्सा विशेषज्ञ"
    pub specialty: String,
    pub qualification: String,
    pub clinic: String,
    /// Specialty tags used for ranking and filtering
    pub specialties: Vec<String>,
    pub languages: Vec<String>,
    pub location: String,
    pub rating: f64,
    #[serde(rename = "experienceYears")]
    pub experience_years: u32,
    #[serde(rename = "patientsTreated")]
    pub patients_treated: u32,
    #[serde(rename = "consultationFee")]
    pub consultation_fee: u32,
    pub availability: Vec<String>,
    #[serde(rename = "timeSlots")]
    pub time_slots: Vec<String>,
    pub bio: String,
}

impl DoctorProfile {
    pub fn has_specialty(&self, tag: &str) -> bool {
        self.specialties.iter().any(|s| s == tag)
    }

    pub fn speaks(&self, language: &str) -> bool {
        self.languages.iter().any(|l| l == language)
    }
}

/// A doctor annotated with a ranking score and its reasons
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorRecommendation {
    #[serde(flatten)]
    pub doctor: DoctorProfile,
    #[serde(rename = "recommendationScore")]
    pub score: f64,
    #[serde(rename = "recommendationReasons")]
    pub reasons: Vec<String>,
}

/// Ranking request parameters
#[derive(Debug, Clone)]
pub struct RankingQuery {
    pub severity: Option<SeverityTier>,
    pub language: String,
    pub location: Option<String>,
    pub limit: usize,
}

/// Optional "view all doctors" filters, combined with AND
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DoctorFilter {
    pub specialty: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "minRating")]
    pub min_rating: Option<f64>,
}

/// Ranking bonus magnitudes
#[derive(Debug, Clone, Copy)]
pub struct RankingWeights {
    pub rating: f64,
    pub language: f64,
    pub location: f64,
    pub severe_cbti: f64,
    pub severe_neurological: f64,
    pub severe_experience: f64,
    pub severe_experience_years: u32,
    pub moderate_cbti: f64,
    pub moderate_psychology: f64,
    pub mild_hygiene: f64,
    pub mild_behavioral: f64,
    pub experience_per_year: f64,
    pub patient_cap: f64,
}

impl Default for RankingWeights {
    fn default() -> Self {
        Self {
            rating: 10.0,
            language: 20.0,
            location: 15.0,
            severe_cbti: 25.0,
            severe_neurological: 20.0,
            severe_experience: 15.0,
            severe_experience_years: 10,
            moderate_cbti: 20.0,
            moderate_psychology: 15.0,
            mild_hygiene: 15.0,
            mild_behavioral: 10.0,
            experience_per_year: 2.0,
            patient_cap: 20.0,
        }
    }
}

/// One night of the sleep diary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiaryEntry {
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub bedtime: NaiveTime,
    #[serde(rename = "wakeTime", with = "hhmm")]
    pub wake_time: NaiveTime,
    /// Minutes taken to fall asleep
    #[serde(rename = "sleepLatency")]
    pub sleep_latency: u16,
    #[serde(rename = "wakeUps")]
    pub wake_ups: u8,
    /// Self-rated, 1-10
    #[serde(rename = "sleepQuality")]
    pub sleep_quality: u8,
    #[serde(default)]
    pub notes: String,
}

/// Aggregates over the diary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepMetrics {
    #[serde(rename = "sleepEfficiency")]
    pub sleep_efficiency: f64,
    #[serde(rename = "avgSleepDuration")]
    pub avg_sleep_duration: f64,
    #[serde(rename = "avgSleepLatency")]
    pub avg_sleep_latency: f64,
    #[serde(rename = "avgWakeUps")]
    pub avg_wake_ups: f64,
    #[serde(rename = "avgSleepQuality")]
    pub avg_sleep_quality: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    PositiveTrend,
    NeedsImprovement,
    GoodContinuity,
    SleepDisruption,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepInsight {
    pub kind: InsightKind,
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentType {
    Teleconsultation,
    ClinicVisit,
}

impl AppointmentType {
    pub fn label(&self) -> &'static str {
        match self {
            AppointmentType::Teleconsultation => "टेलीकंसल्टेशन (वीडियो कॉल)",
            AppointmentType::ClinicVisit => "क्लिनिक विजिट (व्यक्तिगत)",
        }
    }
}

/// Appointment booked with a catalog doctor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    #[serde(rename = "doctorId")]
    pub doctor_id: String,
    #[serde(rename = "doctorName")]
    pub doctor_name: String,
    #[serde(rename = "doctorSpecialty")]
    pub doctor_specialty: String,
    pub date: NaiveDate,
    pub time: String,
    #[serde(rename = "appointmentType")]
    pub appointment_type: AppointmentType,
    #[serde(rename = "patientName")]
    pub patient_name: String,
    #[serde(rename = "patientPhone")]
    pub patient_phone: String,
    pub reason: String,
    #[serde(rename = "consultationFee")]
    pub consultation_fee: u32,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Fields supplied by the patient when booking
#[derive(Debug, Clone)]
pub struct BookingDetails {
    pub doctor_id: String,
    pub date: NaiveDate,
    pub time: String,
    pub appointment_type: AppointmentType,
    pub patient_name: String,
    pub patient_phone: String,
    pub reason: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// Static therapy module catalog entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TherapyModule {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "durationMinutes")]
    pub duration_minutes: u16,
    pub difficulty: Difficulty,
    #[serde(rename = "videoUrl")]
    pub video_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleState {
    Locked,
    Unlocked,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedModule {
    #[serde(rename = "moduleId")]
    pub module_id: String,
    pub week: u8,
    pub required: bool,
    pub state: ModuleState,
    #[serde(rename = "completedAt")]
    pub completed_at: Option<NaiveDateTime>,
}

/// Ordered, severity-specific therapy plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TherapyPlan {
    pub name: String,
    pub description: String,
    pub severity: SeverityTier,
    #[serde(rename = "durationWeeks")]
    pub duration_weeks: u8,
    pub modules: Vec<PlannedModule>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReminderLead {
    #[serde(rename = "15m")]
    FifteenMinutes,
    #[serde(rename = "30m")]
    ThirtyMinutes,
    #[serde(rename = "1h")]
    OneHour,
    #[serde(rename = "2h")]
    TwoHours,
    #[serde(rename = "1d")]
    OneDay,
}

impl ReminderLead {
    pub fn duration(&self) -> chrono::Duration {
        match self {
            ReminderLead::FifteenMinutes => chrono::Duration::minutes(15),
            ReminderLead::ThirtyMinutes => chrono::Duration::minutes(30),
            ReminderLead::OneHour => chrono::Duration::hours(1),
            ReminderLead::TwoHours => chrono::Duration::hours(2),
            ReminderLead::OneDay => chrono::Duration::days(1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Scheduled,
    Completed,
    Missed,
}

/// A scheduled sitting of a therapy module
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TherapySession {
    pub id: Uuid,
    #[serde(rename = "moduleId")]
    pub module_id: String,
    #[serde(rename = "scheduledAt")]
    pub scheduled_at: NaiveDateTime,
    #[serde(rename = "reminderLead")]
    pub reminder_lead: ReminderLead,
    #[serde(default)]
    pub notes: String,
    pub status: SessionStatus,
    #[serde(rename = "closedAt")]
    pub closed_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderStatus {
    Pending,
    Dismissed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reminder {
    pub id: Uuid,
    #[serde(rename = "sessionId")]
    pub session_id: Uuid,
    #[serde(rename = "remindAt")]
    pub remind_at: NaiveDateTime,
    pub message: String,
    pub status: ReminderStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// Chatbot answer with follow-up questions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotReply {
    pub answer: String,
    pub suggestions: Vec<String>,
}

/// Serde adapter for "HH:MM" wall-clock times
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}
