use crate::models::domain::{
    hhmm, AppointmentType, BookingDetails, DiaryEntry, ReminderLead, SeverityTier,
};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::Validate;

/// ISI answers keyed by question id
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScoreAssessmentRequest {
    #[validate(length(min = 1))]
    pub answers: HashMap<String, i32>,
}

/// Request for ranked doctor recommendations
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendDoctorsRequest {
    pub severity: Option<SeverityTier>,
    #[serde(default = "default_language")]
    #[validate(length(min = 1))]
    pub language: String,
    pub location: Option<String>,
    #[validate(range(min = 1))]
    pub limit: Option<usize>,
}

/// Query for recommendations driven by a session's latest assessment
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendedDoctorsQuery {
    #[validate(length(min = 1))]
    pub language: Option<String>,
    pub location: Option<String>,
    #[validate(range(min = 1))]
    pub limit: Option<usize>,
}

pub fn default_language() -> String {
    "हिंदी".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DiaryEntryRequest {
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub bedtime: NaiveTime,
    #[serde(alias = "wake_time", rename = "wakeTime", with = "hhmm")]
    pub wake_time: NaiveTime,
    #[serde(alias = "sleep_latency", rename = "sleepLatency")]
    #[validate(range(max = 120))]
    pub sleep_latency: u16,
    #[serde(alias = "wake_ups", rename = "wakeUps")]
    #[validate(range(max = 10))]
    pub wake_ups: u8,
    #[serde(alias = "sleep_quality", rename = "sleepQuality")]
    #[validate(range(min = 1, max = 10))]
    pub sleep_quality: u8,
    #[serde(default)]
    #[validate(length(max = 1000))]
    pub notes: String,
}

impl From<DiaryEntryRequest> for DiaryEntry {
    fn from(req: DiaryEntryRequest) -> Self {
        DiaryEntry {
            date: req.date,
            bedtime: req.bedtime,
            wake_time: req.wake_time,
            sleep_latency: req.sleep_latency,
            wake_ups: req.wake_ups,
            sleep_quality: req.sleep_quality,
            notes: req.notes,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BookingRequest {
    #[serde(alias = "doctor_id", rename = "doctorId")]
    #[validate(length(min = 1))]
    pub doctor_id: String,
    pub date: NaiveDate,
    #[validate(length(min = 1))]
    pub time: String,
    #[serde(alias = "appointment_type", rename = "appointmentType")]
    pub appointment_type: AppointmentType,
    #[serde(alias = "patient_name", rename = "patientName")]
    #[validate(length(min = 1, max = 100))]
    pub patient_name: String,
    #[serde(alias = "patient_phone", rename = "patientPhone")]
    #[validate(length(min = 1, max = 20))]
    pub patient_phone: String,
    #[serde(default)]
    #[validate(length(max = 1000))]
    pub reason: String,
}

impl From<BookingRequest> for BookingDetails {
    fn from(req: BookingRequest) -> Self {
        BookingDetails {
            doctor_id: req.doctor_id,
            date: req.date,
            time: req.time,
            appointment_type: req.appointment_type,
            patient_name: req.patient_name,
            patient_phone: req.patient_phone,
            reason: req.reason,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScheduleSessionRequest {
    #[serde(alias = "module_id", rename = "moduleId")]
    #[validate(length(min = 1))]
    pub module_id: String,
    /// Local date and time, e.g. "2026-10-20T21:00:00"
    #[serde(alias = "scheduled_at", rename = "scheduledAt")]
    pub scheduled_at: NaiveDateTime,
    #[serde(alias = "reminder_lead", rename = "reminderLead", default = "default_reminder_lead")]
    pub reminder_lead: ReminderLead,
    #[serde(default)]
    #[validate(length(max = 1000))]
    pub notes: String,
}

fn default_reminder_lead() -> ReminderLead {
    ReminderLead::OneHour
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(length(min = 1, max = 1000))]
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemindersQuery {
    /// Only reminders due now
    #[serde(default)]
    pub due: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommend_request_defaults() {
        let req: RecommendDoctorsRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.language, "हिंदी");
        assert!(req.severity.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_recommend_request_rejects_zero_limit() {
        let req: RecommendDoctorsRequest =
            serde_json::from_str(r#"{"severity": "severe", "limit": 0}"#).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_diary_request_ranges() {
        let json = r#"{
            "date": "2026-10-01",
            "bedtime": "23:15",
            "wakeTime": "06:45",
            "sleepLatency": 20,
            "wakeUps": 2,
            "sleepQuality": 11
        }"#;
        let req: DiaryEntryRequest = serde_json::from_str(json).unwrap();
        assert!(req.validate().is_err());

        let entry = DiaryEntry::from(DiaryEntryRequest { sleep_quality: 6, ..req });
        assert_eq!(entry.wake_time, NaiveTime::from_hms_opt(6, 45, 0).unwrap());
        assert!(entry.notes.is_empty());
    }

    #[test]
    fn test_schedule_request_default_lead() {
        let json = r#"{"moduleId": "sleep_hygiene", "scheduledAt": "2026-10-20T21:00:00"}"#;
        let req: ScheduleSessionRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.reminder_lead, ReminderLead::OneHour);
    }

    #[test]
    fn test_booking_request_phone_only_required() {
        let json = r#"{
            "doctorId": "dr_priya_sharma",
            "date": "2026-10-20",
            "time": "10:00 AM",
            "appointmentType": "clinic_visit",
            "patientName": "राम",
            "patientPhone": "108"
        }"#;
        let req: BookingRequest = serde_json::from_str(json).unwrap();
        assert!(req.validate().is_ok());

        let req = BookingRequest { patient_phone: String::new(), ..req };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_chat_request_validation() {
        let req = ChatRequest { message: String::new() };
        assert!(req.validate().is_err());
    }
}
