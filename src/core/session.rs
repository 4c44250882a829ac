//! Per-user state and the operations that change it.
//!
//! Every operation takes the current state explicitly and either applies a
//! complete change or returns an error; callers persist the result.

use crate::catalog;
use crate::core::chatbot::{bot_reply, initial_history};
use crate::core::diary::{calculate_sleep_metrics, validate_entry};
use crate::core::error::CoreError;
use crate::core::severity::score_severity;
use crate::core::therapy::{create_therapy_plan, schedule_session};
use crate::models::{
    AssessmentRecord, BookingDetails, Booking, BotReply, ChatMessage, ChatRole, DiaryEntry,
    ReminderLead, Reminder, ReminderStatus, SessionStatus, SeverityResult, SeverityTier, SleepMetrics,
    TherapyPlan, TherapySession,
};
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(rename = "diaryEntries")]
    pub diary_entries: Vec<DiaryEntry>,
    pub assessments: Vec<AssessmentRecord>,
    pub bookings: Vec<Booking>,
    #[serde(rename = "therapyPlan")]
    pub therapy_plan: Option<TherapyPlan>,
    #[serde(rename = "therapySessions")]
    pub therapy_sessions: Vec<TherapySession>,
    pub reminders: Vec<Reminder>,
    #[serde(rename = "chatHistory")]
    pub chat_history: Vec<ChatMessage>,
}

/// Dashboard overview of a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    #[serde(rename = "diaryEntries")]
    pub diary_entries: usize,
    pub assessments: usize,
    pub bookings: usize,
    #[serde(rename = "completedTherapySessions")]
    pub completed_therapy_sessions: usize,
    #[serde(rename = "latestSeverity")]
    pub latest_severity: Option<SeverityTier>,
    #[serde(rename = "latestScore")]
    pub latest_score: Option<u8>,
    #[serde(rename = "therapyProgress")]
    pub therapy_progress: Option<f64>,
    #[serde(rename = "sleepMetrics")]
    pub sleep_metrics: Option<SleepMetrics>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            diary_entries: Vec::new(),
            assessments: Vec::new(),
            bookings: Vec::new(),
            therapy_plan: None,
            therapy_sessions: Vec::new(),
            reminders: Vec::new(),
            chat_history: initial_history(),
        }
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score a questionnaire and append it to the assessment history
    pub fn record_assessment(&mut self, responses: &HashMap<String, i32>) -> Result<AssessmentRecord, CoreError> {
        let result = score_severity(responses)?;
        let record = AssessmentRecord {
            id: Uuid::new_v4(),
            result,
            assessed_at: Utc::now(),
        };
        self.assessments.push(record.clone());
        Ok(record)
    }

    pub fn latest_assessment(&self) -> Option<&SeverityResult> {
        self.assessments.last().map(|a| &a.result)
    }

    pub fn latest_severity(&self) -> Option<SeverityTier> {
        self.latest_assessment().map(|r| r.severity)
    }

    pub fn add_diary_entry(&mut self, entry: DiaryEntry) -> Result<(), CoreError> {
        validate_entry(&entry)?;
        self.diary_entries.push(entry);
        Ok(())
    }

    pub fn sleep_metrics(&self) -> Option<SleepMetrics> {
        calculate_sleep_metrics(&self.diary_entries)
    }

    /// Book a catalog doctor at one of their offered slots
    pub fn book_appointment(&mut self, details: BookingDetails, now: NaiveDateTime) -> Result<Booking, CoreError> {
        let doctor = catalog::find_doctor(&details.doctor_id)
            .ok_or_else(|| CoreError::NotFound(format!("doctor {}", details.doctor_id)))?;

        if details.date < now.date() {
            return Err(CoreError::InvalidInput(
                "appointment date cannot be in the past".to_string(),
            ));
        }

        if !doctor.time_slots.iter().any(|slot| slot == &details.time) {
            return Err(CoreError::InvalidInput(format!(
                "{} is not an available slot for {}",
                details.time, doctor.id
            )));
        }

        if details.patient_name.trim().is_empty() || details.patient_phone.trim().is_empty() {
            return Err(CoreError::InvalidInput(
                "patient name and phone are required".to_string(),
            ));
        }

        let booking = Booking {
            id: Uuid::new_v4(),
            doctor_id: doctor.id.clone(),
            doctor_name: doctor.name.clone(),
            doctor_specialty: doctor.specialty.clone(),
            date: details.date,
            time: details.time,
            appointment_type: details.appointment_type,
            patient_name: details.patient_name,
            patient_phone: details.patient_phone,
            reason: details.reason,
            consultation_fee: doctor.consultation_fee,
            created_at: Utc::now(),
        };

        self.bookings.push(booking.clone());
        Ok(booking)
    }

    /// Return the therapy plan, creating it from the latest assessment if needed
    ///
    /// An existing plan is never replaced.
    pub fn ensure_therapy_plan(&mut self) -> Result<&TherapyPlan, CoreError> {
        if self.therapy_plan.is_none() {
            let severity = self.latest_severity().ok_or_else(|| {
                CoreError::InvalidInput("complete an assessment before creating a therapy plan".to_string())
            })?;
            self.therapy_plan = Some(create_therapy_plan(severity));
        }

        self.therapy_plan
            .as_ref()
            .ok_or_else(|| CoreError::NotFound("therapy plan".to_string()))
    }

    pub fn complete_module(&mut self, module_id: &str, now: NaiveDateTime) -> Result<TherapyPlan, CoreError> {
        let plan = self
            .therapy_plan
            .as_mut()
            .ok_or_else(|| CoreError::NotFound("therapy plan".to_string()))?;
        plan.complete_module(module_id, now)?;
        Ok(plan.clone())
    }

    pub fn schedule_therapy_session(
        &mut self,
        module_id: &str,
        scheduled_at: NaiveDateTime,
        reminder_lead: ReminderLead,
        notes: String,
        now: NaiveDateTime,
    ) -> Result<(TherapySession, Reminder), CoreError> {
        let (session, reminder) = schedule_session(
            self.therapy_plan.as_ref(),
            module_id,
            scheduled_at,
            reminder_lead,
            notes,
            now,
        )?;
        self.therapy_sessions.push(session.clone());
        self.reminders.push(reminder.clone());
        Ok((session, reminder))
    }

    /// Close a scheduled session; a missed session also dismisses its reminder
    pub fn close_therapy_session(
        &mut self,
        session_id: Uuid,
        outcome: SessionStatus,
        now: NaiveDateTime,
    ) -> Result<TherapySession, CoreError> {
        let session = self
            .therapy_sessions
            .iter_mut()
            .find(|s| s.id == session_id)
            .ok_or_else(|| CoreError::NotFound(format!("therapy session {}", session_id)))?;

        session.close(outcome, now)?;
        let closed = session.clone();

        if outcome == SessionStatus::Missed {
            for reminder in self.reminders.iter_mut().filter(|r| r.session_id == session_id) {
                reminder.status = ReminderStatus::Dismissed;
            }
        }

        Ok(closed)
    }

    pub fn dismiss_reminder(&mut self, reminder_id: Uuid) -> Result<Reminder, CoreError> {
        let reminder = self
            .reminders
            .iter_mut()
            .find(|r| r.id == reminder_id)
            .ok_or_else(|| CoreError::NotFound(format!("reminder {}", reminder_id)))?;
        reminder.status = ReminderStatus::Dismissed;
        Ok(reminder.clone())
    }

    /// Append a user message and the bot's reply to the chat history
    pub fn chat(&mut self, message: &str) -> Result<BotReply, CoreError> {
        if message.trim().is_empty() {
            return Err(CoreError::InvalidInput("message cannot be empty".to_string()));
        }

        let reply = bot_reply(message);
        self.chat_history.push(ChatMessage {
            role: ChatRole::User,
            content: message.to_string(),
        });
        self.chat_history.push(ChatMessage {
            role: ChatRole::Bot,
            content: reply.answer.clone(),
        });
        Ok(reply)
    }

    pub fn reset_chat(&mut self) {
        self.chat_history = initial_history();
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            diary_entries: self.diary_entries.len(),
            assessments: self.assessments.len(),
            bookings: self.bookings.len(),
            completed_therapy_sessions: self
                .therapy_sessions
                .iter()
                .filter(|s| s.status == SessionStatus::Completed)
                .count(),
            latest_severity: self.latest_severity(),
            latest_score: self.latest_assessment().map(|r| r.total_score),
            therapy_progress: self.therapy_plan.as_ref().map(|p| p.progress()),
            sleep_metrics: self.sleep_metrics(),
        }
    }
}
