use crate::catalog;
use crate::core::error::CoreError;
use crate::models::{
    ModuleState, PlannedModule, Reminder, ReminderLead, ReminderStatus, SessionStatus, SeverityTier,
    TherapyPlan, TherapySession,
};
use chrono::NaiveDateTime;
use uuid::Uuid;

/// A pending reminder is due within this window on either side of its time
pub const REMINDER_WINDOW_SECS: i64 = 300;

// (module id, week, required)
type PlanLayout = &'static [(&'static str, u8, bool)];

const MILD_LAYOUT: PlanLayout = &[
    ("sleep_hygiene", 1, true),
    ("bedroom_environment", 1, true),
    ("sleep_routine", 2, true),
    ("breathing_techniques", 2, false),
    ("progressive_relaxation", 3, false),
    ("cbti_basics", 4, false),
];

const MODERATE_LAYOUT: PlanLayout = &[
    ("sleep_hygiene", 1, true),
    ("bedroom_environment", 1, true),
    ("sleep_routine", 2, true),
    ("breathing_techniques", 2, true),
    ("progressive_relaxation", 3, true),
    ("cbti_basics", 4, true),
    ("sleep_restriction", 5, true),
    ("cognitive_restructuring", 6, false),
];

const SEVERE_LAYOUT: PlanLayout = &[
    ("sleep_hygiene", 1, true),
    ("bedroom_environment", 1, true),
    ("sleep_routine", 2, true),
    ("breathing_techniques", 2, true),
    ("progressive_relaxation", 3, true),
    ("cbti_basics", 4, true),
    ("sleep_restriction", 5, true),
    ("cognitive_restructuring", 6, true),
    ("sleep_restriction_therapy", 7, true),
];

/// Build the plan for an assessed severity
///
/// Only the first module starts unlocked.
pub fn create_therapy_plan(severity: SeverityTier) -> TherapyPlan {
    let (name, description, duration_weeks, layout) = match severity {
        SeverityTier::Mild => (
            "बुनियादी नींद सुधार योजना",
            "हल्की नींद की समस्याओं के लिए बुनियादी तकनीकें",
            4,
            MILD_LAYOUT,
        ),
        SeverityTier::Moderate => (
            "मध्यम नींद चिकित्सा योजना",
            "मध्यम नींद की समस्याओं के लिए संरचित चिकित्सा",
            6,
            MODERATE_LAYOUT,
        ),
        SeverityTier::Severe => (
            "गहन नींद चिकित्सा योजना",
            "गंभीर नींद की समस्याओं के लिए व्यापक चिकित्सा",
            8,
            SEVERE_LAYOUT,
        ),
    };

    let modules = layout
        .iter()
        .enumerate()
        .map(|(i, (module_id, week, required))| PlannedModule {
            module_id: module_id.to_string(),
            week: *week,
            required: *required,
            state: if i == 0 { ModuleState::Unlocked } else { ModuleState::Locked },
            completed_at: None,
        })
        .collect();

    TherapyPlan {
        name: name.to_string(),
        description: description.to_string(),
        severity,
        duration_weeks,
        modules,
    }
}

impl TherapyPlan {
    /// Mark an unlocked module completed and unlock its successor
    ///
    /// Transitions only move forward: locked -> unlocked -> completed.
    pub fn complete_module(&mut self, module_id: &str, now: NaiveDateTime) -> Result<(), CoreError> {
        let index = self
            .modules
            .iter()
            .position(|m| m.module_id == module_id)
            .ok_or_else(|| CoreError::NotFound(format!("module {} is not part of the plan", module_id)))?;

        match self.modules[index].state {
            ModuleState::Locked => {
                return Err(CoreError::InvalidTransition(format!(
                    "module {} is still locked",
                    module_id
                )))
            }
            ModuleState::Completed => {
                return Err(CoreError::InvalidTransition(format!(
                    "module {} is already completed",
                    module_id
                )))
            }
            ModuleState::Unlocked => {}
        }

        self.modules[index].state = ModuleState::Completed;
        self.modules[index].completed_at = Some(now);

        if let Some(next) = self.modules.get_mut(index + 1) {
            if next.state == ModuleState::Locked {
                next.state = ModuleState::Unlocked;
            }
        }

        Ok(())
    }

    pub fn completed_count(&self) -> usize {
        self.modules
            .iter()
            .filter(|m| m.state == ModuleState::Completed)
            .count()
    }

    /// Fraction of modules completed, 0.0-1.0
    pub fn progress(&self) -> f64 {
        if self.modules.is_empty() {
            return 0.0;
        }
        self.completed_count() as f64 / self.modules.len() as f64
    }

    /// Unlocked or completed modules may be scheduled
    pub fn is_available(&self, module_id: &str) -> bool {
        self.modules
            .iter()
            .any(|m| m.module_id == module_id && m.state != ModuleState::Locked)
    }
}

/// Create a therapy session and its reminder
///
/// With a plan, only modules that are not locked can be scheduled; without
/// one, any catalog module can.
pub fn schedule_session(
    plan: Option<&TherapyPlan>,
    module_id: &str,
    scheduled_at: NaiveDateTime,
    reminder_lead: ReminderLead,
    notes: String,
    now: NaiveDateTime,
) -> Result<(TherapySession, Reminder), CoreError> {
    let module = catalog::find_module(module_id)
        .ok_or_else(|| CoreError::NotFound(format!("therapy module {}", module_id)))?;

    if let Some(plan) = plan {
        if !plan.is_available(module_id) {
            return Err(CoreError::InvalidInput(format!(
                "module {} is not unlocked in the current plan",
                module_id
            )));
        }
    }

    if scheduled_at.date() < now.date() {
        return Err(CoreError::InvalidInput(
            "session date cannot be in the past".to_string(),
        ));
    }

    let session = TherapySession {
        id: Uuid::new_v4(),
        module_id: module.id.clone(),
        scheduled_at,
        reminder_lead,
        notes,
        status: SessionStatus::Scheduled,
        closed_at: None,
    };

    let reminder = Reminder {
        id: Uuid::new_v4(),
        session_id: session.id,
        remind_at: scheduled_at - reminder_lead.duration(),
        message: format!(
            "🔔 आपका चिकित्सा सत्र {} {} को {} बजे शुरू होने वाला है।",
            module.name,
            scheduled_at.format("%d/%m/%Y"),
            scheduled_at.format("%H:%M")
        ),
        status: ReminderStatus::Pending,
    };

    Ok((session, reminder))
}

impl TherapySession {
    /// Close a scheduled session as completed or missed
    pub fn close(&mut self, outcome: SessionStatus, now: NaiveDateTime) -> Result<(), CoreError> {
        if outcome == SessionStatus::Scheduled {
            return Err(CoreError::InvalidTransition(
                "a session cannot be closed as scheduled".to_string(),
            ));
        }
        if self.status != SessionStatus::Scheduled {
            return Err(CoreError::InvalidTransition(format!(
                "session {} is already {:?}",
                self.id, self.status
            )));
        }
        self.status = outcome;
        self.closed_at = Some(now);
        Ok(())
    }
}

/// Pending reminders within the window around `now`
pub fn due_reminders(reminders: &[Reminder], now: NaiveDateTime) -> Vec<Reminder> {
    reminders
        .iter()
        .filter(|r| r.status == ReminderStatus::Pending)
        .filter(|r| (now - r.remind_at).num_seconds().abs() <= REMINDER_WINDOW_SECS)
        .cloned()
        .collect()
}

/// Pending reminders ordered by time
pub fn upcoming_reminders(reminders: &[Reminder]) -> Vec<Reminder> {
    let mut pending: Vec<Reminder> = reminders
        .iter()
        .filter(|r| r.status == ReminderStatus::Pending)
        .cloned()
        .collect();
    pending.sort_by_key(|r| r.remind_at);
    pending
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn states(plan: &TherapyPlan) -> Vec<ModuleState> {
        plan.modules.iter().map(|m| m.state).collect()
    }

    #[test]
    fn test_plan_sizes() {
        assert_eq!(create_therapy_plan(SeverityTier::Mild).modules.len(), 6);
        assert_eq!(create_therapy_plan(SeverityTier::Moderate).modules.len(), 8);

        let severe = create_therapy_plan(SeverityTier::Severe);
        assert_eq!(severe.modules.len(), 9);
        assert_eq!(severe.duration_weeks, 8);
        assert!(severe.modules.iter().all(|m| m.required));
    }

    #[test]
    fn test_plan_modules_exist_in_catalog() {
        for tier in [SeverityTier::Mild, SeverityTier::Moderate, SeverityTier::Severe] {
            for m in create_therapy_plan(tier).modules {
                assert!(catalog::find_module(&m.module_id).is_some(), "{}", m.module_id);
            }
        }
    }

    #[test]
    fn test_only_first_module_unlocked() {
        let plan = create_therapy_plan(SeverityTier::Mild);
        assert_eq!(plan.modules[0].state, ModuleState::Unlocked);
        assert!(plan.modules[1..].iter().all(|m| m.state == ModuleState::Locked));
    }

    #[test]
    fn test_completion_unlocks_next() {
        let mut plan = create_therapy_plan(SeverityTier::Mild);
        plan.complete_module("sleep_hygiene", at(1, 20, 0)).unwrap();

        assert_eq!(
            &states(&plan)[..3],
            &[ModuleState::Completed, ModuleState::Unlocked, ModuleState::Locked]
        );
        assert_eq!(plan.modules[0].completed_at, Some(at(1, 20, 0)));
        assert!((plan.progress() - 1.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_locked_module_cannot_complete() {
        let mut plan = create_therapy_plan(SeverityTier::Mild);
        let err = plan.complete_module("sleep_routine", at(1, 20, 0)).unwrap_err();
        assert!(matches!(err, CoreError::InvalidTransition(_)));
    }

    #[test]
    fn test_completed_module_cannot_complete_again() {
        let mut plan = create_therapy_plan(SeverityTier::Mild);
        plan.complete_module("sleep_hygiene", at(1, 20, 0)).unwrap();
        let before = plan.clone();

        let err = plan.complete_module("sleep_hygiene", at(2, 20, 0)).unwrap_err();
        assert!(matches!(err, CoreError::InvalidTransition(_)));
        assert_eq!(plan, before);
    }

    #[test]
    fn test_unknown_module() {
        let mut plan = create_therapy_plan(SeverityTier::Mild);
        let err = plan.complete_module("sleep_restriction_therapy", at(1, 20, 0)).unwrap_err();
        assert!(matches!(err, CoreError::NotFound(_)));
    }

    #[test]
    fn test_full_progression() {
        let mut plan = create_therapy_plan(SeverityTier::Moderate);
        let ids: Vec<String> = plan.modules.iter().map(|m| m.module_id.clone()).collect();

        for id in &ids {
            plan.complete_module(id, at(1, 20, 0)).unwrap();
        }

        assert_eq!(plan.completed_count(), ids.len());
        assert_eq!(plan.progress(), 1.0);
    }

    #[test]
    fn test_schedule_creates_reminder() {
        let plan = create_therapy_plan(SeverityTier::Mild);
        let (session, reminder) = schedule_session(
            Some(&plan),
            "sleep_hygiene",
            at(5, 21, 0),
            ReminderLead::OneHour,
            String::new(),
            at(1, 9, 0),
        )
        .unwrap();

        assert_eq!(session.status, SessionStatus::Scheduled);
        assert_eq!(reminder.session_id, session.id);
        assert_eq!(reminder.remind_at, at(5, 20, 0));
        assert!(reminder.message.contains("05/10/2026"));
        assert!(reminder.message.contains("21:00"));
    }

    #[test]
    fn test_schedule_rejects_locked_module() {
        let plan = create_therapy_plan(SeverityTier::Mild);
        let result = schedule_session(
            Some(&plan),
            "cbti_basics",
            at(5, 21, 0),
            ReminderLead::OneHour,
            String::new(),
            at(1, 9, 0),
        );
        assert!(matches!(result, Err(CoreError::InvalidInput(_))));
    }

    #[test]
    fn test_schedule_without_plan_allows_any_module() {
        let result = schedule_session(
            None,
            "cognitive_restructuring",
            at(5, 21, 0),
            ReminderLead::OneDay,
            String::new(),
            at(1, 9, 0),
        );
        let (_, reminder) = result.unwrap();
        assert_eq!(reminder.remind_at, at(4, 21, 0));
    }

    #[test]
    fn test_schedule_rejects_past_date() {
        let result = schedule_session(
            None,
            "sleep_hygiene",
            at(1, 21, 0),
            ReminderLead::FifteenMinutes,
            String::new(),
            at(2, 9, 0),
        );
        assert!(matches!(result, Err(CoreError::InvalidInput(_))));
    }

    #[test]
    fn test_session_close_transitions() {
        let (mut session, _) = schedule_session(
            None,
            "sleep_hygiene",
            at(5, 21, 0),
            ReminderLead::ThirtyMinutes,
            String::new(),
            at(1, 9, 0),
        )
        .unwrap();

        session.close(SessionStatus::Completed, at(5, 22, 0)).unwrap();
        assert_eq!(session.status, SessionStatus::Completed);
        assert!(session.close(SessionStatus::Missed, at(5, 22, 0)).is_err());
    }

    #[test]
    fn test_due_reminders_window() {
        let (_, reminder) = schedule_session(
            None,
            "sleep_hygiene",
            at(5, 21, 0),
            ReminderLead::FifteenMinutes,
            String::new(),
            at(1, 9, 0),
        )
        .unwrap();
        let reminders = vec![reminder];

        // remind at 20:45
        assert_eq!(due_reminders(&reminders, at(5, 20, 41)).len(), 1);
        assert_eq!(due_reminders(&reminders, at(5, 20, 50)).len(), 1);
        assert!(due_reminders(&reminders, at(5, 20, 39)).is_empty());
        assert!(due_reminders(&reminders, at(5, 20, 51)).is_empty());
    }
}
