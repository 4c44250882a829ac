use crate::catalog;
use crate::core::{due_reminders, upcoming_reminders, CoreError};
use crate::models::{
    RemindersQuery, RemindersResponse, ScheduleSessionRequest, ScheduledSessionResponse, SessionStatus,
    TherapyPlanResponse, TherapySessionsResponse,
};
use crate::routes::{core_error, local_now, session_error, validation_error, AppState};
use actix_web::{web, HttpResponse, Responder};
use uuid::Uuid;
use validator::Validate;

/// Configure therapy plan, session and reminder routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/therapy/modules", web::get().to(list_modules))
        .route("/sessions/{id}/therapy/plan", web::post().to(create_plan))
        .route("/sessions/{id}/therapy/plan", web::get().to(get_plan))
        .route(
            "/sessions/{id}/therapy/modules/{module_id}/complete",
            web::post().to(complete_module),
        )
        .route("/sessions/{id}/therapy/sessions", web::post().to(schedule_session))
        .route("/sessions/{id}/therapy/sessions", web::get().to(list_sessions))
        .route(
            "/sessions/{id}/therapy/sessions/{session_id}/complete",
            web::post().to(complete_session),
        )
        .route(
            "/sessions/{id}/therapy/sessions/{session_id}/cancel",
            web::post().to(cancel_session),
        )
        .route("/sessions/{id}/reminders", web::get().to(list_reminders))
        .route(
            "/sessions/{id}/reminders/{reminder_id}/dismiss",
            web::post().to(dismiss_reminder),
        );
}

/// GET /api/v1/therapy/modules
async fn list_modules() -> impl Responder {
    HttpResponse::Ok().json(catalog::therapy_modules())
}

/// Create the therapy plan from the latest assessment, or return the existing one
///
/// POST /api/v1/sessions/{id}/therapy/plan
async fn create_plan(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    let session_id = path.into_inner();

    match state
        .sessions
        .update(session_id, |session| session.ensure_therapy_plan().cloned())
        .await
    {
        Ok(plan) => {
            tracing::info!(
                "Therapy plan for session {}: {:?}, {} modules",
                session_id,
                plan.severity,
                plan.modules.len()
            );
            HttpResponse::Ok().json(TherapyPlanResponse::from(plan))
        }
        Err(e) => session_error(e),
    }
}

/// GET /api/v1/sessions/{id}/therapy/plan
async fn get_plan(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    match state.sessions.get(path.into_inner()).await {
        Ok(session) => match session.therapy_plan {
            Some(plan) => HttpResponse::Ok().json(TherapyPlanResponse::from(plan)),
            None => core_error(CoreError::NotFound("therapy plan".to_string())),
        },
        Err(e) => session_error(e),
    }
}

/// Mark a plan module completed, unlocking the next one
///
/// POST /api/v1/sessions/{id}/therapy/modules/{module_id}/complete
async fn complete_module(
    state: web::Data<AppState>,
    path: web::Path<(Uuid, String)>,
) -> impl Responder {
    let (session_id, module_id) = path.into_inner();
    let now = local_now();

    match state
        .sessions
        .update(session_id, |session| session.complete_module(&module_id, now))
        .await
    {
        Ok(plan) => {
            tracing::info!(
                "Module {} completed for session {} ({}/{})",
                module_id,
                session_id,
                plan.completed_count(),
                plan.modules.len()
            );
            HttpResponse::Ok().json(TherapyPlanResponse::from(plan))
        }
        Err(e) => session_error(e),
    }
}

/// Schedule a therapy session with a reminder
///
/// POST /api/v1/sessions/{id}/therapy/sessions
///
/// Request body:
/// ```json
/// {
///   "moduleId": "sleep_hygiene",
///   "scheduledAt": "2026-10-20T21:00:00",
///   "reminderLead": "15m|30m|1h|2h|1d",
///   "notes": "string"
/// }
/// ```
async fn schedule_session(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    req: web::Json<ScheduleSessionRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    let session_id = path.into_inner();
    let req = req.into_inner();
    let now = local_now();

    match state
        .sessions
        .update(session_id, |session| {
            session.schedule_therapy_session(
                &req.module_id,
                req.scheduled_at,
                req.reminder_lead,
                req.notes,
                now,
            )
        })
        .await
    {
        Ok((session, reminder)) => {
            tracing::info!(
                "Scheduled {} at {} for session {}, reminder at {}",
                session.module_id,
                session.scheduled_at,
                session_id,
                reminder.remind_at
            );
            HttpResponse::Created().json(ScheduledSessionResponse { session, reminder })
        }
        Err(e) => session_error(e),
    }
}

/// GET /api/v1/sessions/{id}/therapy/sessions
async fn list_sessions(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    match state.sessions.get(path.into_inner()).await {
        Ok(session) => HttpResponse::Ok().json(TherapySessionsResponse {
            sessions: session.therapy_sessions,
        }),
        Err(e) => session_error(e),
    }
}

/// POST /api/v1/sessions/{id}/therapy/sessions/{session_id}/complete
async fn complete_session(
    state: web::Data<AppState>,
    path: web::Path<(Uuid, Uuid)>,
) -> impl Responder {
    close_session(state, path.into_inner(), SessionStatus::Completed).await
}

/// Cancelling marks the session missed and dismisses its reminder
///
/// POST /api/v1/sessions/{id}/therapy/sessions/{session_id}/cancel
async fn cancel_session(
    state: web::Data<AppState>,
    path: web::Path<(Uuid, Uuid)>,
) -> impl Responder {
    close_session(state, path.into_inner(), SessionStatus::Missed).await
}

async fn close_session(
    state: web::Data<AppState>,
    (id, therapy_session_id): (Uuid, Uuid),
    outcome: SessionStatus,
) -> HttpResponse {
    let now = local_now();

    match state
        .sessions
        .update(id, |session| session.close_therapy_session(therapy_session_id, outcome, now))
        .await
    {
        Ok(closed) => {
            tracing::info!("Therapy session {} closed as {:?}", therapy_session_id, closed.status);
            HttpResponse::Ok().json(closed)
        }
        Err(e) => session_error(e),
    }
}

/// Pending reminders, optionally only those due now
///
/// GET /api/v1/sessions/{id}/reminders?due=true
async fn list_reminders(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    query: web::Query<RemindersQuery>,
) -> impl Responder {
    let session = match state.sessions.get(path.into_inner()).await {
        Ok(session) => session,
        Err(e) => return session_error(e),
    };

    let reminders = if query.due {
        due_reminders(&session.reminders, local_now())
    } else {
        upcoming_reminders(&session.reminders)
    };

    HttpResponse::Ok().json(RemindersResponse { reminders })
}

/// POST /api/v1/sessions/{id}/reminders/{reminder_id}/dismiss
async fn dismiss_reminder(
    state: web::Data<AppState>,
    path: web::Path<(Uuid, Uuid)>,
) -> impl Responder {
    let (session_id, reminder_id) = path.into_inner();

    match state
        .sessions
        .update(session_id, |session| session.dismiss_reminder(reminder_id))
        .await
    {
        Ok(reminder) => HttpResponse::Ok().json(reminder),
        Err(e) => session_error(e),
    }
}
