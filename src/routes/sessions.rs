use crate::core::{bot_reply, quick_questions, sleep_insights};
use crate::models::{
    ChatHistoryResponse, ChatRequest, DiaryEntry, DiaryEntryRequest, DiaryResponse, SessionCreatedResponse,
};
use crate::routes::{session_error, validation_error, AppState};
use actix_web::{web, HttpResponse, Responder};
use uuid::Uuid;
use validator::Validate;

/// Configure session, diary and chat routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/chat", web::post().to(chat))
        .route("/sessions", web::post().to(create_session))
        .route("/sessions/{id}", web::get().to(get_summary))
        .route("/sessions/{id}/diary", web::post().to(add_diary_entry))
        .route("/sessions/{id}/diary", web::get().to(get_diary))
        .route("/sessions/{id}/chat", web::post().to(session_chat))
        .route("/sessions/{id}/chat", web::get().to(chat_history))
        .route("/sessions/{id}/chat", web::delete().to(reset_chat));
}

/// POST /api/v1/sessions
async fn create_session(state: web::Data<AppState>) -> impl Responder {
    let session_id = state.sessions.create().await;
    tracing::info!("Created session {}", session_id);
    HttpResponse::Created().json(SessionCreatedResponse { session_id })
}

/// Dashboard summary
///
/// GET /api/v1/sessions/{id}
async fn get_summary(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    match state.sessions.get(path.into_inner()).await {
        Ok(session) => HttpResponse::Ok().json(session.summary()),
        Err(e) => session_error(e),
    }
}

/// Log one night of sleep
///
/// POST /api/v1/sessions/{id}/diary
///
/// Request body:
/// ```json
/// {
///   "date": "2026-10-18",
///   "bedtime": "23:00",
///   "wakeTime": "07:00",
///   "sleepLatency": 30,
///   "wakeUps": 2,
///   "sleepQuality": 6,
///   "notes": "string"
/// }
/// ```
async fn add_diary_entry(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    req: web::Json<DiaryEntryRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    let session_id = path.into_inner();
    let entry = DiaryEntry::from(req.into_inner());
    let created = entry.clone();

    match state
        .sessions
        .update(session_id, |session| {
            session.add_diary_entry(entry)?;
            Ok(session.diary_entries.len())
        })
        .await
    {
        Ok(count) => {
            tracing::info!(
                "Diary entry for {} added to session {} ({} total)",
                created.date,
                session_id,
                count
            );
            HttpResponse::Created().json(created)
        }
        Err(e) => session_error(e),
    }
}

/// Diary entries with metrics and insights
///
/// GET /api/v1/sessions/{id}/diary
async fn get_diary(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    let session = match state.sessions.get(path.into_inner()).await {
        Ok(session) => session,
        Err(e) => return session_error(e),
    };

    let metrics = session.sleep_metrics();
    let insights = metrics.as_ref().map(sleep_insights).unwrap_or_default();

    HttpResponse::Ok().json(DiaryResponse {
        entries: session.diary_entries,
        metrics,
        insights,
    })
}

/// Stateless chatbot answer
///
/// POST /api/v1/chat
async fn chat(req: web::Json<ChatRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    HttpResponse::Ok().json(bot_reply(&req.message))
}

/// Chat within a session, recording both sides
///
/// POST /api/v1/sessions/{id}/chat
async fn session_chat(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    req: web::Json<ChatRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    match state
        .sessions
        .update(path.into_inner(), |session| session.chat(&req.message))
        .await
    {
        Ok(reply) => HttpResponse::Ok().json(reply),
        Err(e) => session_error(e),
    }
}

/// GET /api/v1/sessions/{id}/chat
async fn chat_history(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    match state.sessions.get(path.into_inner()).await {
        Ok(session) => HttpResponse::Ok().json(ChatHistoryResponse {
            messages: session.chat_history,
            quick_questions: quick_questions(),
        }),
        Err(e) => session_error(e),
    }
}

/// DELETE /api/v1/sessions/{id}/chat
async fn reset_chat(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    match state
        .sessions
        .update(path.into_inner(), |session| {
            session.reset_chat();
            Ok(())
        })
        .await
    {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => session_error(e),
    }
}
