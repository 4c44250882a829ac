use crate::core::{isi_questions, score_severity};
use crate::models::{AssessmentHistoryResponse, ScoreAssessmentRequest};
use crate::routes::{core_error, session_error, validation_error, AppState};
use actix_web::{web, HttpResponse, Responder};
use uuid::Uuid;
use validator::Validate;

/// Configure assessment routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/assessment/questions", web::get().to(get_questions))
        .route("/assessment/score", web::post().to(score_assessment))
        .route("/sessions/{id}/assessments", web::post().to(record_assessment))
        .route("/sessions/{id}/assessments", web::get().to(list_assessments));
}

/// The ISI questionnaire
///
/// GET /api/v1/assessment/questions
async fn get_questions() -> impl Responder {
    HttpResponse::Ok().json(isi_questions())
}

/// Score a questionnaire without storing it
///
/// POST /api/v1/assessment/score
///
/// Request body:
/// ```json
/// { "answers": { "isi_1": 2, "isi_2": 1, "...": 0 } }
/// ```
async fn score_assessment(req: web::Json<ScoreAssessmentRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    match score_severity(&req.answers) {
        Ok(result) => {
            tracing::info!("Scored assessment: total={}, severity={:?}", result.total_score, result.severity);
            HttpResponse::Ok().json(result)
        }
        Err(e) => core_error(e),
    }
}

/// Score a questionnaire and append it to the session history
///
/// POST /api/v1/sessions/{id}/assessments
async fn record_assessment(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    req: web::Json<ScoreAssessmentRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    let session_id = path.into_inner();
    let answers = req.into_inner().answers;

    match state
        .sessions
        .update(session_id, |session| session.record_assessment(&answers))
        .await
    {
        Ok(record) => {
            tracing::info!(
                "Recorded assessment for session {}: total={}, severity={:?}",
                session_id,
                record.result.total_score,
                record.result.severity
            );
            HttpResponse::Created().json(record)
        }
        Err(e) => session_error(e),
    }
}

/// GET /api/v1/sessions/{id}/assessments
async fn list_assessments(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    match state.sessions.get(path.into_inner()).await {
        Ok(session) => HttpResponse::Ok().json(AssessmentHistoryResponse {
            assessments: session.assessments,
        }),
        Err(e) => session_error(e),
    }
}
