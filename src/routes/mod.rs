// Route exports
pub mod assessment;
pub mod doctors;
pub mod sessions;
pub mod therapy;

use crate::config::Settings;
use crate::core::{CoreError, DoctorRanker};
use crate::models::{ErrorResponse, HealthResponse};
use crate::services::{SessionError, SessionStore};
use actix_web::{error, http::StatusCode, web, HttpRequest, HttpResponse, Responder};
use chrono::NaiveDateTime;
use std::sync::Arc;
use validator::ValidationErrors;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionStore>,
    pub ranker: DoctorRanker,
    pub default_limit: usize,
    pub max_limit: usize,
}

impl AppState {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            sessions: Arc::new(SessionStore::new(
                settings.session.max_sessions,
                settings.session.idle_timeout_secs,
            )),
            ranker: DoctorRanker::new(settings.ranking.weights.to_ranking_weights()),
            default_limit: settings.ranking.default_limit,
            max_limit: settings.ranking.max_limit,
        }
    }

    /// Apply the configured default and cap to a requested limit
    pub fn resolve_limit(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.default_limit).min(self.max_limit)
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .app_data(web::PathConfig::default().error_handler(handle_path_error))
            .route("/health", web::get().to(health_check))
            .configure(assessment::configure)
            .configure(doctors::configure)
            .configure(therapy::configure)
            .configure(sessions::configure),
    );
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    tracing::debug!("Health check, {} live sessions", state.sessions.len());

    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Malformed path segments, e.g. an id that is not a UUID
fn handle_path_error(err: error::PathError, req: &HttpRequest) -> actix_web::Error {
    tracing::debug!("Path error on {}: {}", req.path(), err);
    let response = error_response(StatusCode::NOT_FOUND, "Not found", format!("Invalid path: {}", err));
    error::InternalError::from_response(err, response).into()
}

/// Wall-clock time used for scheduling and reminder checks
pub(crate) fn local_now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

pub(crate) fn error_response(status: StatusCode, error: &str, message: String) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: status.as_u16(),
    })
}

pub(crate) fn validation_error(errors: ValidationErrors) -> HttpResponse {
    error_response(StatusCode::BAD_REQUEST, "Validation failed", errors.to_string())
}

pub(crate) fn core_error(err: CoreError) -> HttpResponse {
    match &err {
        CoreError::InvalidInput(_) => {
            error_response(StatusCode::BAD_REQUEST, "Invalid input", err.to_string())
        }
        CoreError::NotFound(_) => error_response(StatusCode::NOT_FOUND, "Not found", err.to_string()),
        CoreError::InvalidTransition(_) => {
            error_response(StatusCode::CONFLICT, "Invalid transition", err.to_string())
        }
    }
}

pub(crate) fn session_error(err: SessionError) -> HttpResponse {
    match err {
        SessionError::SessionNotFound(id) => {
            tracing::debug!("Unknown session: {}", id);
            error_response(StatusCode::NOT_FOUND, "Session not found", format!("No session with id {}", id))
        }
        SessionError::Core(e) => {
            tracing::info!("Session operation rejected: {}", e);
            core_error(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(default_limit: usize, max_limit: usize) -> AppState {
        AppState {
            sessions: Arc::new(SessionStore::default()),
            ranker: DoctorRanker::default(),
            default_limit,
            max_limit,
        }
    }

    #[test]
    fn test_resolve_limit() {
        let state = state(3, 10);
        assert_eq!(state.resolve_limit(None), 3);
        assert_eq!(state.resolve_limit(Some(5)), 5);
        assert_eq!(state.resolve_limit(Some(50)), 10);
    }

    #[test]
    fn test_core_error_status() {
        let resp = core_error(CoreError::InvalidTransition("locked".to_string()));
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let resp = core_error(CoreError::NotFound("doctor".to_string()));
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = session_error(SessionError::Core(CoreError::InvalidInput("x".to_string())));
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
