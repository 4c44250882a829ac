use crate::catalog;
use crate::core::filter_doctors;
use crate::models::{
    default_language, BookingDetails, BookingRequest, BookingsResponse, DoctorFilter, DoctorListResponse,
    RankingQuery, RecommendDoctorsRequest, RecommendationsResponse, RecommendedDoctorsQuery,
};
use crate::routes::{error_response, local_now, session_error, validation_error, AppState};
use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use uuid::Uuid;
use validator::Validate;

/// Configure doctor and booking routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/doctors", web::get().to(list_doctors))
        .route("/doctors/recommend", web::post().to(recommend_doctors))
        .route("/sessions/{id}/doctors/recommended", web::get().to(recommended_for_session))
        .route("/sessions/{id}/bookings", web::post().to(book_appointment))
        .route("/sessions/{id}/bookings", web::get().to(list_bookings));
}

/// Filtered catalog listing, catalog order
///
/// GET /api/v1/doctors?specialty=CBT-I&location=दिल्ली&minRating=4.7
async fn list_doctors(query: web::Query<DoctorFilter>) -> impl Responder {
    if query.min_rating.is_some_and(|rating| !rating.is_finite()) {
        return error_response(
            StatusCode::BAD_REQUEST,
            "Invalid query",
            "minRating must be a finite number".to_string(),
        );
    }

    let doctors = filter_doctors(catalog::doctors(), &query);

    tracing::debug!("Doctor listing with {:?}: {} results", query, doctors.len());

    HttpResponse::Ok().json(DoctorListResponse {
        total: doctors.len(),
        doctors,
    })
}

/// Ranked recommendations for explicit preferences
///
/// POST /api/v1/doctors/recommend
///
/// Request body:
/// ```json
/// {
///   "severity": "mild|moderate|severe",
///   "language": "हिंदी",
///   "location": "दिल्ली",
///   "limit": 3
/// }
/// ```
async fn recommend_doctors(
    state: web::Data<AppState>,
    req: web::Json<RecommendDoctorsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    let req = req.into_inner();
    let query = RankingQuery {
        severity: req.severity,
        language: req.language,
        location: req.location,
        limit: state.resolve_limit(req.limit),
    };

    let recommendations = state.ranker.rank(catalog::doctors(), &query);

    tracing::info!(
        "Returning {} recommendations (severity={:?}, language={})",
        recommendations.len(),
        query.severity,
        query.language
    );

    HttpResponse::Ok().json(RecommendationsResponse {
        severity: query.severity,
        total: recommendations.len(),
        recommendations,
    })
}

/// Recommendations using the session's latest assessed severity
///
/// GET /api/v1/sessions/{id}/doctors/recommended?language=हिंदी&location=दिल्ली&limit=3
async fn recommended_for_session(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    query: web::Query<RecommendedDoctorsQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return validation_error(errors);
    }

    let session = match state.sessions.get(path.into_inner()).await {
        Ok(session) => session,
        Err(e) => return session_error(e),
    };

    let query = query.into_inner();
    let ranking = RankingQuery {
        severity: session.latest_severity(),
        language: query.language.unwrap_or_else(default_language),
        location: query.location,
        limit: state.resolve_limit(query.limit),
    };

    let recommendations = state.ranker.rank(catalog::doctors(), &ranking);

    HttpResponse::Ok().json(RecommendationsResponse {
        severity: ranking.severity,
        total: recommendations.len(),
        recommendations,
    })
}

/// Book an appointment with a catalog doctor
///
/// POST /api/v1/sessions/{id}/bookings
///
/// Request body:
/// ```json
/// {
///   "doctorId": "dr_priya_sharma",
///   "date": "2026-10-21",
///   "time": "3:00 PM",
///   "appointmentType": "teleconsultation|clinic_visit",
///   "patientName": "string",
///   "patientPhone": "string",
///   "reason": "string"
/// }
/// ```
async fn book_appointment(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    req: web::Json<BookingRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    let session_id = path.into_inner();
    let details = BookingDetails::from(req.into_inner());
    let now = local_now();

    match state
        .sessions
        .update(session_id, |session| session.book_appointment(details, now))
        .await
    {
        Ok(booking) => {
            tracing::info!(
                "Booked {} on {} {} for session {}",
                booking.doctor_id,
                booking.date,
                booking.time,
                session_id
            );
            HttpResponse::Created().json(booking)
        }
        Err(e) => session_error(e),
    }
}

/// GET /api/v1/sessions/{id}/bookings
async fn list_bookings(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    match state.sessions.get(path.into_inner()).await {
        Ok(session) => HttpResponse::Ok().json(BookingsResponse {
            bookings: session.bookings,
        }),
        Err(e) => session_error(e),
    }
}
