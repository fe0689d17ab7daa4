// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use andino_api::{
    ApiError, ReservationSession, SelectDateRequest, StartReservationResponse,
    UpdateContactRequest, UpdateCountRequest, UpdateEmergencyRequest, UpdatePersonRequest,
    WizardView,
};
use andino_bridge::{
    AvailabilityProvider, CONFIRMATION_STORE_KEY, ConfirmationRecord, ConfirmationStore,
    DeliveryError, EmailDelivery, EmailPayload, EmailServiceConfig, StoreError, SubmissionBridge,
    TourInfo,
};
use axum::{
    Json, Router,
    extract::{Path, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use chrono::{Datelike, NaiveDate, Utc, Weekday};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

/// Andino Tours reservation server - HTTP surface for the booking wizard
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Name of the tour this server takes reservations for
    #[arg(long, default_value = "Nevado del Tolima")]
    tour: String,

    /// Price per adult, in COP
    #[arg(long, default_value_t = 250_000)]
    adult_price: u64,

    /// Price per child, in COP
    #[arg(long, default_value_t = 150_000)]
    child_price: u64,

    /// WhatsApp recipient for the hand-off deep link
    #[arg(long, default_value = "573001112233")]
    whatsapp_recipient: String,

    /// Email delivery service identifier
    #[arg(long, default_value = "service_andino")]
    email_service: String,

    /// Email template identifier
    #[arg(long, default_value = "template_reserva")]
    email_template: String,

    /// Email service public key
    #[arg(long, default_value = "pk_dev")]
    email_public_key: String,

    /// Path to a JSON array of available dates (ISO 8601). If not
    /// provided, the next 8 Saturdays are offered.
    #[arg(long)]
    availability: Option<String>,

    /// Path the last-reservation confirmation is written to
    #[arg(long, default_value = "ultima_reserva.json")]
    confirmation_file: String,
}

/// Development email collaborator: logs the payload instead of sending.
#[derive(Debug, Clone)]
struct LoggingEmailDelivery;

impl EmailDelivery for LoggingEmailDelivery {
    async fn send(&self, payload: &EmailPayload) -> Result<(), DeliveryError> {
        info!(
            service = %payload.service_id,
            template = %payload.template_id,
            fields = payload.fields.len(),
            "would send reservation email"
        );
        Ok(())
    }
}

/// Confirmation store backed by one JSON file: a single-key object under
/// the fixed confirmation key, as the "last reservation" screen expects.
#[derive(Debug, Clone)]
struct JsonFileConfirmationStore {
    path: PathBuf,
}

impl ConfirmationStore for JsonFileConfirmationStore {
    fn store(&self, record: &ConfirmationRecord) -> Result<(), StoreError> {
        let blob: serde_json::Value = serde_json::json!({ CONFIRMATION_STORE_KEY: record });
        let text: String =
            serde_json::to_string_pretty(&blob).map_err(|err| StoreError::new(err.to_string()))?;
        std::fs::write(&self.path, text).map_err(|err| StoreError::new(err.to_string()))
    }
}

/// Availability source backed by a fixed, pre-sorted date list, either
/// loaded from a file or generated from the weekly schedule.
#[derive(Debug, Clone)]
struct FixedAvailability {
    dates: Vec<NaiveDate>,
}

impl AvailabilityProvider for FixedAvailability {
    fn available_dates(&self) -> Vec<NaiveDate> {
        self.dates.clone()
    }
}

type ServerSession = ReservationSession<LoggingEmailDelivery, JsonFileConfirmationStore>;

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// Live wizard sessions, keyed by session token. Each session carries
    /// its own lock; the map lock is only held for lookups, never across
    /// the submission await.
    sessions: Arc<Mutex<HashMap<String, Arc<Mutex<ServerSession>>>>>,
    store: JsonFileConfirmationStore,
    email_config: EmailServiceConfig,
    tour: TourInfo,
    availability: FixedAvailability,
    whatsapp_recipient: String,
}

/// Standard error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::SessionNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotAllowed { .. } => StatusCode::CONFLICT,
            ApiError::DateNotAvailable { .. } | ApiError::DomainRuleViolation { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::SubmissionFailed { .. } => StatusCode::BAD_GATEWAY,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Creates a new wizard session and returns its token and initial view.
async fn handle_start(
    AxumState(state): AxumState<AppState>,
) -> Result<Json<StartReservationResponse>, HttpError> {
    let bridge = SubmissionBridge::new(
        LoggingEmailDelivery,
        state.store.clone(),
        state.email_config.clone(),
        state.tour.clone(),
    );
    let session: ServerSession = ReservationSession::new(
        bridge,
        state.availability.available_dates(),
        state.whatsapp_recipient.clone(),
    );

    let session_id: String = format!("{:032x}", rand::random::<u128>());
    let response: StartReservationResponse = StartReservationResponse {
        session_id: session_id.clone(),
        available_dates: session.available_dates().to_vec(),
        view: session.view(),
    };

    state
        .sessions
        .lock()
        .await
        .insert(session_id.clone(), Arc::new(Mutex::new(session)));
    info!(session = %session_id, tour = %state.tour.name, "reservation session started");

    Ok(Json(response))
}

/// Looks up a session's handle, releasing the map lock before the caller
/// locks the session itself.
async fn session_handle(
    state: &AppState,
    id: &str,
) -> Result<Arc<Mutex<ServerSession>>, HttpError> {
    let sessions = state.sessions.lock().await;
    sessions.get(id).cloned().ok_or_else(|| not_found(id))
}

async fn handle_view(
    AxumState(state): AxumState<AppState>,
    Path(id): Path<String>,
) -> Result<Json<WizardView>, HttpError> {
    let handle = session_handle(&state, &id).await?;
    let session = handle.lock().await;
    Ok(Json(session.view()))
}

async fn handle_advance(
    AxumState(state): AxumState<AppState>,
    Path(id): Path<String>,
) -> Result<Json<WizardView>, HttpError> {
    let handle = session_handle(&state, &id).await?;
    let mut session = handle.lock().await;
    session.advance().await?;
    Ok(Json(session.view()))
}

async fn handle_retreat(
    AxumState(state): AxumState<AppState>,
    Path(id): Path<String>,
) -> Result<Json<WizardView>, HttpError> {
    let handle = session_handle(&state, &id).await?;
    let mut session = handle.lock().await;
    session.retreat()?;
    Ok(Json(session.view()))
}

async fn handle_edit_after_success(
    AxumState(state): AxumState<AppState>,
    Path(id): Path<String>,
) -> Result<Json<WizardView>, HttpError> {
    let handle = session_handle(&state, &id).await?;
    let mut session = handle.lock().await;
    session.edit_after_success()?;
    Ok(Json(session.view()))
}

async fn handle_contact(
    AxumState(state): AxumState<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateContactRequest>,
) -> Result<Json<WizardView>, HttpError> {
    let handle = session_handle(&state, &id).await?;
    let mut session = handle.lock().await;
    session.apply_contact(request)?;
    Ok(Json(session.view()))
}

async fn handle_date(
    AxumState(state): AxumState<AppState>,
    Path(id): Path<String>,
    Json(request): Json<SelectDateRequest>,
) -> Result<Json<WizardView>, HttpError> {
    let handle = session_handle(&state, &id).await?;
    let mut session = handle.lock().await;
    session.apply_date(request)?;
    Ok(Json(session.view()))
}

async fn handle_counts(
    AxumState(state): AxumState<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateCountRequest>,
) -> Result<Json<WizardView>, HttpError> {
    let handle = session_handle(&state, &id).await?;
    let mut session = handle.lock().await;
    session.apply_count(request)?;
    Ok(Json(session.view()))
}

async fn handle_participants(
    AxumState(state): AxumState<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdatePersonRequest>,
) -> Result<Json<WizardView>, HttpError> {
    let handle = session_handle(&state, &id).await?;
    let mut session = handle.lock().await;
    session.apply_person(request)?;
    Ok(Json(session.view()))
}

async fn handle_emergency(
    AxumState(state): AxumState<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateEmergencyRequest>,
) -> Result<Json<WizardView>, HttpError> {
    let handle = session_handle(&state, &id).await?;
    let mut session = handle.lock().await;
    session.apply_emergency(request)?;
    Ok(Json(session.view()))
}

fn not_found(id: &str) -> HttpError {
    HttpError::from(ApiError::SessionNotFound {
        session_id: id.to_string(),
    })
}

/// The next `count` Saturdays strictly after `from`.
fn weekly_dates(from: NaiveDate, count: usize) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = Vec::with_capacity(count);
    let mut day: NaiveDate = from;
    while dates.len() < count {
        let Some(next) = day.succ_opt() else {
            break;
        };
        day = next;
        if day.weekday() == Weekday::Sat {
            dates.push(day);
        }
    }
    dates
}

fn load_availability(path: &str) -> Result<Vec<NaiveDate>, Box<dyn std::error::Error>> {
    let text: String = std::fs::read_to_string(path)?;
    let mut dates: Vec<NaiveDate> = serde_json::from_str(&text)?;
    dates.sort_unstable();
    Ok(dates)
}

fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/reservations", post(handle_start))
        .route("/api/reservations/{id}", get(handle_view))
        .route("/api/reservations/{id}/advance", post(handle_advance))
        .route("/api/reservations/{id}/retreat", post(handle_retreat))
        .route("/api/reservations/{id}/edit", post(handle_edit_after_success))
        .route("/api/reservations/{id}/contact", put(handle_contact))
        .route("/api/reservations/{id}/date", put(handle_date))
        .route("/api/reservations/{id}/counts", put(handle_counts))
        .route("/api/reservations/{id}/participants", put(handle_participants))
        .route("/api/reservations/{id}/emergency", put(handle_emergency))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Andino Tours reservation server");

    let availability: Vec<NaiveDate> = match &args.availability {
        Some(path) => {
            info!("Loading availability from {path}");
            load_availability(path)?
        }
        None => weekly_dates(Utc::now().date_naive(), 8),
    };

    let app_state: AppState = AppState {
        sessions: Arc::new(Mutex::new(HashMap::new())),
        store: JsonFileConfirmationStore {
            path: PathBuf::from(&args.confirmation_file),
        },
        email_config: EmailServiceConfig {
            service_id: args.email_service,
            template_id: args.email_template,
            public_key: args.email_public_key,
        },
        tour: TourInfo {
            name: args.tour,
            adult_price: args.adult_price,
            child_price: args.child_price,
        },
        availability: FixedAvailability {
            dates: availability,
        },
        whatsapp_recipient: args.whatsapp_recipient,
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]

    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use axum::http::StatusCode as HttpStatusCode;
    use tower::ServiceExt;

    fn test_state(confirmation_path: PathBuf) -> AppState {
        AppState {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            store: JsonFileConfirmationStore {
                path: confirmation_path,
            },
            email_config: EmailServiceConfig {
                service_id: String::from("service_test"),
                template_id: String::from("template_test"),
                public_key: String::from("pk_test"),
            },
            tour: TourInfo {
                name: String::from("Nevado del Tolima"),
                adult_price: 250_000,
                child_price: 150_000,
            },
            availability: FixedAvailability {
                dates: weekly_dates(NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(), 8),
            },
            whatsapp_recipient: String::from("573001112233"),
        }
    }

    fn temp_confirmation_path() -> PathBuf {
        std::env::temp_dir().join(format!("andino-confirmation-{}.json", rand::random::<u64>()))
    }

    async fn request_json<T: serde::de::DeserializeOwned>(
        app: &Router,
        method: &str,
        uri: &str,
        body: Option<String>,
    ) -> (HttpStatusCode, Option<T>) {
        let request: Request<Body> = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(body.map_or_else(Body::empty, Body::from))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        let status: HttpStatusCode = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let parsed: Option<T> = serde_json::from_slice(&bytes).ok();
        (status, parsed)
    }

    #[test]
    fn test_weekly_dates_returns_saturdays_only() {
        // 2026-09-01 is a Tuesday; the first Saturday after it is 09-05.
        let from: NaiveDate = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
        let dates: Vec<NaiveDate> = weekly_dates(from, 3);

        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2026, 9, 5).unwrap(),
                NaiveDate::from_ymd_opt(2026, 9, 12).unwrap(),
                NaiveDate::from_ymd_opt(2026, 9, 19).unwrap(),
            ]
        );
    }

    #[tokio::test]
    async fn test_start_returns_session_and_initial_view() {
        let app: Router = build_router(test_state(temp_confirmation_path()));

        let (status, response): (_, Option<StartReservationResponse>) =
            request_json(&app, "POST", "/api/reservations", None).await;

        assert_eq!(status, HttpStatusCode::OK);
        let response: StartReservationResponse = response.unwrap();
        assert!(!response.session_id.is_empty());
        assert_eq!(response.available_dates.len(), 8);
        assert_eq!(response.view.stage, "contact");
        assert_eq!(response.view.step, Some(1));
        assert!(!response.view.submitted);
    }

    #[tokio::test]
    async fn test_unknown_session_is_not_found() {
        let app: Router = build_router(test_state(temp_confirmation_path()));

        let (status, _): (_, Option<ErrorResponse>) =
            request_json(&app, "GET", "/api/reservations/nope", None).await;

        assert_eq!(status, HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_date_outside_availability_is_unprocessable() {
        let app: Router = build_router(test_state(temp_confirmation_path()));
        let (_, start): (_, Option<StartReservationResponse>) =
            request_json(&app, "POST", "/api/reservations", None).await;
        let id: String = start.unwrap().session_id;

        let body: String = serde_json::json!({ "date": "2030-01-01" }).to_string();
        let (status, _): (_, Option<ErrorResponse>) = request_json(
            &app,
            "PUT",
            &format!("/api/reservations/{id}/date"),
            Some(body),
        )
        .await;

        assert_eq!(status, HttpStatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_full_booking_flow_over_http() {
        let confirmation_path: PathBuf = temp_confirmation_path();
        let app: Router = build_router(test_state(confirmation_path.clone()));

        let (_, start): (_, Option<StartReservationResponse>) =
            request_json(&app, "POST", "/api/reservations", None).await;
        let start: StartReservationResponse = start.unwrap();
        let id: String = start.session_id;
        let date: NaiveDate = start.available_dates[0];

        // Step 1: contact + date
        for (field, value) in [
            ("name", "Ana Gomez"),
            ("email", "ana@x.com"),
            ("phone", "+57 3001234567"),
        ] {
            let body: String =
                serde_json::json!({ "field": field, "value": value }).to_string();
            let (status, _): (_, Option<WizardView>) = request_json(
                &app,
                "PUT",
                &format!("/api/reservations/{id}/contact"),
                Some(body),
            )
            .await;
            assert_eq!(status, HttpStatusCode::OK);
        }
        let body: String = serde_json::json!({ "date": date }).to_string();
        let (status, _): (_, Option<WizardView>) = request_json(
            &app,
            "PUT",
            &format!("/api/reservations/{id}/date"),
            Some(body),
        )
        .await;
        assert_eq!(status, HttpStatusCode::OK);

        let advance_uri: String = format!("/api/reservations/{id}/advance");
        let (status, view): (_, Option<WizardView>) =
            request_json(&app, "POST", &advance_uri, None).await;
        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(view.unwrap().step, Some(2));

        // Step 2: counts
        for (kind, count) in [("adults", 1), ("children", 0)] {
            let body: String =
                serde_json::json!({ "kind": kind, "count": count }).to_string();
            let (status, _): (_, Option<WizardView>) = request_json(
                &app,
                "PUT",
                &format!("/api/reservations/{id}/counts"),
                Some(body),
            )
            .await;
            assert_eq!(status, HttpStatusCode::OK);
        }
        let (_, view): (_, Option<WizardView>) =
            request_json(&app, "POST", &advance_uri, None).await;
        assert_eq!(view.unwrap().step, Some(3));

        // Step 3: the one adult record
        for (field, value) in [
            ("name", "Ana Gomez"),
            ("documentType", "CC"),
            ("documentNumber", "1020304050"),
        ] {
            let body: String = serde_json::json!({
                "kind": "adults",
                "index": 0,
                "field": field,
                "value": value,
            })
            .to_string();
            let (status, _): (_, Option<WizardView>) = request_json(
                &app,
                "PUT",
                &format!("/api/reservations/{id}/participants"),
                Some(body),
            )
            .await;
            assert_eq!(status, HttpStatusCode::OK);
        }
        let (_, view): (_, Option<WizardView>) =
            request_json(&app, "POST", &advance_uri, None).await;
        assert_eq!(view.unwrap().step, Some(4));

        // Step 4: emergency contact, then submit
        for (field, value) in [("name", "Marta Diaz"), ("phone", "3009876543")] {
            let body: String =
                serde_json::json!({ "field": field, "value": value }).to_string();
            let (status, _): (_, Option<WizardView>) = request_json(
                &app,
                "PUT",
                &format!("/api/reservations/{id}/emergency"),
                Some(body),
            )
            .await;
            assert_eq!(status, HttpStatusCode::OK);
        }
        let (status, view): (_, Option<WizardView>) =
            request_json(&app, "POST", &advance_uri, None).await;
        assert_eq!(status, HttpStatusCode::OK);
        let view: WizardView = view.unwrap();
        assert_eq!(view.stage, "success");
        assert!(view.submitted);
        let confirmation: ConfirmationRecord = view.confirmation.unwrap();
        assert_eq!(confirmation.amount, 250_000);
        assert!(view.handoff_link.unwrap().starts_with("https://wa.me/"));

        // The confirmation landed in the local store under the fixed key.
        let stored: serde_json::Value = serde_json::from_str(
            &std::fs::read_to_string(&confirmation_path).unwrap(),
        )
        .unwrap();
        assert!(stored.get(CONFIRMATION_STORE_KEY).is_some());
        let _ = std::fs::remove_file(&confirmation_path);
    }

    #[tokio::test]
    async fn test_busy_session_does_not_stall_other_sessions() {
        let state: AppState = test_state(temp_confirmation_path());
        let app: Router = build_router(state.clone());

        let (_, first): (_, Option<StartReservationResponse>) =
            request_json(&app, "POST", "/api/reservations", None).await;
        let (_, second): (_, Option<StartReservationResponse>) =
            request_json(&app, "POST", "/api/reservations", None).await;
        let busy_id: String = first.unwrap().session_id;
        let other_id: String = second.unwrap().session_id;

        // Hold the first session's lock, as an in-flight submission would.
        let busy: Arc<Mutex<ServerSession>> = state
            .sessions
            .lock()
            .await
            .get(&busy_id)
            .cloned()
            .unwrap();
        let _guard = busy.lock().await;

        let (status, view): (_, Option<WizardView>) = tokio::time::timeout(
            std::time::Duration::from_secs(1),
            request_json(&app, "GET", &format!("/api/reservations/{other_id}"), None),
        )
        .await
        .unwrap();

        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(view.unwrap().step, Some(1));
    }

    #[tokio::test]
    async fn test_blocked_advance_keeps_step_and_reports_errors() {
        let app: Router = build_router(test_state(temp_confirmation_path()));
        let (_, start): (_, Option<StartReservationResponse>) =
            request_json(&app, "POST", "/api/reservations", None).await;
        let id: String = start.unwrap().session_id;

        let (status, view): (_, Option<WizardView>) =
            request_json(&app, "POST", &format!("/api/reservations/{id}/advance"), None).await;

        assert_eq!(status, HttpStatusCode::OK);
        let view: WizardView = view.unwrap();
        assert_eq!(view.step, Some(1));
        assert!(view.errors.contains("nombre"));
        assert!(view.errors.contains("fecha"));
    }
}
