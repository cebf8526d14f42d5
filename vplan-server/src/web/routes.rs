//! HTTP route handlers.

use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Local;
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};

use crate::domain::PlanDay;
use crate::iserv::IservError;
use crate::parser::parse;
use crate::plan::PlanError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
///
/// CORS is permissive: the front end is served from a different origin.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/health", get(health))
        .route("/api/check", post(check_plan))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Index endpoint.
async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "Vertretungsplan API",
        status: "running",
    })
}

/// Health check endpoint. Cookies are re-read, so the count is current.
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let cookies_count = state.plan.cookie_count();

    Json(HealthResponse {
        status: "ok",
        cookies_loaded: cookies_count > 0,
        cookies_count,
        extractors: state.plan.extractor_names(),
        pdf_support: state.plan.has_extractors(),
        cached_plans: state.plan.cached_plans().await,
    })
}

/// Check the plan for a class and optional teacher.
async fn check_plan(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CheckResponse>, AppError> {
    // Parse JSON here so malformed bodies get the JSON error shape
    let req: CheckRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(&body), "invalid check request");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let class_name = req.class_name.trim();
    if class_name.is_empty() {
        return Err(AppError::BadRequest {
            message: "className is required".to_string(),
        });
    }

    let teacher_name = req
        .teacher_name
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty());

    let day = req
        .date_type
        .as_deref()
        .map(PlanDay::from_selector)
        .unwrap_or_default();
    let date = day.date_from(Local::now().date_naive());

    info!(
        class = class_name,
        teacher = ?teacher_name,
        ?day,
        %date,
        "plan check"
    );

    let text = state.plan.plan_text(date).await?;
    let entries = parse(&text.text, class_name, teacher_name);

    Ok(Json(CheckResponse {
        has_changes: !entries.is_empty(),
        entries,
        class_name: class_name.to_uppercase(),
        teacher_name: teacher_name.map(str::to_string),
        date: date.format("%d.%m.%Y").to_string(),
    }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<Arc<PlanError>> for AppError {
    fn from(e: Arc<PlanError>) -> Self {
        match e.as_ref() {
            PlanError::Iserv(IservError::NotFound { .. }) => AppError::NotFound {
                message: e.to_string(),
            },
            _ => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use futures::FutureExt;
    use futures::future::BoxFuture;

    use crate::cache::CacheConfig;
    use crate::domain::Status;
    use crate::extract::{ExtractError, ExtractorChain, TextExtractor};
    use crate::iserv::{CookieSource, Cookies};
    use crate::plan::{DocumentSource, PlanService};

    const PLAN: &str = "\
Vertretungsplan
3 MA Hr. Müller 01.02.03 ENTFÄLLT 11D
4 11ABCD EN Schmidt Vertretung
5 10B DE Hr. Müller 02.02.02
";

    /// Source that serves the plan text as the document body.
    struct TextSource(Result<&'static str, fn() -> IservError>);

    impl DocumentSource for TextSource {
        fn fetch<'a>(
            &'a self,
            _date: NaiveDate,
            _cookies: &'a Cookies,
        ) -> BoxFuture<'a, Result<Vec<u8>, IservError>> {
            let result = match self.0 {
                Ok(text) => Ok(text.as_bytes().to_vec()),
                Err(make_error) => Err(make_error()),
            };
            async move { result }.boxed()
        }
    }

    struct Utf8Extractor;

    impl TextExtractor for Utf8Extractor {
        fn name(&self) -> &'static str {
            "utf8"
        }

        fn extract(&self, pdf: &[u8]) -> Result<String, ExtractError> {
            Ok(String::from_utf8_lossy(pdf).into_owned())
        }
    }

    fn sat_env(var: &str) -> Option<String> {
        (var == "ISERV_COOKIE_SAT").then(|| "abc".to_string())
    }

    fn no_env(_var: &str) -> Option<String> {
        None
    }

    fn cookies(lookup: fn(&str) -> Option<String>) -> CookieSource {
        CookieSource::new("/nonexistent/vplan/cookies.json").with_lookup(lookup)
    }

    fn state_with(source: TextSource, cookies: CookieSource) -> AppState {
        AppState::new(PlanService::new(
            source,
            ExtractorChain::new(vec![Box::new(Utf8Extractor)]),
            cookies,
            &CacheConfig::default(),
        ))
    }

    fn state() -> AppState {
        state_with(TextSource(Ok(PLAN)), cookies(sat_env))
    }

    fn request(class: &str, teacher: Option<&str>, date_type: Option<&str>) -> Bytes {
        let body = serde_json::json!({
            "className": class,
            "teacherName": teacher,
            "dateType": date_type,
        });
        Bytes::from(serde_json::to_vec(&body).unwrap())
    }

    #[tokio::test]
    async fn check_class() {
        let Json(resp) = check_plan(State(state()), request(" 11d ", None, None))
            .await
            .unwrap();

        assert!(resp.has_changes);
        assert_eq!(resp.class_name, "11D");
        assert_eq!(resp.teacher_name, None);
        assert_eq!(resp.entries.len(), 2);
        assert_eq!(resp.entries[0].status, Status::Cancelled);
        assert_eq!(resp.entries[1].status, Status::Substitute);
        assert_eq!(
            resp.date,
            Local::now().date_naive().format("%d.%m.%Y").to_string()
        );
    }

    #[tokio::test]
    async fn check_teacher() {
        let Json(resp) = check_plan(State(state()), request("11D", Some(" Müller "), None))
            .await
            .unwrap();

        assert_eq!(resp.teacher_name.as_deref(), Some("Müller"));
        let lessons: Vec<_> = resp.entries.iter().map(|e| e.lesson.as_deref()).collect();
        assert_eq!(lessons, vec![Some("3"), Some("5")]);
    }

    #[tokio::test]
    async fn check_tomorrow() {
        let Json(resp) = check_plan(State(state()), request("11D", None, Some("tomorrow")))
            .await
            .unwrap();

        let tomorrow = PlanDay::Tomorrow.date_from(Local::now().date_naive());
        assert_eq!(resp.date, tomorrow.format("%d.%m.%Y").to_string());
    }

    #[tokio::test]
    async fn check_without_matches() {
        let Json(resp) = check_plan(State(state()), request("9A", Some(""), None))
            .await
            .unwrap();

        assert!(!resp.has_changes);
        assert!(resp.entries.is_empty());
        assert_eq!(resp.teacher_name, None);
    }

    #[tokio::test]
    async fn blank_class_is_bad_request() {
        let err = check_plan(State(state()), request("   ", None, None))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::BadRequest { .. }));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn malformed_body_is_bad_request() {
        let bodies: [&'static [u8]; 3] = [b"not json", br#"{"className": 5}"#, b""];
        for body in bodies {
            let err = check_plan(State(state()), Bytes::from_static(body))
                .await
                .unwrap_err();

            match &err {
                AppError::BadRequest { message } => {
                    assert!(message.starts_with("Invalid JSON"), "{message}");
                }
                other => panic!("expected BadRequest, got {other:?}"),
            }
            assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
        }
    }

    #[tokio::test]
    async fn missing_cookies_is_internal_error() {
        let state = state_with(TextSource(Ok(PLAN)), cookies(no_env));
        let err = check_plan(State(state), request("11D", None, None))
            .await
            .unwrap_err();

        match &err {
            AppError::Internal { message } => assert!(message.contains("no cookies")),
            other => panic!("expected Internal, got {other:?}"),
        }
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn missing_document_is_not_found() {
        let not_found: fn() -> IservError = || IservError::NotFound {
            url: "http://localhost/28.01.26.pdf".into(),
        };
        let state = state_with(TextSource(Err(not_found)), cookies(sat_env));

        let err = check_plan(State(state), request("11D", None, None))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn health_reports_configuration() {
        let state = state();
        let Json(resp) = health(State(state.clone())).await;

        assert_eq!(resp.status, "ok");
        assert!(resp.cookies_loaded);
        assert_eq!(resp.cookies_count, 1);
        assert_eq!(resp.extractors, vec!["utf8"]);
        assert!(resp.pdf_support);
        assert_eq!(resp.cached_plans, 0);

        check_plan(State(state.clone()), request("11D", None, None))
            .await
            .unwrap();
        let Json(resp) = health(State(state)).await;
        assert_eq!(resp.cached_plans, 1);
    }

    #[tokio::test]
    async fn health_without_cookies() {
        let Json(resp) = health(State(state_with(TextSource(Ok(PLAN)), cookies(no_env)))).await;
        assert!(!resp.cookies_loaded);
        assert_eq!(resp.cookies_count, 0);
    }

    #[tokio::test]
    async fn index_is_running() {
        let Json(resp) = index().await;
        assert_eq!(resp.status, "running");
    }

    /// Serve the full router on a free local port.
    async fn serve() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = create_router(state());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn router_answers_bad_bodies_with_json_errors() {
        let base = serve().await;
        let client = reqwest::Client::new();

        let cases: [(&str, &str); 3] = [
            ("text/plain", "not json"),
            ("application/json", "not json"),
            ("application/json", r#"{"className": 5}"#),
        ];
        for (content_type, body) in cases {
            let resp = client
                .post(format!("{base}/api/check"))
                .header(reqwest::header::CONTENT_TYPE, content_type)
                .body(body)
                .send()
                .await
                .unwrap();

            assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);
            let json: serde_json::Value = resp.json().await.unwrap();
            let error = json["error"].as_str().unwrap();
            assert!(error.starts_with("Invalid JSON"), "{error}");
        }
    }

    #[tokio::test]
    async fn router_serves_check_and_health() {
        let base = serve().await;
        let client = reqwest::Client::new();

        let json: serde_json::Value = client
            .post(format!("{base}/api/check"))
            .json(&serde_json::json!({"className": "11d"}))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(json["hasChanges"], true);
        assert_eq!(json["className"], "11D");
        assert_eq!(json["entries"][0]["lesson"], "3");

        let json: serde_json::Value = client
            .get(format!("{base}/api/health"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(json["cookies_count"], 1);
        assert_eq!(json["pdf_support"], true);
    }
}
