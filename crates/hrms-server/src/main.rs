use axum::{routing::get, Json, Router};
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod error;
mod models;
mod routes;

use adapters::{PgAttendanceRepository, PgEmployeeRepository};
use application::{AttendanceService, EmployeeService};
use config::ServerConfig;
use hrms::{AttendanceRepository, EmployeeRepository};

/// Type aliases for application services over type-erased repositories
pub type AppEmployeeService = EmployeeService<dyn EmployeeRepository, dyn AttendanceRepository>;
pub type AppAttendanceService =
    AttendanceService<dyn AttendanceRepository, dyn EmployeeRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub employee_service: Arc<AppEmployeeService>,
    pub attendance_service: Arc<AppAttendanceService>,
}

impl AppState {
    /// Wire both services over the same pair of repositories
    pub fn new(
        employees: Arc<dyn EmployeeRepository>,
        attendance: Arc<dyn AttendanceRepository>,
    ) -> Self {
        Self {
            employee_service: Arc::new(EmployeeService::new(
                employees.clone(),
                attendance.clone(),
            )),
            attendance_service: Arc::new(AttendanceService::new(attendance, employees)),
        }
    }
}

#[derive(Serialize)]
struct HealthCheck {
    message: String,
    status: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        message: "HRMS Lite API".to_string(),
        status: "running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build the HTTP application around already-wired state
fn app(state: AppState, config: &ServerConfig) -> Router {
    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/", get(health_check))
        .route("/health", get(health_check))
        .merge(routes::employee::router())
        .merge(routes::attendance::router())
        .layer(TraceLayer::new_for_http())
        .layer(config.cors_layer())
        .with_state(state)
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("HRMS Lite API initializing...");

    let config = ServerConfig::from_secrets(&secrets);
    match &config.cors_allowed_origins {
        Some(origins) => tracing::info!("CORS restricted to: {}", origins.join(", ")),
        None => tracing::info!("CORS allows any origin"),
    }

    // Run migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .map_err(shuttle_runtime::CustomError::new)?;

    tracing::info!("Database migrations completed");

    let employees: Arc<dyn EmployeeRepository> = Arc::new(PgEmployeeRepository::new(pool.clone()));
    let attendance: Arc<dyn AttendanceRepository> = Arc::new(PgAttendanceRepository::new(pool));

    let router = app(AppState::new(employees, attendance), &config);

    tracing::info!("Swagger UI: /swagger-ui");
    tracing::info!("HRMS Lite API ready");

    Ok(router.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryAttendanceRepository, InMemoryEmployeeRepository};
    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn test_app() -> Router {
        let state = AppState::new(
            Arc::new(InMemoryEmployeeRepository::new()),
            Arc::new(InMemoryAttendanceRepository::new()),
        );
        app(state, &ServerConfig::default())
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header("content-type", "application/json")
                .body(Body::from(body.to_string())),
            None => request.body(Body::empty()),
        }
        .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    /// Post a raw body, returning the status, content type and parsed JSON
    async fn post_raw(
        app: &Router,
        uri: &str,
        content_type: Option<&str>,
        body: &str,
    ) -> (StatusCode, String, Value) {
        let mut request = Request::builder().method(Method::POST).uri(uri);
        if let Some(content_type) = content_type {
            request = request.header("content-type", content_type);
        }
        let request = request.body(Body::from(body.to_string())).unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, content_type, serde_json::from_slice(&bytes).unwrap())
    }

    fn employee(employee_id: &str, email: &str) -> Value {
        json!({
            "employee_id": employee_id,
            "full_name": "Ana",
            "email": email,
            "department": "Eng"
        })
    }

    fn mark(employee_id: &str, date: &str, status: &str) -> Value {
        json!({ "employee_id": employee_id, "date": date, "status": status })
    }

    #[tokio::test]
    async fn test_liveness() {
        let app = test_app();
        for path in ["/", "/health"] {
            let (status, body) = send(&app, Method::GET, path, None).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["message"], "HRMS Lite API");
            assert_eq!(body["status"], "running");
        }
    }

    #[tokio::test]
    async fn test_openapi_document_served() {
        let app = test_app();
        let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"]["/api/employees"].is_object());
        assert!(body["paths"]["/api/attendance/{employee_id}"].is_object());
    }

    #[tokio::test]
    async fn test_attendance_lifecycle_scenario() {
        let app = test_app();

        let (status, created) =
            send(&app, Method::POST, "/api/employees", Some(employee("E1", "a@x.com"))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert!(!created["id"].as_str().unwrap().is_empty());
        assert_eq!(created["employee_id"], "E1");
        assert_eq!(created["full_name"], "Ana");
        assert_eq!(created["email"], "a@x.com");
        assert_eq!(created["department"], "Eng");

        let (status, marked) = send(
            &app,
            Method::POST,
            "/api/attendance",
            Some(mark("E1", "2024-01-01", "Present")),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(marked["date"], "2024-01-01");
        assert_eq!(marked["status"], "Present");
        assert!(marked["id"].is_string());

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/attendance",
            Some(mark("E1", "2024-01-01", "Present")),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "Attendance already marked for this date");

        let (status, body) = send(&app, Method::DELETE, "/api/employees/E1", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(body, Value::Null);

        let (status, body) = send(&app, Method::GET, "/api/attendance/E1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Employee not found");

        let (status, body) = send(&app, Method::GET, "/api/attendance", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_duplicate_employee_rejected() {
        let app = test_app();
        send(&app, Method::POST, "/api/employees", Some(employee("E1", "a@x.com"))).await;

        let (status, body) =
            send(&app, Method::POST, "/api/employees", Some(employee("E1", "b@x.com"))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "Employee ID already exists");

        let (status, body) =
            send(&app, Method::POST, "/api/employees", Some(employee("E2", "a@x.com"))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "Email already exists");

        let (_, list) = send(&app, Method::GET, "/api/employees", None).await;
        assert_eq!(list.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_employee_reports_fields() {
        let app = test_app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/employees",
            Some(json!({ "employee_id": "E1", "email": "not-an-email" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let fields: Vec<&str> = body["detail"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v["field"].as_str().unwrap())
            .collect();
        assert_eq!(fields, vec!["full_name", "email", "department"]);
    }

    #[tokio::test]
    async fn test_client_supplied_id_ignored() {
        let app = test_app();
        let mut body = employee("E1", "a@x.com");
        body["id"] = json!("my-own-id");

        let (status, created) = send(&app, Method::POST, "/api/employees", Some(body)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_ne!(created["id"], "my-own-id");
    }

    #[tokio::test]
    async fn test_mark_for_unknown_employee() {
        let app = test_app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/attendance",
            Some(mark("E404", "2024-01-01", "Absent")),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Employee not found");
    }

    #[tokio::test]
    async fn test_mark_with_bad_status() {
        let app = test_app();
        send(&app, Method::POST, "/api/employees", Some(employee("E1", "a@x.com"))).await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/attendance",
            Some(mark("E1", "01/02/2024", "Sick")),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"][0]["field"], "date");
        assert_eq!(body["detail"][1]["field"], "status");
    }

    #[tokio::test]
    async fn test_attendance_listings_newest_first() {
        let app = test_app();
        send(&app, Method::POST, "/api/employees", Some(employee("E1", "a@x.com"))).await;
        send(&app, Method::POST, "/api/employees", Some(employee("E2", "b@x.com"))).await;

        for (employee_id, date) in [
            ("E1", "2024-01-01"),
            ("E2", "2024-01-03"),
            ("E1", "2024-01-05"),
            ("E1", "2024-01-03"),
        ] {
            let (status, _) = send(
                &app,
                Method::POST,
                "/api/attendance",
                Some(mark(employee_id, date, "Present")),
            )
            .await;
            assert_eq!(status, StatusCode::CREATED);
        }

        let dates = |body: &Value| -> Vec<String> {
            body.as_array()
                .unwrap()
                .iter()
                .map(|r| r["date"].as_str().unwrap().to_string())
                .collect()
        };

        let (status, body) = send(&app, Method::GET, "/api/attendance/E1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(dates(&body), vec!["2024-01-05", "2024-01-03", "2024-01-01"]);

        let (_, body) = send(&app, Method::GET, "/api/attendance", None).await;
        assert_eq!(
            dates(&body),
            vec!["2024-01-05", "2024-01-03", "2024-01-03", "2024-01-01"]
        );
    }

    #[tokio::test]
    async fn test_delete_unknown_employee() {
        let app = test_app();
        let (status, body) = send(&app, Method::DELETE, "/api/employees/nobody", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Employee not found");
    }

    #[tokio::test]
    async fn test_null_field_reported_by_validation() {
        let app = test_app();
        let mut body = employee("E1", "a@x.com");
        body["department"] = Value::Null;

        let (status, body) = send(&app, Method::POST, "/api/employees", Some(body)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"][0]["field"], "department");
        assert_eq!(body["detail"][0]["message"], "must not be empty");
    }

    #[tokio::test]
    async fn test_mistyped_field_returns_json_detail() {
        let app = test_app();
        let body = json!({ "employee_id": "E1", "date": "2024-01-01", "status": 1 }).to_string();

        let (status, content_type, body) =
            post_raw(&app, "/api/attendance", Some("application/json"), &body).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(content_type, "application/json");
        assert!(body["detail"].is_string());
    }

    #[tokio::test]
    async fn test_malformed_json_returns_json_detail() {
        let app = test_app();
        let (status, content_type, body) = post_raw(
            &app,
            "/api/employees",
            Some("application/json"),
            r#"{"employee_id": "E1","#,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(content_type, "application/json");
        assert!(body["detail"].is_string());
    }

    #[tokio::test]
    async fn test_missing_content_type_returns_json_detail() {
        let app = test_app();
        let body = employee("E1", "a@x.com").to_string();

        let (status, content_type, body) = post_raw(&app, "/api/employees", None, &body).await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(content_type, "application/json");
        assert!(body["detail"].is_string());

        let (_, list) = send(&app, Method::GET, "/api/employees", None).await;
        assert_eq!(list, json!([]));
    }
}
