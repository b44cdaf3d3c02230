// 🌐 Web Form - Axum router over a shared registry
// HTML form + records table, plus a small JSON API.
//
// The registry lives behind one Mutex: each request holds the lock for the
// whole check-then-insert, so codes stay unique under concurrent requests.

use crate::registry::{Registry, RegistrationError, Severity, StudentRecord};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Form, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

pub const BLANK_NAMES_MESSAGE: &str = "Please enter both last and first names.";

/// Shared application state
#[derive(Clone, Default)]
pub struct AppState {
    pub registry: Arc<Mutex<Registry>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    fn registry(&self) -> Result<MutexGuard<'_, Registry>, StatusCode> {
        self.registry.lock().map_err(|_| {
            error!("registry lock poisoned");
            StatusCode::INTERNAL_SERVER_ERROR
        })
    }
}

/// API Response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            error: None,
        }
    }

    fn err(data: T, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data,
            error: Some(message.into()),
        }
    }
}

/// Submitted names, from the HTML form or the JSON API
#[derive(Debug, Default, Deserialize)]
pub struct NameInput {
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub first_name: String,
}

impl NameInput {
    /// Trimmed (last, first), or None if either is blank
    fn trimmed(&self) -> Option<(&str, &str)> {
        let last = self.last_name.trim();
        let first = self.first_name.trim();
        if last.is_empty() || first.is_empty() {
            None
        } else {
            Some((last, first))
        }
    }
}

// ============================================================================
// ROUTER
// ============================================================================

pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/students", get(list_students).post(create_student));

    Router::new()
        .route("/", get(index_page))
        .route("/register", post(register_form))
        .nest("/api", api_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ============================================================================
// HTML HANDLERS
// ============================================================================

/// GET / - Form and table of registered students
async fn index_page(State(state): State<AppState>) -> Response {
    match state.registry() {
        Ok(registry) => Html(render_page(&registry, None)).into_response(),
        Err(status) => status.into_response(),
    }
}

/// POST /register - Handle a form submission
async fn register_form(State(state): State<AppState>, Form(input): Form<NameInput>) -> Response {
    let mut registry = match state.registry() {
        Ok(registry) => registry,
        Err(status) => return status.into_response(),
    };

    let banner = match input.trimmed() {
        None => Banner::error(BLANK_NAMES_MESSAGE),
        Some((last, first)) => match registry.register(last, first) {
            Ok(code) => Banner::success(format!("Registration number: {}", code)),
            Err(e) => match e.severity() {
                Severity::Warning => Banner::warning(e.to_string()),
                Severity::Error => Banner::error(e.to_string()),
            },
        },
    };

    Html(render_page(&registry, Some(&banner))).into_response()
}

// ============================================================================
// API HANDLERS
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// GET /api/students - All records in registration order
async fn list_students(State(state): State<AppState>) -> Response {
    match state.registry() {
        Ok(registry) => {
            let records: Vec<StudentRecord> = registry.records().cloned().collect();
            (StatusCode::OK, Json(ApiResponse::ok(records))).into_response()
        }
        Err(status) => status.into_response(),
    }
}

/// POST /api/students - Register from JSON
async fn create_student(State(state): State<AppState>, Json(input): Json<NameInput>) -> Response {
    let Some((last, first)) = input.trimmed() else {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ApiResponse::err(None::<String>, BLANK_NAMES_MESSAGE)),
        )
            .into_response();
    };

    let mut registry = match state.registry() {
        Ok(registry) => registry,
        Err(status) => return status.into_response(),
    };

    match registry.register(last, first) {
        Ok(code) => {
            info!(%code, "registered via API");
            let record = registry.lookup(last, first).cloned();
            (StatusCode::CREATED, Json(ApiResponse::ok(record))).into_response()
        }
        Err(e) => {
            let status = match e {
                RegistrationError::AlreadyRegistered { .. } => StatusCode::CONFLICT,
                RegistrationError::InvalidName => StatusCode::UNPROCESSABLE_ENTITY,
            };
            let existing = e.existing_code().map(str::to_string);
            (status, Json(ApiResponse::err(existing, e.to_string()))).into_response()
        }
    }
}

// ============================================================================
// RENDERING
// ============================================================================

#[derive(Debug, Clone)]
struct Banner {
    class: &'static str,
    message: String,
}

impl Banner {
    fn success(message: impl Into<String>) -> Self {
        Banner { class: "success", message: message.into() }
    }

    fn warning(message: impl Into<String>) -> Self {
        Banner { class: "warning", message: message.into() }
    }

    fn error(message: impl Into<String>) -> Self {
        Banner { class: "error", message: message.into() }
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn render_page(registry: &Registry, banner: Option<&Banner>) -> String {
    let mut html = String::from(PAGE_HEAD);

    if let Some(banner) = banner {
        html.push_str(&format!(
            "<div class=\"banner {}\">{}</div>\n",
            banner.class,
            escape_html(&banner.message)
        ));
    }

    html.push_str(FORM);

    if registry.is_empty() {
        html.push_str("<p class=\"empty\">No students registered yet.</p>\n");
    } else {
        html.push_str("<h2>Registered students</h2>\n<table>\n");
        html.push_str("<tr><th>Last name</th><th>First name</th><th>Registration number</th></tr>\n");
        for record in registry.records() {
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                escape_html(&record.last_name),
                escape_html(&record.first_name),
                escape_html(&record.code)
            ));
        }
        html.push_str("</table>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Student Registration</title>
<style>
body { font-family: sans-serif; max-width: 48rem; margin: 2rem auto; }
.banner { padding: 0.75rem 1rem; border-radius: 4px; margin-bottom: 1rem; }
.success { background: #e6f4ea; color: #1e4620; }
.warning { background: #fff4e5; color: #663c00; }
.error { background: #fdecea; color: #611a15; }
table { border-collapse: collapse; width: 100%; }
th, td { border: 1px solid #ccc; padding: 0.4rem 0.6rem; text-align: left; }
</style>
</head>
<body>
<h1>Student Registration</h1>
"#;

const FORM: &str = r#"<form method="post" action="/register">
<label>Last name <input type="text" name="last_name"></label>
<label>First name <input type="text" name="first_name"></label>
<button type="submit">Generate Registration Number</button>
</form>
"#;
