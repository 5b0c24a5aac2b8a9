//! `/api/verified-users`: the plain collection resource that a remote
//! backend talks to. Bodies are bare JSON, not the admin envelope, and every
//! response is open to any origin.

use actix_web::{
    delete, get,
    http::{header, StatusCode},
    post, route, web, HttpResponse, HttpResponseBuilder, Responder,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, warn};

use crate::verification::application::domain::entities::SocialNetwork;
use crate::verification::application::ports::incoming::use_cases::{
    CreateRecordCommand, CreateRecordError, DeleteRecordError, GetSingleRecordError,
};
use crate::AppState;

const ALLOWED_METHODS: &str = "GET, POST, DELETE, OPTIONS";
const ALLOWED_HEADERS: &str = "Content-Type";
const PREFLIGHT_MAX_AGE_SECS: &str = "86400";

#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}

impl IdQuery {
    fn unique_id(&self) -> Option<&str> {
        self.id.as_deref().map(str::trim).filter(|id| !id.is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct VerifiedUserBody {
    #[serde(default)]
    username: String,
    #[serde(default)]
    phone: String,
    #[serde(default)]
    user_id: String,
    #[serde(default)]
    social_networks: Vec<SocialNetwork>,
    status: Option<String>,
    category: Option<String>,
}

fn with_cors(status: StatusCode) -> HttpResponseBuilder {
    let mut builder = HttpResponse::build(status);
    builder.insert_header((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"));
    builder
}

fn error_body(status: StatusCode, message: &str) -> HttpResponse {
    with_cors(status).json(json!({ "error": message }))
}

fn user_not_found() -> HttpResponse {
    error_body(StatusCode::NOT_FOUND, "User not found")
}

//
// ──────────────────────────────────────────────────────────
// GET
// ──────────────────────────────────────────────────────────
//

/// Without `id` the whole collection, newest (highest id) first.
#[get("/api/verified-users")]
pub async fn get_verified_users_handler(
    data: web::Data<AppState>,
    query: web::Query<IdQuery>,
) -> impl Responder {
    let Some(unique_id) = query.unique_id() else {
        let mut records = data.verification.get_list.execute().await;
        records.sort_by(|a, b| b.id.cmp(&a.id));
        return with_cors(StatusCode::OK).json(records);
    };

    match data.verification.get_single.execute(unique_id).await {
        Ok(record) => with_cors(StatusCode::OK).json(record),
        Err(GetSingleRecordError::NotFound) => user_not_found(),
        Err(GetSingleRecordError::RemoteUnavailable(msg)) => {
            warn!("Lookup of {} failed upstream: {}", unique_id, msg);
            error_body(StatusCode::BAD_GATEWAY, "Remote store unavailable")
        }
        Err(GetSingleRecordError::RepositoryError(msg)) => {
            error!("Error fetching record {}: {}", unique_id, msg);
            error_body(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// POST
// ──────────────────────────────────────────────────────────
//

#[post("/api/verified-users")]
pub async fn create_verified_user_handler(
    data: web::Data<AppState>,
    body: web::Bytes,
) -> impl Responder {
    let body: VerifiedUserBody = match serde_json::from_slice(&body) {
        Ok(body) => body,
        Err(e) => return error_body(StatusCode::BAD_REQUEST, &format!("Invalid JSON: {e}")),
    };

    let command = match CreateRecordCommand::new(
        body.username,
        body.phone,
        body.user_id,
        body.social_networks,
        body.status,
        body.category,
    ) {
        Ok(cmd) => cmd,
        Err(err) => return error_body(StatusCode::BAD_REQUEST, &err.to_string()),
    };

    match data.verification.create.execute(command).await {
        Ok(record) => with_cors(StatusCode::CREATED).json(record),
        Err(CreateRecordError::RemoteUnavailable(msg)) => {
            warn!("Create failed upstream: {}", msg);
            error_body(StatusCode::BAD_GATEWAY, "Remote store unavailable")
        }
        Err(err) => {
            error!("Error creating record: {}", err);
            error_body(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// DELETE
// ──────────────────────────────────────────────────────────
//

#[delete("/api/verified-users")]
pub async fn delete_verified_user_handler(
    data: web::Data<AppState>,
    query: web::Query<IdQuery>,
) -> impl Responder {
    let Some(unique_id) = query.unique_id() else {
        return error_body(StatusCode::BAD_REQUEST, "Missing id parameter");
    };

    match data.verification.delete.execute(unique_id).await {
        Ok(()) => with_cors(StatusCode::OK).json(json!({ "message": "User deleted successfully" })),
        Err(DeleteRecordError::NotFound) => user_not_found(),
        Err(DeleteRecordError::RemoteUnavailable(msg)) => {
            warn!("Delete of {} failed upstream: {}", unique_id, msg);
            error_body(StatusCode::BAD_GATEWAY, "Remote store unavailable")
        }
        Err(DeleteRecordError::RepositoryError(msg)) => {
            error!("Error deleting record {}: {}", unique_id, msg);
            error_body(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Preflight and everything else
// ──────────────────────────────────────────────────────────
//

#[route("/api/verified-users", method = "OPTIONS")]
pub async fn verified_users_preflight_handler() -> impl Responder {
    with_cors(StatusCode::OK)
        .insert_header((header::ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS))
        .insert_header((header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOWED_HEADERS))
        .insert_header((header::ACCESS_CONTROL_MAX_AGE, PREFLIGHT_MAX_AGE_SECS))
        .finish()
}

#[route("/api/verified-users", method = "PUT", method = "PATCH")]
pub async fn verified_users_method_not_allowed_handler() -> impl Responder {
    with_cors(StatusCode::METHOD_NOT_ALLOWED)
        .insert_header((header::ALLOW, ALLOWED_METHODS))
        .json(json!({ "error": "Method not allowed" }))
}
