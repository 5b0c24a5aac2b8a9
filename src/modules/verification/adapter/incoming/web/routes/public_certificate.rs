use actix_web::{get, http::header::ContentType, web, HttpResponse, Responder};
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::verification::application::domain::certificate::RenderOptions;
use crate::verification::application::ports::incoming::use_cases::RenderCertificateError;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Public certificate page
// ──────────────────────────────────────────────────────────
//

#[get("/certificate/{unique_id}")]
pub async fn public_certificate_page_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let unique_id = path.into_inner();

    match data
        .verification
        .render_certificate
        .execute(&unique_id, RenderOptions::public())
        .await
    {
        Ok(view) => {
            let title = format!("VeriUserRU: {}", view.unique_id);
            HttpResponse::Ok()
                .content_type(ContentType::html())
                .body(data.certificate_renderer.render_page(&title, &view))
        }
        Err(RenderCertificateError::NotFound) => HttpResponse::NotFound()
            .content_type(ContentType::html())
            .body(data.certificate_renderer.render_not_found_page(&unique_id)),
        Err(err) => map_store_failure(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Public certificate JSON
// ──────────────────────────────────────────────────────────
//

#[get("/api/public/certificates/{unique_id}")]
pub async fn get_public_certificate_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    match data
        .verification
        .render_certificate
        .execute(&path.into_inner(), RenderOptions::public())
        .await
    {
        Ok(view) => ApiResponse::success(view),
        Err(RenderCertificateError::NotFound) => {
            ApiResponse::not_found("RECORD_NOT_FOUND", "Certificate not found")
        }
        Err(err) => map_store_failure(err),
    }
}

fn map_store_failure(err: RenderCertificateError) -> HttpResponse {
    match err {
        RenderCertificateError::RemoteUnavailable(msg) => {
            error!("Remote store unavailable: {}", msg);
            ApiResponse::bad_gateway(
                "REMOTE_STORE_UNAVAILABLE",
                "Remote record store is unavailable",
            )
        }
        other => {
            error!("Error rendering certificate: {}", other);
            ApiResponse::internal_error()
        }
    }
}
