use actix_web::{delete, web, HttpResponse, Responder};
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::verification::application::ports::incoming::use_cases::DeleteRecordError;
use crate::AppState;

#[delete("/api/admin/records/{unique_id}")]
pub async fn delete_record_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    match data.verification.delete.execute(&path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(err) => map_delete_record_error(err),
    }
}

fn map_delete_record_error(err: DeleteRecordError) -> HttpResponse {
    match err {
        DeleteRecordError::NotFound => ApiResponse::not_found("RECORD_NOT_FOUND", "Record not found"),
        DeleteRecordError::RemoteUnavailable(msg) => {
            error!("Remote store unavailable: {}", msg);
            ApiResponse::bad_gateway(
                "REMOTE_STORE_UNAVAILABLE",
                "Remote record store is unavailable",
            )
        }
        DeleteRecordError::RepositoryError(msg) => {
            error!("Repository error: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::{memory_record_store, sample_draft};
    use crate::tests::support::stubs::StubDeleteRecordUseCase;

    #[actix_web::test]
    async fn delete_record_returns_no_content_then_not_found() {
        // Arrange
        let store = memory_record_store();
        let created = store.add(sample_draft("@alice")).await.unwrap();
        let state = TestAppStateBuilder::default()
            .with_record_store(store.clone())
            .build();
        let app =
            test::init_service(App::new().app_data(state).service(delete_record_handler)).await;
        let uri = format!("/api/admin/records/{}", created.unique_id);

        // Act
        let first = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
        let second = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;

        // Assert
        assert_eq!(first.status(), StatusCode::NO_CONTENT);
        assert_eq!(second.status(), StatusCode::NOT_FOUND);
        assert!(store.load_all().await.is_empty());
    }

    #[actix_web::test]
    async fn delete_record_remote_down_returns_bad_gateway() {
        let state = TestAppStateBuilder::default()
            .with_delete_record(StubDeleteRecordUseCase::failing(
                DeleteRecordError::RemoteUnavailable("refused".to_string()),
            ))
            .build();
        let app =
            test::init_service(App::new().app_data(state).service(delete_record_handler)).await;

        let req = test::TestRequest::delete()
            .uri("/api/admin/records/VU-ABC123")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }
}
