use crate::shared::api::ApiResponse;
use actix_web::web::{JsonConfig, PayloadConfig};

const JSON_BODY_LIMIT: usize = 256 * 1024;

/// Snapshots carry the whole collection.
const SNAPSHOT_BODY_LIMIT: usize = 16 * 1024 * 1024;

/// Malformed JSON bodies become a 400 `VALIDATION_ERROR` envelope.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(JSON_BODY_LIMIT)
        .error_handler(|err, _req| {
            let message = err.to_string();
            actix_web::error::InternalError::from_response(
                err,
                ApiResponse::bad_request("VALIDATION_ERROR", &message),
            )
            .into()
        })
}

pub fn snapshot_payload_config() -> PayloadConfig {
    PayloadConfig::new(SNAPSHOT_BODY_LIMIT)
}
