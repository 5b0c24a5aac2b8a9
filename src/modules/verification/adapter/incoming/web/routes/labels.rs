use actix_web::{get, post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::shared::api::ApiResponse;
use crate::verification::application::ports::incoming::use_cases::{
    AddLabelCommand, AddLabelCommandError,
};
use crate::verification::application::ports::outgoing::LabelKind;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AddLabelRequest {
    pub kind: LabelKind,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct AddLabelResponse {
    pub kind: LabelKind,
    pub value: String,
    pub added: bool,
}

#[get("/api/admin/labels")]
pub async fn get_labels_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.verification.get_labels.execute().await)
}

/// 201 when the label is new, 200 when it was already known.
#[post("/api/admin/labels")]
pub async fn add_label_handler(
    data: web::Data<AppState>,
    payload: web::Json<AddLabelRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    let command = match AddLabelCommand::new(payload.kind, payload.value) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    let added = data.verification.add_label.execute(command.clone()).await;
    let response = AddLabelResponse {
        kind: command.kind(),
        value: command.value().to_string(),
        added,
    };

    if added {
        ApiResponse::created(response)
    } else {
        ApiResponse::success(response)
    }
}

fn map_command_error(err: AddLabelCommandError) -> HttpResponse {
    match err {
        AddLabelCommandError::EmptyLabel => {
            ApiResponse::bad_request("EMPTY_LABEL", "Label cannot be empty")
        }
    }
}
