mod json_config;
mod response;

pub use json_config::{custom_json_config, snapshot_payload_config};
pub use response::ApiResponse;
