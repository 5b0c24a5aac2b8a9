pub mod create_record;
mod delete_record;
mod dto;
mod export_certificate;
pub mod get_records;
pub mod get_single_record;
mod labels;
mod patch_record;
mod preview_certificate;
mod public_certificate;
mod snapshot;
mod verified_users;

pub use create_record::{create_record_handler, CreateRecordRequest};
pub use delete_record::delete_record_handler;
pub use dto::{RecordResponse, SocialNetworkDto};
pub use export_certificate::export_certificate_handler;
pub use get_records::get_records_handler;
pub use get_single_record::get_record_handler;
pub use labels::{add_label_handler, get_labels_handler};
pub use patch_record::patch_record_handler;
pub use preview_certificate::preview_certificate_handler;
pub use public_certificate::{get_public_certificate_handler, public_certificate_page_handler};
pub use snapshot::{export_snapshot_handler, import_snapshot_handler};
pub use verified_users::{
    create_verified_user_handler, delete_verified_user_handler, get_verified_users_handler,
    verified_users_method_not_allowed_handler, verified_users_preflight_handler,
};
