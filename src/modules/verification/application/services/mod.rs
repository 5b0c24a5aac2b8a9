mod add_label_service;
mod create_record_service;
mod delete_record_service;
mod export_certificate_service;
mod export_snapshot_service;
mod get_labels_service;
mod get_records_service;
mod get_single_record_service;
mod import_snapshot_service;
mod patch_record_service;
mod render_certificate_service;

pub use add_label_service::AddLabelService;
pub use create_record_service::CreateRecordService;
pub use delete_record_service::DeleteRecordService;
pub use export_certificate_service::ExportCertificateService;
pub use export_snapshot_service::ExportSnapshotService;
pub use get_labels_service::GetLabelsService;
pub use get_records_service::GetRecordsService;
pub use get_single_record_service::GetSingleRecordService;
pub use import_snapshot_service::ImportSnapshotService;
pub use patch_record_service::PatchRecordService;
pub use render_certificate_service::RenderCertificateService;
