mod add_label_use_case;
mod create_record_use_case;
mod delete_record_use_case;
mod export_certificate_use_case;
mod export_snapshot_use_case;
mod get_labels_use_case;
mod get_records_use_case;
mod get_single_record_use_case;
mod import_snapshot_use_case;
mod patch_record_use_case;
mod render_certificate_use_case;

pub use add_label_use_case::{AddLabelCommand, AddLabelCommandError, AddLabelUseCase};
pub use create_record_use_case::{
    CreateRecordCommand, CreateRecordCommandError, CreateRecordError, CreateRecordUseCase,
    DEFAULT_CATEGORY, DEFAULT_STATUS,
};
pub use delete_record_use_case::{DeleteRecordError, DeleteRecordUseCase};
pub use export_certificate_use_case::{ExportCertificateError, ExportCertificateUseCase};
pub use export_snapshot_use_case::{ExportSnapshotError, ExportSnapshotUseCase, SnapshotDownload};
pub use get_labels_use_case::GetLabelsUseCase;
pub use get_records_use_case::GetRecordsUseCase;
pub use get_single_record_use_case::{GetSingleRecordError, GetSingleRecordUseCase};
pub use import_snapshot_use_case::{ImportSnapshotError, ImportSnapshotUseCase};
pub use patch_record_use_case::{
    PatchRecordCommand, PatchRecordCommandError, PatchRecordError, PatchRecordFields,
    PatchRecordUseCase,
};
pub use render_certificate_use_case::{RenderCertificateError, RenderCertificateUseCase};
