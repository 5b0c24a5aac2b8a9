use chrono::FixedOffset;
use std::sync::Arc;

use crate::verification::application::{
    ports::{
        incoming::use_cases::{
            AddLabelUseCase, CreateRecordUseCase, DeleteRecordUseCase, ExportCertificateUseCase,
            ExportSnapshotUseCase, GetLabelsUseCase, GetRecordsUseCase, GetSingleRecordUseCase,
            ImportSnapshotUseCase, PatchRecordUseCase, RenderCertificateUseCase,
        },
        outgoing::{CertificateExporter, LabelCatalog, RecordStore},
    },
    services::{
        AddLabelService, CreateRecordService, DeleteRecordService, ExportCertificateService,
        ExportSnapshotService, GetLabelsService, GetRecordsService, GetSingleRecordService,
        ImportSnapshotService, PatchRecordService, RenderCertificateService,
    },
};

#[derive(Clone)]
pub struct VerificationUseCases {
    pub create: Arc<dyn CreateRecordUseCase>,
    pub get_list: Arc<dyn GetRecordsUseCase>,
    pub get_single: Arc<dyn GetSingleRecordUseCase>,
    pub patch: Arc<dyn PatchRecordUseCase>,
    pub delete: Arc<dyn DeleteRecordUseCase>,
    pub render_certificate: Arc<dyn RenderCertificateUseCase>,
    pub export_certificate: Arc<dyn ExportCertificateUseCase>,
    pub export_snapshot: Arc<dyn ExportSnapshotUseCase>,
    pub import_snapshot: Arc<dyn ImportSnapshotUseCase>,
    pub get_labels: Arc<dyn GetLabelsUseCase>,
    pub add_label: Arc<dyn AddLabelUseCase>,
}

impl VerificationUseCases {
    /// Wires every use case to the same store.
    pub fn new(
        store: Arc<dyn RecordStore>,
        catalog: Arc<dyn LabelCatalog>,
        exporter: Arc<dyn CertificateExporter>,
        display_offset: FixedOffset,
    ) -> Self {
        Self {
            create: Arc::new(CreateRecordService::new(store.clone())),
            get_list: Arc::new(GetRecordsService::new(store.clone())),
            get_single: Arc::new(GetSingleRecordService::new(store.clone())),
            patch: Arc::new(PatchRecordService::new(store.clone())),
            delete: Arc::new(DeleteRecordService::new(store.clone())),
            render_certificate: Arc::new(RenderCertificateService::new(
                store.clone(),
                display_offset,
            )),
            export_certificate: Arc::new(ExportCertificateService::new(
                store.clone(),
                exporter,
                display_offset,
            )),
            export_snapshot: Arc::new(ExportSnapshotService::new(store.clone())),
            import_snapshot: Arc::new(ImportSnapshotService::new(store.clone())),
            get_labels: Arc::new(GetLabelsService::new(catalog.clone(), store)),
            add_label: Arc::new(AddLabelService::new(catalog)),
        }
    }
}
