use actix_web::web;
use std::sync::Arc;

use crate::tests::support::fixtures::memory_record_store;
use crate::tests::support::stubs::*;
use crate::verification::adapter::outgoing::{
    HtmlCertificateRenderer, MemoryLabelCatalog, PrintDocumentExporter,
};
use crate::verification::application::domain::certificate::{
    display_offset_from_minutes, DEFAULT_DISPLAY_OFFSET_MINUTES,
};
use crate::verification::application::ports::incoming::use_cases::{
    AddLabelUseCase, CreateRecordError, CreateRecordUseCase, DeleteRecordError,
    DeleteRecordUseCase, ExportCertificateError, ExportCertificateUseCase, ExportSnapshotError,
    ExportSnapshotUseCase, GetRecordsUseCase, GetSingleRecordUseCase, ImportSnapshotUseCase, PatchRecordError,
    PatchRecordUseCase, RenderCertificateError, RenderCertificateUseCase,
};
use crate::verification::application::ports::outgoing::{CertificateRenderer, RecordStore};
use crate::verification::application::verification_use_cases::VerificationUseCases;
use crate::AppState;

pub const TEST_PUBLIC_BASE_URL: &str = "http://veriuser.test";

pub struct TestAppStateBuilder {
    verification: VerificationUseCases,
    certificate_renderer: Arc<dyn CertificateRenderer>,
    record_store: Arc<dyn RecordStore>,
}

fn stub_use_cases() -> VerificationUseCases {
    VerificationUseCases {
        create: Arc::new(StubCreateRecordUseCase::failing(
            CreateRecordError::RepositoryError("not used in this test".to_string()),
        )),
        get_list: Arc::new(StubGetRecordsUseCase::default()),
        get_single: Arc::new(StubGetSingleRecordUseCase::not_found()),
        patch: Arc::new(StubPatchRecordUseCase::failing(PatchRecordError::NotFound)),
        delete: Arc::new(StubDeleteRecordUseCase::failing(DeleteRecordError::NotFound)),
        render_certificate: Arc::new(StubRenderCertificateUseCase::failing(
            RenderCertificateError::NotFound,
        )),
        export_certificate: Arc::new(StubExportCertificateUseCase::failing(
            ExportCertificateError::NotFound,
        )),
        export_snapshot: Arc::new(StubExportSnapshotUseCase::failing(
            ExportSnapshotError::RepositoryError("not used in this test".to_string()),
        )),
        import_snapshot: Arc::new(StubImportSnapshotUseCase { result: Ok(0) }),
        get_labels: Arc::new(StubGetLabelsUseCase::default()),
        add_label: Arc::new(StubAddLabelUseCase::default()),
    }
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            verification: stub_use_cases(),
            certificate_renderer: Arc::new(HtmlCertificateRenderer),
            record_store: memory_record_store(),
        }
    }
}

impl TestAppStateBuilder {
    /// Real services over `store`, replacing every stub.
    pub fn with_record_store(mut self, store: Arc<dyn RecordStore>) -> Self {
        let renderer: Arc<dyn CertificateRenderer> = Arc::new(HtmlCertificateRenderer);
        let display_offset = display_offset_from_minutes(DEFAULT_DISPLAY_OFFSET_MINUTES)
            .expect("default display offset is valid");

        self.verification = VerificationUseCases::new(
            store.clone(),
            Arc::new(MemoryLabelCatalog::new()),
            Arc::new(PrintDocumentExporter::new(renderer.clone())),
            display_offset,
        );
        self.certificate_renderer = renderer;
        self.record_store = store;
        self
    }

    pub fn with_create_record(mut self, uc: impl CreateRecordUseCase + 'static) -> Self {
        self.verification.create = Arc::new(uc);
        self
    }

    pub fn with_get_records(mut self, uc: impl GetRecordsUseCase + 'static) -> Self {
        self.verification.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_single_record(mut self, uc: impl GetSingleRecordUseCase + 'static) -> Self {
        self.verification.get_single = Arc::new(uc);
        self
    }

    pub fn with_patch_record(mut self, uc: impl PatchRecordUseCase + 'static) -> Self {
        self.verification.patch = Arc::new(uc);
        self
    }

    pub fn with_delete_record(mut self, uc: impl DeleteRecordUseCase + 'static) -> Self {
        self.verification.delete = Arc::new(uc);
        self
    }

    pub fn with_render_certificate(
        mut self,
        uc: impl RenderCertificateUseCase + 'static,
    ) -> Self {
        self.verification.render_certificate = Arc::new(uc);
        self
    }

    pub fn with_export_certificate(
        mut self,
        uc: impl ExportCertificateUseCase + 'static,
    ) -> Self {
        self.verification.export_certificate = Arc::new(uc);
        self
    }

    pub fn with_export_snapshot(mut self, uc: impl ExportSnapshotUseCase + 'static) -> Self {
        self.verification.export_snapshot = Arc::new(uc);
        self
    }

    pub fn with_import_snapshot(mut self, uc: impl ImportSnapshotUseCase + 'static) -> Self {
        self.verification.import_snapshot = Arc::new(uc);
        self
    }

    pub fn with_add_label(mut self, uc: impl AddLabelUseCase + 'static) -> Self {
        self.verification.add_label = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            verification: self.verification,
            certificate_renderer: self.certificate_renderer,
            record_store: self.record_store,
            public_base_url: TEST_PUBLIC_BASE_URL.to_string(),
        })
    }
}
