use async_trait::async_trait;

use crate::verification::application::domain::certificate::{CertificateView, RenderOptions};
use crate::verification::application::domain::entities::VerificationRecord;
use crate::verification::application::ports::incoming::use_cases::{
    AddLabelCommand, AddLabelUseCase, CreateRecordCommand, CreateRecordError, CreateRecordUseCase,
    DeleteRecordError, DeleteRecordUseCase, ExportCertificateError, ExportCertificateUseCase,
    ExportSnapshotError, ExportSnapshotUseCase, GetLabelsUseCase, GetRecordsUseCase,
    GetSingleRecordError, GetSingleRecordUseCase, ImportSnapshotError, ImportSnapshotUseCase,
    PatchRecordCommand, PatchRecordError, PatchRecordUseCase, RenderCertificateError,
    RenderCertificateUseCase, SnapshotDownload,
};
use crate::verification::application::ports::outgoing::{ExportArtifact, KnownLabels};

// ============================================================
// Create
// ============================================================

#[derive(Clone)]
pub struct StubCreateRecordUseCase {
    pub result: Result<VerificationRecord, CreateRecordError>,
}

impl StubCreateRecordUseCase {
    pub fn success(record: VerificationRecord) -> Self {
        Self { result: Ok(record) }
    }

    pub fn failing(err: CreateRecordError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl CreateRecordUseCase for StubCreateRecordUseCase {
    async fn execute(
        &self,
        _command: CreateRecordCommand,
    ) -> Result<VerificationRecord, CreateRecordError> {
        self.result.clone()
    }
}

// ============================================================
// List / single
// ============================================================

#[derive(Clone, Default)]
pub struct StubGetRecordsUseCase {
    pub records: Vec<VerificationRecord>,
}

#[async_trait]
impl GetRecordsUseCase for StubGetRecordsUseCase {
    async fn execute(&self) -> Vec<VerificationRecord> {
        self.records.clone()
    }
}

#[derive(Clone)]
pub struct StubGetSingleRecordUseCase {
    pub result: Result<VerificationRecord, GetSingleRecordError>,
}

impl StubGetSingleRecordUseCase {
    pub fn not_found() -> Self {
        Self {
            result: Err(GetSingleRecordError::NotFound),
        }
    }

    pub fn failing(err: GetSingleRecordError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl GetSingleRecordUseCase for StubGetSingleRecordUseCase {
    async fn execute(&self, _unique_id: &str) -> Result<VerificationRecord, GetSingleRecordError> {
        self.result.clone()
    }
}

// ============================================================
// Patch / delete
// ============================================================

#[derive(Clone)]
pub struct StubPatchRecordUseCase {
    pub result: Result<VerificationRecord, PatchRecordError>,
}

impl StubPatchRecordUseCase {
    pub fn failing(err: PatchRecordError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl PatchRecordUseCase for StubPatchRecordUseCase {
    async fn execute(
        &self,
        _command: PatchRecordCommand,
    ) -> Result<VerificationRecord, PatchRecordError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubDeleteRecordUseCase {
    pub result: Result<(), DeleteRecordError>,
}

impl StubDeleteRecordUseCase {
    pub fn failing(err: DeleteRecordError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl DeleteRecordUseCase for StubDeleteRecordUseCase {
    async fn execute(&self, _unique_id: &str) -> Result<(), DeleteRecordError> {
        self.result.clone()
    }
}

// ============================================================
// Certificates
// ============================================================

#[derive(Clone)]
pub struct StubRenderCertificateUseCase {
    pub result: Result<CertificateView, RenderCertificateError>,
}

impl StubRenderCertificateUseCase {
    pub fn failing(err: RenderCertificateError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl RenderCertificateUseCase for StubRenderCertificateUseCase {
    async fn execute(
        &self,
        _unique_id: &str,
        _options: RenderOptions,
    ) -> Result<CertificateView, RenderCertificateError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubExportCertificateUseCase {
    pub result: Result<ExportArtifact, ExportCertificateError>,
}

impl StubExportCertificateUseCase {
    pub fn failing(err: ExportCertificateError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl ExportCertificateUseCase for StubExportCertificateUseCase {
    async fn execute(&self, _unique_id: &str) -> Result<ExportArtifact, ExportCertificateError> {
        self.result.clone()
    }
}

// ============================================================
// Snapshots
// ============================================================

#[derive(Clone)]
pub struct StubExportSnapshotUseCase {
    pub result: Result<SnapshotDownload, ExportSnapshotError>,
}

impl StubExportSnapshotUseCase {
    pub fn failing(err: ExportSnapshotError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl ExportSnapshotUseCase for StubExportSnapshotUseCase {
    async fn execute(&self) -> Result<SnapshotDownload, ExportSnapshotError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubImportSnapshotUseCase {
    pub result: Result<usize, ImportSnapshotError>,
}

impl StubImportSnapshotUseCase {
    pub fn failing(err: ImportSnapshotError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl ImportSnapshotUseCase for StubImportSnapshotUseCase {
    async fn execute(&self, _payload: &str) -> Result<usize, ImportSnapshotError> {
        self.result.clone()
    }
}

// ============================================================
// Labels
// ============================================================

#[derive(Clone, Default)]
pub struct StubGetLabelsUseCase {
    pub labels: KnownLabels,
}

#[async_trait]
impl GetLabelsUseCase for StubGetLabelsUseCase {
    async fn execute(&self) -> KnownLabels {
        self.labels.clone()
    }
}

#[derive(Clone, Default)]
pub struct StubAddLabelUseCase {
    pub added: bool,
}

#[async_trait]
impl AddLabelUseCase for StubAddLabelUseCase {
    async fn execute(&self, _command: AddLabelCommand) -> bool {
        self.added
    }
}
