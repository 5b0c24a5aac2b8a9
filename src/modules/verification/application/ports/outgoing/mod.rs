mod certificate_exporter;
mod certificate_renderer;
mod key_value_storage;
mod label_catalog;
mod record_store;
mod unique_id_generator;

pub use certificate_exporter::{CertificateExportError, CertificateExporter, ExportArtifact};
pub use certificate_renderer::CertificateRenderer;
pub use key_value_storage::{KeyValueStorage, StorageError};
pub use label_catalog::{KnownLabels, LabelCatalog, LabelKind};
pub use record_store::{RecordStore, RecordStoreError, StoreBackend};
pub use unique_id_generator::UniqueIdGenerator;
