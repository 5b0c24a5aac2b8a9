mod file_key_value_storage;
mod html_certificate_renderer;
mod local_record_store;
mod memory_key_value_storage;
mod memory_label_catalog;
mod print_document_exporter;
mod random_unique_id_generator;
mod remote_record_store;

pub use file_key_value_storage::FileKeyValueStorage;
pub use html_certificate_renderer::HtmlCertificateRenderer;
pub use local_record_store::{LocalRecordStore, STORAGE_KEY};
pub use memory_key_value_storage::MemoryKeyValueStorage;
pub use memory_label_catalog::{MemoryLabelCatalog, DEFAULT_CATEGORIES, DEFAULT_STATUSES};
pub use print_document_exporter::PrintDocumentExporter;
pub use random_unique_id_generator::RandomUniqueIdGenerator;
pub use remote_record_store::RemoteRecordStore;
