use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{info, warn};

use crate::verification::application::domain::entities::{
    RecordDraft, RecordPatch, VerificationRecord,
};
use crate::verification::application::ports::outgoing::{
    RecordStore, RecordStoreError, StoreBackend,
};

/// Record store backed by a remote `/api/verified-users` style collection
/// resource.
///
/// The resource has no bulk write and no update, so those operations report
/// `Unsupported`.
#[derive(Debug, Clone)]
pub struct RemoteRecordStore {
    client: Client,
    base_url: Url,
}

impl RemoteRecordStore {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RecordStoreError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| RecordStoreError::Remote(format!("invalid base url {base_url}: {e}")))?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RecordStoreError::Remote(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url_with_id(&self, unique_id: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().append_pair("id", unique_id);
        url
    }

    fn unsupported(operation: &'static str) -> RecordStoreError {
        RecordStoreError::Unsupported {
            operation,
            backend: StoreBackend::Remote,
        }
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, RecordStoreError> {
        let body = response
            .bytes()
            .await
            .map_err(|e| RecordStoreError::Remote(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| RecordStoreError::Serialization(e.to_string()))
    }

    fn unexpected_status(status: StatusCode) -> RecordStoreError {
        RecordStoreError::Remote(format!("unexpected status {status}"))
    }
}

#[async_trait]
impl RecordStore for RemoteRecordStore {
    fn backend(&self) -> StoreBackend {
        StoreBackend::Remote
    }

    async fn load_all(&self) -> Vec<VerificationRecord> {
        let response = match self.client.get(self.base_url.clone()).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Error loading records from remote store: {}", e);
                return Vec::new();
            }
        };

        if !response.status().is_success() {
            warn!(
                "Remote store answered {} when listing records",
                response.status()
            );
            return Vec::new();
        }

        match Self::decode::<Vec<VerificationRecord>>(response).await {
            Ok(records) => records,
            Err(e) => {
                warn!("Remote record list is malformed, treating as empty: {}", e);
                Vec::new()
            }
        }
    }

    async fn save_all(&self, records: &[VerificationRecord]) {
        warn!(
            "Remote store has no bulk write; {} records were not saved",
            records.len()
        );
    }

    async fn add(&self, draft: RecordDraft) -> Result<VerificationRecord, RecordStoreError> {
        let body =
            serde_json::to_vec(&draft).map_err(|e| RecordStoreError::Serialization(e.to_string()))?;

        let response = self
            .client
            .post(self.base_url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| RecordStoreError::Remote(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::unexpected_status(response.status()));
        }

        let record: VerificationRecord = Self::decode(response).await?;
        info!("Record {} created on remote store", record.unique_id);
        Ok(record)
    }

    async fn update(
        &self,
        _unique_id: &str,
        _patch: RecordPatch,
    ) -> Result<Option<VerificationRecord>, RecordStoreError> {
        Err(Self::unsupported("update"))
    }

    async fn remove(&self, unique_id: &str) -> Result<bool, RecordStoreError> {
        let response = self
            .client
            .delete(self.url_with_id(unique_id))
            .send()
            .await
            .map_err(|e| RecordStoreError::Remote(e.to_string()))?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(false),
            status if status.is_success() => {
                info!("Record {} deleted on remote store", unique_id);
                Ok(true)
            }
            status => Err(Self::unexpected_status(status)),
        }
    }

    async fn find_by_unique_id(
        &self,
        unique_id: &str,
    ) -> Result<Option<VerificationRecord>, RecordStoreError> {
        let response = self
            .client
            .get(self.url_with_id(unique_id))
            .send()
            .await
            .map_err(|e| RecordStoreError::Remote(e.to_string()))?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Self::decode(response).await.map(Some),
            status => Err(Self::unexpected_status(status)),
        }
    }

    async fn export_snapshot(&self) -> Result<String, RecordStoreError> {
        Err(Self::unsupported("export_snapshot"))
    }

    async fn import_snapshot(&self, _serialized: &str) -> Result<usize, RecordStoreError> {
        Err(Self::unsupported("import_snapshot"))
    }

    async fn health_check(&self) -> Result<(), RecordStoreError> {
        let response = self
            .client
            .get(self.base_url.clone())
            .send()
            .await
            .map_err(|e| RecordStoreError::Remote(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::unexpected_status(response.status()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{dev::ServerHandle, App, HttpServer};
    use std::net::{SocketAddr, TcpListener};
    use std::sync::Arc;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::sample_draft;
    use crate::verification::adapter::incoming::web::routes::{
        create_verified_user_handler, delete_verified_user_handler, get_verified_users_handler,
        verified_users_preflight_handler,
    };
    use crate::verification::adapter::outgoing::{
        LocalRecordStore, MemoryKeyValueStorage, RandomUniqueIdGenerator,
    };

    // ──────────────────────────────────────────────────────────
    // Helpers
    // ──────────────────────────────────────────────────────────

    /// Serves the collection resource over a fresh in-memory store.
    fn spawn_collection_server() -> (SocketAddr, ServerHandle) {
        let backing: Arc<dyn RecordStore> = Arc::new(LocalRecordStore::new(
            MemoryKeyValueStorage::new(),
            Arc::new(RandomUniqueIdGenerator),
        ));
        let state = TestAppStateBuilder::default()
            .with_record_store(backing)
            .build();

        let server = HttpServer::new(move || {
            App::new()
                .app_data(state.clone())
                .service(get_verified_users_handler)
                .service(create_verified_user_handler)
                .service(delete_verified_user_handler)
                .service(verified_users_preflight_handler)
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();

        let addr = server.addrs()[0];
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);

        (addr, handle)
    }

    fn remote_for(addr: SocketAddr) -> RemoteRecordStore {
        RemoteRecordStore::new(
            &format!("http://{addr}/api/verified-users"),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    fn unreachable_addr() -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        addr
    }

    // ──────────────────────────────────────────────────────────
    // Against a live collection resource
    // ──────────────────────────────────────────────────────────

    #[actix_web::test]
    async fn add_find_list_and_remove_round_trip() {
        let (addr, handle) = spawn_collection_server();
        let store = remote_for(addr);

        // Act
        let alice = store.add(sample_draft("@alice")).await.unwrap();
        let bob = store.add(sample_draft("@bob")).await.unwrap();

        // Assert
        assert_eq!(alice.id, 1);
        assert_eq!(bob.id, 2);
        assert_eq!(alice.username, "@alice");

        let found = store.find_by_unique_id(&alice.unique_id).await.unwrap();
        assert_eq!(found, Some(alice.clone()));

        // newest first
        let listed = store.load_all().await;
        assert_eq!(listed, vec![bob.clone(), alice.clone()]);

        assert_eq!(store.remove(&alice.unique_id).await, Ok(true));
        assert_eq!(store.remove(&alice.unique_id).await, Ok(false));
        assert_eq!(store.find_by_unique_id(&alice.unique_id).await, Ok(None));
        assert!(store.health_check().await.is_ok());

        handle.stop(true).await;
    }

    #[actix_web::test]
    async fn unsupported_operations_are_reported() {
        let store = remote_for(unreachable_addr());

        let update = store.update("VU-ABC123", RecordPatch::default()).await;
        let export = store.export_snapshot().await;
        let import = store.import_snapshot("[]").await;

        assert_eq!(
            update,
            Err(RecordStoreError::Unsupported {
                operation: "update",
                backend: StoreBackend::Remote
            })
        );
        assert!(matches!(export, Err(RecordStoreError::Unsupported { .. })));
        assert!(matches!(import, Err(RecordStoreError::Unsupported { .. })));
    }

    #[actix_web::test]
    async fn unreachable_remote_degrades_reads_and_fails_writes() {
        let store = remote_for(unreachable_addr());

        assert!(store.load_all().await.is_empty());
        assert!(matches!(
            store.add(sample_draft("@alice")).await,
            Err(RecordStoreError::Remote(_))
        ));
        assert!(matches!(
            store.remove("VU-ABC123").await,
            Err(RecordStoreError::Remote(_))
        ));
        assert!(store.health_check().await.is_err());
    }

    #[test]
    fn rejects_invalid_base_url() {
        let result = RemoteRecordStore::new("not a url", Duration::from_secs(1));

        assert!(matches!(result, Err(RecordStoreError::Remote(_))));
    }

    #[test]
    fn id_is_passed_as_query_parameter() {
        let store = RemoteRecordStore::new(
            "http://example.test/api/verified-users",
            Duration::from_secs(1),
        )
        .unwrap();

        assert_eq!(
            store.url_with_id("VU-AB 12").as_str(),
            "http://example.test/api/verified-users?id=VU-AB+12"
        );
    }
}
