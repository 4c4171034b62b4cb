//! In-memory stand-in for the back-end
//!
//! Serves a fixed catalog and accepts submissions after a simulated network
//! delay, echoing back how many needs it received. Nothing is persisted
//! beyond the submission log kept for inspection.

use async_trait::async_trait;
use std::sync::Mutex;
use std::time::Duration;

use super::types::SubmissionReceipt;
use super::{CatalogSource, NeedsGateway};
use crate::catalog::Catalog;
use crate::draft::NeedPayload;
use crate::error::Error;

/// Mock catalog source and submission gateway
#[derive(Debug)]
pub struct MockApi {
    catalog: Catalog,
    catalog_delay: Duration,
    submit_delay: Duration,
    failure: Option<String>,
    submissions: Mutex<Vec<Vec<NeedPayload>>>,
}

impl Default for MockApi {
    fn default() -> Self {
        Self::new(Catalog::sample())
    }
}

impl MockApi {
    /// Serve `catalog` with no artificial latency
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            catalog_delay: Duration::ZERO,
            submit_delay: Duration::ZERO,
            failure: None,
            submissions: Mutex::new(Vec::new()),
        }
    }

    /// Simulate network latency (the reference mock uses 500ms / 1s)
    pub fn with_delays(mut self, catalog_delay: Duration, submit_delay: Duration) -> Self {
        self.catalog_delay = catalog_delay;
        self.submit_delay = submit_delay;
        self
    }

    /// Reject every submission with a server error carrying `message`
    pub fn failing(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }

    /// Batches accepted so far, oldest first
    pub fn submissions(&self) -> Vec<Vec<NeedPayload>> {
        self.submissions
            .lock()
            .map(|log| log.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl CatalogSource for MockApi {
    async fn load_catalog(&self) -> Result<Catalog, Error> {
        tokio::time::sleep(self.catalog_delay).await;
        Ok(self.catalog.clone())
    }
}

#[async_trait]
impl NeedsGateway for MockApi {
    async fn submit(&self, needs: &[NeedPayload]) -> Result<SubmissionReceipt, Error> {
        if needs.is_empty() {
            return Err(Error::api(400, "at least one need must be provided"));
        }
        let incomplete = needs
            .iter()
            .any(|n| n.brigade_id == 0 || n.item_id == 0 || n.value == 0.0 || n.value.is_nan());
        if incomplete {
            return Err(Error::api(400, "incomplete data in one or more needs"));
        }

        tokio::time::sleep(self.submit_delay).await;

        if let Some(message) = &self.failure {
            return Err(Error::api(500, message));
        }

        log::info!("mock back-end received {} needs", needs.len());
        if let Ok(mut log) = self.submissions.lock() {
            log.push(needs.to_vec());
        }

        Ok(SubmissionReceipt {
            accepted: needs.len(),
            message: format!("{} needs recorded successfully", needs.len()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(brigade_id: u32, item_id: u32, value: f64) -> NeedPayload {
        NeedPayload {
            brigade_id,
            item_id,
            size_id: None,
            value,
            note: None,
        }
    }

    #[tokio::test]
    async fn test_serves_catalog() {
        let api = MockApi::default();
        let catalog = api.load_catalog().await.unwrap();
        assert_eq!(catalog, Catalog::sample());
    }

    #[tokio::test]
    async fn test_echoes_count() {
        let api = MockApi::default();
        let receipt = api
            .submit(&[payload(1, 2, 3.0), payload(2, 4, 50.0)])
            .await
            .unwrap();
        assert_eq!(receipt.accepted, 2);
        assert_eq!(api.submissions().len(), 1);
    }

    #[tokio::test]
    async fn test_rejects_bad_batches() {
        let api = MockApi::default();
        assert!(matches!(
            api.submit(&[]).await,
            Err(Error::Api { status: 400, .. })
        ));
        assert!(matches!(
            api.submit(&[payload(0, 2, 1.0)]).await,
            Err(Error::Api { status: 400, .. })
        ));
        assert!(matches!(
            api.submit(&[payload(1, 2, 4.0), payload(1, 2, f64::NAN)]).await,
            Err(Error::Api { status: 400, .. })
        ));
        assert!(api.submissions().is_empty());
    }

    #[tokio::test]
    async fn test_failing_mode() {
        let api = MockApi::default().failing("database offline");
        match api.submit(&[payload(1, 2, 1.0)]).await {
            Err(Error::Api { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "database offline");
            }
            other => panic!("expected API error, got {:?}", other),
        }
    }
}
