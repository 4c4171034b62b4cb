//! External collaborators: where the catalog comes from and where needs go
//!
//! Both are traits so a session can be driven by the HTTP client, the
//! in-memory mock, or a test double.

pub mod http;
pub mod mock;
pub mod types;

pub use http::HttpApi;
pub use mock::MockApi;
pub use types::{RecordedNeed, SubmissionReceipt};

use async_trait::async_trait;

use crate::catalog::Catalog;
use crate::draft::NeedPayload;
use crate::error::Error;

/// Source of the per-session reference data
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch brigades, categories, items and sizes in one go
    async fn load_catalog(&self) -> Result<Catalog, Error>;
}

/// Destination for finalized draft lists
#[async_trait]
pub trait NeedsGateway: Send + Sync {
    /// Record every payload, reporting success or failure for the whole batch
    async fn submit(&self, needs: &[NeedPayload]) -> Result<SubmissionReceipt, Error>;
}
