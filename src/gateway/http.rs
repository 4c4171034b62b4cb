//! reqwest-backed client for the needs back-end

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::types::{BatchResponse, RecordedNeed, SubmissionReceipt};
use super::{CatalogSource, NeedsGateway};
use crate::catalog::{
    Brigade, BrigadeId, Catalog, Category, CategoryId, Item, NewBrigade, NewCategory, NewItem,
    NewSize, Size, SizeKind,
};
use crate::config::{ClientOptions, SubmitMode};
use crate::draft::NeedPayload;
use crate::error::Error;
use crate::fetch::{Fetch, FetchBuilder};

/// Client for the brigades/needs REST API
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    options: ClientOptions,
}

impl HttpApi {
    /// Create a client with its own connection pool
    pub fn new(options: ClientOptions) -> Self {
        Self::with_client(options, Client::new())
    }

    /// Create a client sharing an existing reqwest client
    pub fn with_client(options: ClientOptions, client: Client) -> Self {
        Self { client, options }
    }

    /// Create a client configured from the environment
    pub fn from_env() -> Result<Self, Error> {
        Ok(Self::new(ClientOptions::from_env()?))
    }

    /// The options this client was built with
    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.options.base_url.trim_end_matches('/'), path)
    }

    fn prepare<'a>(&self, fetch: FetchBuilder<'a>) -> FetchBuilder<'a> {
        fetch
            .header("X-Client-Info", &self.options.client_info)
            .timeout(self.options.request_timeout)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.endpoint(path);
        self.prepare(Fetch::get(&self.client, &url)).execute().await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path);
        self.prepare(Fetch::post(&self.client, &url))
            .json(body)?
            .execute()
            .await
    }

    /// `GET /brigadas`
    pub async fn brigades(&self) -> Result<Vec<Brigade>, Error> {
        self.get("brigadas").await
    }

    /// `GET /categorias`
    pub async fn categories(&self) -> Result<Vec<Category>, Error> {
        self.get("categorias").await
    }

    /// `GET /items`
    pub async fn items(&self) -> Result<Vec<Item>, Error> {
        self.get("items").await
    }

    /// `GET /items/categoria/{id}`
    pub async fn items_by_category(&self, category_id: CategoryId) -> Result<Vec<Item>, Error> {
        self.get(&format!("items/categoria/{}", category_id)).await
    }

    /// `GET /tallas`
    pub async fn sizes(&self) -> Result<Vec<Size>, Error> {
        self.get("tallas").await
    }

    /// `GET /tallas/tipo/{kind}`
    pub async fn sizes_by_kind(&self, kind: SizeKind) -> Result<Vec<Size>, Error> {
        self.get(&format!("tallas/tipo/{}", kind.as_str())).await
    }

    /// `GET /necesidades`
    pub async fn needs(&self) -> Result<Vec<RecordedNeed>, Error> {
        self.get("necesidades").await
    }

    /// `GET /necesidades/brigada/{id}`
    pub async fn needs_by_brigade(&self, brigade_id: BrigadeId) -> Result<Vec<RecordedNeed>, Error> {
        self.get(&format!("necesidades/brigada/{}", brigade_id)).await
    }

    /// `POST /brigadas`, returning the stored brigade with its ID
    pub async fn create_brigade(&self, brigade: &NewBrigade) -> Result<Brigade, Error> {
        self.post("brigadas", brigade).await
    }

    /// `POST /categorias`
    pub async fn create_category(&self, category: &NewCategory) -> Result<Category, Error> {
        self.post("categorias", category).await
    }

    /// `POST /items`
    pub async fn create_item(&self, item: &NewItem) -> Result<Item, Error> {
        self.post("items", item).await
    }

    /// `POST /tallas`
    pub async fn create_size(&self, size: &NewSize) -> Result<Size, Error> {
        self.post("tallas", size).await
    }

    /// `POST /necesidades` with a single need
    pub async fn create_need(&self, need: &NeedPayload) -> Result<RecordedNeed, Error> {
        self.post("necesidades", need).await
    }

    /// `DELETE /necesidades/{id}`
    pub async fn delete_need(&self, id: u64) -> Result<(), Error> {
        let url = self.endpoint(&format!("necesidades/{}", id));
        self.prepare(Fetch::delete(&self.client, &url))
            .execute_empty()
            .await
    }

    async fn submit_batch(&self, needs: &[NeedPayload]) -> Result<SubmissionReceipt, Error> {
        let response: BatchResponse = self.post("necesidades", needs).await?;

        if !response.success {
            return Err(Error::submission(response.message));
        }

        let accepted = if response.data.is_empty() {
            needs.len()
        } else {
            response.data.len()
        };
        Ok(SubmissionReceipt {
            accepted,
            message: response.message,
        })
    }

    async fn submit_each(&self, needs: &[NeedPayload]) -> Result<SubmissionReceipt, Error> {
        for (index, need) in needs.iter().enumerate() {
            self.create_need(need).await.map_err(|e| {
                Error::submission(format!("entry {} of {}: {}", index + 1, needs.len(), e))
            })?;
        }
        Ok(SubmissionReceipt {
            accepted: needs.len(),
            message: format!("{} needs recorded", needs.len()),
        })
    }
}

#[async_trait]
impl CatalogSource for HttpApi {
    async fn load_catalog(&self) -> Result<Catalog, Error> {
        let (brigades, categories, items, sizes) = tokio::try_join!(
            self.brigades(),
            self.categories(),
            self.items(),
            self.sizes()
        )?;
        log::info!(
            "loaded catalog: {} brigades, {} categories, {} items, {} sizes",
            brigades.len(),
            categories.len(),
            items.len(),
            sizes.len()
        );
        Ok(Catalog::new(brigades, categories, items, sizes))
    }
}

#[async_trait]
impl NeedsGateway for HttpApi {
    async fn submit(&self, needs: &[NeedPayload]) -> Result<SubmissionReceipt, Error> {
        match self.options.submit_mode {
            SubmitMode::Batch => self.submit_batch(needs).await,
            SubmitMode::PerEntry => self.submit_each(needs).await,
        }
    }
}
