//! Brigade Needs Client Library
//!
//! Data-entry core for recording supply needs submitted by fire-brigade
//! units against a catalog of categorized items. It provides the catalog
//! model, the category → item → size selection cascade, form validation, an
//! editable draft list, and clients for loading the catalog and submitting
//! the finished list.
//!
//! # Example
//!
//! ```no_run
//! use brigade_needs::prelude::*;
//!
//! # async fn run() -> Result<(), Error> {
//! let api = HttpApi::new(ClientOptions::default().with_base_url("http://localhost:7001/api"));
//! let mut session = Session::new();
//! session.load_catalog(&api).await?;
//!
//! session.select_brigade(Some(1));
//! session.select_category(Some(2));
//! session.select_item(Some(2));
//! session.set_value("3");
//! session.commit()?;
//!
//! let receipt = session.submit(&api).await?;
//! println!("{}", receipt.message);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod config;
pub mod draft;
pub mod error;
pub mod fetch;
pub mod gateway;
pub mod selection;
pub mod session;
pub mod validation;

pub use catalog::Catalog;
pub use draft::{DraftList, Need, NeedPayload};
pub use error::Error;
pub use session::{RequestState, Session};

/// A convenience module for common imports
pub mod prelude {
    pub use crate::catalog::{
        Brigade, Catalog, Category, Item, NewBrigade, NewCategory, NewItem, NewSize, Size, SizeKind,
        ValueKind,
    };
    pub use crate::config::{ClientOptions, SubmitMode};
    pub use crate::draft::{DraftList, DraftStats, Need, NeedPayload};
    pub use crate::error::Error;
    pub use crate::gateway::{CatalogSource, HttpApi, MockApi, NeedsGateway, SubmissionReceipt};
    pub use crate::selection::NeedForm;
    pub use crate::session::{RequestState, Session};
    pub use crate::validation::ValidationError;
}
