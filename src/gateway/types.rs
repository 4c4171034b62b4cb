//! Wire types for the needs endpoints

use serde::{Deserialize, Serialize};

use crate::catalog::{BrigadeId, ItemId, SizeId};
use crate::draft::NeedPayload;

/// Outcome of a successful submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    /// Number of needs the back-end accepted
    pub accepted: usize,

    /// Human readable confirmation
    pub message: String,
}

/// Response of `POST /necesidades` with an array body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResponse {
    /// Whether the back-end recorded the batch
    pub success: bool,

    /// Confirmation message
    #[serde(default)]
    pub message: String,

    /// Echo of what was recorded
    #[serde(default)]
    pub data: Vec<NeedPayload>,
}

/// Error body returned alongside non-success statuses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Error description
    pub error: String,
}

/// A need as stored by the back-end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedNeed {
    /// Server-assigned ID, when the back-end exposes it
    #[serde(rename = "id_necesidad", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Requesting brigade
    #[serde(rename = "id_brigada")]
    pub brigade_id: BrigadeId,

    /// Requested item
    #[serde(rename = "id_item")]
    pub item_id: ItemId,

    /// Size, if any
    #[serde(rename = "id_talla", default, skip_serializing_if = "Option::is_none")]
    pub size_id: Option<SizeId>,

    /// Quantity or amount
    #[serde(rename = "valor")]
    pub value: f64,

    /// Note, if any
    #[serde(
        rename = "observaciones",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub note: Option<String>,
}
