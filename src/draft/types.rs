//! Types for draft need entries

use serde::{Deserialize, Serialize};

use crate::catalog::{BrigadeId, ItemId, SizeId, ValueKind};

/// A validated need waiting in the draft list
///
/// The display fields are copied from the catalog when the entry is created
/// and are not refreshed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Need {
    /// Requesting brigade
    pub brigade_id: BrigadeId,

    /// Requested item
    pub item_id: ItemId,

    /// Size, for items that require one
    pub size_id: Option<SizeId>,

    /// Quantity or amount, always finite and positive
    pub value: f64,

    /// Optional free-text note
    pub note: Option<String>,

    /// Brigade name at creation time
    pub brigade_name: String,

    /// Item name at creation time
    pub item_name: String,

    /// Category name at creation time
    pub category_name: String,

    /// Size display value at creation time
    pub size_value: Option<String>,

    /// Value kind of the item at creation time
    pub value_kind: ValueKind,
}

impl Need {
    /// Reduce the entry to what the back-end accepts
    pub fn to_payload(&self) -> NeedPayload {
        NeedPayload {
            brigade_id: self.brigade_id,
            item_id: self.item_id,
            size_id: self.size_id,
            value: self.value,
            note: self.note.clone(),
        }
    }
}

/// Body of a create-need request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeedPayload {
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

/// Summary counts over the draft list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DraftStats {
    /// Number of entries
    pub total: usize,

    /// Distinct brigade IDs
    pub brigades: usize,

    /// Distinct category names
    pub categories: usize,
}
