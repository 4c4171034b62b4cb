//! Selection cascade: category → item → size
//!
//! The query functions derive the valid choices for each form step from the
//! catalog. [`NeedForm`] holds the current selections; its setters clear the
//! downstream selections whenever an upstream one changes.

use crate::catalog::{BrigadeId, Catalog, CategoryId, Item, ItemId, Size, SizeId, SizeKind};

const BOOT_TOKENS: &[&str] = &["boot", "bota"];
const GLOVE_TOKENS: &[&str] = &["glove", "guante"];

/// Items belonging to a category, in catalog order
///
/// An unknown category simply yields no items.
pub fn items_for_category(catalog: &Catalog, category_id: CategoryId) -> Vec<&Item> {
    catalog
        .items
        .iter()
        .filter(|item| item.category_id == category_id)
        .collect()
}

/// The size family a need for `item_id` must use
///
/// Returns `None` when the item takes no size or is not in the catalog.
pub fn size_kind_for_item(catalog: &Catalog, item_id: ItemId) -> Option<SizeKind> {
    catalog.item(item_id).and_then(size_kind_of)
}

/// Size family of an item already resolved from the catalog
pub fn size_kind_of(item: &Item) -> Option<SizeKind> {
    if !item.requires_size {
        return None;
    }
    if let Some(kind) = item.size_kind {
        return Some(kind);
    }

    let name = item.name.to_lowercase();
    let kind = if BOOT_TOKENS.iter().any(|t| name.contains(t)) {
        SizeKind::Boots
    } else if GLOVE_TOKENS.iter().any(|t| name.contains(t)) {
        SizeKind::Gloves
    } else {
        SizeKind::Clothing
    };
    log::trace!("inferred size kind {} for item {} from its name", kind, item.id);
    Some(kind)
}

/// Sizes of a given family, in catalog order
pub fn sizes_for_kind(catalog: &Catalog, kind: SizeKind) -> Vec<&Size> {
    catalog.sizes.iter().filter(|size| size.kind == kind).collect()
}

/// Sizes selectable for an item; empty when the item takes no size
pub fn sizes_for_item(catalog: &Catalog, item_id: ItemId) -> Vec<&Size> {
    match size_kind_for_item(catalog, item_id) {
        Some(kind) => sizes_for_kind(catalog, kind),
        None => Vec::new(),
    }
}

/// The data-entry form for a single need
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NeedForm {
    brigade_id: Option<BrigadeId>,
    category_id: Option<CategoryId>,
    item_id: Option<ItemId>,
    size_id: Option<SizeId>,
    value: String,
    note: String,
}

impl NeedForm {
    /// Create an empty form
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected brigade
    pub fn brigade_id(&self) -> Option<BrigadeId> {
        self.brigade_id
    }

    /// Selected category
    pub fn category_id(&self) -> Option<CategoryId> {
        self.category_id
    }

    /// Selected item
    pub fn item_id(&self) -> Option<ItemId> {
        self.item_id
    }

    /// Selected size
    pub fn size_id(&self) -> Option<SizeId> {
        self.size_id
    }

    /// Raw value text as typed
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Free-text note
    pub fn note(&self) -> &str {
        &self.note
    }

    /// Select the brigade. Item selections are left alone.
    pub fn select_brigade(&mut self, id: Option<BrigadeId>) {
        self.brigade_id = id;
    }

    /// Select the category, clearing the item and size
    pub fn select_category(&mut self, id: Option<CategoryId>) {
        self.category_id = id;
        self.item_id = None;
        self.size_id = None;
    }

    /// Select the item, clearing the size
    pub fn select_item(&mut self, id: Option<ItemId>) {
        self.item_id = id;
        self.size_id = None;
    }

    /// Select the size
    pub fn select_size(&mut self, id: Option<SizeId>) {
        self.size_id = id;
    }

    /// Set the raw value text
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Set the note
    pub fn set_note(&mut self, note: impl Into<String>) {
        self.note = note.into();
    }

    /// Reset everything but the brigade, which carries over between entries
    pub fn clear(&mut self) {
        *self = Self {
            brigade_id: self.brigade_id,
            ..Self::default()
        };
    }

    /// Items the form currently offers, based on the selected category
    pub fn item_choices<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Item> {
        match self.category_id {
            Some(id) => items_for_category(catalog, id),
            None => Vec::new(),
        }
    }

    /// Sizes the form currently offers, based on the selected item
    pub fn size_choices<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Size> {
        match self.item_id {
            Some(id) => sizes_for_item(catalog, id),
            None => Vec::new(),
        }
    }

    /// Fill every field at once, bypassing the cascade
    pub(crate) fn prefill(
        &mut self,
        brigade_id: BrigadeId,
        category_id: Option<CategoryId>,
        item_id: ItemId,
        size_id: Option<SizeId>,
        value: String,
        note: String,
    ) {
        *self = Self {
            brigade_id: Some(brigade_id),
            category_id,
            item_id: Some(item_id),
            size_id,
            value,
            note,
        };
    }
}
