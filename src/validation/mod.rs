//! Form validation gating entry into the draft list

use thiserror::Error;

use crate::catalog::{BrigadeId, Catalog, ItemId, SizeId, SizeKind};
use crate::draft::Need;
use crate::selection::{size_kind_of, NeedForm};

/// Why a form could not become a [`Need`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("a brigade, an item and a value are required")]
    MissingSelection,

    #[error("brigade {0} is not in the catalog")]
    UnknownBrigade(BrigadeId),

    #[error("item {0} is not in the catalog")]
    UnknownItem(ItemId),

    #[error("this item requires a size")]
    MissingSize,

    #[error("size {0} is not in the catalog")]
    UnknownSize(SizeId),

    #[error("item takes a {expected} size, got a {found} size")]
    SizeMismatch { expected: SizeKind, found: SizeKind },

    #[error("this item does not take a size")]
    UnexpectedSize,

    #[error("the value must be a number greater than 0")]
    InvalidValue,
}

/// Check the form against the catalog and build the draft entry
///
/// Display fields are resolved from `catalog` at call time.
pub fn validate(catalog: &Catalog, form: &NeedForm) -> Result<Need, ValidationError> {
    let raw_value = form.value().trim();
    let (brigade_id, item_id) = match (form.brigade_id(), form.item_id()) {
        (Some(brigade_id), Some(item_id)) if !raw_value.is_empty() => (brigade_id, item_id),
        _ => return Err(ValidationError::MissingSelection),
    };

    let brigade = catalog
        .brigade(brigade_id)
        .ok_or(ValidationError::UnknownBrigade(brigade_id))?;
    let item = catalog
        .item(item_id)
        .ok_or(ValidationError::UnknownItem(item_id))?;

    let size = match (size_kind_of(item), form.size_id()) {
        (Some(_), None) => return Err(ValidationError::MissingSize),
        (None, Some(_)) => return Err(ValidationError::UnexpectedSize),
        (None, None) => None,
        (Some(expected), Some(size_id)) => {
            let size = catalog
                .size(size_id)
                .ok_or(ValidationError::UnknownSize(size_id))?;
            if size.kind != expected {
                return Err(ValidationError::SizeMismatch {
                    expected,
                    found: size.kind,
                });
            }
            Some(size)
        }
    };

    let value = parse_value(raw_value)?;

    // A dangling category id still yields an entry; the name is left blank.
    let category_name = catalog
        .category(item.category_id)
        .map(|c| c.name.clone())
        .unwrap_or_default();

    let note = Some(form.note().trim())
        .filter(|n| !n.is_empty())
        .map(str::to_string);

    Ok(Need {
        brigade_id,
        item_id,
        size_id: size.map(|s| s.id),
        value,
        note,
        brigade_name: brigade.name.clone(),
        item_name: item.name.clone(),
        category_name,
        size_value: size.map(|s| s.value.clone()),
        value_kind: item.value_kind,
    })
}

fn parse_value(raw: &str) -> Result<f64, ValidationError> {
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(ValidationError::InvalidValue),
    }
}
